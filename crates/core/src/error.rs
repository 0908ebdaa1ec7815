#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
