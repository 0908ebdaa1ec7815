//! Template rendering configuration.
//!
//! Options are resolved once by the caller (from code or a configuration file) and passed into
//! rendering, rather than being read from the process environment on every render.

/// Whitespace and strictness options for the template environment.
///
/// The default mirrors the environment workloads have always rendered with: block tags
/// swallow the newline that follows them and the whitespace that precedes them, and the
/// final trailing newline of a template is dropped.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Remove the first newline after a block tag.
    pub trim_blocks: bool,
    /// Strip whitespace from the start of a line up to a block tag.
    pub lstrip_blocks: bool,
    /// Keep the single trailing newline at the end of a template.
    pub keep_trailing_newline: bool,
    /// Fail the render when an undefined variable is used instead of printing nothing.
    pub strict_undefined: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            trim_blocks: true,
            lstrip_blocks: true,
            keep_trailing_newline: false,
            strict_undefined: false,
        }
    }
}

impl TemplateConfig {
    /// Create a new `TemplateConfig`.
    pub fn new(
        trim_blocks: bool,
        lstrip_blocks: bool,
        keep_trailing_newline: bool,
        strict_undefined: bool,
    ) -> Self {
        Self {
            trim_blocks,
            lstrip_blocks,
            keep_trailing_newline,
            strict_undefined,
        }
    }

    /// Same options with undefined variables treated as errors.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict_undefined = true;
        self
    }
}
