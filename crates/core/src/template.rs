//! Jinja template rendering from files on disk.
//!
//! The loader is rooted at the template's own directory, so `{% include %}` and
//! `{% extends %}` resolve relative to the template being rendered.

use crate::config::TemplateConfig;
use crate::{CoreError, CoreResult};
use cortex_types::Mapping;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::path::Path;

/// Renders `jinja_template_file` with `context` using the default [`TemplateConfig`].
///
/// # Errors
///
/// Returns [`CoreError`] if:
/// - the path does not name a readable file (`InvalidInput`),
/// - the template (or one it includes) fails to parse or render (`Template`).
pub fn render_jinja_template(jinja_template_file: &Path, context: &Mapping) -> CoreResult<String> {
    TemplateConfig::default().render_file(jinja_template_file, context)
}

impl TemplateConfig {
    /// Renders a template file with these options.
    ///
    /// `context` can be any serialisable value whose top level is a map, typically a
    /// [`Mapping`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if:
    /// - the path does not name a file or has a non UTF-8 file name (`InvalidInput`),
    /// - the template (or one it includes) fails to parse or render (`Template`).
    pub fn render_file<S: Serialize>(&self, template_file: &Path, context: S) -> CoreResult<String> {
        if !template_file.is_file() {
            return Err(CoreError::InvalidInput(format!(
                "template file does not exist: {}",
                template_file.display()
            )));
        }

        let name = template_file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                CoreError::InvalidInput(format!(
                    "template file name is not valid UTF-8: {}",
                    template_file.display()
                ))
            })?;

        let template_dir = match template_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let env = self.environment(template_dir);
        let rendered = env.get_template(name)?.render(context)?;
        tracing::debug!("rendered template {}", template_file.display());

        Ok(rendered)
    }

    fn environment(&self, template_dir: &Path) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(template_dir.to_path_buf()));
        env.set_trim_blocks(self.trim_blocks);
        env.set_lstrip_blocks(self.lstrip_blocks);
        env.set_keep_trailing_newline(self.keep_trailing_newline);
        if self.strict_undefined {
            env.set_undefined_behavior(UndefinedBehavior::Strict);
        }
        env
    }
}
