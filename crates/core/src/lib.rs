//! # Cortex Core
//!
//! Stateless helpers shared by model-serving workloads:
//! - prefix/suffix trimming and ensuring ([`strings`])
//! - recursive merging of configuration mappings in four variants ([`merge`])
//! - Jinja template rendering from files on disk ([`template`]), configured by
//!   [`TemplateConfig`]
//!
//! Values are the dynamically typed [`Value`]/[`Mapping`] from `cortex-types`.
//! **No filesystem housekeeping**: directory removal and archive extraction live in
//! `cortex_files`.

pub mod config;
pub mod error;
pub mod merge;
pub mod strings;
pub mod template;

pub use config::TemplateConfig;
pub use cortex_types::{Mapping, Value};
pub use error::{CoreError, CoreResult};
pub use merge::{
    merge_dicts_in_place_no_overwrite, merge_dicts_in_place_overwrite, merge_dicts_no_overwrite,
    merge_dicts_overwrite, merge_two_dicts_in_place_no_overwrite,
    merge_two_dicts_in_place_overwrite, merge_two_dicts_no_overwrite, merge_two_dicts_overwrite,
};
pub use strings::{ensure_prefix, ensure_suffix, trim_prefix, trim_suffix};
pub use template::render_jinja_template;
