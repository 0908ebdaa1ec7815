//! # Cortex Util
//!
//! Helper functions for model-serving workloads, re-exported from the workspace crates:
//!
//! - `cortex_files`: directory and file removal, `mkdir -p`, zip extraction, and
//!   `/`-separated path helpers
//! - `cortex_core`: prefix/suffix helpers, recursive mapping merges, template rendering
//! - `cortex_types`: the dynamically typed [`Value`] and its type predicates
//!
//! Every function is synchronous and stateless.

pub use cortex_core::{
    CoreError, CoreResult, TemplateConfig, ensure_prefix, ensure_suffix,
    merge_dicts_in_place_no_overwrite, merge_dicts_in_place_overwrite, merge_dicts_no_overwrite,
    merge_dicts_overwrite, merge_two_dicts_in_place_no_overwrite,
    merge_two_dicts_in_place_overwrite, merge_two_dicts_no_overwrite, merge_two_dicts_overwrite,
    render_jinja_template, trim_prefix, trim_suffix,
};
pub use cortex_files::{
    FilesError, FilesResult, PATH_SEPARATOR, extract_zip, get_leftmost_part_of_path, mkdir_p,
    remove_non_empty_directory_paths, rm_dir, rm_file,
};
pub use cortex_types::{Mapping, Value};
