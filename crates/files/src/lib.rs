//! Cortex File Helpers
//!
//! Filesystem housekeeping and path-string utilities used by model-serving workloads.
//!
//! ## Filesystem
//!
//! - [`mkdir_p`] creates a directory and its parents, succeeding if it already exists
//! - [`rm_dir`] and [`rm_file`] report `Ok(false)` for a missing target instead of failing
//! - [`extract_zip`] unpacks an archive next to itself (or into a chosen directory) and can
//!   delete the archive afterwards
//!
//! ## Path strings
//!
//! Model locations are `/`-separated keys (local paths or object-store prefixes), so the
//! helpers in this crate treat them as strings rather than [`std::path::Path`]s:
//!
//! - [`get_leftmost_part_of_path`] returns the first component
//! - [`remove_non_empty_directory_paths`] keeps only the leaves of a listing
//!
//! ## Example Usage
//!
//! ```no_run
//! use cortex_files::{extract_zip, remove_non_empty_directory_paths};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! extract_zip(Path::new("/mnt/model/model.zip"), None, true)?;
//!
//! let listing = ["models/iris/", "models/iris/1/saved_model.pb"];
//! assert_eq!(
//!     remove_non_empty_directory_paths(&listing),
//!     vec!["models/iris/1/saved_model.pb"]
//! );
//! # Ok(())
//! # }
//! ```

mod constants;
mod files;
mod paths;

pub use constants::PATH_SEPARATOR;
pub use files::{extract_zip, mkdir_p, rm_dir, rm_file};
pub use paths::{get_leftmost_part_of_path, remove_non_empty_directory_paths};

/// Errors that can occur during file operations
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Path cannot be used for the requested operation
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive could not be read or one of its entries could not be extracted
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result type for file operations.
pub type FilesResult<T> = Result<T, FilesError>;
