//! Filesystem housekeeping helpers.
//!
//! These are thin wrappers over `std::fs` and the `zip` crate with two conventions:
//!
//! - Failures propagate the underlying error unchanged (wrapped in [`FilesError`]) so callers
//!   can still inspect `std::io::Error::kind()`.
//! - Removal helpers treat an absent target as a normal outcome and report it as `Ok(false)`.

use crate::constants::CURRENT_DIR;
use crate::{FilesError, FilesResult};
use std::fs;
use std::path::Path;

/// Creates a directory and all missing parents.
///
/// Succeeds without changes if the directory already exists.
///
/// # Errors
///
/// Returns `FilesError::Io` if any component cannot be created (for example because a file
/// with the same name is in the way, or permissions are insufficient).
pub fn mkdir_p(dir_path: &Path) -> FilesResult<()> {
    fs::create_dir_all(dir_path)?;
    tracing::debug!("ensured directory {}", dir_path.display());
    Ok(())
}

/// Removes a directory and everything beneath it.
///
/// # Returns
///
/// `Ok(true)` if `dir_path` was a directory and has been removed, `Ok(false)` if nothing
/// was removed because the path does not exist or is not a directory.
///
/// # Errors
///
/// Returns `FilesError::Io` if the directory exists but cannot be removed.
pub fn rm_dir(dir_path: &Path) -> FilesResult<bool> {
    if !dir_path.is_dir() {
        return Ok(false);
    }

    fs::remove_dir_all(dir_path)?;
    tracing::debug!("removed directory {}", dir_path.display());
    Ok(true)
}

/// Removes a single regular file.
///
/// # Returns
///
/// `Ok(true)` if `path` was a file and has been removed, `Ok(false)` if it does not exist or
/// is not a regular file (directories are left alone).
///
/// # Errors
///
/// Returns `FilesError::Io` if the file exists but cannot be removed.
pub fn rm_file(path: &Path) -> FilesResult<bool> {
    if !path.is_file() {
        return Ok(false);
    }

    fs::remove_file(path)?;
    tracing::debug!("removed file {}", path.display());
    Ok(true)
}

/// Extracts every entry of a zip archive.
///
/// # Arguments
///
/// * `zip_path` - Archive to extract
/// * `dest_dir` - Destination directory; defaults to the directory containing the archive
/// * `delete_zip_file` - Remove the archive once extraction has succeeded
///
/// Entry names that would resolve outside `dest_dir` are rejected by the archive reader.
///
/// # Errors
///
/// Returns `FilesError` if:
/// - `dest_dir` is `None` and `zip_path` has no parent (`FilesError::InvalidPath`)
/// - the archive cannot be opened (`FilesError::Io`)
/// - the archive is malformed or an entry cannot be written (`FilesError::Zip`)
/// - the archive cannot be deleted afterwards (`FilesError::Io`)
pub fn extract_zip(
    zip_path: &Path,
    dest_dir: Option<&Path>,
    delete_zip_file: bool,
) -> FilesResult<()> {
    let dest_dir = match dest_dir {
        Some(dir) => dir,
        None => default_extract_dir(zip_path)?,
    };

    let file = fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    mkdir_p(dest_dir)?;
    archive.extract(dest_dir)?;
    tracing::debug!(
        "extracted {} entries from {} into {}",
        archive.len(),
        zip_path.display(),
        dest_dir.display()
    );

    // Close the archive before deleting it.
    drop(archive);

    if delete_zip_file {
        rm_file(zip_path)?;
    }

    Ok(())
}

fn default_extract_dir(zip_path: &Path) -> FilesResult<&Path> {
    match zip_path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Ok(Path::new(CURRENT_DIR)),
        Some(parent) => Ok(parent),
        None => Err(FilesError::InvalidPath(format!(
            "Archive path has no parent directory: {}",
            zip_path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    /// Writes a zip archive containing the given `(name, contents)` entries.
    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let file = fs::File::create(path).expect("Failed to create archive");
        let mut writer = zip::ZipWriter::new(file);

        for (name, contents) in entries {
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file(*name, options).expect("Failed to start entry");
            writer.write_all(contents).expect("Failed to write entry");
        }

        writer.finish().expect("Failed to finish archive");
    }

    #[test]
    fn test_mkdir_p_creates_parents() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b").join("c");

        mkdir_p(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_mkdir_p_existing_directory() {
        let temp = TempDir::new().unwrap();

        mkdir_p(temp.path()).unwrap();
        mkdir_p(temp.path()).unwrap();

        assert!(temp.path().is_dir());
    }

    #[test]
    fn test_mkdir_p_blocked_by_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file.txt");
        fs::write(&blocker, "not a directory").unwrap();

        let result = mkdir_p(&blocker.join("child"));

        assert!(matches!(result, Err(FilesError::Io(_))));
    }

    #[test]
    fn test_rm_dir_removes_tree() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("model");
        fs::create_dir_all(dir.join("variables")).unwrap();
        fs::write(dir.join("saved_model.pb"), b"pb").unwrap();
        fs::write(dir.join("variables").join("data"), b"data").unwrap();

        assert!(rm_dir(&dir).unwrap());
        assert!(!dir.exists());
    }

    #[test]
    fn test_rm_dir_missing_returns_false() {
        let temp = TempDir::new().unwrap();

        assert!(!rm_dir(&temp.path().join("non-existent")).unwrap());
    }

    #[test]
    fn test_rm_dir_ignores_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "contents").unwrap();

        assert!(!rm_dir(&file).unwrap());
        assert!(file.exists());
    }

    #[test]
    fn test_rm_file_removes_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "contents").unwrap();

        assert!(rm_file(&file).unwrap());
        assert!(!file.exists());
    }

    #[test]
    fn test_rm_file_missing_returns_false() {
        let temp = TempDir::new().unwrap();

        assert!(!rm_file(&temp.path().join("missing.txt")).unwrap());
    }

    #[test]
    fn test_rm_file_ignores_directories() {
        let temp = TempDir::new().unwrap();

        assert!(!rm_file(temp.path()).unwrap());
        assert!(temp.path().is_dir());
    }

    #[test]
    fn test_extract_zip_next_to_archive() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("model.zip");
        write_zip(
            &archive,
            &[
                ("saved_model.pb", b"graph"),
                ("variables/variables.index", b"index"),
            ],
        );

        extract_zip(&archive, None, false).unwrap();

        assert_eq!(
            fs::read(temp.path().join("saved_model.pb")).unwrap(),
            b"graph"
        );
        assert_eq!(
            fs::read(temp.path().join("variables").join("variables.index")).unwrap(),
            b"index"
        );
        assert!(archive.exists());
    }

    #[test]
    fn test_extract_zip_into_new_destination_and_delete() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("bundle.zip");
        write_zip(&archive, &[("config.json", b"{}")]);
        let dest = temp.path().join("out").join("bundle");

        extract_zip(&archive, Some(&dest), true).unwrap();

        assert_eq!(fs::read(dest.join("config.json")).unwrap(), b"{}");
        assert!(!archive.exists());
    }

    #[test]
    fn test_extract_zip_missing_archive() {
        let temp = TempDir::new().unwrap();

        let result = extract_zip(&temp.path().join("missing.zip"), None, false);

        match result {
            Err(FilesError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_zip_not_an_archive() {
        let temp = TempDir::new().unwrap();
        let bogus = temp.path().join("bogus.zip");
        fs::write(&bogus, b"definitely not a zip file").unwrap();

        let result = extract_zip(&bogus, None, true);

        assert!(matches!(result, Err(FilesError::Zip(_))));
        // A failed extraction must not delete the archive.
        assert!(bogus.exists());
    }

    #[test]
    fn test_extract_zip_rejects_entry_outside_destination() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("evil.zip");
        write_zip(&archive, &[("../escape.txt", b"escaped")]);
        let dest = temp.path().join("dest");

        let result = extract_zip(&archive, Some(&dest), true);

        assert!(matches!(result, Err(FilesError::Zip(_))));
        assert!(!temp.path().join("escape.txt").exists());
        assert!(archive.exists());
    }

    #[test]
    fn test_default_extract_dir_for_bare_filename() {
        assert_eq!(
            default_extract_dir(Path::new("model.zip")).unwrap(),
            Path::new(".")
        );
        assert!(matches!(
            default_extract_dir(Path::new("/")),
            Err(FilesError::InvalidPath(_))
        ));
    }
}
