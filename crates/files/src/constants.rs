/// Separator used by object-store style path strings, independent of the host platform.
pub const PATH_SEPARATOR: char = '/';

/// Directory used for extraction when an archive path has no parent component.
pub const CURRENT_DIR: &str = ".";
