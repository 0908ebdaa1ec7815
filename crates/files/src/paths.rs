//! Helpers for `/`-separated path strings.

use crate::constants::PATH_SEPARATOR;

/// Gets the leftmost part of a path.
///
/// A single leading separator is preserved, so `/models/tensorflow/iris/15559399` gives
/// `/models` and `models/tensorflow` gives `models`. Empty components from repeated
/// separators are skipped.
pub fn get_leftmost_part_of_path(path: &str) -> String {
    let (leading, rest) = match path.strip_prefix(PATH_SEPARATOR) {
        Some(rest) => (Some(PATH_SEPARATOR), rest),
        None => (None, path),
    };

    let first = segments(rest).next().unwrap_or("");

    let mut leftmost = String::with_capacity(first.len() + 1);
    leftmost.extend(leading);
    leftmost.push_str(first);
    leftmost
}

/// Eliminates directory paths that have other listed paths beneath them.
///
/// Given a listing such as:
///
/// ```text
/// models/tensorflow/
/// models/tensorflow/iris/1569001258
/// models/tensorflow/iris/1569001258/saved_model.pb
/// ```
///
/// only `models/tensorflow/iris/1569001258/saved_model.pb` is kept.
///
/// A path is dropped when its components, paired with their positions, are a subset of
/// another path's. Because each position holds exactly one component this is the same as
/// being a component-wise prefix, which is how it is checked here. Trailing and repeated
/// separators are ignored.
///
/// Paths with identical components (`a/b` and `a/b/`) are each other's subset, so every copy
/// of a duplicated path is dropped.
///
/// Survivors keep their original relative order.
pub fn remove_non_empty_directory_paths<S: AsRef<str>>(paths: &[S]) -> Vec<&str> {
    let split: Vec<Vec<&str>> = paths.iter().map(|p| segments(p.as_ref()).collect()).collect();

    let leaves: Vec<&str> = paths
        .iter()
        .enumerate()
        .filter(|(i, _)| !is_nested_in_another(&split, *i))
        .map(|(_, path)| path.as_ref())
        .collect();

    tracing::debug!("kept {} leaf paths out of {}", leaves.len(), paths.len());

    leaves
}

fn is_nested_in_another(split: &[Vec<&str>], index: usize) -> bool {
    let candidate = &split[index];

    split
        .iter()
        .enumerate()
        .any(|(other_index, other)| other_index != index && other.starts_with(candidate))
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR).filter(|s| !s.is_empty())
}
