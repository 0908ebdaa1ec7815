//! Recursive merging of configuration mappings.
//!
//! Two independent choices select a variant:
//!
//! - **overwrite** (later value wins on conflict) or **no overwrite** (earlier value wins)
//! - **in place** (the first mapping is updated) or a **new** mapping (inputs untouched)
//!
//! Mappings are merged right into left. When a key holds a [`Value::Dict`] on both sides the
//! two are merged recursively; any other conflict is settled by replacing (or keeping) the
//! whole value, so lists are never merged element-wise. Keys new to the target are appended
//! in source order.

use cortex_types::{Mapping, Value};

/// Merges every mapping in `dicts` into `target`, later values winning on conflict.
pub fn merge_dicts_in_place_overwrite<'a>(
    target: &mut Mapping,
    dicts: impl IntoIterator<Item = &'a Mapping>,
) {
    for dict in dicts {
        merge_two_dicts_in_place_overwrite(target, dict);
    }
}

/// Merges every mapping in `dicts` into `target`, keeping values already present.
pub fn merge_dicts_in_place_no_overwrite<'a>(
    target: &mut Mapping,
    dicts: impl IntoIterator<Item = &'a Mapping>,
) {
    for dict in dicts {
        merge_two_dicts_in_place_no_overwrite(target, dict);
    }
}

/// Merges `dicts` left to right into a new mapping, later values winning on conflict.
pub fn merge_dicts_overwrite<'a>(dicts: impl IntoIterator<Item = &'a Mapping>) -> Mapping {
    let mut result = Mapping::new();
    merge_dicts_in_place_overwrite(&mut result, dicts);
    result
}

/// Merges `dicts` left to right into a new mapping, earlier values winning on conflict.
pub fn merge_dicts_no_overwrite<'a>(dicts: impl IntoIterator<Item = &'a Mapping>) -> Mapping {
    let mut result = Mapping::new();
    merge_dicts_in_place_no_overwrite(&mut result, dicts);
    result
}

/// Merges `y` into `x`, with overwriting.
pub fn merge_two_dicts_in_place_overwrite(x: &mut Mapping, y: &Mapping) {
    for (key, incoming) in y {
        if let (Some(Value::Dict(existing)), Value::Dict(incoming)) = (x.get_mut(key), incoming) {
            merge_two_dicts_in_place_overwrite(existing, incoming);
            continue;
        }
        x.insert(key.clone(), incoming.clone());
    }
}

/// Merges `y` into `x`, without overwriting.
///
/// Keys missing from `x` are still added and nested mappings present on both sides are still
/// merged; only conflicting non-mapping values are left as they are.
pub fn merge_two_dicts_in_place_no_overwrite(x: &mut Mapping, y: &Mapping) {
    for (key, incoming) in y {
        match x.get_mut(key) {
            Some(Value::Dict(existing)) => {
                if let Value::Dict(incoming) = incoming {
                    merge_two_dicts_in_place_no_overwrite(existing, incoming);
                }
            }
            Some(_) => {}
            None => {
                x.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Merges `y` into a copy of `x`, with overwriting.
pub fn merge_two_dicts_overwrite(x: &Mapping, y: &Mapping) -> Mapping {
    let mut result = x.clone();
    merge_two_dicts_in_place_overwrite(&mut result, y);
    result
}

/// Merges `y` into a copy of `x`, without overwriting.
///
/// The result lists `x`'s keys first, followed by keys only present in `y` in `y`'s order.
pub fn merge_two_dicts_no_overwrite(x: &Mapping, y: &Mapping) -> Mapping {
    let mut result = x.clone();
    merge_two_dicts_in_place_no_overwrite(&mut result, y);
    result
}
