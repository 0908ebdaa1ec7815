//! # Cortex Types
//!
//! Dynamically typed values as they appear in workload configuration.
//!
//! Configuration arrives as JSON or YAML and is merged, inspected and handed to templates
//! without a fixed schema. [`Value`] models that data explicitly so that classification
//! (bool vs int vs float, list vs tuple) is a `match` rather than a runtime type check.
//!
//! Mappings keep insertion order, so a merged configuration renders in the order its keys
//! were first seen.

mod value;

pub use value::{Mapping, Value};
