//! The [`Value`] enum and its type predicates.

use indexmap::IndexMap;

/// Insertion-ordered mapping of string keys to values.
pub type Mapping = IndexMap<String, Value>;

/// A dynamically typed configuration value.
///
/// `Bool`, `Int` and `Float` are disjoint: `true` is never an integer and `1.0` is never an
/// integer. `List` and `Tuple` are both sequences but are classified separately.
///
/// # Serialisation
///
/// Values (de)serialise untagged, so a `Value` can be read from JSON/YAML and passed straight
/// to a template as context. A deserialised sequence is always a `List`; `Tuple` only arises
/// from values constructed in code.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Dict(Mapping),
}

impl Value {
    /// Short name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Dict(_) => "dict",
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// True for integers only; booleans are not integers.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }

    pub fn is_float_or_int(&self) -> bool {
        self.is_int() || self.is_float()
    }

    /// True if this is a list whose items are all integers. Empty lists qualify.
    pub fn is_int_list(&self) -> bool {
        self.is_list_of(Value::is_int)
    }

    /// True if this is a list whose items are all floats. Empty lists qualify.
    pub fn is_float_list(&self) -> bool {
        self.is_list_of(Value::is_float)
    }

    /// True if this is a list whose items are all strings. Empty lists qualify.
    pub fn is_str_list(&self) -> bool {
        self.is_list_of(Value::is_str)
    }

    /// True if this is a list whose items are all booleans. Empty lists qualify.
    pub fn is_bool_list(&self) -> bool {
        self.is_list_of(Value::is_bool)
    }

    /// True if this is a list whose items are all integers or floats (mixing allowed).
    pub fn is_float_or_int_list(&self) -> bool {
        self.is_list_of(Value::is_float_or_int)
    }

    /// Returns the inner mapping if this is a `Dict`.
    pub fn as_dict(&self) -> Option<&Mapping> {
        match self {
            Value::Dict(map) => Some(map),
            _ => None,
        }
    }

    // Only `List` qualifies; a `Tuple` of matching items does not.
    fn is_list_of(&self, predicate: impl Fn(&Value) -> bool) -> bool {
        match self {
            Value::List(items) => items.iter().all(predicate),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Dict(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond i64::MAX and true floats both land here
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Dict(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
