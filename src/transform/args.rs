//! Caller-supplied transform arguments

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{describe_json, CdnError};

use super::catalog::{ArgSpec, ValueKind};

/// Concrete value for one transform argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ArgValue {
    fn describe(&self) -> &'static str {
        match self {
            ArgValue::Bool(_) => "boolean",
            ArgValue::Int(_) => "integer",
            ArgValue::Float(_) => "float",
            ArgValue::Str(_) => "string",
        }
    }

    /// Check this value against the catalog entry's value kind
    pub fn check(&self, spec: &ArgSpec) -> Result<(), CdnError> {
        let ok = match (spec.kind, self) {
            (ValueKind::Int, ArgValue::Int(_)) => true,
            (ValueKind::Float, ArgValue::Int(_) | ArgValue::Float(_)) => true,
            (ValueKind::String, ArgValue::Str(_)) => true,
            (ValueKind::Boolean, ArgValue::Bool(_)) => true,
            // Literals match by wire type: "90" is not the integer 90
            (ValueKind::Enum(e), ArgValue::Str(s)) => e.find_text(s).is_some(),
            (ValueKind::Enum(e), ArgValue::Int(n)) => e.find_int(*n).is_some(),
            _ => false,
        };

        if ok {
            return Ok(());
        }

        let expected = match spec.kind {
            ValueKind::Enum(e) => {
                let tokens: Vec<String> = e.values.iter().map(|v| v.literal.to_string()).collect();
                format!("one of [{}]", tokens.join(", "))
            }
            other => other.type_name().to_string(),
        };

        Err(CdnError::InvalidArgument {
            name: spec.name.to_string(),
            expected,
            found: format!("{} {}", self.describe(), self),
        })
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Bool(b) => write!(f, "{}", b),
            ArgValue::Int(n) => write!(f, "{}", n),
            ArgValue::Float(x) => write!(f, "{}", x),
            ArgValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value.into())
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

/// Argument name to value mapping, in the order the caller supplied it
///
/// Insertion order is kept because query-string rendering passes it through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformArgs {
    entries: Vec<(String, ArgValue)>,
}

impl TransformArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace; a replaced key keeps its original position
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert host-supplied resolver arguments (a JSON object)
    ///
    /// `null` entries are treated as "not supplied". Nested arrays and
    /// objects are not valid transform values.
    pub fn from_json(args: &Value) -> Result<Self, CdnError> {
        let mut result = Self::new();
        let map = match args {
            Value::Null => return Ok(result),
            Value::Object(map) => map,
            other => {
                return Err(CdnError::InvalidArgument {
                    name: "<args>".to_string(),
                    expected: "object".to_string(),
                    found: describe_json(other),
                })
            }
        };

        for (name, value) in map {
            let value = match value {
                Value::Null => continue,
                Value::Bool(b) => ArgValue::Bool(*b),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => ArgValue::Int(i),
                    None => ArgValue::Float(n.as_f64().unwrap_or_default()),
                },
                Value::String(s) => ArgValue::Str(s.clone()),
                other => {
                    return Err(CdnError::InvalidArgument {
                        name: name.clone(),
                        expected: "scalar".to_string(),
                        found: describe_json(other),
                    })
                }
            };
            result.entries.push((name.clone(), value));
        }

        Ok(result)
    }
}

impl<K: Into<String>, V: Into<ArgValue>> FromIterator<(K, V)> for TransformArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (k, v) in iter {
            args.insert(k, v);
        }
        args
    }
}
