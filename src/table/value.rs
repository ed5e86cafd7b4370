//! Cell values for row-oriented tables

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Ordered attribute mapping used by annotation columns (GFF `attributes`,
/// VCF `INFO`)
pub type AttrMap = IndexMap<String, Value>;

/// A single cell in a table row: a scalar, a list, or a nested mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    IntList(Vec<i64>),
    FloatList(Vec<f64>),
    StrList(Vec<String>),
    Map(AttrMap),
}

impl Value {
    /// True for the `Null` variant
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of a scalar cell, if it holds one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Integer view of a scalar cell, if it holds one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// String view of a `Str` cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Nested mapping view of a `Map` cell
    pub fn as_map(&self) -> Option<&AttrMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

/// Flat-file rendering: null is empty, lists are comma-joined, maps are JSON
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::IntList(xs) => {
                let joined: Vec<String> = xs.iter().map(|x| x.to_string()).collect();
                write!(f, "{}", joined.join(","))
            }
            Value::FloatList(xs) => {
                let joined: Vec<String> = xs.iter().map(|x| x.to_string()).collect();
                write!(f, "{}", joined.join(","))
            }
            Value::StrList(xs) => write!(f, "{}", xs.join(",")),
            Value::Map(m) => {
                let json = serde_json::to_string(m).map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
        }
    }
}
