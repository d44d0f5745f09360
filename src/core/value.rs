//! Bound argument values for event handlers.
//!
//! A handler is created with a fixed bundle of arguments that is passed to
//! its callable on every execution. The bundle has two parts:
//!
//! - positional values, in order
//! - keyword values, keyed by name
//!
//! ## Value Types
//!
//! - `Null`: Absent value
//! - `Bool`: Flags
//! - `Int`: Integers (counts, epochs, ids)
//! - `Float`: Real numbers (metrics, thresholds)
//! - `Str`: Text (messages, names)
//! - `List`: Nested sequences of values

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single argument value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Str(String),
    /// Sequence of values.
    List(Vec<Value>),
}

impl Value {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as float. Int values are widened.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Str value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as list reference if this is a List value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// Check if this is the Null value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Positional argument storage. Most handlers bind only a few values.
pub type Positional = SmallVec<[Value; 4]>;

/// Keyword argument storage, ordered by name.
pub type Keywords = BTreeMap<String, Value>;

/// Arguments bound to a handler's callable.
///
/// Equality is structural: same positional values in the same order and
/// the same keyword mapping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Args {
    positional: Positional,
    keyword: Keywords,
}

impl Args {
    /// Create an empty argument bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bundle from positional values only.
    pub fn positional_only<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keyword: Keywords::new(),
        }
    }

    /// Append a positional value (builder pattern).
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword value (builder pattern). A repeated name overwrites.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    /// Positional values in order.
    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword values.
    #[must_use]
    pub fn keyword(&self) -> &Keywords {
        &self.keyword
    }

    /// Get a positional value by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Get a keyword value by name.
    #[must_use]
    pub fn kwarg_value(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    /// Check if no arguments are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Render the positional part as a tuple, e.g. `(1, "a")`.
    pub(crate) fn positional_repr(&self) -> String {
        let items: Vec<String> = self.positional.iter().map(ToString::to_string).collect();
        if items.len() == 1 {
            format!("({},)", items[0])
        } else {
            format!("({})", items.join(", "))
        }
    }

    /// Render the keyword part as a mapping, e.g. `{name: "a"}`.
    pub(crate) fn keyword_repr(&self) -> String {
        let items: Vec<String> = self
            .keyword
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect();
        format!("{{{}}}", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        let val = Value::Int(5);
        assert_eq!(val.as_int(), Some(5));
        assert_eq!(val.as_float(), Some(5.0));
        assert_eq!(val.as_bool(), None);

        let val = Value::Str("loss".to_string());
        assert_eq!(val.as_str(), Some("loss"));
        assert!(!val.is_null());
        assert!(Value::default().is_null());
    }

    #[test]
    fn test_value_from() {
        let int: Value = 42i32.into();
        assert_eq!(int.as_int(), Some(42));

        let list: Value = vec![1i64, 2, 3].into();
        assert_eq!(list.as_list().map(<[Value]>::len), Some(3));

        let none: Value = Option::<i64>::None.into();
        assert!(none.is_null());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Str("hi".into()).to_string(), "\"hi\"");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        assert_eq!(Value::from(vec![1i64, 2]).to_string(), "[1, 2]");
    }

    #[test]
    fn test_args_builder() {
        let args = Args::new().arg(1).arg("two").kwarg("epoch", 3);

        assert_eq!(args.positional().len(), 2);
        assert_eq!(args.get(0), Some(&Value::Int(1)));
        assert_eq!(args.get(1).and_then(Value::as_str), Some("two"));
        assert_eq!(args.kwarg_value("epoch").and_then(Value::as_int), Some(3));
        assert!(args.kwarg_value("missing").is_none());
        assert!(!args.is_empty());
        assert!(Args::new().is_empty());
    }

    #[test]
    fn test_args_equality() {
        let a = Args::positional_only([1, 2]).kwarg("k", true);
        let b = Args::new().arg(1).arg(2).kwarg("k", true);
        assert_eq!(a, b);

        // Order of positional values matters
        assert_ne!(Args::positional_only([1, 2]), Args::positional_only([2, 1]));
    }

    #[test]
    fn test_args_repr() {
        assert_eq!(Args::new().positional_repr(), "()");
        assert_eq!(Args::positional_only([7]).positional_repr(), "(7,)");
        assert_eq!(Args::positional_only([1, 2]).positional_repr(), "(1, 2)");
        assert_eq!(Args::new().kwarg("b", 2).kwarg("a", "x").keyword_repr(), "{a: \"x\", b: 2}");
    }
}
