// File: src/compile/params.rs
// Purpose: Parameter values supplied to a renderer

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::template::ParamName;

/// A value for one parameter: a single segment or a repeated one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    Sequence(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Scalar(value.clone())
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: ToString> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::Sequence(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        ParamValue::Sequence(values.iter().map(ToString::to_string).collect())
    }
}

/// Named values used to render a path
///
/// Lookups use the parameter's key form, so anonymous parameters are
/// addressed as `"0"`, `"1"`, ... Missing entries and explicit nulls (from
/// JSON) are both treated as absent.
///
/// # Examples
///
/// ```
/// use pathex::{compile, Options, Params};
///
/// let renderer = compile("/users/:id/:tags*", &Options::default()).unwrap();
/// let params = Params::new().with("id", 42).with("tags", vec!["a", "b"]);
///
/// assert_eq!(renderer.render(&params).unwrap(), "/users/42/a/b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Looks up the value for a parameter name
    pub fn lookup(&self, name: &ParamName) -> Option<&ParamValue> {
        self.values.get(name.as_key().as_ref())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds params from a JSON object
    ///
    /// Strings, numbers and booleans become scalars, arrays become sequences
    /// (each element stringified), `null` and nested objects are skipped.
    /// Returns `None` when `value` is not an object.
    ///
    /// ```
    /// use pathex::{ParamValue, Params};
    /// use serde_json::json;
    ///
    /// let params = Params::from_json(&json!({"id": 7, "tags": ["x", 1], "gone": null})).unwrap();
    /// assert_eq!(params.get("id"), Some(&ParamValue::Scalar("7".into())));
    /// assert_eq!(params.get("tags"), Some(&ParamValue::Sequence(vec!["x".into(), "1".into()])));
    /// assert_eq!(params.get("gone"), None);
    /// ```
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        let object = value.as_object()?;

        Some(
            object
                .iter()
                .filter_map(|(name, value)| json_param(value).map(|v| (name.clone(), v)))
                .collect(),
        )
    }
}

fn json_param(value: &JsonValue) -> Option<ParamValue> {
    match value {
        JsonValue::Null | JsonValue::Object(_) => None,
        JsonValue::Array(items) => Some(ParamValue::Sequence(
            items.iter().map(json_segment).collect(),
        )),
        scalar => Some(ParamValue::Scalar(json_segment(scalar))),
    }
}

fn json_segment(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(ParamValue::from(123), ParamValue::Scalar("123".to_string()));
        assert_eq!(ParamValue::from(true), ParamValue::Scalar("true".to_string()));
        assert_eq!(ParamValue::from(1.5), ParamValue::Scalar("1.5".to_string()));
        assert_eq!(ParamValue::from("x"), ParamValue::Scalar("x".to_string()));
    }

    #[test]
    fn test_sequence_conversion() {
        assert_eq!(
            ParamValue::from(vec![1, 2]),
            ParamValue::Sequence(vec!["1".to_string(), "2".to_string()])
        );
    }

    #[test]
    fn test_lookup_by_index_name() {
        let params = Params::new().with("0", "first").with("id", 5);
        assert_eq!(
            params.lookup(&ParamName::Index(0)),
            Some(&ParamValue::Scalar("first".to_string()))
        );
        assert_eq!(
            params.lookup(&ParamName::from("id")),
            Some(&ParamValue::Scalar("5".to_string()))
        );
        assert_eq!(params.lookup(&ParamName::Index(1)), None);
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(Params::from_json(&json!([1, 2])).is_none());
        assert!(Params::from_json(&json!("x")).is_none());
    }

    #[test]
    fn test_from_json_skips_nested_objects() {
        let params = Params::from_json(&json!({"a": {"b": 1}, "c": false})).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("c"), Some(&ParamValue::Scalar("false".to_string())));
    }

    #[test]
    fn test_collect_from_pairs() {
        let params: Params = vec![("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(params.len(), 2);
    }
}
