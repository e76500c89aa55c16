use crate::util::hash_value;
use crate::Value;
use serde_json::Map;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::slice;

/// Positional arguments of a job, in call order.
///
/// The length is fixed once the value is built: there is no way to push onto it,
/// and no conversion from a growable `Vec` is offered.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Args(Box<[Value]>);

impl Args {
    pub fn empty() -> Self {
        Args::default()
    }

    pub(crate) fn from_values(values: Vec<Value>) -> Self {
        Args(values.into_boxed_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl<const N: usize> From<[Value; N]> for Args {
    fn from(values: [Value; N]) -> Self {
        Args::from_values(Vec::from(values))
    }
}

impl From<()> for Args {
    fn from(_: ()) -> Self {
        Args::empty()
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Hash for Args {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.len().hash(state);
        for value in self.0.iter() {
            hash_value(value, state);
        }
    }
}

/// Renders as a tuple: `()`, `(1,)`, `(1, "a")`.
///
/// Only the tuple itself is spaced; each element is its compact JSON text, so
/// nested values read `[1,2]` and `{"a":1}`.
impl Display for Args {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl Debug for Args {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Keyword arguments of a job.
///
/// Keys are unique. Insertion order is kept for display only; equality and
/// hashing treat the arguments as an unordered map.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Kwargs(Map<String, Value>);

impl Kwargs {
    pub fn new() -> Self {
        Kwargs::default()
    }

    /// Sets `key`, returning the previous value. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl From<Map<String, Value>> for Kwargs {
    fn from(map: Map<String, Value>) -> Self {
        Kwargs(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Kwargs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut kwargs = Kwargs::new();
        for (key, value) in iter {
            kwargs.insert(key, value);
        }
        kwargs
    }
}

impl Hash for Kwargs {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut entries: Vec<(&String, &Value)> = self.0.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.len().hash(state);
        for (key, value) in entries {
            key.hash(state);
            hash_value(value, state);
        }
    }
}

/// Renders as an object in insertion order: `{}`, `{"scale": 3}`.
impl Display for Kwargs {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (key, value)) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", Value::from(key.as_str()), value)?;
        }
        write!(f, "}}")
    }
}

impl Debug for Kwargs {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Builds [`Args`] from expressions convertible into a `serde_json::Value`.
///
/// ```
/// use pipeline_common::args;
/// let args = args![1, "two", 3.5];
/// assert_eq!(args.to_string(), r#"(1, "two", 3.5)"#);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::from([$($crate::Value::from($value)),+])
    };
}

/// Builds [`Kwargs`] from `key => value` pairs; a repeated key keeps the last value.
///
/// ```
/// use pipeline_common::kwargs;
/// let kwargs = kwargs! {"scale" => 3, "label" => "x"};
/// assert_eq!(kwargs.to_string(), r#"{"scale": 3, "label": "x"}"#);
/// ```
#[macro_export]
macro_rules! kwargs {
    () => {
        $crate::Kwargs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut kwargs = $crate::Kwargs::new();
        $(kwargs.insert($key, $value);)+
        kwargs
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_args_display() {
        assert_eq!(Args::empty().to_string(), "()");
        assert_eq!(args![1].to_string(), "(1,)");
        assert_eq!(args![1, 2].to_string(), "(1, 2)");
        assert_eq!(
            args!["a", json!([1, 2]), json!(null)].to_string(),
            r#"("a", [1,2], null)"#
        );
        assert_eq!(
            args![json!({"b": 1, "a": [true, 2]})].to_string(),
            r#"({"b":1,"a":[true,2]},)"#
        );
        assert_eq!(Args::from(()), Args::empty());
    }

    #[test]
    fn test_args_are_order_sensitive() {
        assert_eq!(args![1, 2], args![1, 2]);
        assert_ne!(args![1, 2], args![2, 1]);
        assert_ne!(args![1], args![1, 1]);
        assert_eq!(args![1, 2].get(1), Some(&json!(2)));
        assert_eq!(args![1, 2].len(), 2);
    }

    #[test]
    fn test_kwargs_insert_replaces_in_place() {
        let mut kwargs = kwargs! {"x" => 1, "y" => 2};
        assert_eq!(kwargs.insert("x", 10), Some(json!(1)));
        assert_eq!(kwargs.insert("z", 3), None);
        assert_eq!(kwargs.keys().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(kwargs.get("x"), Some(&json!(10)));
        assert_eq!(kwargs.len(), 3);
    }

    #[test]
    fn test_kwargs_equality_ignores_order() {
        let left = kwargs! {"x" => 1, "y" => 2};
        let right = kwargs! {"y" => 2, "x" => 1};
        assert_eq!(left, right);
        assert_ne!(left, kwargs! {"x" => 1, "y" => 3});
        assert_ne!(left, kwargs! {"x" => 1});
        assert_ne!(kwargs! {"x" => 1}, left);
    }

    #[test]
    fn test_kwargs_display_keeps_insertion_order() {
        assert_eq!(Kwargs::new().to_string(), "{}");
        assert_eq!(
            kwargs! {"y" => 2, "x" => "a"}.to_string(),
            r#"{"y": 2, "x": "a"}"#
        );
    }

    #[test]
    fn test_kwargs_from_iter_keeps_last_duplicate() {
        let kwargs: Kwargs = vec![("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(kwargs.len(), 2);
        assert_eq!(kwargs.to_string(), r#"{"a": 3, "b": 2}"#);
    }
}
