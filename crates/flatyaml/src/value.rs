use std::collections::BTreeMap;
use std::collections::btree_map;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A flattened entry: either a single string or the items of one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum YamlValue {
    Scalar(String),
    List(Vec<String>),
}

impl YamlValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            YamlValue::Scalar(s) => Some(s),
            YamlValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            YamlValue::List(items) => Some(items),
            YamlValue::Scalar(_) => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, YamlValue::Scalar(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, YamlValue::List(_))
    }
}

impl From<&str> for YamlValue {
    fn from(s: &str) -> Self {
        YamlValue::Scalar(s.to_string())
    }
}

impl From<String> for YamlValue {
    fn from(s: String) -> Self {
        YamlValue::Scalar(s)
    }
}

impl From<Vec<&str>> for YamlValue {
    fn from(items: Vec<&str>) -> Self {
        YamlValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for YamlValue {
    fn from(items: Vec<String>) -> Self {
        YamlValue::List(items)
    }
}

/// Decoded document: flattened path -> value.
///
/// Paths are unique; inserting an existing path replaces its value. Iteration
/// is in path order so output is reproducible, but callers should not read
/// meaning into the order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Document {
    entries: BTreeMap<String, YamlValue>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` at `path`, returning whatever was there before.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        value: impl Into<YamlValue>,
    ) -> Option<YamlValue> {
        self.entries.insert(path.into(), value.into())
    }

    pub fn get(&self, path: &str) -> Option<&YamlValue> {
        self.entries.get(path)
    }

    pub fn get_scalar(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(YamlValue::as_scalar)
    }

    pub fn get_list(&self, path: &str) -> Option<&[String]> {
        self.get(path).and_then(YamlValue::as_list)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, YamlValue> {
        self.entries.iter()
    }

    pub fn into_map(self) -> BTreeMap<String, YamlValue> {
        self.entries
    }

    /// Render as a JSON object: scalars become strings, lists become arrays of strings.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(path, value)| {
                let v = match value {
                    YamlValue::Scalar(s) => serde_json::Value::String(s.clone()),
                    YamlValue::List(items) => serde_json::Value::Array(
                        items.iter().cloned().map(serde_json::Value::String).collect(),
                    ),
                };
                (path.clone(), v)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a YamlValue);
    type IntoIter = btree_map::Iter<'a, String, YamlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Document {
    type Item = (String, YamlValue);
    type IntoIter = btree_map::IntoIter<String, YamlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<YamlValue>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (k, v) in iter {
            doc.insert(k, v);
        }
        doc
    }
}
