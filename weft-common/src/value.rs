use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use hashbrown::HashMap;

/// Ordered sequence of zero or more [`Value`]'s
pub type Sequence<'a> = Vec<Value<'a>>;

/// A node of a configuration document.
///
/// Strings borrow from the parsed text whenever no unescaping was needed;
/// [`Value::into_owned`] detaches them from it.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value<'input> {
    #[default]
    Null,
    String(Cow<'input, str>),
    Bool(bool),
    FloatingPoint(f64),
    Integer(i64),
    // inline style like `[x, x, x]`
    // or block style like:
    //     - x
    //     - x
    Sequence(Sequence<'input>),

    // block style like:
    //     x: Y
    //     a: B
    Mapping(Mapping<'input>),
}

impl<'input> Value<'input> {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Integers are widened, like any JSON-ish number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::FloatingPoint(f) => Some(f),
            Value::Integer(i) => Some(i as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&Sequence<'input>> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping<'input>> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping<'input>> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Bool(b) => Value::Bool(b),
            Value::FloatingPoint(f) => Value::FloatingPoint(f),
            Value::Integer(i) => Value::Integer(i),
            Value::Sequence(s) => Value::Sequence(s.into_iter().map(Value::into_owned).collect()),
            Value::Mapping(m) => Value::Mapping(m.into_owned()),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::FloatingPoint(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::String(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::String(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Value::String(value)
    }
}

impl<'a> From<Mapping<'a>> for Value<'a> {
    fn from(value: Mapping<'a>) -> Self {
        Value::Mapping(value)
    }
}

impl<'a> From<Sequence<'a>> for Value<'a> {
    fn from(value: Sequence<'a>) -> Self {
        Value::Sequence(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'input> {
    pub key: Cow<'input, str>,
    pub value: Value<'input>,
}

impl<'input> Entry<'input> {
    pub fn new(key: Cow<'input, str>, value: Value<'input>) -> Self {
        Entry { key, value }
    }
}

/// Key/value pairs in insertion order. Keys are unique: inserting an
/// existing key replaces its value and keeps its position.
#[derive(Default, Clone)]
pub struct Mapping<'input> {
    entries: Vec<Entry<'input>>,
    // key to position in `entries`
    index: HashMap<Cow<'input, str>, usize>,
}

impl PartialEq for Mapping<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Debug for Mapping<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|e| (&e.key, &e.value)))
            .finish()
    }
}

impl<'input> Mapping<'input> {
    #[must_use]
    pub fn new() -> Self {
        Mapping::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    fn push(&mut self, key: Cow<'input, str>, value: Value<'input>) -> usize {
        let i = self.entries.len();
        self.index.insert(key.clone(), i);
        self.entries.push(Entry::new(key, value));
        i
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value<'input>> {
        self.position(key).map(|i| &self.entries[i].value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value<'input>> {
        let i = self.position(key)?;
        Some(&mut self.entries[i].value)
    }

    /// Follows `path` through nested mappings, e.g. `["style", "icon"]`.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value<'input>> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for key in parents {
            current = current.get(key)?.as_mapping()?;
        }
        current.get(last)
    }

    /// Inserts `value` under `key` and returns the value it replaced.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value<'input>>
    where
        K: Into<Cow<'input, str>>,
        V: Into<Value<'input>>,
    {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(core::mem::replace(&mut self.entries[i].value, value)),
            None => {
                self.push(key, value);
                None
            }
        }
    }

    /// Returns the value under `key`, inserting the result of `default` first
    /// when the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: Cow<'input, str>, default: F) -> &mut Value<'input>
    where
        F: FnOnce() -> Value<'input>,
    {
        let i = match self.position(&key) {
            Some(i) => i,
            None => self.push(key, default()),
        };
        &mut self.entries[i].value
    }

    pub fn remove(&mut self, key: &str) -> Option<Value<'input>> {
        let i = self.index.remove(key)?;
        for pos in self.index.values_mut() {
            if *pos > i {
                *pos -= 1;
            }
        }
        Some(self.entries.remove(i).value)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Entry<'input>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn into_owned(self) -> Mapping<'static> {
        let mut owned = Mapping::new();
        for e in self.entries {
            owned.push(Cow::Owned(e.key.into_owned()), e.value.into_owned());
        }
        owned
    }
}

impl<'a, 'input> IntoIterator for &'a Mapping<'input> {
    type Item = &'a Entry<'input>;
    type IntoIter = core::slice::Iter<'a, Entry<'input>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'input> IntoIterator for Mapping<'input> {
    type Item = Entry<'input>;
    type IntoIter = alloc::vec::IntoIter<Entry<'input>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'input, K, V> FromIterator<(K, V)> for Mapping<'input>
where
    K: Into<Cow<'input, str>>,
    V: Into<Value<'input>>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;

    #[test]
    fn insert_keeps_first_position() {
        let mut map = Mapping::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.insert("a", 3), Some(Value::Integer(1)));
        let keys: Vec<&str> = map.iter().map(|e| &*e.key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&Value::Integer(3)));
    }

    #[test]
    fn path_lookup() {
        let style: Mapping = [("icon", "Box")].into_iter().collect();
        let mut doc = Mapping::new();
        doc.insert("style", style);
        doc.insert("order", 0);
        assert_eq!(doc.get_path(&["style", "icon"]), Some(&Value::from("Box")));
        assert_eq!(doc.get_path(&["order", "icon"]), None);
        assert_eq!(doc.get_path(&[]), None);
    }

    #[test]
    fn typed_accessors() {
        let doc: Mapping = [
            ("ratio", Value::from(0.5)),
            ("order", Value::from(3)),
            ("name", Value::from("3")),
        ]
        .into_iter()
        .collect();
        assert_eq!(doc.get("ratio").and_then(Value::as_f64), Some(0.5));
        assert_eq!(doc.get("order").and_then(Value::as_f64), Some(3.0));
        assert_eq!(doc.get("order").and_then(Value::as_i64), Some(3));
        assert_eq!(doc.get("name").and_then(Value::as_f64), None);
        assert_eq!(doc.get("ratio").and_then(Value::as_i64), None);
    }

    #[test]
    fn contains_and_remove() {
        let mut doc: Mapping = [("a", 1), ("b", 2)].into_iter().collect();
        assert!(doc.contains_key("a"));
        assert!(!doc.contains_key("c"));
        assert_eq!(doc.remove("a"), Some(Value::Integer(1)));
        assert!(!doc.contains_key("a"));
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("b"), Some(&Value::Integer(2)));
        doc.insert("a", 3);
        let keys: Vec<&str> = doc.iter().map(|e| &*e.key).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn many_keys() {
        let keys: Vec<String> = (0..5_000).map(|i| alloc::format!("key{i}")).collect();
        let mut doc: Mapping = keys.iter().map(|k| (k.as_str(), 1)).collect();
        assert_eq!(doc.len(), 5_000);
        assert_eq!(doc.remove("key10"), Some(Value::Integer(1)));
        assert_eq!(doc.get_mut("key4999"), Some(&mut Value::Integer(1)));
        assert_eq!(doc.iter().nth(10).map(|e| &*e.key), Some("key11"));
        assert_eq!(doc.clone().into_owned(), doc);
    }

    #[test]
    fn owned_copy_is_equal() {
        let owned = {
            let text = String::from("Loom");
            let doc: Mapping = [("name", text.as_str())].into_iter().collect();
            doc.into_owned()
        };
        assert_eq!(owned.get("name").and_then(Value::as_str), Some("Loom"));
    }
}
