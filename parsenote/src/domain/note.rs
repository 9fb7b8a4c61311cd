// src/domain/note.rs
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Flattened view of an XML note: one entry per element child of the root.
///
/// Entries keep document order. Inserting a name that is already present
/// replaces its text in place, so the last occurrence wins while the key keeps
/// the position of the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    fields: IndexMap<String, Option<String>>,
}

impl Note {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `text`, returning the previous text if the field existed.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        text: Option<String>,
    ) -> Option<Option<String>> {
        self.fields.insert(name.into(), text)
    }

    /// `None` when the field is absent, `Some(None)` when it has no text.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.fields.get(name).map(Option::as_deref)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for Note {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut note = Note::new();
        for (name, text) in iter {
            note.insert(name, text);
        }
        note
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
