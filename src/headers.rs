use crate::constants::header;
use crate::util::merge_vary;
use indexmap::IndexMap;

/// Ordered header mapping with case-insensitive names.
///
/// Setting a name twice replaces the earlier value in place; `Vary` values
/// are merged instead of replaced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, (String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(&value);
        } else {
            self.entries
                .insert(name.to_ascii_lowercase(), (name, value));
        }
    }

    pub(crate) fn add_vary(&mut self, value: &str) {
        let key = header::VARY.to_ascii_lowercase();
        let merged = merge_vary(self.get(header::VARY).unwrap_or_default(), value);

        if merged.is_empty() {
            self.entries.shift_remove(&key);
        } else {
            self.entries
                .insert(key, (header::VARY.to_string(), merged));
        }
    }

    pub(crate) fn extend(&mut self, other: Headers) {
        for (_, (name, value)) in other.entries {
            self.insert(name, value);
        }
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
