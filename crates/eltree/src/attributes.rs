//! Element Attributes
//!
//! Ordered attribute map. Order is the order attributes were supplied in
//! and is the order they are rendered in.

use std::collections::HashMap;

/// Attribute collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn is_id(&self) -> bool {
        self.name == "id"
    }
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute by index
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// Get attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.attributes.get(i))
            .map(|a| a.value.as_str())
    }

    /// Check if attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Value of the `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    /// Get attribute names
    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Iterate over attributes
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }

    /// Add an attribute; hands it back if the name is already taken.
    pub(crate) fn try_insert(&mut self, attr: Attr) -> Result<(), Attr> {
        if self.by_name.contains_key(&attr.name) {
            return Err(attr);
        }
        self.by_name.insert(attr.name.clone(), self.attributes.len());
        self.attributes.push(attr);
        Ok(())
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, String);
    type IntoIter = std::iter::Map<std::vec::IntoIter<Attr>, fn(Attr) -> (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        let split: fn(Attr) -> (String, String) = |a| (a.name, a.value);
        self.attributes.into_iter().map(split)
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = &'a Attr;
    type IntoIter = std::slice::Iter<'a, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}
