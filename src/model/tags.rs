use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Tags in insertion order with constant-time membership checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.members.contains(tag)
    }

    /// Appends `tag` unless already present. Returns whether it was added.
    pub fn insert(&mut self, tag: &str) -> bool {
        if self.members.contains(tag) {
            return false;
        }
        self.members.insert(tag.to_string());
        self.order.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        if !self.members.remove(tag) {
            return false;
        }
        self.order.retain(|t| t != tag);
        true
    }

    pub fn is_superset_of<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().all(|t| self.contains(t.as_ref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        let mut set = TagSet::new();
        for tag in &tags {
            set.insert(tag);
        }
        set
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.order
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}
