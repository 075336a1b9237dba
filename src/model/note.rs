use std::fmt;

use serde::{Deserialize, Serialize};

use super::tags::TagSet;
use crate::error::{BookError, BookResult};
use crate::validation;

/// A free-text note keyed by its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    text: String,
    tags: TagSet,
}

impl Note {
    pub fn create(title: &str, text: &str, tags: &[&str]) -> BookResult<Self> {
        Ok(Self {
            title: validation::non_blank(title, "title")?,
            text: text.to_string(),
            tags: tags.iter().copied().collect(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn edit_text(&mut self, new_text: &str) {
        self.text = new_text.to_string();
    }

    /// Adds the tags not already on the note and returns them in the order
    /// given. Fails if every tag is already present.
    pub fn add_tags(&mut self, tags: &[&str]) -> BookResult<Vec<String>> {
        validation::non_empty_set(tags, "tags")?;
        let mut added = Vec::new();
        for tag in tags {
            if self.tags.insert(tag) {
                added.push(tag.to_string());
            }
        }
        if added.is_empty() {
            return Err(BookError::TagsAlreadyPresent);
        }
        Ok(added)
    }

    /// Removes all of `tags`, or none of them if any is missing.
    pub fn remove_tags(&mut self, tags: &[&str]) -> BookResult<()> {
        validation::non_empty_set(tags, "tags")?;
        let missing: Vec<String> = tags
            .iter()
            .filter(|t| !self.tags.contains(t))
            .map(|t| t.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(BookError::TagsNotFound { missing });
        }
        for tag in tags {
            self.tags.remove(tag);
        }
        Ok(())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.tags.iter().collect();
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Text: {}", self.text)?;
        write!(f, "Tags: {}", tags.join(", "))
    }
}
