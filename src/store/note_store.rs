use std::collections::BTreeMap;

use log::debug;

use crate::error::{BookError, BookResult};
use crate::model::Note;
use crate::validation;

/// All notes, keyed by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    records: BTreeMap<String, Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> BookResult<Self>
    where
        I: IntoIterator<Item = Note>,
    {
        let mut store = Self::new();
        for note in records {
            validation::non_blank(note.title(), "title")?;
            store.insert(note)?;
        }
        Ok(store)
    }

    pub fn add(&mut self, title: &str, text: &str, tags: &[&str]) -> BookResult<&Note> {
        let note = Note::create(title, text, tags)?;
        let stored = self.insert(note)?;
        Ok(&*stored)
    }

    fn insert(&mut self, note: Note) -> BookResult<&mut Note> {
        let title = note.title().to_string();
        if self.records.contains_key(&title) {
            return Err(BookError::already_exists("Note", title));
        }
        debug!("event=note_add module=note_store status=ok");
        Ok(self.records.entry(title).or_insert(note))
    }

    pub fn find_by_title(&self, title: &str) -> BookResult<&Note> {
        self.get(title)
            .ok_or_else(|| BookError::not_found("Note", title.trim()))
    }

    pub fn get(&self, title: &str) -> Option<&Note> {
        self.records.get(title.trim())
    }

    fn find_mut(&mut self, title: &str) -> BookResult<&mut Note> {
        self.records
            .get_mut(title.trim())
            .ok_or_else(|| BookError::not_found("Note", title.trim()))
    }

    pub fn edit_text(&mut self, title: &str, new_text: &str) -> BookResult<()> {
        self.find_mut(title)?.edit_text(new_text);
        debug!("event=note_edit module=note_store status=ok");
        Ok(())
    }

    pub fn delete_by_title(&mut self, title: &str) -> BookResult<Note> {
        let note = self
            .records
            .remove(title.trim())
            .ok_or_else(|| BookError::not_found("Note", title.trim()))?;
        debug!("event=note_delete module=note_store status=ok");
        Ok(note)
    }

    pub fn add_tags(&mut self, title: &str, tags: &[&str]) -> BookResult<Vec<String>> {
        self.find_mut(title)?.add_tags(tags)
    }

    pub fn remove_tags(&mut self, title: &str, tags: &[&str]) -> BookResult<()> {
        self.find_mut(title)?.remove_tags(tags)
    }

    /// Notes carrying every one of `tags`.
    pub fn find_by_tags(&self, tags: &[&str]) -> BookResult<Vec<&Note>> {
        validation::non_empty_set(tags, "tags")?;
        Ok(self
            .records
            .values()
            .filter(|note| note.tags().is_superset_of(tags))
            .collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
