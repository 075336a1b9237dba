use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;

use crate::config::PhoneFormat;
use crate::error::{BookError, BookResult};
use crate::model::{Contact, Name};
use crate::queries::birthday_queries::{self, UpcomingBirthday};
use crate::queries::contact_queries;
use crate::validation;

/// All contacts, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    records: BTreeMap<Name, Contact>,
    format: PhoneFormat,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: PhoneFormat) -> Self {
        Self {
            records: BTreeMap::new(),
            format,
        }
    }

    /// Rebuilds a store from previously saved records. Every record is
    /// re-validated and two records with the same name are rejected.
    pub fn from_records<I>(records: I, format: PhoneFormat) -> BookResult<Self>
    where
        I: IntoIterator<Item = Contact>,
    {
        Self::from_records_as_of(records, format, validation::today())
    }

    pub fn from_records_as_of<I>(
        records: I,
        format: PhoneFormat,
        today: NaiveDate,
    ) -> BookResult<Self>
    where
        I: IntoIterator<Item = Contact>,
    {
        let mut store = Self::with_format(format);
        for contact in records {
            let contact = contact.revalidated(&store.format, today)?;
            store.add(contact)?;
        }
        Ok(store)
    }

    pub fn phone_format(&self) -> &PhoneFormat {
        &self.format
    }

    pub fn add(&mut self, contact: Contact) -> BookResult<&mut Contact> {
        let name = contact.name().clone();
        if self.records.contains_key(&name) {
            return Err(BookError::already_exists("Contact", name.as_str()));
        }
        debug!("event=contact_add module=contact_store status=ok");
        Ok(self.records.entry(name).or_insert(contact))
    }

    /// Exact-name lookup that treats absence as an error. Surrounding
    /// whitespace is trimmed, as it is when names are created.
    pub fn find(&self, name: &str) -> BookResult<&Contact> {
        self.get(name)
            .ok_or_else(|| BookError::not_found("Contact", name.trim()))
    }

    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Contact> {
        self.records
            .get_mut(name.trim())
            .ok_or_else(|| BookError::not_found("Contact", name.trim()))
    }

    /// Exact-name lookup for callers that treat absence as normal.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.records.get(name.trim())
    }

    /// Removes the contact if present. Deleting an unknown name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        let removed = self.records.remove(name.trim());
        debug!(
            "event=contact_delete module=contact_store status={}",
            if removed.is_some() { "ok" } else { "absent" }
        );
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts matching any of the queries by name, phone or birthday.
    /// Malformed queries simply match nothing. Blank queries are skipped
    /// rather than matching every name as an empty substring would.
    pub fn find_by_queries<S: AsRef<str>>(&self, queries: &[S]) -> Vec<&Contact> {
        contact_queries::find_by_queries(self, queries, validation::today())
    }

    /// Birthdays to celebrate within `window_days` of today.
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming_birthdays(self, window_days, validation::today())
    }
}
