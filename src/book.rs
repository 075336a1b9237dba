use crate::config::BookConfig;
use crate::error::BookResult;
use crate::snapshot;
use crate::store::{ContactStore, NoteStore};

/// The contacts and notes of one user, with the settings they were built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    config: BookConfig,
    pub contacts: ContactStore,
    pub notes: NoteStore,
}

impl AddressBook {
    pub fn new(config: BookConfig) -> Self {
        let contacts = ContactStore::with_format(config.phone.clone());
        Self {
            config,
            contacts,
            notes: NoteStore::new(),
        }
    }

    /// Wraps stores produced elsewhere, e.g. by an external loader.
    pub fn from_stores(config: BookConfig, contacts: ContactStore, notes: NoteStore) -> Self {
        Self {
            config,
            contacts,
            notes,
        }
    }

    pub fn from_snapshot(config: BookConfig, bytes: &[u8]) -> BookResult<Self> {
        let (contacts, notes) = snapshot::from_bytes(bytes, config.phone.clone())?;
        Ok(Self::from_stores(config, contacts, notes))
    }

    pub fn snapshot(&self) -> BookResult<Vec<u8>> {
        snapshot::to_bytes(&self.contacts, &self.notes)
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }
}
