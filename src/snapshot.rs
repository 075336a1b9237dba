//! Whole-book serialization for the persistence layer.
//!
//! The blob is a JSON document:
//! `{"version": 1, "contacts": [...], "notes": [...]}`. Records are written
//! with their phones and tags in insertion order and are re-checked for
//! duplicate names and titles when loaded.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::PhoneFormat;
use crate::error::{BookError, BookResult};
use crate::model::{Contact, Note};
use crate::store::{ContactStore, NoteStore};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    contacts: Vec<&'a Contact>,
    notes: Vec<&'a Note>,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    #[serde(default)]
    contacts: Vec<Contact>,
    #[serde(default)]
    notes: Vec<Note>,
}

pub fn to_bytes(contacts: &ContactStore, notes: &NoteStore) -> BookResult<Vec<u8>> {
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        contacts: contacts.iter().collect(),
        notes: notes.iter().collect(),
    };
    let bytes = serde_json::to_vec(&snapshot)?;
    info!(
        "event=snapshot_save module=snapshot status=ok contacts={} notes={} bytes={}",
        contacts.len(),
        notes.len(),
        bytes.len()
    );
    Ok(bytes)
}

pub fn from_bytes(bytes: &[u8], format: PhoneFormat) -> BookResult<(ContactStore, NoteStore)> {
    let snapshot: Snapshot = serde_json::from_slice(bytes).map_err(|err| {
        warn!("event=snapshot_load module=snapshot status=error reason=decode");
        BookError::from(err)
    })?;

    if snapshot.version != SNAPSHOT_VERSION {
        warn!(
            "event=snapshot_load module=snapshot status=error reason=version version={}",
            snapshot.version
        );
        return Err(BookError::UnsupportedSnapshot(snapshot.version));
    }

    let contacts = ContactStore::from_records(snapshot.contacts, format)?;
    let notes = NoteStore::from_records(snapshot.notes)?;
    info!(
        "event=snapshot_load module=snapshot status=ok contacts={} notes={}",
        contacts.len(),
        notes.len()
    );
    Ok((contacts, notes))
}
