pub mod contact_store;
pub mod note_store;

pub use contact_store::ContactStore;
pub use note_store::NoteStore;
