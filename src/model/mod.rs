pub mod fields;
pub mod contact;
pub mod note;
pub mod tags;

// Re-exports for convenience
pub use fields::{Address, Birthday, Email, Name, Phone};
pub use contact::Contact;
pub use note::Note;
pub use tags::TagSet;
