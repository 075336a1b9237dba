pub mod error;
pub mod config;
pub mod validation;
pub mod model;
pub mod store;
pub mod queries;
pub mod ops;
pub mod snapshot;
pub mod book;

pub use book::AddressBook;
pub use config::{BookConfig, PhoneFormat};
pub use error::{BookError, BookResult, ErrorKind};
