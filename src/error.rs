use thiserror::Error;

/// Broad failure categories, independent of which field or store raised them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    FutureDate,
    DuplicateKey,
    NotFound,
    MissingArguments,
    Serialization,
}

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} must be positive")]
    NonPositive { field: String },

    #[error("{field} requires at least one value")]
    MissingArguments { field: String },

    #[error("Invalid phone number: {value}")]
    InvalidPhone { value: String },

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate { value: String },

    #[error("Invalid date. Birthday can't be in the future.")]
    FutureDate { value: String },

    #[error("Invalid email format: {value}")]
    InvalidEmail { value: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("{field} is not set")]
    FieldNotSet { field: String },

    #[error("All tags already present")]
    TagsAlreadyPresent,

    #[error("Tags not found: {}", missing.join(", "))]
    TagsNotFound { missing: Vec<String> },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedSnapshot(u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::BlankField { .. }
            | BookError::NonPositive { .. }
            | BookError::InvalidPhone { .. }
            | BookError::InvalidDate { .. }
            | BookError::InvalidEmail { .. }
            | BookError::Config(_) => ErrorKind::InvalidFormat,
            BookError::FutureDate { .. } => ErrorKind::FutureDate,
            BookError::AlreadyExists { .. } | BookError::TagsAlreadyPresent => {
                ErrorKind::DuplicateKey
            }
            BookError::NotFound { .. }
            | BookError::FieldNotSet { .. }
            | BookError::TagsNotFound { .. } => ErrorKind::NotFound,
            BookError::MissingArguments { .. } => ErrorKind::MissingArguments,
            BookError::UnsupportedSnapshot(_) | BookError::Json(_) => ErrorKind::Serialization,
        }
    }

    pub(crate) fn not_found(entity_type: &str, id: impl Into<String>) -> Self {
        BookError::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    pub(crate) fn already_exists(entity_type: &str, identifier: impl Into<String>) -> Self {
        BookError::AlreadyExists {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }
}

pub type BookResult<T> = Result<T, BookError>;
