use serde::{Deserialize, Serialize};

use crate::error::{BookError, BookResult};
use crate::validation;

pub const DEFAULT_COUNTRY_CODE: &str = "38";
pub const DEFAULT_PHONE_LENGTH: usize = 13;
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// How raw phone input is normalized: the country code prepended to local
/// numbers and the exact length of the normalized value, `+` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneFormat {
    pub country_code: String,
    pub length: usize,
}

impl Default for PhoneFormat {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            length: DEFAULT_PHONE_LENGTH,
        }
    }
}

impl PhoneFormat {
    pub fn validate(&self) -> BookResult<()> {
        if self.country_code.is_empty() || !self.country_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(BookError::Config(format!(
                "country code must be digits, got '{}'",
                self.country_code
            )));
        }
        if self.length <= self.country_code.len() + 1 {
            return Err(BookError::Config(format!(
                "phone length {} leaves no room for a subscriber number",
                self.length
            )));
        }
        Ok(())
    }
}

/// Settings for an address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    pub phone: PhoneFormat,
    pub upcoming_days: u32,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            phone: PhoneFormat::default(),
            upcoming_days: DEFAULT_UPCOMING_DAYS,
        }
    }
}

impl BookConfig {
    /// Parses a JSON config document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> BookResult<Self> {
        let config: BookConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BookResult<()> {
        self.phone.validate()?;
        validation::positive(self.upcoming_days, "upcoming_days")?;
        Ok(())
    }
}
