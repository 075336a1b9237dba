use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::PhoneFormat;
use crate::error::{BookError, BookResult};
use crate::model::{Address, Birthday, Email, Phone};

static BIRTHDAY_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that a count is positive (> 0).
pub fn positive(value: u32, field: &str) -> BookResult<u32> {
    if value == 0 {
        Err(BookError::NonPositive {
            field: field.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Validates that a caller supplied at least one value.
pub fn non_empty_set<T>(value: &[T], field: &str) -> BookResult<()> {
    if value.is_empty() {
        Err(BookError::MissingArguments {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Reduces raw input to `+` and digits, then prefixes the country code
/// unless the number is already international.
///
/// Only one leading occurrence of the country code is stripped before the
/// prefix is added, so `0671234567` and `380671234567` both become
/// `+380671234567`.
pub fn normalize_phone(raw: &str, format: &PhoneFormat) -> BookResult<String> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    let normalized = if kept.starts_with('+') {
        kept
    } else {
        let local = kept.strip_prefix(format.country_code.as_str()).unwrap_or(&kept);
        format!("+{}{}", format.country_code, local)
    };

    if normalized.len() != format.length {
        return Err(BookError::InvalidPhone { value: normalized });
    }
    Ok(normalized)
}

/// Parses a strict `DD.MM.YYYY` date that is not later than `today`.
///
/// The digits are compared with `today` before the calendar check, so a
/// far-future date such as `29.02.2050` is reported as `FutureDate` even
/// though that day does not exist.
pub fn parse_birthday(raw: &str, today: NaiveDate) -> BookResult<NaiveDate> {
    if !BIRTHDAY_SHAPE_RE.is_match(raw) {
        return Err(BookError::InvalidDate {
            value: raw.to_string(),
        });
    }
    let digits = |range: std::ops::Range<usize>| raw[range].parse::<u32>();
    let (day, month, year) = match (digits(0..2), digits(3..5), digits(6..10)) {
        (Ok(d), Ok(m), Ok(y)) => (d, m, y),
        _ => {
            return Err(BookError::InvalidDate {
                value: raw.to_string(),
            })
        }
    };

    let today_parts = (today.year(), today.month(), today.day());
    // `year` has at most four digits, so the cast cannot truncate
    if (year as i32, month, day) > today_parts {
        return Err(BookError::FutureDate {
            value: raw.to_string(),
        });
    }

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| BookError::InvalidDate {
        value: raw.to_string(),
    })
}

/// Rejects a stored date that lies after `today`.
pub fn not_in_future(date: NaiveDate, today: NaiveDate) -> BookResult<NaiveDate> {
    if date > today {
        Err(BookError::FutureDate {
            value: date.format(Birthday::FORMAT).to_string(),
        })
    } else {
        Ok(date)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// Typed entry points with the default phone format and the wall clock.

pub fn validate_phone(raw: &str) -> BookResult<Phone> {
    Phone::parse(raw, &PhoneFormat::default())
}

pub fn validate_birthday(raw: &str) -> BookResult<Birthday> {
    Birthday::parse(raw)
}

pub fn validate_email(raw: &str) -> BookResult<Email> {
    Email::parse(raw)
}

pub fn make_address(street: &str, city: &str, postal_code: &str, country: &str) -> Address {
    Address::new(street, city, postal_code, country)
}
