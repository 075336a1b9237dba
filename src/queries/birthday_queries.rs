use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::model::{Birthday, Name};
use crate::store::ContactStore;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    /// The birthday this year, moved to Monday when it lands on a weekend.
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn display_date(&self) -> String {
        self.congratulation_date.format(Birthday::FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.display_date())
    }
}

/// Birthdays falling between `as_of` and `as_of + window_days`, inclusive.
///
/// Only this year's occurrence is considered: a birthday that already
/// passed is not carried over into next year, even when the window crosses
/// New Year. The window is checked against the birthday itself, before the
/// weekend shift. Results are ordered by the `DD.MM.YYYY` text of the
/// congratulation date.
pub fn upcoming_birthdays(
    store: &ContactStore,
    window_days: u32,
    as_of: NaiveDate,
) -> Vec<UpcomingBirthday> {
    let last_day = as_of
        .checked_add_days(Days::new(window_days.into()))
        .unwrap_or(NaiveDate::MAX);

    let mut results: Vec<UpcomingBirthday> = store
        .iter()
        .filter_map(|contact| {
            let birthday = contact.birthday()?;
            let this_year = occurrence_in_year(birthday.date(), as_of.year())?;
            if this_year < as_of || this_year > last_day {
                return None;
            }
            Some(UpcomingBirthday {
                name: contact.name().clone(),
                congratulation_date: congratulation_date(this_year),
            })
        })
        .collect();

    results.sort_by_cached_key(UpcomingBirthday::display_date);
    results
}

/// The birthday's month and day in `year`. February 29 maps to March 1 in
/// common years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Saturday and Sunday roll forward to the following Monday, saturating at
/// the last representable date.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            let shift = 7 - u64::from(date.weekday().num_days_from_monday());
            date.checked_add_days(Days::new(shift)).unwrap_or(NaiveDate::MAX)
        }
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_are_unchanged() {
        // 2024-06-12 is a Wednesday
        assert_eq!(congratulation_date(date(2024, 6, 12)), date(2024, 6, 12));
    }

    #[test]
    fn saturday_rolls_to_monday() {
        assert_eq!(congratulation_date(date(2024, 6, 15)), date(2024, 6, 17));
    }

    #[test]
    fn sunday_rolls_to_monday() {
        assert_eq!(congratulation_date(date(2024, 6, 16)), date(2024, 6, 17));
    }

    #[test]
    fn weekend_roll_crosses_year_end() {
        // 2022-12-31 is a Saturday
        assert_eq!(congratulation_date(date(2022, 12, 31)), date(2023, 1, 2));
    }

    #[test]
    fn weekend_roll_saturates_at_last_date() {
        let last = NaiveDate::MAX;
        let shifted = congratulation_date(last);
        assert!(shifted >= last);
    }

    #[test]
    fn leap_day_in_common_year_is_march_first() {
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2023), Some(date(2023, 3, 1)));
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2024), Some(date(2024, 2, 29)));
    }
}
