use chrono::NaiveDate;
use contactbook::model::*;
use contactbook::queries::*;
use contactbook::store::ContactStore;
use contactbook::PhoneFormat;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Monday, 10 June 2024.
fn today() -> NaiveDate {
    date(2024, 6, 10)
}

fn add(store: &mut ContactStore, name: &str, phone: Option<&str>, birthday: Option<&str>) {
    let mut contact = Contact::create(name).unwrap();
    if let Some(p) = phone {
        contact.add_phone(p, &PhoneFormat::default()).unwrap();
    }
    if let Some(b) = birthday {
        contact.set_birthday(Birthday::parse_as_of(b, today()).unwrap());
    }
    store.add(contact).unwrap();
}

fn names(contacts: &[&Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.name().to_string()).collect()
}

// ==========================================================================
// FIND BY QUERIES
// ==========================================================================

#[test]
fn name_substring_is_case_insensitive() {
    let mut store = ContactStore::new();
    add(&mut store, "Alice Smith", None, None);
    add(&mut store, "Bob Jones", None, None);

    let found = contact_queries::find_by_queries(&store, &["SMITH"], today());
    assert_eq!(names(&found), vec!["Alice Smith"]);
}

#[test]
fn phone_query_matches_normalized_number() {
    let mut store = ContactStore::new();
    add(&mut store, "Alice", Some("+380671234567"), None);
    add(&mut store, "Bob", Some("0500000002"), None);

    let found = contact_queries::find_by_queries(&store, &["067-123-45-67"], today());
    assert_eq!(names(&found), vec!["Alice"]);
}

#[test]
fn birthday_query_matches_exact_date() {
    let mut store = ContactStore::new();
    add(&mut store, "Alice", None, Some("15.06.1990"));
    add(&mut store, "Bob", None, Some("16.06.1990"));

    let found = contact_queries::find_by_queries(&store, &["15.06.1990"], today());
    assert_eq!(names(&found), vec!["Alice"]);
}

#[test]
fn invalid_queries_match_nothing_without_error() {
    let mut store = ContactStore::new();
    add(&mut store, "Alice", Some("0990000001"), Some("15.06.1990"));

    let found = contact_queries::find_by_queries(&store, &["38067"], today());
    assert!(found.is_empty());
}

#[test]
fn each_query_contributes_its_own_matches() {
    let mut store = ContactStore::new();
    add(&mut store, "Alice", Some("0990000001"), None);
    add(&mut store, "Bob", None, None);

    let found = contact_queries::find_by_queries(&store, &["ali", "0990000001", "bob"], today());
    assert_eq!(names(&found), vec!["Alice", "Alice", "Bob"]);
}

#[test]
fn one_query_matching_several_ways_yields_one_hit() {
    let mut store = ContactStore::new();
    add(&mut store, "0990000001", Some("0990000001"), None);

    let found = contact_queries::find_by_queries(&store, &["0990000001"], today());
    assert_eq!(found.len(), 1);
}

#[test]
fn blank_queries_are_ignored() {
    let mut store = ContactStore::new();
    add(&mut store, "Alice", None, None);
    assert!(contact_queries::find_by_queries(&store, &["", "  "], today()).is_empty());
}

#[test]
fn store_method_uses_wall_clock() {
    let mut store = ContactStore::new();
    add(&mut store, "Alice", None, None);
    assert_eq!(names(&store.find_by_queries(&["alice"])), vec!["Alice"]);
}

// ==========================================================================
// UPCOMING BIRTHDAYS
// ==========================================================================

#[test]
fn saturday_birthday_is_congratulated_on_monday() {
    let mut store = ContactStore::new();
    // 15 June 2024 is a Saturday
    add(&mut store, "Alice", None, Some("15.06.1990"));

    let upcoming = birthday_queries::upcoming_birthdays(&store, 7, today());
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name.as_str(), "Alice");
    assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 17));
    assert_eq!(upcoming[0].to_string(), "Alice: 17.06.2024");
}

#[test]
fn window_bounds_are_inclusive() {
    let mut store = ContactStore::new();
    add(&mut store, "Today", None, Some("10.06.1990"));
    add(&mut store, "LastDay", None, Some("17.06.1990"));
    add(&mut store, "TooLate", None, Some("18.06.1990"));
    add(&mut store, "Yesterday", None, Some("09.06.1990"));

    let upcoming = birthday_queries::upcoming_birthdays(&store, 7, today());
    let found: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(found, vec!["Today", "LastDay"]);
}

#[test]
fn window_is_checked_before_weekend_shift() {
    let mut store = ContactStore::new();
    // Sunday 16 June with a 6 day window: inside, then moved past the window end
    add(&mut store, "Alice", None, Some("16.06.1990"));

    let upcoming = birthday_queries::upcoming_birthdays(&store, 6, today());
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 17));
}

#[test]
fn contacts_without_birthday_are_skipped() {
    let mut store = ContactStore::new();
    add(&mut store, "Alice", None, None);
    assert!(birthday_queries::upcoming_birthdays(&store, 7, today()).is_empty());
}

#[test]
fn passed_birthdays_do_not_wrap_into_next_year() {
    let mut store = ContactStore::new();
    add(&mut store, "NewYear", None, Some("02.01.1990"));

    let december = date(2024, 12, 30);
    assert!(birthday_queries::upcoming_birthdays(&store, 7, december).is_empty());
}

#[test]
fn results_are_ordered_by_displayed_date_text() {
    let mut store = ContactStore::new();
    // 28 June (Friday) and 2 July (Tuesday) in 2024
    add(&mut store, "June", None, Some("28.06.1990"));
    add(&mut store, "July", None, Some("02.07.1990"));

    let as_of = date(2024, 6, 27);
    let upcoming = birthday_queries::upcoming_birthdays(&store, 7, as_of);
    let found: Vec<String> = upcoming.iter().map(|u| u.display_date()).collect();
    // "02.07.2024" sorts before "28.06.2024" as text
    assert_eq!(found, vec!["02.07.2024", "28.06.2024"]);
}

#[test]
fn leap_day_birthday_in_common_year() {
    let mut store = ContactStore::new();
    add(&mut store, "Leap", None, Some("29.02.2000"));

    // 2023-03-01 is a Wednesday
    let upcoming = birthday_queries::upcoming_birthdays(&store, 7, date(2023, 2, 27));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].congratulation_date, date(2023, 3, 1));
}

#[test]
fn huge_window_does_not_overflow() {
    let mut store = ContactStore::new();
    add(&mut store, "Alice", None, Some("15.06.1990"));
    add(&mut store, "Early", None, Some("01.01.1990"));

    let upcoming = birthday_queries::upcoming_birthdays(&store, u32::MAX, date(2024, 1, 1));
    let found: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
    // 1 January 2024 is a Monday
    assert_eq!(found, vec!["Early", "Alice"]);
}
