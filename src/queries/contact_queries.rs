use chrono::NaiveDate;

use crate::model::{Birthday, Contact, Phone};
use crate::store::ContactStore;

/// For each query, the contacts whose name contains it (ignoring case), who
/// have a phone equal to it once normalized, or whose birthday equals it.
///
/// A query that is not a valid phone or date just skips that comparison.
/// Results are concatenated per query; a contact matching two queries
/// appears twice.
pub fn find_by_queries<'a, S: AsRef<str>>(
    store: &'a ContactStore,
    queries: &[S],
    as_of: NaiveDate,
) -> Vec<&'a Contact> {
    let mut results = Vec::new();

    for query in queries {
        let query = query.as_ref().trim().to_lowercase();
        if query.is_empty() {
            continue;
        }
        let phone = Phone::parse(&query, store.phone_format()).ok();
        let birthday = Birthday::parse_as_of(&query, as_of).ok();

        results.extend(
            store
                .iter()
                .filter(|c| matches(c, &query, phone.as_ref(), birthday.as_ref())),
        );
    }

    results
}

fn matches(
    contact: &Contact,
    query: &str,
    phone: Option<&Phone>,
    birthday: Option<&Birthday>,
) -> bool {
    contact.name().as_str().to_lowercase().contains(query)
        || phone.map(|p| contact.has_phone(p)).unwrap_or(false)
        || birthday
            .map(|b| contact.birthday() == Some(b))
            .unwrap_or(false)
}
