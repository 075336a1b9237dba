use log::debug;

use crate::book::AddressBook;
use crate::error::{BookError, BookResult};
use crate::model::{Address, Birthday, Contact, Email, Phone};
use crate::queries::birthday_queries::UpcomingBirthday;
use crate::validation::trim_optional;

/// What `add_contact` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAdded {
    /// `false` when the name already existed and only a phone was added.
    pub created: bool,
    pub phone: Option<Phone>,
}

/// Creates the contact if it does not exist yet, then adds `phone` to it.
///
/// A new contact is stored only once its phone has been accepted.
pub fn add_contact(
    book: &mut AddressBook,
    name: &str,
    phone: Option<&str>,
) -> BookResult<ContactAdded> {
    let format = book.contacts.phone_format().clone();
    let phone = trim_optional(phone);

    if book.contacts.get(name).is_none() {
        let mut contact = Contact::create(name)?;
        let added = phone
            .as_deref()
            .map(|raw| contact.add_phone(raw, &format))
            .transpose()?;
        book.contacts.add(contact)?;
        return Ok(ContactAdded {
            created: true,
            phone: added,
        });
    }

    let contact = book.contacts.find_mut(name)?;
    let added = phone
        .as_deref()
        .map(|raw| contact.add_phone(raw, &format))
        .transpose()?;
    debug!("event=contact_update module=contact_ops status=ok");
    Ok(ContactAdded {
        created: false,
        phone: added,
    })
}

pub fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> BookResult<Phone> {
    let format = book.contacts.phone_format().clone();
    let phone = book
        .contacts
        .find_mut(name)?
        .edit_phone(old_phone, new_phone, &format)?;
    debug!("event=phone_edit module=contact_ops status=ok");
    Ok(phone)
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<Phone> {
    let format = book.contacts.phone_format().clone();
    let removed = book.contacts.find_mut(name)?.remove_phone(phone, &format)?;
    debug!("event=phone_remove module=contact_ops status=ok");
    Ok(removed)
}

pub fn phones<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a [Phone]> {
    book.contacts.find(name).map(Contact::phones)
}

pub fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> BookResult<Birthday> {
    let birthday = *book.contacts.find_mut(name)?.add_birthday(birthday)?;
    debug!("event=birthday_set module=contact_ops status=ok");
    Ok(birthday)
}

pub fn birthday(book: &AddressBook, name: &str) -> BookResult<Birthday> {
    book.contacts
        .find(name)?
        .birthday()
        .copied()
        .ok_or_else(|| BookError::FieldNotSet {
            field: "birthday".into(),
        })
}

pub fn add_address(
    book: &mut AddressBook,
    name: &str,
    street: &str,
    city: &str,
    postal_code: &str,
    country: &str,
) -> BookResult<Address> {
    let address = book
        .contacts
        .find_mut(name)?
        .add_address(street, city, postal_code, country)?
        .clone();
    debug!("event=address_set module=contact_ops status=ok");
    Ok(address)
}

pub fn edit_address(
    book: &mut AddressBook,
    name: &str,
    street: &str,
    city: &str,
    postal_code: &str,
    country: &str,
) -> BookResult<Address> {
    let address = book
        .contacts
        .find_mut(name)?
        .edit_address(street, city, postal_code, country)?
        .clone();
    debug!("event=address_edit module=contact_ops status=ok");
    Ok(address)
}

pub fn add_email(book: &mut AddressBook, name: &str, email: &str) -> BookResult<Email> {
    let email = book.contacts.find_mut(name)?.add_email(email)?.clone();
    debug!("event=email_set module=contact_ops status=ok");
    Ok(email)
}

pub fn edit_email(book: &mut AddressBook, name: &str, email: &str) -> BookResult<Email> {
    let email = book.contacts.find_mut(name)?.edit_email(email)?.clone();
    debug!("event=email_edit module=contact_ops status=ok");
    Ok(email)
}

pub fn remove_email(book: &mut AddressBook, name: &str) -> BookResult<Email> {
    let email = book.contacts.find_mut(name)?.remove_email()?;
    debug!("event=email_remove module=contact_ops status=ok");
    Ok(email)
}

/// Returns whether a contact was removed.
pub fn delete_contact(book: &mut AddressBook, name: &str) -> bool {
    book.contacts.delete(name).is_some()
}

pub fn all_contacts(book: &AddressBook) -> Vec<&Contact> {
    book.contacts.iter().collect()
}

/// Upcoming birthdays over `days`, or the configured window when `None`.
pub fn upcoming_birthdays(book: &AddressBook, days: Option<u32>) -> Vec<UpcomingBirthday> {
    let window = days.unwrap_or(book.config().upcoming_days);
    book.contacts.upcoming_birthdays(window)
}
