use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::{Address, Birthday, Email, Name, Phone};
use crate::config::PhoneFormat;
use crate::error::{BookError, BookResult};
use crate::validation;

const NOT_SET: &str = "Not set";

/// A person in the address book.
///
/// Phones keep insertion order and never repeat. Birthday, address and
/// email each hold at most one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
    address: Option<Address>,
    email: Option<Email>,
}

impl Contact {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            address: None,
            email: None,
        }
    }

    pub fn create(name: &str) -> BookResult<Self> {
        Name::new(name).map(Self::new)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    /// Looks up a phone by its normalized form. Fails only if `raw` is not a
    /// valid phone.
    pub fn find_phone(&self, raw: &str, format: &PhoneFormat) -> BookResult<Option<&Phone>> {
        let phone = Phone::parse(raw, format)?;
        Ok(self.phones.iter().find(|p| **p == phone))
    }

    pub fn add_phone(&mut self, raw: &str, format: &PhoneFormat) -> BookResult<Phone> {
        let phone = Phone::parse(raw, format)?;
        if self.has_phone(&phone) {
            return Err(BookError::already_exists("Phone", phone.as_str()));
        }
        self.phones.push(phone.clone());
        Ok(phone)
    }

    /// Replaces `old_raw` with `new_raw`, keeping its position in the list.
    pub fn edit_phone(
        &mut self,
        old_raw: &str,
        new_raw: &str,
        format: &PhoneFormat,
    ) -> BookResult<Phone> {
        let old = Phone::parse(old_raw, format)?;
        let index = self
            .phones
            .iter()
            .position(|p| *p == old)
            .ok_or_else(|| BookError::not_found("Phone", old.as_str()))?;

        let new = Phone::parse(new_raw, format)?;
        if new != old && self.has_phone(&new) {
            return Err(BookError::already_exists("Phone", new.as_str()));
        }

        self.phones[index] = new.clone();
        Ok(new)
    }

    pub fn remove_phone(&mut self, raw: &str, format: &PhoneFormat) -> BookResult<Phone> {
        let phone = Phone::parse(raw, format)?;
        let index = self
            .phones
            .iter()
            .position(|p| *p == phone)
            .ok_or_else(|| BookError::not_found("Phone", phone.as_str()))?;
        Ok(self.phones.remove(index))
    }

    /// Validates `raw` against today's date and overwrites any previous birthday.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<&Birthday> {
        let birthday = Birthday::parse(raw)?;
        Ok(&*self.set_birthday(birthday))
    }

    pub fn set_birthday(&mut self, birthday: Birthday) -> &Birthday {
        self.birthday.insert(birthday)
    }

    pub fn add_email(&mut self, raw: &str) -> BookResult<&Email> {
        let email = Email::parse(raw)?;
        Ok(&*self.email.insert(email))
    }

    pub fn edit_email(&mut self, raw: &str) -> BookResult<&Email> {
        if self.email.is_none() {
            return Err(BookError::FieldNotSet {
                field: "email".into(),
            });
        }
        self.add_email(raw)
    }

    pub fn remove_email(&mut self) -> BookResult<Email> {
        self.email.take().ok_or_else(|| BookError::FieldNotSet {
            field: "email".into(),
        })
    }

    /// Sets the address. Every part must be non-blank; on failure the
    /// current address is left untouched.
    pub fn add_address(
        &mut self,
        street: &str,
        city: &str,
        postal_code: &str,
        country: &str,
    ) -> BookResult<&Address> {
        let address = Address {
            street: validation::non_blank(street, "street")?,
            city: validation::non_blank(city, "city")?,
            postal_code: validation::non_blank(postal_code, "postal code")?,
            country: validation::non_blank(country, "country")?,
        };
        Ok(&*self.address.insert(address))
    }

    /// Same as [`Contact::add_address`]; an existing address is not required.
    pub fn edit_address(
        &mut self,
        street: &str,
        city: &str,
        postal_code: &str,
        country: &str,
    ) -> BookResult<&Address> {
        self.add_address(street, city, postal_code, country)
    }
}

impl Contact {
    /// Rebuilds a contact that came from outside the book, e.g. a snapshot,
    /// through the same checks as interactive edits. Stored phones are
    /// already international, so `format` only fixes their length.
    pub fn revalidated(self, format: &PhoneFormat, today: NaiveDate) -> BookResult<Self> {
        let mut rebuilt = Contact::create(self.name.as_str())?;
        for phone in &self.phones {
            rebuilt.add_phone(phone.as_str(), format)?;
        }
        if let Some(birthday) = self.birthday {
            validation::not_in_future(birthday.date(), today)?;
            rebuilt.set_birthday(birthday);
        }
        if let Some(address) = &self.address {
            rebuilt.add_address(
                &address.street,
                &address.city,
                &address.postal_code,
                &address.country,
            )?;
        }
        if let Some(email) = &self.email {
            rebuilt.add_email(email.as_str())?;
        }
        Ok(rebuilt)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        writeln!(f, "Contact name: {}", self.name)?;
        writeln!(f, "Phones: {}", phones.join("; "))?;
        match &self.birthday {
            Some(b) => writeln!(f, "Birthday: {b}")?,
            None => writeln!(f, "Birthday: {NOT_SET}")?,
        }
        match &self.address {
            Some(a) => writeln!(f, "Address: {a}")?,
            None => writeln!(f, "Address: {NOT_SET}")?,
        }
        match &self.email {
            Some(e) => write!(f, "Email: {e}"),
            None => write!(f, "Email: {NOT_SET}"),
        }
    }
}
