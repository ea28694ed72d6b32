//! Contact model representing one person in the address book.

use crate::domain::Birthday;
use serde::{Deserialize, Serialize};

/// A contact (record) in the address book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    /// Name of the contact, used as its lookup key
    pub name: String,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,

    /// Birthday, absent until set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Contact {
    /// Create a new contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: impl Into<String>) {
        self.phones.push(phone.into());
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    ///
    /// Returns `false` when `old` is not one of this contact's phones.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> bool {
        match self.phones.iter_mut().find(|phone| phone.as_str() == old) {
            Some(slot) => {
                *slot = new.into();
                true
            }
            None => false,
        }
    }

    /// Whether `phone` is one of this contact's numbers.
    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p == phone)
    }

    /// Set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Phone numbers joined for display, e.g. `123, 456`.
    pub fn phones_display(&self) -> String {
        self.phones.join(", ")
    }
}
