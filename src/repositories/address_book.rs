use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use tracing::debug;

/// In-memory contact repository backed by an ordered vector.
///
/// The address book lives for one interactive session and is discarded when
/// the process exits.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.name == name)
    }
}

impl ContactRepository for AddressBook {
    fn add(&mut self, contact: Contact) {
        debug!(name = %contact.name, "Adding contact");
        self.contacts.push(contact);
    }

    fn remove(&mut self, name: &str) -> Option<Contact> {
        let index = self.position(name)?;
        debug!(name = %name, "Removing contact");
        Some(self.contacts.remove(index))
    }

    fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|contact| contact.name == name)
    }

    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Birthday;
    use crate::services::BirthdayWindow;
    use chrono::NaiveDate;

    fn contact(name: &str, phone: &str) -> Contact {
        let mut contact = Contact::new(name);
        contact.add_phone(phone);
        contact
    }

    fn with_birthday(name: &str, birthday: &str) -> Contact {
        let mut contact = Contact::new(name);
        contact.set_birthday(Birthday::new(birthday).unwrap());
        contact
    }

    #[test]
    fn test_add_then_find() {
        let mut book = AddressBook::new();
        book.add(contact("John Doe", "123456789"));

        let found = book.find("John Doe").unwrap();
        assert_eq!(found.phones, vec!["123456789"]);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_is_exact_and_case_sensitive() {
        let mut book = AddressBook::new();
        book.add(contact("John", "1"));

        assert!(book.find("john").is_none());
        assert!(book.find("John ").is_none());
        assert!(book.find("Jo").is_none());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add(contact("John", "1"));
        book.add(contact("Jane", "2"));
        let before = book.contacts().to_vec();

        assert!(book.remove("Nobody").is_none());
        assert_eq!(book.contacts(), before.as_slice());
    }

    #[test]
    fn test_duplicates_resolve_to_first_match() {
        let mut book = AddressBook::new();
        book.add(contact("John", "1"));
        book.add(contact("John", "2"));

        assert_eq!(book.find("John").unwrap().phones, vec!["1"]);

        let removed = book.remove("John").unwrap();
        assert_eq!(removed.phones, vec!["1"]);
        assert_eq!(book.find("John").unwrap().phones, vec!["2"]);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut book = AddressBook::new();
        book.add(contact("John", "1"));

        book.find_mut("John").unwrap().add_phone("2");
        assert_eq!(book.find("John").unwrap().phones, vec!["1", "2"]);
    }

    #[test]
    fn test_upcoming_birthdays_in_store_order() {
        let mut book = AddressBook::new();
        book.add(with_birthday("Late", "20.07.1985"));
        book.add(Contact::new("NoBirthday"));
        book.add(with_birthday("Early", "15.07.1990"));
        book.add(with_birthday("Outside", "25.07.1990"));

        let today = NaiveDate::from_ymd_opt(2024, 7, 13).unwrap();
        let names: Vec<&str> = book
            .upcoming_birthdays(today, &BirthdayWindow::default())
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Late", "Early"]);
    }
}
