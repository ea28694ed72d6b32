use crate::models::Contact;
use crate::services::BirthdayWindow;
use chrono::NaiveDate;

/// Repository for managing contacts.
///
/// Lookups are by exact, case-sensitive name and always resolve to the first
/// match in store order. The store does not enforce unique names; callers
/// look a name up before adding it.
pub trait ContactRepository {
    /// Append a contact to the end of the store.
    fn add(&mut self, contact: Contact);

    /// Remove the first contact with this name, returning it.
    ///
    /// Does nothing when no contact matches.
    fn remove(&mut self, name: &str) -> Option<Contact>;

    /// Find the first contact with this name.
    fn find(&self, name: &str) -> Option<&Contact>;

    /// Find the first contact with this name for modification.
    fn find_mut(&mut self, name: &str) -> Option<&mut Contact>;

    /// All contacts in insertion order.
    fn contacts(&self) -> &[Contact];

    /// Contacts whose birthday falls inside `window` as seen from `today`,
    /// in store order.
    fn upcoming_birthdays(&self, today: NaiveDate, window: &BirthdayWindow) -> Vec<&Contact> {
        self.contacts()
            .iter()
            .filter(|contact| {
                contact
                    .birthday
                    .as_ref()
                    .is_some_and(|birthday| window.contains(birthday, today))
            })
            .collect()
    }
}
