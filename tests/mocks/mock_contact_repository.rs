use assistant_bot::models::Contact;
use assistant_bot::repositories::ContactRepository;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Stores contacts in a plain vector like the real address book, and records
/// how often each method was called so tests can check the order of lookups
/// and writes a handler performs.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    contacts: Vec<Contact>,
    call_counts: HashMap<&'static str, usize>,
    calls: Vec<&'static str>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a contact without recording a call.
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contacts.push(contact);
        self
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.get(method).unwrap_or(&0)
    }

    /// Method names in the order they were called.
    pub fn calls(&self) -> &[&'static str] {
        &self.calls
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&mut self) {
        self.call_counts.clear();
        self.calls.clear();
    }

    fn track_call(&mut self, method: &'static str) {
        *self.call_counts.entry(method).or_insert(0) += 1;
        self.calls.push(method);
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&mut self, contact: Contact) {
        self.track_call("add");
        self.contacts.push(contact);
    }

    fn remove(&mut self, name: &str) -> Option<Contact> {
        self.track_call("remove");
        let index = self.contacts.iter().position(|c| c.name == name)?;
        Some(self.contacts.remove(index))
    }

    fn find(&self, name: &str) -> Option<&Contact> {
        // Read-only lookups are not tracked: `find` takes &self.
        self.contacts.iter().find(|c| c.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.track_call("find_mut");
        self.contacts.iter_mut().find(|c| c.name == name)
    }

    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}
