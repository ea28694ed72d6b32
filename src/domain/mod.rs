//! Domain value objects and types.
//!
//! Value objects validate at construction time so that a malformed birthday
//! can never be stored on a contact.

pub mod birthday;
pub mod errors;

pub use birthday::Birthday;
pub use errors::ValidationError;
