//! Per-command handlers.
//!
//! Each handler borrows the contact repository for the duration of one
//! command and returns the text to show, or a [`CommandError`] whose message
//! is shown instead.

use crate::domain::Birthday;
use crate::error::{CommandError, CommandResult};
use crate::models::Contact;
use crate::repositories::ContactRepository;
use crate::services::BirthdayWindow;
use chrono::NaiveDate;
use tracing::debug;

/// Take the first `N` positional arguments, ignoring any extras.
fn take_args<'a, const N: usize>(
    args: &[&'a str],
    command: &'static str,
    usage: &'static str,
) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or(CommandError::MissingArguments { command, usage })
}

pub fn hello() -> CommandResult<String> {
    Ok("How can I help you?".to_string())
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
pub fn add_contact(args: &[&str], book: &mut dyn ContactRepository) -> CommandResult<String> {
    let [name, phone] = take_args(args, "add", "add <name> <phone>")?;

    let message = match book.find_mut(name) {
        Some(contact) => {
            contact.add_phone(phone);
            "Contact updated."
        }
        None => {
            let mut contact = Contact::new(name);
            contact.add_phone(phone);
            book.add(contact);
            "Contact added."
        }
    };

    debug!(name = %name, phone = %phone, "Phone stored");
    Ok(message.to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_phone(args: &[&str], book: &mut dyn ContactRepository) -> CommandResult<String> {
    let [name, old_phone, new_phone] =
        take_args(args, "change", "change <name> <old_phone> <new_phone>")?;

    let contact = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    if !contact.edit_phone(old_phone, new_phone) {
        return Err(CommandError::PhoneNotFound {
            name: name.to_string(),
            phone: old_phone.to_string(),
        });
    }

    Ok(format!("Phone number updated for {}.", name))
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &dyn ContactRepository) -> CommandResult<String> {
    let [name] = take_args(args, "phone", "phone <name>")?;

    let contact = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    Ok(format!("Phones of {}: {}", name, contact.phones_display()))
}

/// `all`
pub fn show_all(book: &dyn ContactRepository) -> CommandResult<String> {
    let contacts = book.contacts();
    if contacts.is_empty() {
        return Ok("No contacts in the address book.".to_string());
    }

    Ok(contacts
        .iter()
        .map(|contact| format!("{}: {}", contact.name, contact.phones_display()))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
///
/// The contact is looked up before the date is parsed.
pub fn add_birthday(args: &[&str], book: &mut dyn ContactRepository) -> CommandResult<String> {
    let [name, date] = take_args(args, "add-birthday", "add-birthday <name> <DD.MM.YYYY>")?;

    let contact = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    let birthday = Birthday::new(date)?;
    contact.set_birthday(birthday);

    Ok(format!("Birthday added for {}: {}", name, birthday))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &dyn ContactRepository) -> CommandResult<String> {
    let [name] = take_args(args, "show-birthday", "show-birthday <name>")?;

    let contact = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    Ok(match contact.birthday {
        Some(birthday) => format!("Birthday of {}: {}", name, birthday),
        None => format!("No birthday found for {}.", name),
    })
}

/// `birthdays`: contacts with a birthday inside `window` starting `today`.
pub fn upcoming_birthdays(
    book: &dyn ContactRepository,
    today: NaiveDate,
    window: &BirthdayWindow,
) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(today, window);
    debug!(today = %today, count = upcoming.len(), rule = %window.rule, "Upcoming birthdays");

    let lines: Vec<String> = upcoming
        .iter()
        .filter_map(|contact| {
            contact
                .birthday
                .map(|birthday| format!("{} - {}", contact.name, birthday))
        })
        .collect();

    if lines.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(lines.join("\n"))
}
