//! Input line parsing.

/// A recognized command keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Anything else, keeping the keyword as typed
    Unknown(String),
}

impl Command {
    /// Map a keyword to its command. Keywords are case-sensitive.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Canonical keyword.
    pub fn name(&self) -> &str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
            Self::Unknown(keyword) => keyword,
        }
    }
}

/// One line of input split into a command and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    pub command: Command,
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace into a command and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut words = line.split_whitespace();
    let keyword = words.next()?;

    Some(ParsedInput {
        command: Command::from_keyword(keyword),
        args: words.collect(),
    })
}
