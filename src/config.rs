//! Configuration management for the assistant bot.
//!
//! Every setting is optional. With no environment variables set the bot uses
//! a seven day naive birthday window and logs errors only.

use crate::error::{ConfigError, ConfigResult};
use crate::services::{BirthdayRule, BirthdayWindow, DEFAULT_WINDOW_DAYS};
use std::env;

/// Longest accepted birthday window, in days.
const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Days ahead covered by the `birthdays` command (default: 7)
    pub birthday_window_days: u32,

    /// Rule used to match upcoming birthdays (default: naive)
    pub birthday_rule: BirthdayRule,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Days ahead for upcoming birthdays (default: 7, max: 366)
    /// - `BIRTHDAY_RULE`: `naive` or `next-occurrence` (default: `naive`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let birthday_rule = match env::var("BIRTHDAY_RULE") {
            Ok(val) => val
                .parse::<BirthdayRule>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "BIRTHDAY_RULE".to_string(),
                    reason,
                })?,
            Err(_) => BirthdayRule::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            birthday_rule,
            log_level,
        })
    }

    /// The birthday window described by this configuration.
    pub fn birthday_window(&self) -> BirthdayWindow {
        BirthdayWindow::new(self.birthday_window_days, self.birthday_rule)
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            birthday_rule: BirthdayRule::Naive,
            log_level: "error".to_string(),
        }
    }
}
