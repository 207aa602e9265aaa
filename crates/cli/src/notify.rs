//! One-line user notifications.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

pub fn format(level: Level, message: &str) -> String {
    let tag = match level {
        Level::Info => "ℹ".blue(),
        Level::Success => "✓".green(),
        Level::Warning => "!".yellow().bold(),
        Level::Error => "✗".red().bold(),
    };
    format!("{} {}", tag, message)
}

/// Print a notification; warnings and errors go to stderr.
pub fn notify(level: Level, message: &str) {
    match level {
        Level::Info | Level::Success => println!("{}", format(level, message)),
        Level::Warning | Level::Error => eprintln!("{}", format(level, message)),
    }
}
