//! Notification adapters for the mail service port.

mod console_mail;

pub use console_mail::ConsoleMailService;
