//! Core data layer for location reminders.
//! This crate owns the reminder model, its stores, and the facade UI code calls.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::reminder::{
    new_reminder_id, Reminder, ReminderDraft, ReminderId, ReminderValidationError,
};
pub use service::async_service::AsyncReminderService;
pub use service::reminder_service::{
    ReminderError, ReminderOutcome, ReminderService, REMINDER_NOT_FOUND_MESSAGE,
};
pub use store::{
    InMemoryReminderStore, ReminderStore, SqliteReminderStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
