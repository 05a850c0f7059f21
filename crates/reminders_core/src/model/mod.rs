//! Domain model for location reminders.
//!
//! # Responsibility
//! - Define the canonical reminder record shared by store, service and FFI.
//! - Validate save-form input before it becomes a reminder.
//!
//! # Invariants
//! - Every reminder is identified by a client-generated string id.
//! - Storage accepts any field combination; form rules live in `ReminderDraft`.

pub mod reminder;
