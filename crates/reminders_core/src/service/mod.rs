//! Reminder use-case services.
//!
//! # Responsibility
//! - Wrap store calls into caller-facing outcomes.
//! - Keep UI/FFI layers independent from the concrete store.

pub mod async_service;
pub mod reminder_service;
