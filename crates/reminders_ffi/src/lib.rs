//! Flutter-facing bindings for the reminders core.

pub mod api;
