//! Reminder repository facade.
//!
//! # Responsibility
//! - Be the single entry point UI-facing code uses for reminder data.
//! - Normalize every store outcome into `ReminderOutcome<T>`.
//!
//! # Invariants
//! - A lookup or delete miss becomes `ReminderError::NotFound`.
//! - An empty store lists as `Ok(vec![])`, never as an error.
//! - No retries; each call is a single store request.
//! - The service holds no state besides the injected store.

use crate::model::reminder::{Reminder, ReminderDraft, ReminderValidationError};
use crate::store::{ReminderStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical text shown when a reminder id has no record.
pub const REMINDER_NOT_FOUND_MESSAGE: &str = "Reminder not found!";

/// Tagged result returned by every facade call.
pub type ReminderOutcome<T> = Result<T, ReminderError>;

/// Caller-facing reminder error. `Display` is the user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderError {
    NotFound(String),
    Storage(String),
    Validation(ReminderValidationError),
}

impl ReminderError {
    /// Message the UI shows verbatim.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for ReminderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(_) => f.write_str(REMINDER_NOT_FOUND_MESSAGE),
            Self::Storage(description) => f.write_str(description),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReminderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ReminderError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value.to_string())
    }
}

impl From<ReminderValidationError> for ReminderError {
    fn from(value: ReminderValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Result-normalizing facade over a `ReminderStore`.
pub struct ReminderService<S: ReminderStore> {
    store: S,
}

impl<S: ReminderStore> ReminderService<S> {
    /// Creates a facade over the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persists `reminder`, replacing any record with the same id.
    pub fn save_reminder(&self, reminder: &Reminder) -> ReminderOutcome<()> {
        self.store
            .insert(reminder)
            .map_err(|err| storage_failure("reminder_save", err))?;
        info!("event=reminder_save module=service status=ok");
        Ok(())
    }

    /// Validates form input, then saves the resulting reminder.
    ///
    /// Invalid drafts never reach the store.
    pub fn validate_and_save(&self, draft: &ReminderDraft) -> ReminderOutcome<Reminder> {
        let reminder = draft.validate().map_err(|err| {
            warn!("event=reminder_save module=service status=rejected reason={err:?}");
            ReminderError::from(err)
        })?;
        self.save_reminder(&reminder)?;
        Ok(reminder)
    }

    /// Lists every stored reminder.
    pub fn get_reminders(&self) -> ReminderOutcome<Vec<Reminder>> {
        self.store
            .fetch_all()
            .map_err(|err| storage_failure("reminder_list", err))
    }

    /// Gets one reminder by id.
    pub fn get_reminder(&self, id: &str) -> ReminderOutcome<Reminder> {
        self.store
            .fetch_by_id(id)
            .map_err(|err| storage_failure("reminder_get", err))?
            .ok_or_else(|| ReminderError::NotFound(id.to_string()))
    }

    /// Deletes one reminder by id.
    pub fn delete_reminder(&self, id: &str) -> ReminderOutcome<()> {
        let removed = self
            .store
            .delete_by_id(id)
            .map_err(|err| storage_failure("reminder_delete", err))?;
        if !removed {
            return Err(ReminderError::NotFound(id.to_string()));
        }
        info!("event=reminder_delete module=service status=ok");
        Ok(())
    }

    /// Deletes every stored reminder.
    pub fn delete_all_reminders(&self) -> ReminderOutcome<()> {
        self.store
            .delete_all()
            .map_err(|err| storage_failure("reminder_delete_all", err))?;
        info!("event=reminder_delete_all module=service status=ok");
        Ok(())
    }
}

fn storage_failure(event: &str, err: StoreError) -> ReminderError {
    warn!("event={event} module=service status=error error={err}");
    ReminderError::from(err)
}
