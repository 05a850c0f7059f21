//! Non-blocking wrapper around `ReminderService`.
//!
//! # Responsibility
//! - Run each facade call on tokio's blocking pool so UI tasks never wait on
//!   SQLite I/O.
//!
//! # Invariants
//! - Calls are independent; no ordering exists between concurrent calls.
//! - Dropping a returned future abandons the result, not the store call.
//! - A panicked or cancelled worker surfaces as `ReminderError::Storage`.

use crate::model::reminder::{Reminder, ReminderDraft};
use crate::service::reminder_service::{ReminderError, ReminderOutcome, ReminderService};
use crate::store::ReminderStore;
use log::error;
use std::sync::Arc;

/// Async facade sharing one `ReminderService` across tasks.
pub struct AsyncReminderService<S: ReminderStore + 'static> {
    inner: Arc<ReminderService<S>>,
}

impl<S: ReminderStore + 'static> Clone for AsyncReminderService<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ReminderStore + 'static> AsyncReminderService<S> {
    /// Wraps `store` in a shared facade.
    pub fn new(store: S) -> Self {
        Self::from_service(ReminderService::new(store))
    }

    pub fn from_service(service: ReminderService<S>) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }

    /// Borrows the shared synchronous facade.
    pub fn service(&self) -> &ReminderService<S> {
        &self.inner
    }

    pub async fn save_reminder(&self, reminder: Reminder) -> ReminderOutcome<()> {
        self.dispatch(move |service| service.save_reminder(&reminder))
            .await
    }

    pub async fn validate_and_save(&self, draft: ReminderDraft) -> ReminderOutcome<Reminder> {
        self.dispatch(move |service| service.validate_and_save(&draft))
            .await
    }

    pub async fn get_reminders(&self) -> ReminderOutcome<Vec<Reminder>> {
        self.dispatch(|service| service.get_reminders()).await
    }

    pub async fn get_reminder(&self, id: impl Into<String>) -> ReminderOutcome<Reminder> {
        let id = id.into();
        self.dispatch(move |service| service.get_reminder(&id)).await
    }

    pub async fn delete_reminder(&self, id: impl Into<String>) -> ReminderOutcome<()> {
        let id = id.into();
        self.dispatch(move |service| service.delete_reminder(&id))
            .await
    }

    pub async fn delete_all_reminders(&self) -> ReminderOutcome<()> {
        self.dispatch(|service| service.delete_all_reminders())
            .await
    }

    async fn dispatch<T, F>(&self, call: F) -> ReminderOutcome<T>
    where
        T: Send + 'static,
        F: FnOnce(&ReminderService<S>) -> ReminderOutcome<T> + Send + 'static,
    {
        let service = Arc::clone(&self.inner);
        match tokio::task::spawn_blocking(move || call(&service)).await {
            Ok(outcome) => outcome,
            Err(join_err) => {
                error!("event=reminder_dispatch module=service status=error error={join_err}");
                Err(ReminderError::Storage(format!(
                    "reminder task did not complete: {join_err}"
                )))
            }
        }
    }
}
