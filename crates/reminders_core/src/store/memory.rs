//! In-memory reminder store.
//!
//! Used as a fast stand-in for SQLite in tests and previews. A failure flag
//! turns every call into `StoreError::Injected` so error paths can be driven
//! without a broken database.

use super::{ensure_storable, ReminderStore, StoreError, StoreResult};
use crate::model::reminder::Reminder;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Message carried by injected failures.
pub const INJECTED_FAILURE_MESSAGE: &str = "Test exception";

/// Vector-backed store keeping insertion order.
#[derive(Debug, Default)]
pub struct InMemoryReminderStore {
    reminders: Mutex<Vec<Reminder>>,
    return_error: AtomicBool,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `reminders`.
    ///
    /// Later entries replace earlier ones with the same id. Records `insert`
    /// would reject are skipped.
    pub fn with_reminders(reminders: impl IntoIterator<Item = Reminder>) -> Self {
        let store = Self::new();
        if let Ok(mut items) = store.reminders.lock() {
            for reminder in reminders {
                if ensure_storable(&reminder).is_ok() {
                    upsert(&mut items, reminder);
                }
            }
        }
        store
    }

    /// Creates an empty store whose every call fails.
    pub fn failing() -> Self {
        let store = Self::new();
        store.set_return_error(true);
        store
    }

    /// Toggles failure injection for subsequent calls.
    pub fn set_return_error(&self, value: bool) {
        self.return_error.store(value, Ordering::SeqCst);
    }

    fn guard(&self) -> StoreResult<MutexGuard<'_, Vec<Reminder>>> {
        if self.return_error.load(Ordering::SeqCst) {
            return Err(StoreError::Injected(INJECTED_FAILURE_MESSAGE.to_string()));
        }
        self.reminders.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ReminderStore for InMemoryReminderStore {
    fn insert(&self, reminder: &Reminder) -> StoreResult<()> {
        let mut items = self.guard()?;
        ensure_storable(reminder)?;
        upsert(&mut items, reminder.clone());
        Ok(())
    }

    fn fetch_all(&self) -> StoreResult<Vec<Reminder>> {
        Ok(self.guard()?.clone())
    }

    fn fetch_by_id(&self, id: &str) -> StoreResult<Option<Reminder>> {
        let items = self.guard()?;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let mut items = self.guard()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() != before)
    }

    fn delete_all(&self) -> StoreResult<()> {
        self.guard()?.clear();
        Ok(())
    }
}

fn upsert(items: &mut Vec<Reminder>, reminder: Reminder) {
    match items.iter_mut().find(|item| item.id == reminder.id) {
        Some(existing) => *existing = reminder,
        None => items.push(reminder),
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryReminderStore, INJECTED_FAILURE_MESSAGE};
    use crate::model::reminder::Reminder;
    use crate::store::{ReminderStore, StoreError};

    fn titled(id: &str, title: &str) -> Reminder {
        let mut reminder = Reminder::with_id(id);
        reminder.title = Some(title.to_string());
        reminder
    }

    #[test]
    fn insert_with_same_id_replaces_in_place() {
        let store = InMemoryReminderStore::with_reminders([titled("a", "first"), titled("b", "b")]);
        store.insert(&titled("a", "second")).unwrap();

        let all = store.fetch_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title.as_deref(), Some("second"));
    }

    #[test]
    fn delete_by_id_reports_misses() {
        let store = InMemoryReminderStore::with_reminders([titled("a", "first")]);
        assert!(!store.delete_by_id("missing").unwrap());
        assert!(store.delete_by_id("a").unwrap());
        assert!(store.fetch_by_id("a").unwrap().is_none());
    }

    #[test]
    fn insert_rejects_non_finite_coordinates() {
        let store = InMemoryReminderStore::new();
        let mut reminder = titled("n", "nan");
        reminder.latitude = Some(f64::NAN);

        let err = store.insert(&reminder).unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(_)));
        assert!(store.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn failure_flag_can_be_cleared() {
        let store = InMemoryReminderStore::failing();
        let err = store.fetch_all().unwrap_err();
        assert!(matches!(err, StoreError::Injected(ref msg) if msg == INJECTED_FAILURE_MESSAGE));

        store.set_return_error(false);
        assert!(store.fetch_all().unwrap().is_empty());
    }
}
