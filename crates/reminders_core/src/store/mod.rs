//! Reminder store contract and its implementations.
//!
//! # Responsibility
//! - Define the five CRUD operations every reminder store provides.
//! - Keep SQL and in-memory details behind one trait so the service layer
//!   can swap them freely.
//!
//! # Invariants
//! - Ids are unique: `insert` replaces a record with the same id.
//! - Misses are signalled in-band (`None` / `false`), never as errors.
//! - Stores do not validate form rules.

use crate::db::DbError;
use crate::model::reminder::Reminder;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryReminderStore;
pub use sqlite::SqliteReminderStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by a store implementation.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Another caller panicked while holding the store lock.
    LockPoisoned,
    /// Failure injected by a test store.
    Injected(String),
    /// Record cannot be stored without changing its values.
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::LockPoisoned => write!(f, "reminder store lock poisoned"),
            Self::Injected(message) => write!(f, "{message}"),
            Self::InvalidData(message) => write!(f, "invalid reminder data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Rejects records a store could not persist unchanged.
///
/// Every `insert` runs this first so all backends accept the same records.
pub fn ensure_storable(reminder: &Reminder) -> StoreResult<()> {
    if !reminder.has_finite_coordinates() {
        return Err(StoreError::InvalidData(format!(
            "non-finite coordinates for reminder `{}`",
            reminder.id
        )));
    }
    Ok(())
}

/// Storage contract for reminder records.
///
/// Each call is independent; implementations serialize calls internally and
/// add no cross-call transactions.
pub trait ReminderStore: Send + Sync {
    /// Inserts `reminder`, replacing any record with the same id.
    ///
    /// Non-finite coordinates are rejected with `StoreError::InvalidData`.
    fn insert(&self, reminder: &Reminder) -> StoreResult<()>;
    /// Returns every record. Order is unspecified.
    fn fetch_all(&self) -> StoreResult<Vec<Reminder>>;
    /// Returns the record with `id`, or `None`.
    fn fetch_by_id(&self, id: &str) -> StoreResult<Option<Reminder>>;
    /// Removes the record with `id`. Returns `false` when nothing matched.
    fn delete_by_id(&self, id: &str) -> StoreResult<bool>;
    /// Removes every record.
    fn delete_all(&self) -> StoreResult<()>;
}
