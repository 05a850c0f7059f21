//! SQLite-backed reminder store.
//!
//! # Invariants
//! - The wrapped connection has the latest schema applied.
//! - All SQL touching `reminders` stays in this file.

use super::{ensure_storable, ReminderStore, StoreError, StoreResult};
use crate::db::migrations::{latest_version, schema_version};
use crate::db::{open_db, open_db_in_memory};
use crate::model::reminder::Reminder;
use log::debug;
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const REMINDERS_TABLE: &str = "reminders";
const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "title",
    "description",
    "location",
    "latitude",
    "longitude",
];

const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    location,
    latitude,
    longitude
FROM reminders";

/// Reminder store over a single SQLite connection.
pub struct SqliteReminderStore {
    conn: Mutex<Connection>,
}

impl SqliteReminderStore {
    /// Opens the database file at `path`, migrating it when needed.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = open_db(path)?;
        Self::try_new(conn)
    }

    /// Opens a fresh in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory()?;
        Self::try_new(conn)
    }

    /// Wraps an already opened connection after checking its schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the
    ///   `reminders` table does not have the expected shape.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        ensure_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ReminderStore for SqliteReminderStore {
    fn insert(&self, reminder: &Reminder) -> StoreResult<()> {
        ensure_storable(reminder)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO reminders (
                id,
                title,
                description,
                location,
                latitude,
                longitude
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                reminder.id.as_str(),
                reminder.title.as_deref(),
                reminder.description.as_deref(),
                reminder.location.as_deref(),
                reminder.latitude,
                reminder.longitude,
            ],
        )?;
        debug!("event=reminder_insert module=store backend=sqlite status=ok");
        Ok(())
    }

    fn fetch_all(&self) -> StoreResult<Vec<Reminder>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let reminders = stmt
            .query_map([], parse_reminder_row)?
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "event=reminder_fetch_all module=store backend=sqlite status=ok count={}",
            reminders.len()
        );
        Ok(reminders)
    }

    fn fetch_by_id(&self, id: &str) -> StoreResult<Option<Reminder>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_reminder_row(row)?));
        }

        Ok(None)
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let conn = self.lock()?;
        let changed = conn.execute("DELETE FROM reminders WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn delete_all(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM reminders;", [])?;
        debug!("event=reminder_delete_all module=store backend=sqlite status=ok removed={removed}");
        Ok(())
    }
}

fn parse_reminder_row(row: &Row<'_>) -> rusqlite::Result<Reminder> {
    Ok(Reminder {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}

fn ensure_schema(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version = schema_version(conn)?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [REMINDERS_TABLE],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(StoreError::MissingRequiredTable(REMINDERS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let columns = stmt
        .query_map([REMINDERS_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    for &column in REQUIRED_COLUMNS {
        if !columns.iter().any(|name| name == column) {
            return Err(StoreError::MissingRequiredColumn {
                table: REMINDERS_TABLE,
                column,
            });
        }
    }

    Ok(())
}
