//! FFI use-case API for the Flutter reminders UI.
//!
//! # Responsibility
//! - Expose reminder save/list/get/delete/clear calls to Dart via FRB.
//! - Flatten `ReminderOutcome` into plain envelopes the UI can show directly.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - `message` always holds text the UI may display verbatim.
//! - Each call builds its own store and injects it into a fresh service.

use log::warn;
use reminders_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CoreConfig, LogSettings, Reminder, ReminderDraft, ReminderService, ReminderStore,
    SqliteReminderStore,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const SAVED_MESSAGE: &str = "Reminder Saved !";
const DELETED_MESSAGE: &str = "Reminder deleted";
const CLEARED_MESSAGE: &str = "All reminders deleted";

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match LogSettings::parse(&level, &log_dir).and_then(|settings| init_logging_inner(&settings))
    {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Reminder row as seen by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderItem {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Reminder> for ReminderItem {
    fn from(value: Reminder) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            location: value.location,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// Envelope for write calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderActionResponse {
    pub ok: bool,
    /// Id of the saved reminder, when one was written.
    pub reminder_id: Option<String>,
    pub message: String,
}

impl ReminderActionResponse {
    fn success(message: impl Into<String>, reminder_id: Option<String>) -> Self {
        Self {
            ok: true,
            reminder_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            reminder_id: None,
            message: message.into(),
        }
    }
}

/// Envelope for single-reminder reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderDetailResponse {
    pub ok: bool,
    pub item: Option<ReminderItem>,
    pub message: String,
}

/// Envelope for list reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderListResponse {
    pub ok: bool,
    pub items: Vec<ReminderItem>,
    pub message: String,
}

/// Validates save-form input and persists the reminder.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Blank title or location returns `ok=false` with the form message.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_save(
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> ReminderActionResponse {
    let draft = ReminderDraft {
        id: None,
        title,
        description,
        location,
        latitude,
        longitude,
    };
    match open_service() {
        Ok(service) => save_draft(&service, &draft),
        Err(message) => ReminderActionResponse::failure(message),
    }
}

/// Lists every stored reminder. An empty store is `ok=true` with no items.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_list() -> ReminderListResponse {
    match open_service() {
        Ok(service) => list_reminders(&service),
        Err(message) => ReminderListResponse {
            ok: false,
            items: Vec::new(),
            message,
        },
    }
}

/// Gets one reminder by id.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_get(id: String) -> ReminderDetailResponse {
    match open_service() {
        Ok(service) => get_reminder(&service, id.trim()),
        Err(message) => ReminderDetailResponse {
            ok: false,
            item: None,
            message,
        },
    }
}

/// Deletes one reminder by id.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_delete(id: String) -> ReminderActionResponse {
    match open_service() {
        Ok(service) => delete_reminder(&service, id.trim()),
        Err(message) => ReminderActionResponse::failure(message),
    }
}

/// Deletes every stored reminder.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_clear_all() -> ReminderActionResponse {
    match open_service() {
        Ok(service) => clear_reminders(&service),
        Err(message) => ReminderActionResponse::failure(message),
    }
}

fn save_draft<S: ReminderStore>(
    service: &ReminderService<S>,
    draft: &ReminderDraft,
) -> ReminderActionResponse {
    match service.validate_and_save(draft) {
        Ok(reminder) => ReminderActionResponse::success(SAVED_MESSAGE, Some(reminder.id)),
        Err(err) => ReminderActionResponse::failure(err.message()),
    }
}

fn list_reminders<S: ReminderStore>(service: &ReminderService<S>) -> ReminderListResponse {
    match service.get_reminders() {
        Ok(reminders) => {
            let items: Vec<ReminderItem> = reminders.into_iter().map(Into::into).collect();
            let message = if items.is_empty() {
                "No reminders.".to_string()
            } else {
                format!("Found {} reminder(s).", items.len())
            };
            ReminderListResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => ReminderListResponse {
            ok: false,
            items: Vec::new(),
            message: err.message(),
        },
    }
}

fn get_reminder<S: ReminderStore>(service: &ReminderService<S>, id: &str) -> ReminderDetailResponse {
    match service.get_reminder(id) {
        Ok(reminder) => ReminderDetailResponse {
            ok: true,
            item: Some(reminder.into()),
            message: String::new(),
        },
        Err(err) => ReminderDetailResponse {
            ok: false,
            item: None,
            message: err.message(),
        },
    }
}

fn delete_reminder<S: ReminderStore>(
    service: &ReminderService<S>,
    id: &str,
) -> ReminderActionResponse {
    match service.delete_reminder(id) {
        Ok(()) => ReminderActionResponse::success(DELETED_MESSAGE, None),
        Err(err) => ReminderActionResponse::failure(err.message()),
    }
}

fn clear_reminders<S: ReminderStore>(service: &ReminderService<S>) -> ReminderActionResponse {
    match service.delete_all_reminders() {
        Ok(()) => ReminderActionResponse::success(CLEARED_MESSAGE, None),
        Err(err) => ReminderActionResponse::failure(err.message()),
    }
}

fn resolve_db_path() -> &'static PathBuf {
    DB_PATH.get_or_init(|| CoreConfig::from_env().db_path)
}

fn open_service() -> Result<ReminderService<SqliteReminderStore>, String> {
    let store = SqliteReminderStore::open(resolve_db_path()).map_err(|err| {
        warn!("event=ffi_store_open module=ffi status=error error={err}");
        format!("reminder store open failed: {err}")
    })?;
    Ok(ReminderService::new(store))
}

#[cfg(test)]
mod tests {
    use super::{
        clear_reminders, core_version, delete_reminder, get_reminder, init_logging,
        list_reminders, ping, reminder_get, reminder_save, save_draft,
    };
    use reminders_core::{InMemoryReminderStore, ReminderDraft, ReminderService};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn memory_service() -> ReminderService<InMemoryReminderStore> {
        ReminderService::new(InMemoryReminderStore::new())
    }

    fn draft(title: &str, location: &str) -> ReminderDraft {
        ReminderDraft {
            title: Some(title.to_string()),
            location: Some(location.to_string()),
            latitude: Some(1.0),
            longitude: Some(2.0),
            ..ReminderDraft::default()
        }
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn save_reports_form_errors() {
        let service = memory_service();

        let response = save_draft(&service, &draft("", "Market"));
        assert!(!response.ok);
        assert_eq!(response.message, "Please enter title");
        assert_eq!(response.reminder_id, None);
    }

    #[test]
    fn saved_reminder_can_be_read_listed_and_deleted() {
        let service = memory_service();
        let saved = save_draft(&service, &draft("Groceries", "Market"));
        assert!(saved.ok, "{}", saved.message);
        let id = saved.reminder_id.expect("save should return reminder_id");

        let detail = get_reminder(&service, &id);
        assert!(detail.ok);
        assert_eq!(detail.item.unwrap().location.as_deref(), Some("Market"));

        let list = list_reminders(&service);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.message, "Found 1 reminder(s).");

        assert!(delete_reminder(&service, &id).ok);
        let missing = delete_reminder(&service, &id);
        assert!(!missing.ok);
        assert_eq!(missing.message, "Reminder not found!");
    }

    #[test]
    fn get_missing_reminder_returns_not_found_envelope() {
        let service = memory_service();

        let detail = get_reminder(&service, "missing");
        assert!(!detail.ok);
        assert_eq!(detail.item, None);
        assert_eq!(detail.message, "Reminder not found!");
    }

    #[test]
    fn clear_then_list_is_empty_success() {
        let service = memory_service();
        save_draft(&service, &draft("Groceries", "Market"));

        assert!(clear_reminders(&service).ok);

        let list = list_reminders(&service);
        assert!(list.ok);
        assert!(list.items.is_empty());
        assert_eq!(list.message, "No reminders.");
    }

    #[test]
    fn store_failures_become_failed_envelopes() {
        let service = ReminderService::new(InMemoryReminderStore::failing());

        let list = list_reminders(&service);
        assert!(!list.ok);
        assert_eq!(list.message, "Test exception");
        assert!(!clear_reminders(&service).ok);
    }

    #[test]
    fn exported_save_and_get_use_configured_database() {
        let title = unique_token("ffi-save");
        let saved = reminder_save(
            Some(title.clone()),
            None,
            Some("Aspindale_Park".to_string()),
            Some(-17.87),
            Some(30.95),
        );
        assert!(saved.ok, "{}", saved.message);

        let detail = reminder_get(saved.reminder_id.expect("save should return reminder_id"));
        assert!(detail.ok, "{}", detail.message);
        assert_eq!(detail.item.unwrap().title, Some(title));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
