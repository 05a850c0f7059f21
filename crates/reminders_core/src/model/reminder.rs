//! Reminder domain model.
//!
//! # Responsibility
//! - Define the record persisted by every `ReminderStore`.
//! - Turn save-form drafts into reminders after title/location checks.
//!
//! # Invariants
//! - `id` is unique within a store and never reassigned.
//! - A reminder is never mutated after save; re-saving the same id replaces it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Client-generated reminder identifier.
pub type ReminderId = String;

/// Location-triggered reminder as stored on device.
///
/// All descriptive fields are optional at the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Human-readable place label picked on the map.
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Reminder {
    /// Creates a reminder with a freshly generated UUID v4 id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: new_reminder_id(),
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }

    /// Creates an empty reminder with a caller-provided id.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(id: impl Into<ReminderId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            location: None,
            latitude: None,
            longitude: None,
        }
    }

    /// Returns whether every present coordinate is a finite number.
    ///
    /// SQLite stores NaN as NULL, so non-finite values cannot round-trip.
    pub fn has_finite_coordinates(&self) -> bool {
        is_finite_or_absent(self.latitude) && is_finite_or_absent(self.longitude)
    }
}

/// Generates a new unique reminder id.
pub fn new_reminder_id() -> ReminderId {
    Uuid::new_v4().to_string()
}

/// Save-form input before title/location checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderDraft {
    /// Kept when the form edits an existing reminder.
    pub id: Option<ReminderId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Save-form rule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderValidationError {
    MissingTitle,
    MissingLocation,
    /// Latitude or longitude is NaN or infinite.
    InvalidCoordinates,
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Please enter title"),
            Self::MissingLocation => write!(f, "Please select location"),
            Self::InvalidCoordinates => write!(f, "Selected location has invalid coordinates"),
        }
    }
}

impl Error for ReminderValidationError {}

impl ReminderDraft {
    /// Checks form rules and builds the reminder to persist.
    ///
    /// # Errors
    /// - `MissingTitle` when the title is absent or blank.
    /// - `MissingLocation` when the location label is absent or blank.
    /// - `InvalidCoordinates` when a present coordinate is NaN or infinite.
    pub fn validate(&self) -> Result<Reminder, ReminderValidationError> {
        if is_blank(self.title.as_deref()) {
            return Err(ReminderValidationError::MissingTitle);
        }
        if is_blank(self.location.as_deref()) {
            return Err(ReminderValidationError::MissingLocation);
        }
        if !is_finite_or_absent(self.latitude) || !is_finite_or_absent(self.longitude) {
            return Err(ReminderValidationError::InvalidCoordinates);
        }

        let id = match self.id.as_deref() {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => new_reminder_id(),
        };

        Ok(Reminder {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

// Whitespace-only input counts as missing.
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}

fn is_finite_or_absent(value: Option<f64>) -> bool {
    value.map_or(true, f64::is_finite)
}

#[cfg(test)]
mod tests {
    use super::{Reminder, ReminderDraft, ReminderValidationError};

    fn draft(title: Option<&str>, location: Option<&str>) -> ReminderDraft {
        ReminderDraft {
            title: title.map(str::to_string),
            location: location.map(str::to_string),
            ..ReminderDraft::default()
        }
    }

    #[test]
    fn new_reminders_get_distinct_ids() {
        let first = Reminder::new(None, None, None, None, None);
        let second = Reminder::new(None, None, None, None, None);
        assert_ne!(first.id, second.id);
        assert!(uuid::Uuid::parse_str(&first.id).is_ok());
    }

    #[test]
    fn validate_rejects_blank_title_before_location() {
        let err = draft(Some("   "), None).validate().unwrap_err();
        assert_eq!(err, ReminderValidationError::MissingTitle);
        assert_eq!(err.to_string(), "Please enter title");
    }

    #[test]
    fn validate_rejects_missing_location() {
        let err = draft(Some("Groceries"), Some("")).validate().unwrap_err();
        assert_eq!(err, ReminderValidationError::MissingLocation);
    }

    #[test]
    fn validate_keeps_draft_id_when_present() {
        let mut input = draft(Some("Groceries"), Some("Market"));
        input.id = Some("fixed-id".to_string());
        input.latitude = Some(1.5);

        let reminder = input.validate().unwrap();
        assert_eq!(reminder.id, "fixed-id");
        assert_eq!(reminder.latitude, Some(1.5));
        assert!(reminder.has_finite_coordinates());
    }

    #[test]
    fn validate_rejects_non_finite_coordinates() {
        let mut input = draft(Some("Groceries"), Some("Market"));
        input.latitude = Some(f64::NAN);
        assert_eq!(
            input.validate().unwrap_err(),
            ReminderValidationError::InvalidCoordinates
        );

        input.latitude = Some(45.5);
        input.longitude = Some(f64::INFINITY);
        assert_eq!(
            input.validate().unwrap_err(),
            ReminderValidationError::InvalidCoordinates
        );

        input.longitude = None;
        assert!(input.validate().is_ok());
    }
}
