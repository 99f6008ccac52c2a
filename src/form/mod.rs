//! Registration form state: live edits, committed snapshot, field errors.
//!
//! The [`FormStore`] owns the committed form state and the error map. Live
//! input buffers belong to the page; the store only ever sees raw string
//! values. Per-field validation runs on every change; whole-record
//! validation runs on submit and is the only path that replaces the
//! committed snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{Check, FieldErrors, Schema};

/// Field identifiers, matching the serialized field names.
pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_AGE: &str = "age";

// ---------------------------------------------------------------------------
// RegistrationForm
// ---------------------------------------------------------------------------

/// The committed registration record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

/// The validation rule table for the registration form.
pub fn registration_schema() -> Schema {
    Schema::new()
        .field(
            FIELD_FIRST_NAME,
            vec![(Check::MinLen(2), "First name must be at least 2 characters")],
        )
        .field(
            FIELD_LAST_NAME,
            vec![(Check::MinLen(2), "Last name must be at least 2 characters")],
        )
        .field(
            FIELD_AGE,
            vec![(Check::NonNegativeInt, "Age must be a positive number")],
        )
}

// ---------------------------------------------------------------------------
// FormStore
// ---------------------------------------------------------------------------

/// Committed form state plus the per-field error map.
pub struct FormStore {
    schema: Schema,
    committed: RegistrationForm,
    errors: FieldErrors,
}

impl FormStore {
    /// Create a store with an all-empty/zero committed record and no errors.
    pub fn new() -> Self {
        Self {
            schema: registration_schema(),
            committed: RegistrationForm::default(),
            errors: FieldErrors::new(),
        }
    }

    /// The last successfully validated submission.
    pub fn committed(&self) -> &RegistrationForm {
        &self.committed
    }

    /// The committed record as pretty-printed JSON, for the state panel.
    pub fn committed_json(&self) -> String {
        serde_json::to_string_pretty(&self.committed).unwrap_or_default()
    }

    /// The error message for a field, if it currently has a non-empty one.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// The raw error map.
    ///
    /// A successfully revalidated field maps to the empty string rather than
    /// being removed, so "validated clean" and "never validated" differ.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validate one field's current value, updating only that field's error
    /// entry: the first violation message on failure, the empty string on
    /// success.
    pub fn change(&mut self, field: &str, raw: &str) {
        match self.schema.validate_field(field, raw) {
            Ok(_) => {
                self.errors.insert(field.to_owned(), String::new());
            }
            Err(message) => {
                self.errors.insert(field.to_owned(), message);
            }
        }
    }

    /// Validate the whole record atomically.
    ///
    /// On success the committed snapshot is replaced, all errors are
    /// cleared, the submission is logged, and `true` is returned. On
    /// failure the entire error map is replaced and the committed snapshot
    /// is left unchanged.
    pub fn submit(&mut self, record: &BTreeMap<String, String>) -> bool {
        match self.schema.validate(record) {
            Ok(values) => {
                let mut form = RegistrationForm::default();
                for (field, value) in values {
                    match field {
                        FIELD_FIRST_NAME => {
                            form.first_name = value.as_text().unwrap_or_default().to_owned();
                        }
                        FIELD_LAST_NAME => {
                            form.last_name = value.as_text().unwrap_or_default().to_owned();
                        }
                        FIELD_AGE => {
                            form.age = value.as_number().unwrap_or_default();
                        }
                        _ => {}
                    }
                }
                tracing::info!(
                    first_name = %form.first_name,
                    last_name = %form.last_name,
                    age = form.age,
                    "form submitted"
                );
                self.committed = form;
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(first: &str, last: &str, age: &str) -> BTreeMap<String, String> {
        BTreeMap::from([
            (FIELD_FIRST_NAME.to_owned(), first.to_owned()),
            (FIELD_LAST_NAME.to_owned(), last.to_owned()),
            (FIELD_AGE.to_owned(), age.to_owned()),
        ])
    }

    // ── Submit success ───────────────────────────────────────────────

    #[test]
    fn valid_submission_commits_coerced_record() {
        let mut store = FormStore::new();
        assert!(store.submit(&record("Jo", "Doe", "5")));
        assert_eq!(
            store.committed(),
            &RegistrationForm {
                first_name: "Jo".into(),
                last_name: "Doe".into(),
                age: 5,
            }
        );
        assert!(store.errors().is_empty());
    }

    #[test]
    fn committed_json_uses_camel_case() {
        let mut store = FormStore::new();
        store.submit(&record("Jo", "Doe", "5"));
        let json = store.committed_json();
        assert!(json.contains("\"firstName\": \"Jo\""));
        assert!(json.contains("\"age\": 5"));
    }

    // ── Submit failure ───────────────────────────────────────────────

    #[test]
    fn short_first_name_fails_and_keeps_prior_state() {
        let mut store = FormStore::new();
        store.submit(&record("Jo", "Doe", "5"));

        assert!(!store.submit(&record("J", "Doe", "5")));
        assert_eq!(
            store.error(FIELD_FIRST_NAME),
            Some("First name must be at least 2 characters")
        );
        // Prior commit unchanged.
        assert_eq!(store.committed().first_name, "Jo");
    }

    #[test]
    fn negative_age_fails() {
        let mut store = FormStore::new();
        assert!(!store.submit(&record("Jo", "Doe", "-1")));
        assert_eq!(store.error(FIELD_AGE), Some("Age must be a positive number"));
    }

    #[test]
    fn submit_failure_replaces_entire_error_map() {
        let mut store = FormStore::new();
        store.change(FIELD_AGE, "-1");
        assert!(store.error(FIELD_AGE).is_some());

        assert!(!store.submit(&record("J", "Doe", "5")));
        // Only firstName failed; the old age error is gone.
        assert_eq!(store.errors().len(), 1);
        assert!(store.error(FIELD_FIRST_NAME).is_some());
        assert_eq!(store.error(FIELD_AGE), None);
    }

    // ── Per-field change ─────────────────────────────────────────────

    #[test]
    fn change_sets_and_clears_single_field_error() {
        let mut store = FormStore::new();
        store.change(FIELD_FIRST_NAME, "J");
        store.change(FIELD_LAST_NAME, "D");
        assert!(store.error(FIELD_FIRST_NAME).is_some());
        assert!(store.error(FIELD_LAST_NAME).is_some());

        store.change(FIELD_FIRST_NAME, "Jo");
        assert_eq!(store.error(FIELD_FIRST_NAME), None);
        // Other fields untouched.
        assert!(store.error(FIELD_LAST_NAME).is_some());
    }

    #[test]
    fn cleared_field_keeps_empty_string_entry() {
        let mut store = FormStore::new();
        store.change(FIELD_FIRST_NAME, "J");
        store.change(FIELD_FIRST_NAME, "Jo");
        // The key survives with an empty message.
        assert_eq!(store.errors().get(FIELD_FIRST_NAME).map(String::as_str), Some(""));
    }

    #[test]
    fn change_validates_age_coercion() {
        let mut store = FormStore::new();
        store.change(FIELD_AGE, "17");
        assert_eq!(store.error(FIELD_AGE), None);
        store.change(FIELD_AGE, "old");
        assert_eq!(store.error(FIELD_AGE), Some("Age must be a positive number"));
    }

    // ── Initial state ────────────────────────────────────────────────

    #[test]
    fn initial_state_is_empty_and_error_free() {
        let store = FormStore::new();
        assert_eq!(store.committed(), &RegistrationForm::default());
        assert!(store.errors().is_empty());
    }
}
