//! Flat-record schema validation.
//!
//! A [`Schema`] is a tagged-rule table: field name → ordered list of
//! ([`Check`], message) pairs. The same table drives both per-field
//! validation (on every keystroke) and whole-record validation (on submit),
//! so the two paths cannot drift apart. Numeric checks coerce string input
//! before applying their bound.

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// A validated (and possibly coerced) field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    /// The numeric content, if this is a number value.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Check
// ---------------------------------------------------------------------------

/// A single validation predicate.
///
/// Variants carry their parameters; the human-readable message lives next to
/// the check in the rule table, not in the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The value must have at least this many characters.
    MinLen(usize),
    /// The value must coerce to an integer >= 0.
    NonNegativeInt,
}

impl Check {
    /// Apply the check to raw input. Success yields the coerced value.
    fn apply(&self, raw: &str) -> Option<FieldValue> {
        match self {
            Check::MinLen(min) => {
                if raw.chars().count() >= *min {
                    Some(FieldValue::Text(raw.to_owned()))
                } else {
                    None
                }
            }
            Check::NonNegativeInt => match raw.trim().parse::<i64>() {
                Ok(n) if n >= 0 => Some(FieldValue::Number(n)),
                _ => None,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// One field's rule entry: an ordered list of checks with their messages.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub checks: Vec<(Check, &'static str)>,
}

/// Per-field error messages keyed by field name.
///
/// A field maps to the empty string once it has revalidated successfully;
/// the key is deliberately not removed, matching the rendering contract
/// (error lines show only for non-empty messages).
pub type FieldErrors = BTreeMap<String, String>;

/// A flat-record validation schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field rule (builder).
    pub fn field(mut self, field: &'static str, checks: Vec<(Check, &'static str)>) -> Self {
        self.rules.push(FieldRule { field, checks });
        self
    }

    /// The field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.field)
    }

    /// Validate a single field's raw value against its checks.
    ///
    /// Returns the coerced value of the last check on success, or the first
    /// violation's message on failure. Unknown fields validate vacuously as
    /// text.
    pub fn validate_field(&self, field: &str, raw: &str) -> Result<FieldValue, String> {
        let Some(rule) = self.rules.iter().find(|rule| rule.field == field) else {
            return Ok(FieldValue::Text(raw.to_owned()));
        };
        let mut value = FieldValue::Text(raw.to_owned());
        for (check, message) in &rule.checks {
            match check.apply(raw) {
                Some(coerced) => value = coerced,
                None => return Err((*message).to_owned()),
            }
        }
        Ok(value)
    }

    /// Validate a whole record atomically.
    ///
    /// Every rule is evaluated against the record (missing fields count as
    /// empty input). Success yields one coerced value per field, in rule
    /// order. Failure yields one message per failing field — the complete
    /// replacement error map.
    pub fn validate(
        &self,
        record: &BTreeMap<String, String>,
    ) -> Result<Vec<(&'static str, FieldValue)>, FieldErrors> {
        let mut values = Vec::with_capacity(self.rules.len());
        let mut errors = FieldErrors::new();
        for rule in &self.rules {
            let raw = record.get(rule.field).map(String::as_str).unwrap_or("");
            match self.validate_field(rule.field, raw) {
                Ok(value) => values.push((rule.field, value)),
                Err(message) => {
                    errors.insert(rule.field.to_owned(), message);
                }
            }
        }
        if errors.is_empty() {
            Ok(values)
        } else {
            Err(errors)
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new()
            .field("name", vec![(Check::MinLen(2), "Name too short")])
            .field("age", vec![(Check::NonNegativeInt, "Age must be a positive number")])
    }

    fn record(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ── Check::MinLen ────────────────────────────────────────────────

    #[test]
    fn min_len_accepts_exact_length() {
        let s = schema();
        assert_eq!(
            s.validate_field("name", "Jo"),
            Ok(FieldValue::Text("Jo".into()))
        );
    }

    #[test]
    fn min_len_rejects_short_input() {
        let s = schema();
        assert_eq!(s.validate_field("name", "J"), Err("Name too short".into()));
    }

    #[test]
    fn min_len_counts_chars_not_bytes() {
        let s = schema();
        // Two multibyte chars satisfy MinLen(2).
        assert!(s.validate_field("name", "éé").is_ok());
    }

    // ── Check::NonNegativeInt ────────────────────────────────────────

    #[test]
    fn numeric_coerces_string_to_number() {
        let s = schema();
        assert_eq!(s.validate_field("age", "5"), Ok(FieldValue::Number(5)));
    }

    #[test]
    fn numeric_accepts_zero() {
        let s = schema();
        assert_eq!(s.validate_field("age", "0"), Ok(FieldValue::Number(0)));
    }

    #[test]
    fn numeric_rejects_negative() {
        let s = schema();
        assert_eq!(
            s.validate_field("age", "-1"),
            Err("Age must be a positive number".into())
        );
    }

    #[test]
    fn numeric_rejects_non_numeric() {
        let s = schema();
        assert!(s.validate_field("age", "abc").is_err());
        assert!(s.validate_field("age", "").is_err());
    }

    // ── validate_field edges ─────────────────────────────────────────

    #[test]
    fn unknown_field_validates_as_text() {
        let s = schema();
        assert_eq!(
            s.validate_field("nickname", "x"),
            Ok(FieldValue::Text("x".into()))
        );
    }

    // ── Whole-record validation ──────────────────────────────────────

    #[test]
    fn record_success_yields_coerced_values() {
        let s = schema();
        let values = s
            .validate(&record(&[("name", "Jo"), ("age", "5")]))
            .unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], ("name", FieldValue::Text("Jo".into())));
        assert_eq!(values[1], ("age", FieldValue::Number(5)));
    }

    #[test]
    fn record_failure_collects_all_failing_fields() {
        let s = schema();
        let errors = s
            .validate(&record(&[("name", "J"), ("age", "-3")]))
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["name"], "Name too short");
        assert_eq!(errors["age"], "Age must be a positive number");
    }

    #[test]
    fn record_partial_failure_names_only_failing_field() {
        let s = schema();
        let errors = s
            .validate(&record(&[("name", "Jo"), ("age", "nope")]))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("age"));
    }

    #[test]
    fn record_missing_field_counts_as_empty() {
        let s = schema();
        let errors = s.validate(&record(&[("age", "1")])).unwrap_err();
        assert_eq!(errors["name"], "Name too short");
    }

    #[test]
    fn field_names_in_declaration_order() {
        let s = schema();
        let names: Vec<_> = s.field_names().collect();
        assert_eq!(names, vec!["name", "age"]);
    }
}
