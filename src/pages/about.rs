//! About page: the users table and the registration form.
//!
//! Hosts the [`DataTable`] and three text inputs backed by a [`FormStore`].
//! Every keystroke in a field revalidates that field; Enter submits the
//! whole record. The committed form state renders as JSON below the form.

use std::collections::BTreeMap;

use crossterm::style::Color;

use crate::components::{DataTable, TextInput};
use crate::event::input::{Key, KeyEvent};
use crate::form::{FormStore, FIELD_AGE, FIELD_FIRST_NAME, FIELD_LAST_NAME};
use crate::render::strip::{CellStyle, Strip};

/// Rendered width of each input field.
const INPUT_WIDTH: i32 = 30;

/// The form's fields in display and focus order.
const FIELDS: [(&str, &str); 3] = [
    (FIELD_FIRST_NAME, "First Name"),
    (FIELD_LAST_NAME, "Last Name"),
    (FIELD_AGE, "Age"),
];

// ---------------------------------------------------------------------------
// AboutPage
// ---------------------------------------------------------------------------

/// The users + registration page.
pub struct AboutPage {
    table: DataTable,
    store: FormStore,
    inputs: [TextInput; 3],
    focus: usize,
}

impl AboutPage {
    /// Create the page with empty inputs and the seed table.
    pub fn new() -> Self {
        Self {
            table: DataTable::new(),
            store: FormStore::new(),
            inputs: [
                TextInput::new().with_placeholder("first name"),
                TextInput::new().with_placeholder("last name"),
                TextInput::new().with_placeholder("age"),
            ],
            focus: 0,
        }
    }

    /// The form store (for tests and the app).
    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// The live value of a field's input buffer.
    pub fn input_value(&self, field: &str) -> Option<&str> {
        FIELDS
            .iter()
            .position(|(name, _)| *name == field)
            .map(|i| self.inputs[i].value())
    }

    /// Handle a key event on this page.
    pub fn on_key(&mut self, event: KeyEvent) {
        match event.code {
            Key::Tab => {
                self.focus = (self.focus + 1) % self.inputs.len();
            }
            Key::BackTab => {
                self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
            }
            Key::Enter => {
                self.submit();
            }
            key => {
                let changed = self.inputs[self.focus].handle_key(key);
                if changed {
                    let (field, _) = FIELDS[self.focus];
                    let value = self.inputs[self.focus].value().to_owned();
                    self.store.change(field, &value);
                }
            }
        }
    }

    /// Validate and commit the whole record.
    pub fn submit(&mut self) -> bool {
        let record: BTreeMap<String, String> = FIELDS
            .iter()
            .zip(&self.inputs)
            .map(|((field, _), input)| ((*field).to_owned(), input.value().to_owned()))
            .collect();
        self.store.submit(&record)
    }

    /// Render the page as strips starting at row `y`.
    pub fn render(&self, y: i32) -> Vec<Strip> {
        let heading = CellStyle::new().fg(Color::Cyan).bold();
        let label_style = CellStyle::new().bold();
        let error_style = CellStyle::new().fg(Color::Red);
        let hint_style = CellStyle::new().dim();
        let text_style = CellStyle::new();

        let mut strips = Vec::new();
        let mut row = y;

        strips.push(Strip::line(row, "Users", heading));
        row += 1;
        let table_strips = self.table.render(row);
        row += self.table.rendered_height() + 1;
        strips.extend(table_strips);

        strips.push(Strip::line(row, "User Registration", heading));
        row += 2;

        for (i, ((field, label), input)) in FIELDS.iter().zip(&self.inputs).enumerate() {
            strips.push(Strip::line(row, label, label_style));
            row += 1;
            strips.push(input.render(row, INPUT_WIDTH, i == self.focus));
            row += 1;
            // Error line renders only when the message is non-empty.
            if let Some(message) = self.store.error(field) {
                strips.push(Strip::line(row, message, error_style));
                row += 1;
            }
        }

        strips.push(Strip::line(row, "[Enter] Submit  [Tab] Next field", hint_style));
        row += 2;

        strips.push(Strip::line(row, "Current Form State", heading));
        row += 1;
        for line in self.store.committed_json().lines() {
            strips.push(Strip::line(row, line, text_style));
            row += 1;
        }
        strips
    }
}

impl Default for AboutPage {
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
    use crate::event::input::Modifiers;
    use pretty_assertions::assert_eq;

    fn page_text(page: &AboutPage) -> String {
        crate::testing::strips_to_string(&page.render(0))
    }

    fn press(page: &mut AboutPage, key: Key) {
        page.on_key(KeyEvent::new(key, Modifiers::NONE));
    }

    fn type_text(page: &mut AboutPage, text: &str) {
        for ch in text.chars() {
            press(page, Key::Char(ch));
        }
    }

    // ── Typing and per-field validation ──────────────────────────────

    #[test]
    fn typing_into_focused_field_validates_it() {
        let mut page = AboutPage::new();
        type_text(&mut page, "J");
        assert_eq!(
            page.store().error(FIELD_FIRST_NAME),
            Some("First name must be at least 2 characters")
        );
        type_text(&mut page, "o");
        assert_eq!(page.store().error(FIELD_FIRST_NAME), None);
    }

    #[test]
    fn fixing_one_field_leaves_other_errors_alone() {
        let mut page = AboutPage::new();
        type_text(&mut page, "J");
        press(&mut page, Key::Tab);
        type_text(&mut page, "D");
        press(&mut page, Key::Tab);
        type_text(&mut page, "-1");

        // firstName invalid → valid; others untouched.
        press(&mut page, Key::BackTab);
        press(&mut page, Key::BackTab);
        type_text(&mut page, "o");
        assert_eq!(page.store().error(FIELD_FIRST_NAME), None);
        assert!(page.store().error(FIELD_LAST_NAME).is_some());
        assert!(page.store().error(FIELD_AGE).is_some());
    }

    #[test]
    fn tab_cycles_focus() {
        let mut page = AboutPage::new();
        type_text(&mut page, "ab");
        press(&mut page, Key::Tab);
        type_text(&mut page, "cd");
        assert_eq!(page.input_value(FIELD_FIRST_NAME), Some("ab"));
        assert_eq!(page.input_value(FIELD_LAST_NAME), Some("cd"));
    }

    // ── Submit ───────────────────────────────────────────────────────

    #[test]
    fn enter_submits_and_commits_valid_record() {
        let mut page = AboutPage::new();
        type_text(&mut page, "Jo");
        press(&mut page, Key::Tab);
        type_text(&mut page, "Doe");
        press(&mut page, Key::Tab);
        type_text(&mut page, "5");
        press(&mut page, Key::Enter);

        assert_eq!(page.store().committed().first_name, "Jo");
        assert_eq!(page.store().committed().age, 5);
        assert!(page.store().errors().is_empty());
    }

    #[test]
    fn invalid_submit_keeps_committed_state() {
        let mut page = AboutPage::new();
        type_text(&mut page, "Jo");
        press(&mut page, Key::Tab);
        type_text(&mut page, "Doe");
        press(&mut page, Key::Tab);
        type_text(&mut page, "5");
        press(&mut page, Key::Enter);

        // Break the age field and resubmit.
        type_text(&mut page, "x");
        press(&mut page, Key::Enter);
        assert_eq!(page.store().committed().age, 5);
        assert!(page.store().error(FIELD_AGE).is_some());
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn renders_table_form_and_state_panel() {
        let page = AboutPage::new();
        let text = page_text(&page);
        assert!(text.contains("Users"));
        assert!(text.contains("First Name"));
        assert!(text.contains("User Registration"));
        assert!(text.contains("Current Form State"));
        assert!(text.contains("\"firstName\": \"\""));
    }

    #[test]
    fn error_line_renders_only_when_non_empty() {
        let mut page = AboutPage::new();
        assert!(!page_text(&page).contains("at least 2 characters"));

        type_text(&mut page, "J");
        assert!(page_text(&page).contains("First name must be at least 2 characters"));

        type_text(&mut page, "o");
        assert!(!page_text(&page).contains("at least 2 characters"));
    }

    #[test]
    fn state_panel_updates_only_on_successful_submit() {
        let mut page = AboutPage::new();
        type_text(&mut page, "Jo");
        // In-progress edits are not committed.
        assert!(page_text(&page).contains("\"firstName\": \"\""));

        press(&mut page, Key::Tab);
        type_text(&mut page, "Doe");
        press(&mut page, Key::Tab);
        type_text(&mut page, "7");
        press(&mut page, Key::Enter);
        assert!(page_text(&page).contains("\"firstName\": \"Jo\""));
        assert!(page_text(&page).contains("\"age\": 7"));
    }
}
