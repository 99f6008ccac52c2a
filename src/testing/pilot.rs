//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`](crate::app::App) in headless mode and
//! provides methods to simulate user input (key presses, typing, mouse
//! clicks and hover, resize), deliver fetch results, and inspect the
//! rendered screen as text.

use std::time::Duration;

use crate::app::{App, AppConfig, AppMessage};
use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseEvent};
use crate::posts::Post;
use crate::query::QueryClient;
use crate::router::{PreloadPolicy, Router};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// The Pilot creates an [`App`] without a terminal driver and mounts it,
/// then provides a high-level API for simulating user interaction. Fetches
/// never run for real: tests drain the requested keys and deliver canned
/// results through [`deliver_posts`](Self::deliver_posts).
pub struct Pilot {
    app: App,
}

impl Pilot {
    /// Create a mounted headless app with the given terminal size and
    /// production-default cache windows.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_windows(width, height, Duration::from_secs(300), Duration::from_secs(3600))
    }

    /// Create a mounted headless app with explicit cache windows.
    pub fn with_windows(width: u16, height: u16, stale: Duration, evict: Duration) -> Self {
        let app = App::new_headless(
            width,
            height,
            AppConfig::default(),
            QueryClient::new(stale, evict),
            Router::new(PreloadPolicy::Intent),
        );
        let mut pilot = Self { app };
        pilot.app.mount();
        pilot
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) {
        self.app
            .handle_input(InputEvent::Key(KeyEvent::plain(key)));
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) {
        self.app
            .handle_input(InputEvent::Key(KeyEvent::new(key, modifiers)));
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    /// Simulate a left-button mouse click at (x, y).
    pub fn click(&mut self, x: u16, y: u16) {
        self.app.handle_input(InputEvent::Mouse(MouseEvent {
            kind: MouseAction::LeftDown,
            x,
            y,
        }));
    }

    /// Simulate the mouse moving to (x, y) — the hover-intent signal.
    pub fn hover(&mut self, x: u16, y: u16) {
        self.app.handle_input(InputEvent::Mouse(MouseEvent {
            kind: MouseAction::Moved,
            x,
            y,
        }));
    }

    /// Simulate a terminal resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app
            .handle_input(InputEvent::Resize { width, height });
    }

    // ── Processing ───────────────────────────────────────────────────

    /// Run one frame of app work (preloads, page refresh, sweep, render).
    pub fn tick(&mut self) {
        self.app.tick();
    }

    /// Drain the query keys the app wants fetched.
    pub fn take_fetches(&mut self) -> Vec<String> {
        self.app.take_fetches()
    }

    /// Deliver a posts fetch result as if a fetch task had completed.
    pub fn deliver_posts(&mut self, result: Result<Vec<Post>, String>) {
        self.app.handle_message(AppMessage::QueryResult {
            key: crate::posts::POSTS_KEY.to_owned(),
            result,
        });
        self.app.tick();
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying app immutably.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Borrow the underlying app mutably.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Whether the app is still running (has not quit).
    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }

    /// The rendered screen as plain text.
    pub fn screen_text(&self) -> String {
        self.app.screen_text()
    }

    /// Find the nav link's screen position for a label, if visible.
    pub fn find_text(&self, needle: &str) -> Option<(u16, u16)> {
        for (y, line) in self.screen_text().lines().enumerate() {
            if let Some(byte_x) = line.find(needle) {
                let x = line[..byte_x].chars().count();
                return Some((x as u16, y as u16));
            }
        }
        None
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pilot_starts_mounted_and_running() {
        let pilot = Pilot::new(80, 24);
        assert!(pilot.is_running());
        assert!(pilot.app().is_mounted());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut pilot = Pilot::new(80, 24);
        pilot.press_key_with(Key::Char('c'), Modifiers::CTRL);
        assert!(!pilot.is_running());
    }

    #[test]
    fn find_text_locates_nav_link() {
        let pilot = Pilot::new(80, 24);
        let position = pilot.find_text("About (F2)");
        assert!(position.is_some());
        assert_eq!(position.unwrap().1, 0);
    }
}
