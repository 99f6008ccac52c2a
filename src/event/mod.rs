//! Input events and key bindings.

pub mod binding;
pub mod input;

pub use binding::{AppAction, KeyBindingRegistry};
pub use input::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseEvent};
