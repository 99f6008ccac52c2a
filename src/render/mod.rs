//! Rendering: strips, the screen buffer, and the crossterm driver.

pub mod buffer;
pub mod driver;
pub mod strip;

pub use buffer::{CellUpdate, ScreenBuffer};
pub use driver::Driver;
pub use strip::{CellStyle, Strip, StyledCell};
