//! Reusable view components.

pub mod data_table;
pub mod text_input;

pub use data_table::DataTable;
pub use text_input::TextInput;
