//! Test support: headless pilot and snapshot helpers.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::strips_to_string;
