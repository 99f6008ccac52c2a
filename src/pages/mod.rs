//! The routable pages.

pub mod about;
pub mod home;

pub use about::AboutPage;
pub use home::HomePage;
