//! # pinboard
//!
//! A small terminal client: a posts feed, a users table, and a validated
//! registration form, wired together by a query cache and a path router.
//!
//! ## Core Systems
//!
//! - **[`schema`]** — Tagged-rule flat-record validation
//! - **[`table`]** — Thin table engine: columns in, header group and row models out
//! - **[`query`]** — Query cache with staleness and eviction windows
//! - **[`router`]** — Path → page routing with preload-on-intent
//! - **[`posts`]** — Remote posts endpoint: model and async fetch
//! - **[`components`]** — DataTable and TextInput
//! - **[`form`]** — Registration form state and error map
//! - **[`pages`]** — Home (posts feed) and About (table + form)
//! - **[`event`]** — Crossterm-decoupled input events and key bindings
//! - **[`render`]** — Strips, screen buffer diffing, crossterm driver
//! - **[`app`]** — Application root: mount guard, input dispatch, frame loop
//! - **[`testing`]** — Headless pilot and snapshot helpers

// Foundation
pub mod event;
pub mod render;

// Collaborators
pub mod query;
pub mod router;
pub mod schema;
pub mod table;

// Application
pub mod app;
pub mod components;
pub mod form;
pub mod pages;
pub mod posts;

// Test support
pub mod testing;
