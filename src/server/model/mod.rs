//! Server application models and type definitions.
//!
//! Application state shared by every handler, database model aliases, the admin allow-list,
//! and typed session entries.

pub mod admin;
pub mod app;
pub mod db;
pub mod session;
