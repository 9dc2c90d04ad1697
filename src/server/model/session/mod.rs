//! Session data models.
//!
//! Type-safe wrappers for the values menuboard keeps in the tower-sessions store.

pub mod user;
