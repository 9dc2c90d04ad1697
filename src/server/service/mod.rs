//! Service layer for business logic.
//!
//! Services validate input, enforce who may touch which business, and translate storage
//! failures (missing rows, unique violations) into [`MenuError`](crate::server::error::menu::MenuError)
//! variants the client can show.

pub mod auth;
pub mod business;
pub mod catalog;
pub mod menu;
pub mod newsletter;
pub mod password;
pub mod qr;
pub mod user;
