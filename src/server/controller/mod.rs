//! HTTP controller endpoints for the menuboard web API.
//!
//! Axum handlers for authentication, business management, catalogs, public menus, and the
//! newsletter. Owner endpoints resolve the signed in user from the session before touching
//! any table. Every handler carries a utoipa path specification for the OpenAPI document.

pub mod auth;
pub mod business;
pub mod catalog;
pub mod menu;
pub mod newsletter;
pub mod user;
pub mod util;
