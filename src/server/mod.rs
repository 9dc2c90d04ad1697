//! Server application core modules.
//!
//! This module contains all server-side functionality for menuboard: HTTP routing, session
//! authentication, the admin allow-list, database access for businesses and their catalogs,
//! the public menu and QR code endpoints, and newsletter subscriptions.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
