//! Types shared between the server and the web client.
//!
//! DTOs crossing the HTTP boundary live here alongside the small pieces of pure logic
//! both halves need to agree on: alias derivation, price formatting, and the form,
//! modal, and page state machines used by the client views.

pub mod alias;
pub mod api;
pub mod business;
pub mod catalog;
pub mod form;
pub mod menu;
pub mod newsletter;
pub mod user;
pub mod view;
