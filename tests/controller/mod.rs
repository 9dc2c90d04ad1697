//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built from a [`TestContext`], then turned into
//! responses to check status codes and bodies.

mod auth;
mod business;
mod catalog;
mod menu;
mod newsletter;
mod user;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use menuboard_test_utils::prelude::*;

use crate::util::{body_json, sign_in_as, TestContextExt};
