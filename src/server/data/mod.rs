//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`ConnectionTrait`] so they work
//! on a plain connection and inside a transaction alike, and return SeaORM's `DbErr` untouched;
//! services decide what a failure means.

pub mod business;
pub mod category;
pub mod item;
pub mod subscriber;
pub mod user;

use sea_orm::{DbErr, SqlErr};

/// True when the error is a violated UNIQUE constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
