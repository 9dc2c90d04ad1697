//! Fixture helpers inserting rows straight into the test database.
//!
//! - `user` - accounts with a known password
//! - `business` - businesses with a given alias
//! - `catalog` - categories and items

pub mod business;
pub mod catalog;
pub mod user;
