//! Integration tests for the restaurant administration crate.

mod auth_tests;
mod restaurant_tests;
