//! Integration tests for the collection manager.
//!
//! 1. Typed records with custom patches
//! 2. Shared managers across tasks

pub mod shared_manager_tests;
pub mod typed_record_tests;
