//! Helper functions shared across the crate.
//!
//! - [`db_error`] - Database error classification

pub mod db_error;
