//! Core domain entities.
//!
//! - [`Record`] - An alias to URL mapping

pub mod record;

pub use record::Record;
