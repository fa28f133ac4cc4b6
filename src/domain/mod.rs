//! Domain layer containing the stored entity and the storage contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure; repository traits
//! define contracts implemented in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
