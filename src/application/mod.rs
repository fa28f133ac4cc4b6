//! Application layer services.
//!
//! Services consume repository traits and give front ends (the CLI binary, or
//! any other caller) a validated, logged API.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias to URL storage and resolution

pub mod services;
