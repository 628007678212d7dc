//! Test Utilities Crate
//!
//! Provides shared fixtures and property-test generators for the contact
//! domain test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built names, addresses, and contacts
//! - `generators`: Proptest strategies that only produce valid values

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;
