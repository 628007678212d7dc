//! Core Kernel - Foundational value objects for the contact domain
//!
//! This crate provides the building blocks shared by the domain crates:
//! - The validation error taxonomy raised by every constructor
//! - Self-validating string wrappers (email address, zip code, state code)
//!
//! Every value here is validated exactly once, when it is constructed, and is
//! immutable afterwards. Deserialization goes through the same constructors.

pub mod error;
pub mod validated;

pub use error::{require, ValidationError};
pub use validated::{EmailAddress, StateCode, ZipCode};
