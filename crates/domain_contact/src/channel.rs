//! Per-channel contact details
//!
//! Each channel pairs a validated value with a status flag that records
//! whether the value has been confirmed out of band.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::EmailAddress;

use crate::address::PostalAddress;

/// An email address plus whether it has been verified
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailContactInfo {
    email_address: EmailAddress,
    is_verified: bool,
}

impl EmailContactInfo {
    pub fn new(email_address: EmailAddress, is_verified: bool) -> Self {
        Self {
            email_address,
            is_verified,
        }
    }

    /// Creates an unverified email channel
    pub fn unverified(email_address: EmailAddress) -> Self {
        Self::new(email_address, false)
    }

    pub fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }
}

impl fmt::Display for EmailContactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_verified { "verified" } else { "not verified" };
        write!(f, "{}, {}", self.email_address, status)
    }
}

/// A postal address plus whether it has been validated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostalContactInfo {
    address: PostalAddress,
    is_valid: bool,
}

impl PostalContactInfo {
    pub fn new(address: PostalAddress, is_valid: bool) -> Self {
        Self { address, is_valid }
    }

    pub fn address(&self) -> &PostalAddress {
        &self.address
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

impl fmt::Display for PostalContactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_valid { "valid" } else { "invalid" };
        write!(f, "{}, {}", self.address, status)
    }
}
