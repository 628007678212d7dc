//! Self-validating string value objects
//!
//! Each wrapper owns a single `String` that has already passed its check.
//! There is no way to obtain an instance without going through the
//! validating constructor, including via serde.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::ValidationError;

macro_rules! define_validated_string {
    ($(#[$meta:meta])* $name:ident, $validate:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validates the input and wraps it
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                $validate(value.into()).map(Self)
            }

            /// Returns the validated string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper, returning the validated string
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("Failed to compile email regex"));

// ASCII only; `\d` would also accept other Unicode digits.
static ZIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("Failed to compile zip code regex"));

/// Accepted two-letter state codes: the 50 US states plus DC
const STATE_CODES: [&str; 51] = [
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA",
    "ID", "IL", "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS",
    "MT", "NC", "ND", "NE", "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA",
    "RI", "SC", "SD", "TN", "TX", "UT", "VA", "VT", "WA", "WI", "WV", "WY",
];

fn validate_email(value: String) -> Result<String, ValidationError> {
    if EMAIL_PATTERN.is_match(&value) {
        Ok(value)
    } else {
        debug!(%value, "Rejected email address");
        Err(ValidationError::invalid_format("email address", value))
    }
}

fn validate_zip(value: String) -> Result<String, ValidationError> {
    if ZIP_PATTERN.is_match(&value) {
        Ok(value)
    } else {
        debug!(%value, "Rejected zip code");
        Err(ValidationError::invalid_format("zip code", value))
    }
}

fn validate_state(value: String) -> Result<String, ValidationError> {
    let normalized = value.to_uppercase();
    if STATE_CODES.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        debug!(%value, "Rejected state code");
        Err(ValidationError::not_in_whitelist("state code", value))
    }
}

define_validated_string!(
    /// An email address matching `\S+@\S+\.\S+`
    EmailAddress,
    validate_email
);

define_validated_string!(
    /// A five digit US zip code
    ZipCode,
    validate_zip
);

define_validated_string!(
    /// A two-letter US state code, stored uppercase
    StateCode,
    validate_state
);

impl StateCode {
    /// Returns every code `StateCode::new` accepts
    pub fn accepted_codes() -> &'static [&'static str] {
        &STATE_CODES
    }
}
