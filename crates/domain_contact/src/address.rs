//! Postal address types

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{require, StateCode, ValidationError, ZipCode};

/// A US postal address
///
/// State and zip arrive already validated; the free-text lines are taken as
/// given. An empty `address2` means there is no second line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PostalAddressBuilder")]
pub struct PostalAddress {
    address1: String,
    address2: String,
    city: String,
    state: StateCode,
    zip: ZipCode,
}

impl PostalAddress {
    /// Creates a new postal address
    pub fn new(
        address1: impl Into<String>,
        address2: impl Into<String>,
        city: impl Into<String>,
        state: StateCode,
        zip: ZipCode,
    ) -> Self {
        Self {
            address1: address1.into(),
            address2: address2.into(),
            city: city.into(),
            state,
            zip,
        }
    }

    /// Starts a field-by-field construction that reports missing fields
    pub fn builder() -> PostalAddressBuilder {
        PostalAddressBuilder::default()
    }

    pub fn address1(&self) -> &str {
        &self.address1
    }

    pub fn address2(&self) -> &str {
        &self.address2
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &StateCode {
        &self.state
    }

    pub fn zip(&self) -> &ZipCode {
        &self.zip
    }
}

impl fmt::Display for PostalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.address2.is_empty() {
            write!(f, "{}, {}, {} {}", self.address1, self.city, self.state, self.zip)
        } else {
            write!(
                f,
                "{} {}, {}, {} {}",
                self.address1, self.address2, self.city, self.state, self.zip
            )
        }
    }
}

/// Collects the parts of a [`PostalAddress`] from optional sources
///
/// Also the deserialization shape of `PostalAddress`; state and zip are
/// validated as they are read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostalAddressBuilder {
    address1: Option<String>,
    address2: Option<String>,
    city: Option<String>,
    state: Option<StateCode>,
    zip: Option<ZipCode>,
}

impl PostalAddressBuilder {
    pub fn address1(mut self, address1: impl Into<String>) -> Self {
        self.address1 = Some(address1.into());
        self
    }

    pub fn address2(mut self, address2: impl Into<String>) -> Self {
        self.address2 = Some(address2.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state(mut self, state: StateCode) -> Self {
        self.state = Some(state);
        self
    }

    pub fn zip(mut self, zip: ZipCode) -> Self {
        self.zip = Some(zip);
        self
    }

    /// Builds the address
    ///
    /// `address2` defaults to empty. Every other field is required.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first required field that
    /// was never set.
    pub fn build(self) -> Result<PostalAddress, ValidationError> {
        Ok(PostalAddress {
            address1: require(self.address1, "address1")?,
            address2: self.address2.unwrap_or_default(),
            city: require(self.city, "city")?,
            state: require(self.state, "state")?,
            zip: require(self.zip, "zip")?,
        })
    }
}

impl TryFrom<PostalAddressBuilder> for PostalAddress {
    type Error = ValidationError;

    fn try_from(builder: PostalAddressBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
