//! Personal names

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{require, ValidationError};

/// A person's name
///
/// First and last name are required; the middle initial is optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PersonalNameBuilder")]
pub struct PersonalName {
    first_name: String,
    middle_initial: Option<String>,
    last_name: String,
}

impl PersonalName {
    /// Creates a new personal name
    pub fn new(
        first_name: impl Into<String>,
        middle_initial: Option<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            middle_initial,
            last_name: last_name.into(),
        }
    }

    /// Starts a field-by-field construction that reports missing fields
    pub fn builder() -> PersonalNameBuilder {
        PersonalNameBuilder::default()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_initial(&self) -> Option<&str> {
        self.middle_initial.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl fmt::Display for PersonalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.middle_initial {
            Some(middle) => write!(f, "{} {} {}", self.first_name, middle, self.last_name),
            None => write!(f, "{} {}", self.first_name, self.last_name),
        }
    }
}

/// Collects the parts of a [`PersonalName`] from optional sources
///
/// Also the deserialization shape of `PersonalName`, so absent fields
/// surface as `MissingRequiredField`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalNameBuilder {
    first_name: Option<String>,
    middle_initial: Option<String>,
    last_name: Option<String>,
}

impl PersonalNameBuilder {
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn middle_initial(mut self, middle_initial: impl Into<String>) -> Self {
        self.middle_initial = Some(middle_initial.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Builds the name
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first required field that
    /// was never set.
    pub fn build(self) -> Result<PersonalName, ValidationError> {
        Ok(PersonalName {
            first_name: require(self.first_name, "first_name")?,
            middle_initial: self.middle_initial,
            last_name: require(self.last_name, "last_name")?,
        })
    }
}

impl TryFrom<PersonalNameBuilder> for PersonalName {
    type Error = ValidationError;

    fn try_from(builder: PersonalNameBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
