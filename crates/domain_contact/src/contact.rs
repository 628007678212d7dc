//! Contact aggregate
//!
//! A [`Contact`] pairs a [`PersonalName`] with exactly one [`ContactInfo`]
//! shape. Updates never touch the receiver; they return a new contact.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use core_kernel::{EmailAddress, ValidationError};

use crate::channel::{EmailContactInfo, PostalContactInfo};
use crate::contact_info::{ContactInfo, ContactInfoKind};
use crate::name::PersonalName;

/// A person and the channels they can be reached on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    name: PersonalName,
    info: ContactInfo,
}

/// Handles each contact shape, receiving the name alongside the channels
///
/// [`Contact::accept`] calls exactly one method, exactly once.
pub trait ContactVisitor {
    type Output;

    fn visit_email_only(&mut self, name: &PersonalName, email: &EmailContactInfo) -> Self::Output;

    fn visit_postal_only(&mut self, name: &PersonalName, post: &PostalContactInfo) -> Self::Output;

    fn visit_email_and_postal(
        &mut self,
        name: &PersonalName,
        email: &EmailContactInfo,
        post: &PostalContactInfo,
    ) -> Self::Output;
}

impl Contact {
    pub fn new(name: PersonalName, info: ContactInfo) -> Self {
        Self { name, info }
    }

    /// Creates an email-only contact with an unverified address
    ///
    /// # Errors
    ///
    /// Returns the [`EmailAddress`] validation error unchanged if `email`
    /// is malformed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_contact::{Contact, PersonalName};
    ///
    /// let name = PersonalName::new("A", None, "Smith");
    /// let contact = Contact::from_email(name, "abc@example.com").unwrap();
    /// assert_eq!(contact.to_string(), "A Smith: Email: abc@example.com, not verified");
    /// ```
    pub fn from_email(name: PersonalName, email: &str) -> Result<Self, ValidationError> {
        let email_address = EmailAddress::new(email)?;
        let info = ContactInfo::EmailOnly(EmailContactInfo::unverified(email_address));
        Ok(Self::new(name, info))
    }

    pub fn name(&self) -> &PersonalName {
        &self.name
    }

    pub fn info(&self) -> &ContactInfo {
        &self.info
    }

    pub fn kind(&self) -> ContactInfoKind {
        self.info.kind()
    }

    /// Returns a copy of this contact with the postal channel replaced
    ///
    /// Any email channel is carried over; any previous postal channel is
    /// dropped.
    pub fn with_updated_postal_address(&self, new_postal: PostalContactInfo) -> Contact {
        let info = self.info.with_updated_postal_address(new_postal);
        debug!(
            name = %self.name,
            from = %self.info.kind(),
            to = %info.kind(),
            "Updated postal address"
        );
        Contact::new(self.name.clone(), info)
    }

    /// Dispatches to the visitor method matching this contact's shape
    pub fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: ContactVisitor + ?Sized,
    {
        match &self.info {
            ContactInfo::EmailOnly(email) => visitor.visit_email_only(&self.name, email),
            ContactInfo::PostalOnly(post) => visitor.visit_postal_only(&self.name, post),
            ContactInfo::EmailAndPostal(email, post) => {
                visitor.visit_email_and_postal(&self.name, email, post)
            }
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.info)
    }
}
