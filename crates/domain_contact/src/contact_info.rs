//! The closed set of contact channel combinations
//!
//! A contact is reachable by email, by post, or both. There is no empty
//! combination. Every operation here matches all three variants explicitly,
//! so a new variant will not compile until each site handles it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::channel::{EmailContactInfo, PostalContactInfo};

/// Which channels of contact exist
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "channels", rename_all = "snake_case")]
pub enum ContactInfo {
    EmailOnly(EmailContactInfo),
    PostalOnly(PostalContactInfo),
    EmailAndPostal(EmailContactInfo, PostalContactInfo),
}

/// Payload-free tag for a [`ContactInfo`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactInfoKind {
    EmailOnly,
    PostalOnly,
    EmailAndPostal,
}

impl fmt::Display for ContactInfoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContactInfoKind::EmailOnly => "email only",
            ContactInfoKind::PostalOnly => "postal only",
            ContactInfoKind::EmailAndPostal => "email and postal",
        };
        f.write_str(label)
    }
}

/// Handles each [`ContactInfo`] variant
///
/// [`ContactInfo::accept`] calls exactly one method, exactly once.
pub trait ContactInfoVisitor {
    type Output;

    fn visit_email_only(&mut self, email: &EmailContactInfo) -> Self::Output;

    fn visit_postal_only(&mut self, post: &PostalContactInfo) -> Self::Output;

    fn visit_email_and_postal(
        &mut self,
        email: &EmailContactInfo,
        post: &PostalContactInfo,
    ) -> Self::Output;
}

impl ContactInfo {
    /// Returns the variant tag
    pub fn kind(&self) -> ContactInfoKind {
        match self {
            ContactInfo::EmailOnly(_) => ContactInfoKind::EmailOnly,
            ContactInfo::PostalOnly(_) => ContactInfoKind::PostalOnly,
            ContactInfo::EmailAndPostal(_, _) => ContactInfoKind::EmailAndPostal,
        }
    }

    /// Returns the email channel, if present
    pub fn email(&self) -> Option<&EmailContactInfo> {
        match self {
            ContactInfo::EmailOnly(email) | ContactInfo::EmailAndPostal(email, _) => Some(email),
            ContactInfo::PostalOnly(_) => None,
        }
    }

    /// Returns the postal channel, if present
    pub fn postal(&self) -> Option<&PostalContactInfo> {
        match self {
            ContactInfo::PostalOnly(post) | ContactInfo::EmailAndPostal(_, post) => Some(post),
            ContactInfo::EmailOnly(_) => None,
        }
    }

    /// Replaces (or adds) the postal channel, keeping any email channel
    ///
    /// The previous postal details, if any, are discarded rather than merged.
    pub fn with_updated_postal_address(&self, new_postal: PostalContactInfo) -> ContactInfo {
        match self {
            ContactInfo::EmailOnly(email) => ContactInfo::EmailAndPostal(email.clone(), new_postal),
            ContactInfo::PostalOnly(_) => ContactInfo::PostalOnly(new_postal),
            ContactInfo::EmailAndPostal(email, _) => {
                ContactInfo::EmailAndPostal(email.clone(), new_postal)
            }
        }
    }

    /// Dispatches to the visitor method matching this variant
    pub fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: ContactInfoVisitor + ?Sized,
    {
        match self {
            ContactInfo::EmailOnly(email) => visitor.visit_email_only(email),
            ContactInfo::PostalOnly(post) => visitor.visit_postal_only(post),
            ContactInfo::EmailAndPostal(email, post) => visitor.visit_email_and_postal(email, post),
        }
    }
}

impl fmt::Display for ContactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactInfo::EmailOnly(email) => write!(f, "Email: {}", email),
            ContactInfo::PostalOnly(post) => write!(f, "Post: {}", post),
            ContactInfo::EmailAndPostal(email, post) => {
                write!(f, "Email: {}; Post: {}", email, post)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::PostalAddress;
    use core_kernel::{EmailAddress, StateCode, ZipCode};

    fn email() -> EmailContactInfo {
        EmailContactInfo::new(EmailAddress::new("abc@example.com").unwrap(), true)
    }

    fn post(line1: &str, is_valid: bool) -> PostalContactInfo {
        PostalContactInfo::new(
            PostalAddress::new(
                line1,
                "",
                "New York",
                StateCode::new("NY").unwrap(),
                ZipCode::new("10001").unwrap(),
            ),
            is_valid,
        )
    }

    /// Records which visitor methods ran
    #[derive(Default)]
    struct CallLog(Vec<&'static str>);

    impl ContactInfoVisitor for CallLog {
        type Output = ();

        fn visit_email_only(&mut self, _email: &EmailContactInfo) {
            self.0.push("email_only");
        }

        fn visit_postal_only(&mut self, _post: &PostalContactInfo) {
            self.0.push("postal_only");
        }

        fn visit_email_and_postal(&mut self, _email: &EmailContactInfo, _post: &PostalContactInfo) {
            self.0.push("email_and_postal");
        }
    }

    #[test]
    fn test_update_email_only_adds_postal() {
        let updated = ContactInfo::EmailOnly(email()).with_updated_postal_address(post("1 A St", true));
        assert_eq!(updated, ContactInfo::EmailAndPostal(email(), post("1 A St", true)));
    }

    #[test]
    fn test_update_postal_only_replaces_postal() {
        let updated =
            ContactInfo::PostalOnly(post("1 A St", true)).with_updated_postal_address(post("2 B St", false));
        assert_eq!(updated, ContactInfo::PostalOnly(post("2 B St", false)));
    }

    #[test]
    fn test_update_email_and_postal_keeps_email() {
        let updated = ContactInfo::EmailAndPostal(email(), post("1 A St", true))
            .with_updated_postal_address(post("2 B St", true));
        assert_eq!(updated, ContactInfo::EmailAndPostal(email(), post("2 B St", true)));
    }

    #[test]
    fn test_accept_calls_one_handler_once() {
        let infos = [
            ContactInfo::EmailOnly(email()),
            ContactInfo::PostalOnly(post("1 A St", true)),
            ContactInfo::EmailAndPostal(email(), post("1 A St", true)),
        ];
        let expected = ["email_only", "postal_only", "email_and_postal"];

        for (info, expected) in infos.iter().zip(expected) {
            let mut log = CallLog::default();
            info.accept(&mut log);
            assert_eq!(log.0, vec![expected]);
        }
    }

    #[test]
    fn test_channel_accessors() {
        let both = ContactInfo::EmailAndPostal(email(), post("1 A St", true));
        assert_eq!(both.email(), Some(&email()));
        assert_eq!(both.postal(), Some(&post("1 A St", true)));

        assert!(ContactInfo::EmailOnly(email()).postal().is_none());
        assert!(ContactInfo::PostalOnly(post("1 A St", true)).email().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ContactInfo::EmailOnly(email()).to_string(),
            "Email: abc@example.com, verified"
        );
        assert_eq!(
            ContactInfo::PostalOnly(post("1 A St", false)).to_string(),
            "Post: 1 A St, New York, NY 10001, invalid"
        );
        assert_eq!(
            ContactInfo::EmailAndPostal(email(), post("1 A St", true)).to_string(),
            "Email: abc@example.com, verified; Post: 1 A St, New York, NY 10001, valid"
        );
    }
}
