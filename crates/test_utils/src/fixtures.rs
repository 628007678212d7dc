//! Pre-built Test Fixtures
//!
//! Consistent, predictable values for unit and integration tests. Every
//! fixture is built from literals known to pass validation.

use core_kernel::{EmailAddress, StateCode, ZipCode};
use domain_contact::{
    Contact, ContactInfo, EmailContactInfo, PersonalName, PostalAddress, PostalContactInfo,
};

/// Fixture for names
pub struct NameFixtures;

impl NameFixtures {
    /// "A Smith", no middle initial
    pub fn a_smith() -> PersonalName {
        PersonalName::new("A", None, "Smith")
    }

    /// "John Q Public"
    pub fn john_q_public() -> PersonalName {
        PersonalName::new("John", Some("Q".to_string()), "Public")
    }
}

/// Fixture for postal data
pub struct PostalFixtures;

impl PostalFixtures {
    pub fn california() -> StateCode {
        StateCode::new("CA").expect("CA is whitelisted")
    }

    pub fn new_york() -> StateCode {
        StateCode::new("NY").expect("NY is whitelisted")
    }

    /// 123 Main, Beverly Hills, CA 97210
    pub fn beverly_hills() -> PostalAddress {
        PostalAddress::new(
            "123 Main",
            "",
            "Beverly Hills",
            Self::california(),
            ZipCode::new("97210").expect("valid zip"),
        )
    }

    /// 1 State St Floor 2, Albany, NY 12207
    pub fn albany() -> PostalAddress {
        PostalAddress::new(
            "1 State St",
            "Floor 2",
            "Albany",
            Self::new_york(),
            ZipCode::new("12207").expect("valid zip"),
        )
    }

    /// Beverly Hills address, not yet validated
    pub fn beverly_hills_unvalidated() -> PostalContactInfo {
        PostalContactInfo::new(Self::beverly_hills(), false)
    }

    /// Albany address, validated
    pub fn albany_validated() -> PostalContactInfo {
        PostalContactInfo::new(Self::albany(), true)
    }
}

/// Fixture for email data
pub struct EmailFixtures;

impl EmailFixtures {
    pub const ABC: &'static str = "abc@example.com";

    pub fn abc() -> EmailAddress {
        EmailAddress::new(Self::ABC).expect("valid email")
    }

    pub fn abc_unverified() -> EmailContactInfo {
        EmailContactInfo::unverified(Self::abc())
    }

    pub fn abc_verified() -> EmailContactInfo {
        EmailContactInfo::new(Self::abc(), true)
    }
}

/// Fixture for whole contacts, one per shape
pub struct ContactFixtures;

impl ContactFixtures {
    /// A Smith reachable only at abc@example.com
    pub fn email_only() -> Contact {
        Contact::from_email(NameFixtures::a_smith(), EmailFixtures::ABC).expect("valid email")
    }

    /// John Q Public reachable only at the Albany address
    pub fn postal_only() -> Contact {
        Contact::new(
            NameFixtures::john_q_public(),
            ContactInfo::PostalOnly(PostalFixtures::albany_validated()),
        )
    }

    /// The email-only contact after gaining the Beverly Hills address
    pub fn email_and_postal() -> Contact {
        Self::email_only().with_updated_postal_address(PostalFixtures::beverly_hills_unvalidated())
    }

    /// One contact of each shape
    pub fn all_shapes() -> Vec<Contact> {
        vec![Self::email_only(), Self::postal_only(), Self::email_and_postal()]
    }
}
