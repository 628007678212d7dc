//! Contact Domain
//!
//! This crate models a person's name together with the channels they can be
//! reached on: email, postal mail, or both.
//!
//! # Contact Shapes
//!
//! [`ContactInfo`] is a closed enum with exactly three variants:
//!
//! - **EmailOnly**: an email address and whether it is verified
//! - **PostalOnly**: a postal address and whether it is valid
//! - **EmailAndPostal**: both of the above
//!
//! Consumers either `match` on the enum or implement [`ContactVisitor`] /
//! [`ContactInfoVisitor`] and let the contact pick the handler.
//!
//! # Examples
//!
//! ```rust
//! use core_kernel::{StateCode, ZipCode};
//! use domain_contact::{Contact, PersonalName, PostalAddress, PostalContactInfo};
//!
//! let name = PersonalName::new("A", None, "Smith");
//! let contact = Contact::from_email(name, "abc@example.com").unwrap();
//!
//! let address = PostalAddress::new(
//!     "123 Main",
//!     "",
//!     "Beverly Hills",
//!     StateCode::new("CA").unwrap(),
//!     ZipCode::new("97210").unwrap(),
//! );
//! let updated = contact.with_updated_postal_address(PostalContactInfo::new(address, false));
//!
//! assert_eq!(
//!     updated.to_string(),
//!     "A Smith: Email: abc@example.com, not verified; Post: 123 Main, Beverly Hills, CA 97210, invalid"
//! );
//! ```

pub mod address;
pub mod channel;
pub mod contact;
pub mod contact_info;
pub mod name;

pub use address::{PostalAddress, PostalAddressBuilder};
pub use channel::{EmailContactInfo, PostalContactInfo};
pub use contact::{Contact, ContactVisitor};
pub use contact_info::{ContactInfo, ContactInfoKind, ContactInfoVisitor};
pub use name::{PersonalName, PersonalNameBuilder};
