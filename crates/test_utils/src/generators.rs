//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{EmailAddress, StateCode, ZipCode};
use domain_contact::{
    Contact, ContactInfo, EmailContactInfo, PersonalName, PostalAddress, PostalContactInfo,
};
use proptest::prelude::*;

/// Strategy for generating valid ZipCode values
pub fn zip_code_strategy() -> impl Strategy<Value = ZipCode> {
    "[0-9]{5}".prop_map(|s| ZipCode::new(s).expect("five digits"))
}

/// Strategy for generating valid StateCode values
pub fn state_code_strategy() -> impl Strategy<Value = StateCode> {
    proptest::sample::select(StateCode::accepted_codes())
        .prop_map(|code| StateCode::new(code).expect("whitelisted code"))
}

/// Strategy for generating valid EmailAddress values
pub fn email_address_strategy() -> impl Strategy<Value = EmailAddress> {
    ("[a-z][a-z0-9._]{0,10}", "[a-z]{2,10}", "(com|org|net|io)").prop_map(
        |(local, domain, tld)| {
            EmailAddress::new(format!("{}@{}.{}", local, domain, tld)).expect("matches pattern")
        },
    )
}

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}"
}

/// Strategy for generating personal names, with or without a middle initial
pub fn personal_name_strategy() -> impl Strategy<Value = PersonalName> {
    (name_strategy(), proptest::option::of("[A-Z]"), name_strategy())
        .prop_map(|(first, middle, last)| PersonalName::new(first, middle, last))
}

/// Strategy for generating postal addresses
pub fn postal_address_strategy() -> impl Strategy<Value = PostalAddress> {
    (
        "[1-9][0-9]{0,3} [A-Z][a-z]{2,8} St",
        prop_oneof![Just(String::new()), "(Apt|Suite) [1-9][0-9]?"],
        name_strategy(),
        state_code_strategy(),
        zip_code_strategy(),
    )
        .prop_map(|(line1, line2, city, state, zip)| PostalAddress::new(line1, line2, city, state, zip))
}

/// Strategy for generating email channels
pub fn email_contact_info_strategy() -> impl Strategy<Value = EmailContactInfo> {
    (email_address_strategy(), any::<bool>())
        .prop_map(|(email, verified)| EmailContactInfo::new(email, verified))
}

/// Strategy for generating postal channels
pub fn postal_contact_info_strategy() -> impl Strategy<Value = PostalContactInfo> {
    (postal_address_strategy(), any::<bool>())
        .prop_map(|(address, valid)| PostalContactInfo::new(address, valid))
}

/// Strategy covering all three contact info shapes
pub fn contact_info_strategy() -> impl Strategy<Value = ContactInfo> {
    prop_oneof![
        email_contact_info_strategy().prop_map(ContactInfo::EmailOnly),
        postal_contact_info_strategy().prop_map(ContactInfo::PostalOnly),
        (email_contact_info_strategy(), postal_contact_info_strategy())
            .prop_map(|(email, post)| ContactInfo::EmailAndPostal(email, post)),
    ]
}

/// Strategy for generating contacts of any shape
pub fn contact_strategy() -> impl Strategy<Value = Contact> {
    (personal_name_strategy(), contact_info_strategy())
        .prop_map(|(name, info)| Contact::new(name, info))
}
