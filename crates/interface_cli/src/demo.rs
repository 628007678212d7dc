//! Sample scenario run by the `contact-demo` binary

use std::io::Write;

use core_kernel::{StateCode, ValidationError, ZipCode};
use domain_contact::{Contact, PersonalName, PostalAddress, PostalContactInfo};
use tracing::info;

use crate::error::CliError;
use crate::ui::ContactUi;

/// Builds the sample contact: an email-only contact that then gains an
/// unvalidated postal address
pub fn sample_contact() -> Result<Contact, ValidationError> {
    let name = PersonalName::new("A", None, "Smith");
    let contact = Contact::from_email(name, "abc@example.com")?;

    let address = PostalAddress::new(
        "123 Main",
        "",
        "Beverly Hills",
        StateCode::new("CA")?,
        ZipCode::new("97210")?,
    );
    Ok(contact.with_updated_postal_address(PostalContactInfo::new(address, false)))
}

/// Builds the sample contact and writes its display block to `out`
pub fn run<W: Write>(out: &mut W) -> Result<(), CliError> {
    let contact = sample_contact()?;
    info!(contact = %contact, "Built sample contact");

    ContactUi::new().display(&contact, out)?;
    Ok(())
}
