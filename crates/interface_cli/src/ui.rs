//! Contact display
//!
//! Renders a contact as a block of lines: the name first, then one line per
//! channel, email before postal.

use std::io::{self, Write};

use domain_contact::{Contact, ContactVisitor, EmailContactInfo, PersonalName, PostalContactInfo};

/// Formats contacts for the console
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactUi;

/// Visitor producing the display lines for one contact
struct LineRenderer;

impl LineRenderer {
    fn email_line(email: &EmailContactInfo) -> String {
        format!("* Email: {}", email)
    }

    fn postal_line(post: &PostalContactInfo) -> String {
        format!("* Postal address: {}", post)
    }
}

impl ContactVisitor for LineRenderer {
    type Output = Vec<String>;

    fn visit_email_only(&mut self, name: &PersonalName, email: &EmailContactInfo) -> Vec<String> {
        vec![name.to_string(), Self::email_line(email)]
    }

    fn visit_postal_only(&mut self, name: &PersonalName, post: &PostalContactInfo) -> Vec<String> {
        vec![name.to_string(), Self::postal_line(post)]
    }

    fn visit_email_and_postal(
        &mut self,
        name: &PersonalName,
        email: &EmailContactInfo,
        post: &PostalContactInfo,
    ) -> Vec<String> {
        vec![name.to_string(), Self::email_line(email), Self::postal_line(post)]
    }
}

impl ContactUi {
    pub fn new() -> Self {
        Self
    }

    /// Returns the display lines for `contact`
    pub fn lines(&self, contact: &Contact) -> Vec<String> {
        contact.accept(&mut LineRenderer)
    }

    /// Writes the display lines for `contact`, one per line
    pub fn display<W: Write>(&self, contact: &Contact, out: &mut W) -> io::Result<()> {
        tracing::debug!(kind = %contact.kind(), "Displaying contact");
        for line in self.lines(contact) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
