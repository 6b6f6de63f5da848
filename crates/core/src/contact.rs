//! Contact details validation

use serde::Serialize;
use thiserror::Error;

/// Errors from validating checkout contact details.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was empty.
    #[error("Please fill in your {0}")]
    MissingField(&'static str),

    /// The email address is not in a local-part@domain.tld shape.
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}

/// Contact details collected by the checkout panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    /// Customer name.
    pub name: String,

    /// Customer email address.
    pub email: String,

    /// Customer phone number.
    pub phone: String,
}

impl ContactDetails {
    /// Validate that every field is filled in and the email is well formed.
    ///
    /// Validation failure blocks submission; it causes no flow transition and
    /// the user can correct the fields and retry.
    ///
    /// # Errors
    ///
    /// - [`ContactError::MissingField`]: a field is empty after trimming.
    /// - [`ContactError::InvalidEmail`]: the email does not match the
    ///   local-part@domain.tld shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }

        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }

        if self.phone.trim().is_empty() {
            return Err(ContactError::MissingField("phone"));
        }

        let email = self.email.trim();

        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        Ok(())
    }
}

/// Check for the local-part@domain.tld shape required before submission.
///
/// Deliberately shallow: one `@`, a non-empty local part, and a domain whose
/// last dot separates two non-empty labels. Anything stricter belongs to the
/// submission endpoint.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');

    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}
