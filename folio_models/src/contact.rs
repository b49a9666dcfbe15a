use std::{collections::BTreeMap, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use thiserror::Error;

/// Shape check for contact email addresses: `local@domain.tld` with no
/// whitespace and no extra `@`. Deliberately more permissive than RFC 5322
/// so unusual but deliverable addresses are not rejected. Applied to the
/// raw value, so surrounding whitespace makes an address invalid rather
/// than missing.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    validate(regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactEmail(String);

#[nutype(
    sanitize(trim),
    validate(len_char_min = 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageBody(String);

/// A complete, validated contact message ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: ContactName,
    pub email: ContactEmail,
    pub body: ContactMessageBody,
}

/// Raw field values of an active contact form session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    /// Evaluates the full rule set. Every rule is checked independently and
    /// all violations are reported together; an empty result means the
    /// input parses into a [`ContactMessage`].
    pub fn validate(&self) -> ValidationErrors {
        ContactMessage::try_from(self.clone())
            .err()
            .unwrap_or_default()
    }
}

impl TryFrom<ContactFormInput> for ContactMessage {
    type Error = ValidationErrors;

    fn try_from(input: ContactFormInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = match ContactName::try_new(input.name) {
            Ok(name) => Some(name),
            Err(ContactNameError::NotEmptyViolated) => {
                errors.insert(ContactField::Name, ValidationError::NameRequired);
                None
            }
        };

        let email = if input.email.trim().is_empty() {
            errors.insert(ContactField::Email, ValidationError::EmailRequired);
            None
        } else {
            match ContactEmail::try_new(input.email) {
                Ok(email) => Some(email),
                Err(ContactEmailError::RegexViolated) => {
                    errors.insert(ContactField::Email, ValidationError::EmailInvalid);
                    None
                }
            }
        };

        let body = if input.message.trim().is_empty() {
            errors.insert(ContactField::Message, ValidationError::MessageRequired);
            None
        } else {
            match ContactMessageBody::try_new(input.message) {
                Ok(body) => Some(body),
                Err(ContactMessageBodyError::LenCharMinViolated) => {
                    errors.insert(ContactField::Message, ValidationError::MessageTooShort);
                    None
                }
            }
        };

        match (name, email, body) {
            (Some(name), Some(email), Some(body)) => Ok(Self { name, email, body }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field-scoped, user-correctable input problem. The display strings are
/// shown verbatim next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Mapping from form field to its current validation error. An empty
/// mapping signals valid input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ContactField, ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: ContactField, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: ContactField) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, ValidationError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

/// UI status of a contact form session. Never persisted; every session
/// starts over at [`SubmissionState::Idle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}
