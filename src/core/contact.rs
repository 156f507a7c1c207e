// src/core/contact.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use thiserror::Error;

/// Fields of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// A contact message. It is only echoed back to the user, never sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required.")]
    Required(ContactField),
    #[error("'{0}' is not a valid email address.")]
    InvalidEmail(String),
}

/// What the contact page shows once a message is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfirmation {
    pub name: String,
    pub subject: String,
    pub email: String,
}

impl ContactMessage {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Validates the form and builds the confirmation echoed to the user.
    pub fn submit(&self) -> Result<ContactConfirmation, ContactError> {
        if let Some(missing) = ContactField::iter().find(|f| self.field(*f).trim().is_empty()) {
            return Err(ContactError::Required(missing));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => return Err(ContactError::InvalidEmail(email.to_string())),
        }
        Ok(ContactConfirmation {
            name: self.name.trim().to_string(),
            subject: self.subject.trim().to_string(),
            email: email.to_string(),
        })
    }
}

impl ContactField {
    pub fn next(self) -> Self {
        let all: Vec<_> = Self::iter().collect();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all: Vec<_> = Self::iter().collect();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Pricing".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn valid_message_is_echoed() {
        let confirmation = filled().submit().unwrap();
        assert_eq!(confirmation.name, "Ada");
        assert_eq!(confirmation.subject, "Pricing");
        assert_eq!(confirmation.email, "ada@example.com");
    }

    #[test]
    fn blank_field_is_named() {
        let mut msg = filled();
        msg.subject = "   ".into();
        assert_eq!(msg.submit(), Err(ContactError::Required(ContactField::Subject)));

        assert_eq!(
            ContactMessage::default().submit(),
            Err(ContactError::Required(ContactField::Name))
        );
    }

    #[test]
    fn email_needs_both_sides_of_the_at() {
        for bad in ["ada", "@example.com", "ada@", "a@b@c"] {
            let mut msg = filled();
            msg.email = bad.into();
            assert!(matches!(msg.submit(), Err(ContactError::InvalidEmail(_))), "{bad}");
        }
    }

    #[test]
    fn field_focus_wraps() {
        assert_eq!(ContactField::Message.next(), ContactField::Name);
        assert_eq!(ContactField::Name.previous(), ContactField::Message);
        assert_eq!(ContactField::Email.next(), ContactField::Subject);
    }
}
