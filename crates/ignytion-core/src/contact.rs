//! Contact form state
//!
//! Submitting sends nothing anywhere: a complete form is cleared and the
//! view shows a success toast.

use crate::notice::Notice;
use crate::prelude::*;

pub const SENT_MESSAGE: &str = "Message sent! We'll get back to you soon.";

/// Named inputs of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Company)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Required fields that are still empty, in form order
    ///
    /// Presence only: whitespace counts as content, matching the browser's
    /// `required` attribute.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    /// Submit the form
    ///
    /// On success every field is cleared and exactly one success notice is
    /// returned. A missing required field leaves the form untouched.
    pub fn submit(&mut self) -> Result<Notice> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(Error::MissingFields {
                fields: missing.into_iter().map(ContactField::key).collect(),
            });
        }

        info!(subject = %self.subject, "contact form submitted");
        *self = Self::default();
        Ok(Notice::success(SENT_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Subject, "PDK access");
        form.set(ContactField::Message, "Hello");
        form
    }

    #[test]
    fn test_company_is_optional() {
        assert!(!ContactField::Company.is_required());
        assert!(filled().missing_required().is_empty());
    }

    #[test]
    fn test_submit_clears_every_field() {
        let mut form = filled();
        form.set(ContactField::Company, "Acme");

        let notice = form.submit().unwrap();

        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, SENT_MESSAGE);
        for field in ContactField::ALL {
            assert_eq!(form.get(field), "", "{field:?}");
        }
    }

    #[test]
    fn test_submit_with_missing_fields_keeps_input() {
        let mut form = filled();
        form.set(ContactField::Email, "");
        form.set(ContactField::Message, "");
        let before = form.clone();

        let err = form.submit().unwrap_err();

        assert_eq!(
            err,
            Error::MissingFields {
                fields: vec!["email", "message"]
            }
        );
        assert_eq!(form, before);
    }

    #[test]
    fn test_empty_form_reports_all_required() {
        let form = ContactForm::new();
        assert_eq!(
            form.missing_required(),
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Subject,
                ContactField::Message
            ]
        );
    }
}
