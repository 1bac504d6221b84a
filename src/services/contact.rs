// src/services/contact.rs

use crate::services::generate_reference_default;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use tracing::info;

/// Subjects offered by the contact form's select box.
pub const SUBJECTS: [&str; 5] = [
    "General Inquiry",
    "Property Listing",
    "Buying a Property",
    "Selling a Property",
    "Technical Support",
];

/// Field name -> message.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Raw contact form as typed by the visitor. Kept around on validation
/// failure so the page can re-fill the inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Self {
        let field = |k: &str| pairs.get(k).map(|v| v.trim().to_string()).unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            subject: field("subject"),
            message: field("message"),
        }
    }

    /// Required: name, email, subject, message. Phone is optional.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.is_empty() {
            errors.insert("name", "Please enter your name.".into());
        }
        if !looks_like_email(&self.email) {
            errors.insert("email", "Please enter a valid email address.".into());
        }
        if !SUBJECTS.contains(&self.subject.as_str()) {
            errors.insert("subject", "Please select a subject.".into());
        }
        if self.message.is_empty() {
            errors.insert("message", "Please enter a message.".into());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Minimal sanity check, not RFC 5322.
fn looks_like_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@') && !email.starts_with('@') && !email.ends_with('@')
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub reference: String,
    pub received_at: DateTime<Utc>,
    pub form: ContactForm,
}

/// Accepted contact messages, kept in memory for the life of the process.
#[derive(Debug, Default)]
pub struct ContactInbox {
    messages: Mutex<Vec<ContactMessage>>,
}

impl ContactInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores the form.
    pub fn submit(
        &self,
        form: ContactForm,
        now: DateTime<Utc>,
    ) -> Result<ContactMessage, FieldErrors> {
        form.validate()?;

        let message = ContactMessage {
            reference: generate_reference_default(),
            received_at: now,
            form,
        };

        self.lock().push(message.clone());

        info!(
            reference = %message.reference,
            subject = %message.form.subject,
            inbox = self.count(),
            "contact message received"
        );
        Ok(message)
    }

    /// Number of messages received since startup.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub fn messages(&self) -> Vec<ContactMessage> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ContactMessage>> {
        // A panic while holding the lock leaves the Vec intact; keep serving.
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}
