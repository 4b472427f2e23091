mod mailto;
mod pipeline;
mod validation;

pub use mailto::{fallback_body, mailto_uri, MailHandoff};
pub use pipeline::{ContactPipeline, Delivery, PipelineState, SubmissionResult, SubmitError};
pub use validation::{validate, FieldErrors, ValidationError};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn all() -> [Field; 3] {
        [Self::Email, Self::Subject, Self::Message]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn new(
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|f| self.get(*f).is_empty())
    }

    /// Clears the form after a successful submission; anything else keeps the
    /// entered text for correction. Returns whether the form was reset.
    pub fn settle(&mut self, result: &SubmissionResult) -> bool {
        if result.is_success() {
            *self = Self::default();
            true
        } else {
            false
        }
    }
}
