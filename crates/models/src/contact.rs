use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::ModelError, non_blank, present_id};

/// Store key holding the submission list unless configured otherwise.
pub const DEFAULT_CONTACT_KEY: &str = "igbo-heritage-contact-submissions";

/// A message sent through the Contact page form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub read: bool,
}

/// Raw contact form body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Trimmed, complete contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Body of the mark-read call. `read` stays untyped so a non-boolean value
/// is reported as a validation failure instead of a decode failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadStatusUpdate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub read: Option<Value>,
}

pub const MSG_ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_ID_AND_READ_REQUIRED: &str = "ID and read status are required";
pub const MSG_ID_REQUIRED: &str = "Submission ID is required";

impl ContactForm {
    pub fn validate(self) -> Result<NewSubmission, ModelError> {
        let field = |v: &Option<String>| {
            non_blank(v.as_deref())
                .map(str::to_string)
                .ok_or_else(|| ModelError::Validation(MSG_ALL_FIELDS_REQUIRED.into()))
        };
        Ok(NewSubmission {
            name: field(&self.name)?,
            email: field(&self.email)?,
            subject: field(&self.subject)?,
            message: field(&self.message)?,
        })
    }
}

impl ReadStatusUpdate {
    /// Target id and the new flag.
    pub fn validate(self) -> Result<(String, bool), ModelError> {
        let missing = || ModelError::Validation(MSG_ID_AND_READ_REQUIRED.into());
        let id = present_id(self.id.as_deref()).ok_or_else(missing)?.to_string();
        let read = self.read.as_ref().and_then(Value::as_bool).ok_or_else(missing)?;
        Ok((id, read))
    }
}

impl ContactSubmission {
    /// Fresh, unread submission.
    pub fn new(id: String, timestamp: i64, form: NewSubmission) -> Self {
        Self {
            id,
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
            timestamp,
            read: false,
        }
    }
}

/// Submission id taken from a query string, required for delete.
pub fn require_submission_id(id: Option<&str>) -> Result<&str, ModelError> {
    present_id(id).ok_or_else(|| ModelError::Validation(MSG_ID_REQUIRED.into()))
}
