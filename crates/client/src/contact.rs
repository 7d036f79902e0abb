use models::contact::ContactSubmission;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{check, decode, ClientError, SiteClient};

/// Fields of the public contact form.
#[derive(Debug, Clone, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Server acknowledgement of a stored submission.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Receipt {
    pub message: String,
    pub id: String,
}

pub struct ContactApi<'a> {
    client: &'a SiteClient,
}

impl<'a> ContactApi<'a> {
    pub(crate) fn new(client: &'a SiteClient) -> Self {
        Self { client }
    }

    fn endpoint(&self) -> String {
        self.client.url("/contact")
    }

    pub async fn submit(&self, form: &ContactRequest) -> Result<Receipt, ClientError> {
        let res = self.client.http().post(self.endpoint()).json(form).send().await?;
        decode(res, "Failed to submit contact form").await
    }

    pub async fn list(&self) -> Result<Vec<ContactSubmission>, ClientError> {
        let res = self.client.http().get(self.endpoint()).send().await?;
        decode(res, "Failed to fetch submissions").await
    }

    pub async fn mark_read(&self, id: &str, read: bool) -> Result<ContactSubmission, ClientError> {
        let res = self.client.http().put(self.endpoint()).json(&json!({"id": id, "read": read})).send().await?;
        decode(res, "Failed to update submission").await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let res = self.client.http().delete(self.endpoint()).query(&[("id", id)]).send().await?;
        check(res, "Failed to delete submission").await?;
        Ok(())
    }
}
