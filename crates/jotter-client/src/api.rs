//! JSON client for the notes API.

use jotter_core::Note;
use serde_json::{json, Value};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an error status; `message` is the server's
    /// text, surfaced to the user verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        let response = self.http.get(self.notes_url()).send().await?;
        decode(response).await
    }

    pub async fn create_note(&self, title: &str, content: &str) -> Result<Note, ClientError> {
        let response = self
            .http
            .post(self.notes_url())
            .json(&json!({ "title": title, "content": content }))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Note, ClientError> {
        let response = self
            .http
            .put(self.notes_url())
            .json(&json!({ "id": id, "title": title, "content": content }))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.notes_url())
            .query(&[("id", id)])
            .send()
            .await?;
        decode::<Value>(response).await.map(|_| ())
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    // Pull the server's message out of the error body when there is one.
    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| "Request failed".to_string());

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.notes_url(), "http://localhost:3000/notes");
    }
}
