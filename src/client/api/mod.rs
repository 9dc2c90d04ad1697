//! Browser side access to the menuboard HTTP API.
//!
//! One async function per endpoint. Every call sends the session cookie and turns a non 2xx
//! answer into an [`ApiError`] carrying the status, so pages can tell a missing session from
//! a missing row or a conflict.

pub mod auth;
pub mod business;
pub mod catalog;
pub mod menu;
pub mod newsletter;
pub mod user;

use serde::{de::DeserializeOwned, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// HTTP status, `0` when the request never got an answer
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Sends a request and returns the body of a successful answer.
#[cfg(feature = "web")]
async fn send(method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
    use reqwasm::http::{Request, RequestCredentials};

    use crate::model::api::ErrorDto;

    let mut request = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
    .credentials(RequestCredentials::Include);

    if let Some(body) = body {
        request = request
            .header("Content-Type", "application/json")
            .body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::new(0, format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if (200..300).contains(&status) {
        return Ok(text);
    }

    let message = match serde_json::from_str::<ErrorDto>(&text) {
        Ok(error_dto) => error_dto.error,
        Err(_) if !text.is_empty() => text,
        Err(_) => format!("Request failed with status {}", status),
    };

    Err(ApiError::new(status, message))
}

#[cfg(not(feature = "web"))]
async fn send(_method: Method, url: &str, _body: Option<String>) -> Result<String, ApiError> {
    Err(ApiError::new(
        0,
        format!("Request to {} is only available in the browser", url),
    ))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body)
        .map_err(|e| ApiError::new(0, format!("Failed to encode request: {}", e)))
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text)
        .map_err(|e| ApiError::new(0, format!("Failed to parse response: {}", e)))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    decode(&send(Method::Get, url, None).await?)
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    decode(&send(Method::Post, url, Some(encode(body)?)).await?)
}

async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    decode(&send(Method::Put, url, Some(encode(body)?)).await?)
}

async fn delete(url: &str) -> Result<(), ApiError> {
    send(Method::Delete, url, None).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn status_helpers_match_http_codes() {
        let error = ApiError::new(409, "This alias is already in use. Please choose a different one.");

        assert!(error.is_conflict());
        assert!(!error.is_not_found());
        assert_eq!(
            error.to_string(),
            "This alias is already in use. Please choose a different one."
        );
    }
}
