use api_types::expense::{Expense, ExpenseNew};
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::error::{AppError, Result};

/// Failure modes of the expense store, as seen from the dashboard.
///
/// `Transport` covers an unreachable store; the others map non-2xx
/// responses. Every failure is surfaced as a toast and logged at the call
/// site; nothing is retried automatically.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not found")]
    NotFound,
    #[error("validation: {0}")]
    Validation(String),
    #[error("server: {0}")]
    Server(String),
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Thin client over the remote expense collection.
///
/// Owns request/response shaping only: list is full-replace, create returns
/// the record with its store-assigned id, delete targets one id. No
/// pagination, no caching, no update call.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        // Url::join drops the last path segment without this.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|err| AppError::BaseUrl(format!("{base_url}: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// `GET /expenses`. The returned list replaces whatever the caller held;
    /// the store returns records in descending date order.
    pub async fn list(&self) -> std::result::Result<Vec<Expense>, ClientError> {
        let endpoint = self
            .base_url
            .join("expenses")
            .map_err(|err| ClientError::Server(format!("invalid endpoint: {err}")))?;

        let res = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res.json::<Vec<Expense>>().await.map_err(ClientError::Transport);
        }

        Err(error_from_response(res).await)
    }

    /// `POST /expenses`. The store assigns the id and defaults the date.
    pub async fn create(&self, draft: ExpenseNew) -> std::result::Result<Expense, ClientError> {
        let endpoint = self
            .base_url
            .join("expenses")
            .map_err(|err| ClientError::Server(format!("invalid endpoint: {err}")))?;

        let res = self
            .http
            .post(endpoint)
            .json(&draft)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res.json::<Expense>().await.map_err(ClientError::Transport);
        }

        Err(error_from_response(res).await)
    }

    /// `DELETE /expenses/{id}`.
    pub async fn delete(&self, id: &str) -> std::result::Result<(), ClientError> {
        let endpoint = self
            .base_url
            .join(&format!("expenses/{id}"))
            .map_err(|err| ClientError::Server(format!("invalid endpoint: {err}")))?;

        let res = self
            .http
            .delete(endpoint)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return Ok(());
        }

        Err(error_from_response(res).await)
    }
}

async fn error_from_response(res: reqwest::Response) -> ClientError {
    let status = res.status();
    let body = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.error)
        .unwrap_or_else(|_| "unknown error".to_string());

    match status.as_u16() {
        404 => ClientError::NotFound,
        400 | 422 => ClientError::Validation(body),
        _ => ClientError::Server(body),
    }
}
