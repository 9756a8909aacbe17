use reqwest::{Client, StatusCode, header};
use thiserror::Error;
use uuid::Uuid;

use crate::core::idea::Idea;

/// Errors from the hosted data service.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{op} returned {status}: {body}")]
    Status {
        op: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("response carried no usable total count")]
    MissingCount,
    #[error("{op} returned no rows")]
    NoRows { op: &'static str },
    #[error("idea {0} not found on remote")]
    NotFound(Uuid),
}

/// Minimal client for the hosted `ideas` table, spoken over the service's
/// PostgREST endpoint. One method per operation; no query building beyond
/// what these four calls need.
pub struct IdeasClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl IdeasClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, RemoteError> {
        let http = Client::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/ideas", self.base_url)
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Fetch one page of ideas, newest first, along with the exact total
    /// row count reported by the service.
    ///
    /// `from` and `to` are inclusive zero-based item offsets.
    pub async fn fetch_range(&self, from: u64, to: u64) -> Result<(Vec<Idea>, u64), RemoteError> {
        let url = format!("{}?select=*&order=created_at.desc", self.table_url());
        let resp = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, self.auth_header())
            .header("Range-Unit", "items")
            .header(header::RANGE, format!("{}-{}", from, to))
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                op: "list",
                status,
                body,
            });
        }

        let total = resp
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or(RemoteError::MissingCount)?;

        let ideas: Vec<Idea> = resp.json().await?;
        Ok((ideas, total))
    }

    /// GET a single idea by id, if it still exists.
    pub async fn fetch_one(&self, id: Uuid) -> Result<Option<Idea>, RemoteError> {
        let url = format!("{}?select=*&id=eq.{}", self.table_url(), id);
        let resp = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                op: "get",
                status,
                body,
            });
        }

        let mut rows: Vec<Idea> = resp.json().await?;
        Ok(rows.pop())
    }

    /// Insert a new idea and return the stored row.
    pub async fn insert(&self, content: &str) -> Result<Idea, RemoteError> {
        let resp = self
            .http
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, self.auth_header())
            .header("Prefer", "return=representation")
            .json(&serde_json::json!([{ "content": content }]))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                op: "insert",
                status,
                body,
            });
        }

        let mut rows: Vec<Idea> = resp.json().await?;
        rows.pop().ok_or(RemoteError::NoRows { op: "insert" })
    }

    /// Replace an idea's content and return the stored row.
    pub async fn update(&self, id: Uuid, content: &str) -> Result<Idea, RemoteError> {
        let url = format!("{}?id=eq.{}", self.table_url(), id);
        let resp = self
            .http
            .patch(&url)
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, self.auth_header())
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                op: "update",
                status,
                body,
            });
        }

        // Zero matched rows comes back as an empty representation
        let mut rows: Vec<Idea> = resp.json().await?;
        rows.pop().ok_or(RemoteError::NotFound(id))
    }

    /// DELETE an idea. Deleting a row that is already gone is not an error.
    pub async fn delete(&self, id: Uuid) -> Result<(), RemoteError> {
        let url = format!("{}?id=eq.{}", self.table_url(), id);
        let resp = self
            .http
            .delete(&url)
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        match resp.status() {
            StatusCode::NO_CONTENT | StatusCode::OK | StatusCode::NOT_FOUND => Ok(()),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(RemoteError::Status {
                    op: "delete",
                    status,
                    body,
                })
            }
        }
    }
}

/// Pull the total row count out of a `Content-Range` header value.
///
/// The service answers `"0-9/42"` for a populated window and `"*/0"` for an
/// empty table; a `*` total (count not requested) yields `None`.
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}
