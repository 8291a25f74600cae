//! Row-oriented client for the hosted data store (Supabase/PostgREST).
//!
//! Every table access is a thin pass-through: filters and ordering map
//! directly onto PostgREST query parameters and rows deserialize into the
//! typed models. Nothing here owns state beyond the connection handle.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod activities;
pub mod distributions;
pub mod moderators;
pub mod submissions;

/// Errors from the data-store boundary.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("data store returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Handle to the data store's REST interface.
///
/// Cheap to clone; the underlying HTTP client pools connections.
#[derive(Clone)]
pub struct Db {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Db {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Select rows matching the given PostgREST query parameters.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, DbError> {
        let resp = self
            .request(reqwest::Method::GET, table)
            .query(query)
            .send()
            .await?;
        Self::rows(resp).await
    }

    /// Insert a row, returning the created representation.
    pub async fn insert<T, B>(&self, table: &str, body: &B) -> Result<Vec<T>, DbError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .request(reqwest::Method::POST, table)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        Self::rows(resp).await
    }

    /// Update rows matching `query`, returning the updated representations.
    /// An empty result means no row matched.
    pub async fn update<T, B>(
        &self,
        table: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<Vec<T>, DbError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .request(reqwest::Method::PATCH, table)
            .header("Prefer", "return=representation")
            .query(query)
            .json(body)
            .send()
            .await?;
        Self::rows(resp).await
    }

    /// Delete rows matching `query`, returning the deleted representations.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, DbError> {
        let resp = self
            .request(reqwest::Method::DELETE, table)
            .header("Prefer", "return=representation")
            .query(query)
            .send()
            .await?;
        Self::rows(resp).await
    }

    async fn rows<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Vec<T>, DbError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DbError::Status { status, body });
        }
        Ok(resp.json().await?)
    }
}
