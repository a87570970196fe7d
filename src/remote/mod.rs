//! Secured HTTP transport to the remote forum API.
//!
//! One interception point for every request: the bearer credential is
//! attached on the way out, and failures are mapped centrally on the way
//! back. A 401 from the remote store terminates the session before the error
//! reaches the caller; business-rule rejections pass through untouched so the
//! triggering action can show its own message.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::errors::ApiError;
use crate::session::Session;

/// HTTP transport bound to one remote store and one session.
#[derive(Clone)]
pub struct Remote {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl Remote {
    pub fn new(config: &Config, session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(self.http.get(self.url(path))).await?;
        Ok(resp.json().await?)
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let resp = self.send(self.http.get(self.url(path)).query(query)).await?;
        Ok(resp.json().await?)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(resp.json().await?)
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(self.http.patch(self.url(path))).await?;
        Ok(resp.json().await?)
    }

    pub async fn patch_body<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.send(self.http.patch(self.url(path)).json(body)).await?;
        Ok(resp.json().await?)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(self.http.delete(self.url(path))).await?;
        Ok(resp.json().await?)
    }

    /// Attach the credential, send, and map non-success statuses.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let snapshot = self.session.snapshot()?;
        let resp = request.bearer_auth(&snapshot.access_token).send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Credential rejected by remote store, ending session");
            self.session.terminate();
        }
        Err(ApiError::from_status(status, message))
    }
}
