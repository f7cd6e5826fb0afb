//! HTTP transport for the site forms.
//!
//! [`ApiClient`] posts JSON bodies to `/api/contact` and `/api/newsletter`
//! on a configured origin. Any 2xx answer is success; there are no retries.

use dcore::{ContactForm, Error, NewsletterForm, Result, Submitter};
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};
use serde::Serialize;
use std::time::Duration;

/// Path of the contact endpoint.
pub const CONTACT_PATH: &str = "/api/contact";
/// Path of the newsletter endpoint.
pub const NEWSLETTER_PATH: &str = "/api/newsletter";

/// Client for the form endpoints.
///
/// Holds a `reqwest::Client`, pre-built headers and the origin the
/// endpoints live under.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    headers: HeaderMap,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the endpoints under `base_url`.
    pub fn new(client: Client, base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            client,
            headers,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Create a client that gives up on a request after `timeout`.
    ///
    /// A request that times out fails like any other transport error.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self::new(client, base_url))
    }

    /// Get the origin the endpoints live under.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST `body` as JSON and map the answer to success or failure.
    async fn post(&self, path: &str, body: &impl Serialize) -> Result<()> {
        let url = self.endpoint(path);
        if let Ok(body) = serde_json::to_string(body) {
            tracing::trace!("request to {url}: {body}");
        }

        let response = self
            .client
            .request(Method::POST, &url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("{url} answered {status}");
            Ok(())
        } else {
            Err(Error::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

impl Submitter for ApiClient {
    async fn contact(&self, form: &ContactForm) -> Result<()> {
        self.post(CONTACT_PATH, form).await
    }

    async fn newsletter(&self, form: &NewsletterForm) -> Result<()> {
        self.post(NEWSLETTER_PATH, form).await
    }
}
