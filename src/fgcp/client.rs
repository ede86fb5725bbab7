//! FGCP client
//!
//! Carries the shared request protocol: every operation goes to the same
//! endpoint as a GET with `Action` and `Version` query parameters, and the
//! authentication filter appends the account's access key material.

use crate::auth::{QueryKeyAuth, RequestFilter};
use crate::http::HttpClient;
use anyhow::{Context, Result};
use std::sync::Arc;
use url::Url;

/// API version sent with every request
pub const VERSION: &str = "2012-02-18";

/// Fujitsu FGCP API client
#[derive(Clone)]
pub struct FgcpClient {
    http: HttpClient,
    endpoint: Url,
    filter: Arc<dyn RequestFilter>,
}

impl FgcpClient {
    /// Create a client authenticating with access-key query parameters
    pub fn new(endpoint: &str, access_key_id: &str, signature: &str) -> Result<Self> {
        Self::with_filter(endpoint, Arc::new(QueryKeyAuth::new(access_key_id, signature)))
    }

    /// Create a client with a custom authentication filter
    pub fn with_filter(endpoint: &str, filter: Arc<dyn RequestFilter>) -> Result<Self> {
        let endpoint = Url::parse(endpoint).context("Invalid FGCP endpoint")?;

        Ok(Self {
            http: HttpClient::new()?,
            endpoint,
            filter,
        })
    }

    /// Issue one Action request and return the raw XML body
    pub(crate) async fn action(&self, action: &str, params: &[(&str, &str)]) -> Result<String> {
        let mut query: Vec<(&str, &str)> = vec![("Action", action)];
        query.extend_from_slice(params);
        query.push(("Version", VERSION));

        self.http
            .get_text(self.endpoint.as_str(), &query, self.filter.as_ref())
            .await
    }
}
