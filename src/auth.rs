//! Request authentication filters
//!
//! Each provider authenticates differently: CloudSigma takes HTTP basic
//! credentials, FGCP carries an access key and signature as query
//! parameters. A filter decorates the outbound request and is injected into
//! each provider client at construction, so the bindings themselves stay
//! free of credential handling.

use reqwest::RequestBuilder;

/// Decorates an outbound request with authentication material
pub trait RequestFilter: Send + Sync {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder;
}

/// HTTP basic authentication (CloudSigma email/password)
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl RequestFilter for BasicAuth {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.username, Some(&self.password))
    }
}

/// Bearer token authentication
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

impl RequestFilter for BearerAuth {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

/// Access-key authentication carried as query parameters (FGCP style)
///
/// The signature is computed by the caller; how it is derived from the
/// account certificate is outside this crate's scope.
#[derive(Clone)]
pub struct QueryKeyAuth {
    access_key_id: String,
    signature: String,
}

impl QueryKeyAuth {
    pub fn new(access_key_id: &str, signature: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            signature: signature.to_string(),
        }
    }
}

impl RequestFilter for QueryKeyAuth {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request.query(&[
            ("AccessKeyId", self.access_key_id.as_str()),
            ("Signature", self.signature.as_str()),
        ])
    }
}

/// No-op filter for endpoints that need no authentication
#[derive(Clone, Copy, Default)]
pub struct NoAuth;

impl RequestFilter for NoAuth {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request
    }
}
