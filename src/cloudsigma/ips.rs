//! CloudSigma IP resources

use serde::Deserialize;

/// Reference to another API resource (owner, server, ...)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceRef {
    pub uuid: String,
    pub resource_uri: String,
}

/// An IP address allocation
///
/// Unknown response fields are ignored so new server-side attributes do not
/// break parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ip {
    pub uuid: String,
    pub resource_uri: String,
    #[serde(default)]
    pub owner: Option<ResourceRef>,
    #[serde(default)]
    pub server: Option<ResourceRef>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub nameservers: Vec<String>,
}
