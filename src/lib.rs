//! crosscloud - client bindings for CloudSigma, Fujitsu FGCP, and vCloud Director
//!
//! Each provider module is a thin, typed binding over that provider's REST
//! surface. Nothing here retries, caches, or coordinates: every operation is
//! one request/response round trip, and all failures surface from the
//! transport with context attached.
//!
//! # Module Structure
//!
//! - [`auth`] - Request filters injecting per-provider authentication
//! - [`http`] - Shared HTTP utilities for REST API calls
//! - [`config`] - Provider endpoints and credentials
//! - [`cloudsigma`] - CloudSigma v2 API (JSON, paginated listings)
//! - [`fgcp`] - Fujitsu FGCP API (Action-parameter protocol, XML)
//! - [`vcloud`] - vCloud Director domain types
//!
//! # Example
//!
//! ```ignore
//! use crosscloud::cloudsigma::client::CloudSigmaClient;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = CloudSigmaClient::new(
//!         "https://zrh.cloudsigma.com/api/2.0",
//!         "user@example.com",
//!         "secret",
//!     )?;
//!     let ips = client.list_all_ips().await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod cloudsigma;
pub mod config;
pub mod fgcp;
pub mod http;
pub mod vcloud;
