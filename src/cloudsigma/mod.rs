//! CloudSigma v2 API binding
//!
//! JSON API with limit/offset pagination. List responses arrive as an
//! envelope of `objects` plus `meta`, parsed into a [`pagination::PaginatedCollection`].
//!
//! - [`client`] - CloudSigma client (HTTP basic auth)
//! - [`pagination`] - Pagination options, metadata, and the list envelope
//! - [`ips`] - IP address resources

pub mod client;
pub mod ips;
pub mod pagination;

pub use client::CloudSigmaClient;
pub use ips::Ip;
pub use pagination::{PageMeta, PaginatedCollection, PaginationOptions};
