//! vCloud Director domain types
//!
//! - [`link`] - Typed hyperlinks attached to vCloud resources

pub mod link;

pub use link::{Link, LinkBuilder};
