//! Fujitsu FGCP API binding
//!
//! FGCP exposes a single endpoint where every operation is a GET carrying an
//! `Action` query parameter plus an API `Version`, answered with `text/xml`.
//! Responses wrap their payload in an envelope carrying `responseStatus` and
//! `responseMessage`.
//!
//! - [`client`] - The Action/Version request protocol
//! - [`disk_images`] - Disk image resource operations

pub mod client;
pub mod disk_images;

pub use client::FgcpClient;
pub use disk_images::DiskImage;
