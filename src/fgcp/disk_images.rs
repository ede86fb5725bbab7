//! Disk image operations
//!
//! Disk images live entirely server-side: the client fetches attributes,
//! requests single-attribute changes, and requests deregistration, but never
//! holds a writable copy between calls. Attribute names and values are not
//! validated locally; the server is the sole authority.

use super::client::FgcpClient;
use anyhow::{Context, Result};
use serde::Deserialize;

/// A registered disk image
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiskImage {
    #[serde(rename = "diskimageId")]
    pub id: String,
    #[serde(rename = "diskimageName", default)]
    pub name: Option<String>,
    /// Size in GB
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(rename = "osName", default)]
    pub os_name: Option<String>,
    #[serde(rename = "osType", default)]
    pub os_type: Option<String>,
    #[serde(rename = "creatorName", default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub registrant: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Envelope of a GetDiskImageAttributes response
#[derive(Debug, Deserialize)]
struct GetDiskImageResponse {
    #[serde(rename = "responseStatus")]
    status: String,
    #[serde(rename = "responseMessage", default)]
    message: Option<String>,
    #[serde(rename = "diskimage", default)]
    disk_image: Option<DiskImage>,
}

/// Status-only envelope for update/deregister responses
#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(rename = "responseStatus")]
    status: String,
    #[serde(rename = "responseMessage", default)]
    message: Option<String>,
}

/// A 200 reply can still carry a failure in the envelope
fn check_status(status: &str, message: Option<&str>) -> Result<()> {
    if status == "SUCCESS" {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "FGCP request failed: {} - {}",
            status,
            message.unwrap_or("no message")
        ))
    }
}

impl FgcpClient {
    /// Fetch one disk image's attributes
    pub async fn get_disk_image(&self, id: &str) -> Result<DiskImage> {
        let body = self
            .action("GetDiskImageAttributes", &[("diskImageId", id)])
            .await?;

        let response: GetDiskImageResponse = quick_xml::de::from_str(&body)
            .context("Failed to parse GetDiskImageAttributes response")?;
        check_status(&response.status, response.message.as_deref())?;

        response
            .disk_image
            .ok_or_else(|| anyhow::anyhow!("response contains no diskimage element"))
    }

    /// Request a single named-attribute change on a disk image
    pub async fn update_disk_image(
        &self,
        disk_image_id: &str,
        locale_id: &str,
        attribute_name: &str,
        attribute_value: &str,
    ) -> Result<()> {
        let body = self
            .action(
                "UpdateDiskImageAttribute",
                &[
                    ("diskImageId", disk_image_id),
                    ("updateLcId", locale_id),
                    ("attributeName", attribute_name),
                    ("attributeValue", attribute_value),
                ],
            )
            .await?;

        let response: StatusResponse = quick_xml::de::from_str(&body)
            .context("Failed to parse UpdateDiskImageAttribute response")?;
        check_status(&response.status, response.message.as_deref())
    }

    /// Request removal of a disk image registration
    pub async fn deregister_disk_image(&self, id: &str) -> Result<()> {
        let body = self
            .action("UnregisterDiskImage", &[("diskImageId", id)])
            .await?;

        let response: StatusResponse = quick_xml::de::from_str(&body)
            .context("Failed to parse UnregisterDiskImage response")?;
        check_status(&response.status, response.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_get_response_envelope() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
            <GetDiskImageAttributesResponse>
              <responseMessage>Processing was completed.</responseMessage>
              <responseStatus>SUCCESS</responseStatus>
              <diskimage>
                <diskimageId>IMG_A1B2C3</diskimageId>
                <diskimageName>CentOS 5.4 32bit(EN)</diskimageName>
                <size>10</size>
                <osName>CentOS 5.4 32bit (English)</osName>
                <osType>linux</osType>
                <creatorName>fsys</creatorName>
                <registrant>fsys</registrant>
                <description>auto scale test</description>
              </diskimage>
            </GetDiskImageAttributesResponse>"#;

        let response: GetDiskImageResponse = quick_xml::de::from_str(body).unwrap();
        assert_eq!(response.status, "SUCCESS");

        let image = response.disk_image.unwrap();
        assert_eq!(image.id, "IMG_A1B2C3");
        assert_eq!(image.name.as_deref(), Some("CentOS 5.4 32bit(EN)"));
        assert_eq!(image.size, Some(10.0));
        assert_eq!(image.os_type.as_deref(), Some("linux"));
    }

    #[test]
    fn parses_status_only_envelope() {
        let body = r#"<UnregisterDiskImageResponse>
              <responseMessage>Processing was completed.</responseMessage>
              <responseStatus>SUCCESS</responseStatus>
            </UnregisterDiskImageResponse>"#;

        let response: StatusResponse = quick_xml::de::from_str(body).unwrap();
        assert!(check_status(&response.status, response.message.as_deref()).is_ok());
    }

    #[test]
    fn error_status_surfaces_message() {
        let err = check_status("RESOURCE_NOT_FOUND", Some("Illegal state.")).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("RESOURCE_NOT_FOUND"));
        assert!(text.contains("Illegal state."));
    }
}
