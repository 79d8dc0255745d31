//! Stored tenant documents

use std::path::Path;

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A document stored against a tenant (lease scan, ID, meter photo)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantDocument {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub file_name: String,
    pub mime_type: String,
    /// Full file content as a base64 `data:` URI
    pub data_uri: String,
    /// One-sentence description produced by the AI helper, if requested
    #[serde(default)]
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl TenantDocument {
    pub fn new(tenant_id: Uuid, file_name: String, mime_type: String, data_uri: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            file_name,
            mime_type,
            data_uri,
            description: None,
            uploaded_at: Utc::now(),
        }
    }

    /// Read an image file from disk into a document record.
    ///
    /// The format is sniffed from the file content, not the extension; only
    /// image files are accepted since the AI describe helper is vision-only.
    pub fn from_file(tenant_id: Uuid, path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read document file {}", path.display()))?;
        if bytes.is_empty() {
            bail!("Document file {} is empty", path.display());
        }

        let format = image::guess_format(&bytes)
            .with_context(|| format!("{} is not a recognized image file", path.display()))?;
        let mime_type = format.to_mime_type().to_string();

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        let data_uri = format!("data:{};base64,{}", mime_type, BASE64.encode(&bytes));
        Ok(Self::new(tenant_id, file_name, mime_type, data_uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_file_builds_data_uri() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meter.png");
        image::RgbImage::new(2, 2).save(&path).unwrap();

        let doc = TenantDocument::from_file(Uuid::new_v4(), &path).unwrap();
        assert_eq!(doc.file_name, "meter.png");
        assert_eq!(doc.mime_type, "image/png");
        assert!(doc.data_uri.starts_with("data:image/png;base64,"));
        assert!(doc.description.is_none());
    }

    #[test]
    fn test_from_file_rejects_non_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lease.txt");
        std::fs::write(&path, "just text").unwrap();

        assert!(TenantDocument::from_file(Uuid::new_v4(), &path).is_err());
    }
}
