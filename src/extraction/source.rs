// Image sources and their content digests.
//
// An image arrives either as its raw bytes or as an opaque handle where only
// size and MIME type are known. Each variant has its own digest rule.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An image as handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Full image content.
    Bytes(Vec<u8>),
    /// Content not available, only its metadata.
    OpaqueHandle { size: u64, mime: String },
}

impl ImageSource {
    /// Lowercase hex SHA-256 digest identifying this source.
    ///
    /// Bytes hash their content. Handles hash `"{size}-{mime}"`, so two handles
    /// with the same metadata share a digest even if their content differs.
    pub fn digest(&self) -> String {
        match self {
            ImageSource::Bytes(data) => sha256_hex(data),
            ImageSource::OpaqueHandle { size, mime } => {
                sha256_hex(format!("{size}-{mime}").as_bytes())
            }
        }
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(data: Vec<u8>) -> Self {
        ImageSource::Bytes(data)
    }
}

/// SHA-256 of `data` as 64 lowercase hex characters.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
