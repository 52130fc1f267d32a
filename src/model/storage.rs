use serde::{Deserialize, Serialize};

/// Result of a successful avatar upload.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UploadDto {
    /// Absolute URL suitable for storing in a profile.
    pub url: String,
    /// Server-relative path under the static uploads mount.
    pub path: String,
}
