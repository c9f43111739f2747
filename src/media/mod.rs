use serde_json::Value;

use crate::error::ApiError;

/// Hard cap on accepted image uploads: 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// The closed set of image formats accepted for property photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpg,
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageFormat {
    /// Match a filename's extension against the accepted formats,
    /// case-insensitively. Anything else is rejected.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;

        match ext.to_ascii_lowercase().as_str() {
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpg | Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }
}

/// Folder on the media store that all property photos land in.
const UPLOAD_FOLDER: &str = "property-photos";

/// Client for the hosted media store (Cloudinary's unsigned upload API).
/// Constructed once in `main` and injected through app data; there is no
/// process-wide handle.
#[derive(Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl UploadClient {
    pub fn new(cloud_name: &str, upload_preset: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            upload_url: format!("https://api.cloudinary.com/v1_1/{cloud_name}/image/upload"),
            upload_preset: upload_preset.to_string(),
        }
    }

    /// Push one validated image to the media store and return its hosted
    /// HTTPS URL.
    pub async fn upload_image(
        &self,
        filename: &str,
        kind: ImageFormat,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(kind.mime_type())
            .map_err(|e| ApiError::Upload(format!("invalid mime type: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", UPLOAD_FOLDER)
            .part("file", part);

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Upload(format!("media store unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upload(format!(
                "media store returned HTTP {status}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Upload(format!("unreadable media store response: {e}")))?;

        body["secure_url"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::Upload("no secure_url in media store response".to_string()))
    }
}
