use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures_util::TryStreamExt;

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiError;
use crate::media::{ImageFormat, MAX_IMAGE_BYTES, UploadClient};

/// POST /api/upload — accept a single image under the `file` field, validate
/// its type and size, and push it to the media store. Responds with the
/// hosted URL as `photo_path`, ready to be attached to a property.
pub async fn upload_image(
    _user: AuthenticatedUser,
    uploader: web::Data<UploadClient>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ApiError::Validation(format!("malformed multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned)
            .ok_or_else(|| ApiError::Validation("file field has no filename".to_string()))?;

        let kind = ImageFormat::from_filename(&filename).ok_or_else(|| {
            ApiError::Validation(
                "unsupported file type, use one of: jpg, jpeg, png, gif, webp".to_string(),
            )
        })?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| ApiError::Validation(format!("broken upload stream: {e}")))?
        {
            if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(ApiError::Validation(
                    "file too large, the limit is 5MB".to_string(),
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let url = uploader.upload_image(&filename, kind, bytes).await?;

        return Ok(HttpResponse::Ok().json(serde_json::json!({ "photo_path": url })));
    }

    Err(ApiError::Validation(
        "multipart body has no file field".to_string(),
    ))
}
