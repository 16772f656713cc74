//! Image Uploads
//!
//! The frontend reads the picked file locally as a data URL (it doubles as
//! the preview). Here it is turned back into bytes for the multipart body.

use base64::Engine;
use ingredient_ledger::ImageUpload;

use super::error::{ServiceError, ServiceResult};

/// Raw image ready to attach to a request
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Decode a `data:<mime>;base64,<payload>` upload.
///
/// The MIME type comes from the upload, then the data URL header, then a
/// guess from the file name. Non-image types are rejected.
pub fn decode_image(upload: &ImageUpload) -> ServiceResult<DecodedImage> {
    let (header, payload) = match upload.data_url.split_once(',') {
        Some((header, payload)) => (Some(header), payload),
        None => (None, upload.data_url.as_str()),
    };

    let mime_type = resolve_mime(upload, header)
        .ok_or_else(|| ServiceError::InvalidInput("Unknown image type".to_string()))?;
    if !ImageUpload::is_image_type(&mime_type) {
        return Err(ServiceError::InvalidInput(format!("{} is not an image", mime_type)));
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| ServiceError::InvalidInput(format!("Failed to decode base64: {}", e)))?;
    if bytes.is_empty() {
        return Err(ServiceError::InvalidInput("Image is empty".to_string()));
    }

    let file_name = if upload.file_name.trim().is_empty() {
        let ext = mime_guess::get_mime_extensions_str(&mime_type)
            .and_then(|exts| exts.first())
            .copied()
            .unwrap_or("img");
        format!("upload.{}", ext)
    } else {
        upload.file_name.trim().to_string()
    };

    Ok(DecodedImage { file_name, mime_type, bytes })
}

fn resolve_mime(upload: &ImageUpload, header: Option<&str>) -> Option<String> {
    let declared = upload.mime_type.trim();
    if !declared.is_empty() {
        return Some(declared.to_string());
    }
    // "data:image/png;base64"
    let from_header = header
        .and_then(|h| h.strip_prefix("data:"))
        .and_then(|h| h.split(';').next())
        .filter(|m| !m.is_empty());
    if let Some(mime) = from_header {
        return Some(mime.to_string());
    }
    mime_guess::from_path(&upload.file_name)
        .first_raw()
        .map(str::to_string)
}
