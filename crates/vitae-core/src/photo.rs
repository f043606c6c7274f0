//! Photo upload as an inlineable data-URL reference
//!
//! The personal-details photo is stored as a `data:` URL so the form state
//! stays self-contained. Encoding takes whatever bytes the upload surface
//! hands over; no size or format validation is performed. Decoding is used
//! at export time to attach the image to the Typst compilation.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

/// Errors from decoding a photo reference.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("photo reference is not a data URL")]
    NotDataUrl,

    #[error("unsupported data URL encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A decoded photo: MIME type plus raw image bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPhoto {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Encode image bytes as a `data:{mime};base64,{payload}` reference.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Decode a data-URL reference back into MIME type and bytes.
pub fn decode_data_url(reference: &str) -> Result<DecodedPhoto, PhotoError> {
    let rest = reference.strip_prefix("data:").ok_or(PhotoError::NotDataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(PhotoError::NotDataUrl)?;
    let (mime, encoding) = header.split_once(';').ok_or(PhotoError::NotDataUrl)?;
    if encoding != "base64" {
        return Err(PhotoError::UnsupportedEncoding(encoding.to_string()));
    }
    let bytes = STANDARD.decode(payload)?;
    Ok(DecodedPhoto {
        mime: mime.to_string(),
        bytes,
    })
}

/// Virtual file name under which the photo is attached to the compilation.
/// Typst infers the image format from the extension, so JPEG references get
/// a .jpg name and everything else falls back to .png.
pub fn asset_path(reference: &str) -> &'static str {
    if reference.starts_with("data:image/jpeg") || reference.starts_with("data:image/jpg") {
        "photo.jpg"
    } else {
        "photo.png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let bytes = [0x89u8, 0x50, 0x4e, 0x47, 0x0d, 0x0a];
        let reference = encode_data_url("image/png", &bytes);
        assert!(reference.starts_with("data:image/png;base64,"));

        let decoded = decode_data_url(&reference).unwrap();
        assert_eq!(decoded.mime, "image/png");
        assert_eq!(decoded.bytes, bytes);
    }

    #[test]
    fn rejects_non_data_urls() {
        assert!(matches!(
            decode_data_url("https://example.org/photo.png"),
            Err(PhotoError::NotDataUrl)
        ));
        assert!(matches!(
            decode_data_url("data:image/png;base32,xxxx"),
            Err(PhotoError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn rejects_invalid_base64_payload() {
        assert!(matches!(
            decode_data_url("data:image/png;base64,not valid!!!"),
            Err(PhotoError::Base64(_))
        ));
    }

    #[test]
    fn asset_path_follows_mime() {
        assert_eq!(asset_path("data:image/jpeg;base64,abcd"), "photo.jpg");
        assert_eq!(asset_path("data:image/png;base64,abcd"), "photo.png");
    }
}
