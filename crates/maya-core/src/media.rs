//! Media classification and inline payload encoding.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Extension → declared content type for the formats the upload flow accepts.
const CONTENT_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("mpeg", "video/mpeg"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("m4a", "audio/mp4"),
    ("flac", "audio/flac"),
    ("aac", "audio/aac"),
];

/// Guess the declared content type of a file from its extension.
#[must_use]
pub fn content_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    CONTENT_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, content_type)| *content_type)
}

/// A file payload encoded for inline transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMedia {
    /// Declared content type, e.g. `image/jpeg`.
    pub content_type: String,
    /// Standard base64 of the raw bytes, without a data-URL prefix.
    pub base64: String,
}

impl EncodedMedia {
    #[must_use]
    pub fn encode(bytes: &[u8], content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            base64: STANDARD.encode(bytes),
        }
    }

    /// `data:<content_type>;base64,<payload>`
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, self.base64)
    }
}
