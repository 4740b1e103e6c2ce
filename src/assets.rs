#![deny(clippy::unwrap_used)]

use base64::Engine;
use std::fs;
use std::path::Path;

/// Text loaded from disk, or an empty string plus the warning that explains why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAsset {
    pub contents: String,
    pub warning: Option<String>,
}

/// Reads a style sheet. A missing or unreadable file is not an error: the caller
/// gets empty contents and a warning it is expected to show.
pub fn load_text(path: &Path) -> TextAsset {
    if !path.exists() {
        let warning = format!(
            "CSS file not found at {}. Styling will be incorrect.",
            path.display()
        );
        tracing::warn!("{}", warning);
        return TextAsset {
            contents: String::new(),
            warning: Some(warning),
        };
    }
    match fs::read_to_string(path) {
        Ok(contents) => TextAsset {
            contents,
            warning: None,
        },
        Err(err) => {
            let warning = format!(
                "CSS file at {} could not be read ({}). Styling will be incorrect.",
                path.display(),
                err
            );
            tracing::warn!("{}", warning);
            TextAsset {
                contents: String::new(),
                warning: Some(warning),
            }
        }
    }
}

/// Base64 of the file's bytes, or an empty string when the file is absent.
pub fn encode_base64(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => base64::engine::general_purpose::STANDARD.encode(bytes),
        Err(err) => {
            tracing::debug!("Skipping image {}: {}", path.display(), err);
            String::new()
        }
    }
}

pub fn image_data_uri(path: &Path) -> Option<String> {
    let payload = encode_base64(path);
    if payload.is_empty() {
        return None;
    }
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(format!("data:{};base64,{}", mime.essence_str(), payload))
}
