//! Transport decoding of fetched file content

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, TsbaseError};
use crate::pipeline::fetch::RemoteFileContent;

/// Decode a fetched file into text according to its declared encoding.
///
/// GitHub wraps base64 payloads every 60 characters, so whitespace is dropped
/// before decoding.
pub fn decode_content(file: &RemoteFileContent) -> Result<String> {
    match file.encoding.to_ascii_lowercase().as_str() {
        "base64" => {
            let compact: String = file
                .content
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            let bytes = STANDARD.decode(compact)?;
            tracing::debug!(bytes = bytes.len(), "decoded base64 content");
            Ok(String::from_utf8(bytes)?)
        }
        "utf-8" | "utf8" => Ok(file.content.clone()),
        other => Err(TsbaseError::UnsupportedEncoding(other.to_string())),
    }
}
