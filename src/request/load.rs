use crate::foundation::error::{BlitError, BlitResult};
use crate::request::model::BlitRequest;
use crate::request::validate::validate_request;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

impl BlitRequest {
    /// Parse a blit request from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BlitResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BlitError::serde(format!("parse blit request JSON: {e}")))
    }

    /// Parse a blit request from a JSON string.
    pub fn from_json_str(s: &str) -> BlitResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| BlitError::serde(format!("parse blit request JSON: {e}")))
    }

    /// Parse a blit request from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BlitResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BlitError::validation(format!("open blit request JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> BlitResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BlitError::serde(format!("serialize blit request: {e}")))
    }

    /// Check geometry, strides, scale dimensions and plane presence.
    ///
    /// Compilation does not call this; callers validate requests from untrusted sources first.
    pub fn validate(&self) -> BlitResult<()> {
        validate_request(self)
            .map_err(|e| BlitError::validation(format!("blit request validation failed: {e}")))
    }
}
