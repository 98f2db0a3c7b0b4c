//! Crate-wide error type.
//!
//! The four core subsystems need a small, matchable set of error codes, not
//! a free-form `anyhow::Error`. `UicError` carries one of the fixed codes
//! plus a message and a structured context map; the `cli` layer is free to
//! wrap these (and genuinely unexpected failures) in `anyhow`.

use std::collections::BTreeMap;
use std::fmt;

/// Fixed error code set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorCode {
    ManifestNotFound,
    ManifestInvalid,
    ManifestVersionUnsupported,
    DuplicateAgentId,
    ParserNotFound,
    ParserDuplicate,
    ScanFailed,
    FileReadError,
    FileWriteError,
    AnnotationFailed,
    NamingFailed,
    Unknown,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ManifestNotFound => "MANIFEST_NOT_FOUND",
            ErrorCode::ManifestInvalid => "MANIFEST_INVALID",
            ErrorCode::ManifestVersionUnsupported => "MANIFEST_VERSION_UNSUPPORTED",
            ErrorCode::DuplicateAgentId => "DUPLICATE_AGENT_ID",
            ErrorCode::ParserNotFound => "PARSER_NOT_FOUND",
            ErrorCode::ParserDuplicate => "PARSER_DUPLICATE",
            ErrorCode::ScanFailed => "SCAN_FAILED",
            ErrorCode::FileReadError => "FILE_READ_ERROR",
            ErrorCode::FileWriteError => "FILE_WRITE_ERROR",
            ErrorCode::AnnotationFailed => "ANNOTATION_FAILED",
            ErrorCode::NamingFailed => "NAMING_FAILED",
            ErrorCode::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}

/// A single tagged error: a code, a message, structured context, and an
/// optional source. `context` is a `BTreeMap` (not `HashMap`) so `--json`
/// error output is byte-stable across runs.
#[derive(Debug, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct UicError {
    pub code: ErrorCode,
    pub message: String,
    pub context: BTreeMap<String, String>,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl UicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: BTreeMap::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Serialize as `{code, message, context}` for `--json` error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code.to_string(),
            "message": self.message,
            "context": self.context,
        })
    }
}

pub type Result<T> = std::result::Result<T, UicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_code_and_message() {
        let err = UicError::new(ErrorCode::ScanFailed, "root does not exist");
        assert_eq!(err.to_string(), "[SCAN_FAILED] root does not exist");
    }

    #[test]
    fn json_context_is_sorted() {
        let err = UicError::new(ErrorCode::FileReadError, "boom")
            .with_context("zebra", "1")
            .with_context("alpha", "2");
        let json = err.to_json();
        let keys: Vec<&str> = json["context"].as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["alpha", "zebra"]);
    }
}
