//! Error types for rendering and script loading.

use thiserror::Error;

/// Failure while writing a document to its output sink.
///
/// Bytes written before the failure are not rolled back; a caller that needs
/// all-or-nothing output should render into a buffer first (see
/// [`crate::marshal_response`]).
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write document: {0}")]
    Write(#[from] std::io::Error),

    #[error("markup writer error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// A token that does not belong to an attribute enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} token '{token}'")]
pub struct ParseAttrError {
    pub kind: &'static str,
    pub token: String,
}

impl ParseAttrError {
    pub(crate) fn new(kind: &'static str, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }
}

/// Failure while loading a verb script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported script format '{0}' (expected yaml or json)")]
    UnsupportedFormat(String),
}
