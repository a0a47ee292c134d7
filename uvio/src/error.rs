use crate::uv::UvError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Operation errors. The display text of each variant is the message the
/// host shows when the action is cancelled.
#[derive(Debug, Error)]
pub enum UvIoError {
    #[error("'{}' does not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("json file could not be read: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object type of '{}' is not mesh (found {})", object, kind)]
    NotAMesh { object: String, kind: &'static str },

    #[error("No active object")]
    NoActiveObject,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UV data does not match the mesh: {0}")]
    Uv(#[from] UvError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
