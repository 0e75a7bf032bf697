//! Captioned image references.

use serde::{Deserialize, Serialize};

/// A captioned image entry.
///
/// The `path` is the opaque handle returned by the image store when the
/// file was uploaded; this layer records it verbatim and never interprets
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Opaque reference path returned by the image store.
    pub path: String,

    /// Caption text, may be empty.
    pub caption: String,
}

impl Image {
    /// Create a new image entry.
    pub fn new(path: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            caption: caption.into(),
        }
    }
}
