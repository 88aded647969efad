// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for document decoding and unit inference

use thiserror::Error;

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while decoding an input document
#[derive(Error, Debug)]
pub enum ParseError {
    /// Document structure does not match the expected shape
    #[error("Invalid document format: {0}")]
    InvalidFormat(String),

    /// Required field absent
    #[error("Missing field `{field}` in {context}")]
    MissingField { context: String, field: String },

    /// Element geometry cannot form a usable footprint
    #[error("Invalid geometry for element {element}: {message}")]
    InvalidGeometry { element: String, message: String },

    /// Grid extents fall outside every recognized unit band
    #[error("Unable to detect length unit from grid extents ({diff_x} x {diff_y})")]
    UnitDetectionFailed { diff_x: f64, diff_y: f64 },

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Create a new format error
    pub fn format(msg: impl Into<String>) -> Self {
        ParseError::InvalidFormat(msg.into())
    }

    /// Create a missing field error
    pub fn missing(context: impl Into<String>, field: impl Into<String>) -> Self {
        ParseError::MissingField {
            context: context.into(),
            field: field.into(),
        }
    }

    /// Create a new geometry error
    pub fn geometry(element: impl Into<String>, msg: impl Into<String>) -> Self {
        ParseError::InvalidGeometry {
            element: element.into(),
            message: msg.into(),
        }
    }
}
