// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for zone classification

use gridzone_model::ParseError;
use thiserror::Error;

/// Geometry processing result type
pub type Result<T> = std::result::Result<T, Error>;

/// Geometry processing errors
#[derive(Error, Debug)]
pub enum Error {
    /// Element footprint is degenerate or malformed, whether caught while
    /// decoding or while building the footprint
    #[error("Invalid geometry for element {element}: {message}")]
    InvalidGeometry { element: String, message: String },

    /// Zone or buffer construction failed
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// Document decoding, unit inference or configuration error
    #[error(transparent)]
    Parse(ParseError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::InvalidGeometry { element, message } => {
                Error::InvalidGeometry { element, message }
            }
            other => Error::Parse(other),
        }
    }
}

impl Error {
    /// Create an invalid geometry error for an element
    pub fn invalid_geometry(element: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::InvalidGeometry {
            element: element.into(),
            message: msg.into(),
        }
    }

    /// Create a geometry error
    pub fn geometry(msg: impl Into<String>) -> Self {
        Error::Geometry(msg.into())
    }

    /// Whether an element's geometry was rejected
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Error::InvalidGeometry { .. })
    }

    /// Whether the error stems from unit inference
    pub fn is_unit_detection(&self) -> bool {
        matches!(self, Error::Parse(ParseError::UnitDetectionFailed { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_geometry_errors_fold_into_invalid_geometry() {
        let err = Error::from(ParseError::geometry("C_01", "non-numeric coordinate"));
        assert!(err.is_invalid_geometry());
        assert!(matches!(err, Error::InvalidGeometry { ref element, .. } if element == "C_01"));
    }

    #[test]
    fn test_other_parse_errors_stay_wrapped() {
        let err = Error::from(ParseError::UnitDetectionFailed {
            diff_x: 3000.0,
            diff_y: 3000.0,
        });
        assert!(err.is_unit_detection());
        assert!(!err.is_invalid_geometry());
    }
}
