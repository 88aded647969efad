// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gridzone Parser - Input document decoder
//!
//! Decodes the JSON input document into the `gridzone-model` types and infers
//! the grid's length unit from its extents.
//!
//! # Features
//!
//! - **Order-preserving decoding** - buildings and axes keep declaration order
//! - **Plan-view normalization** - height components are dropped
//! - **Unit detection** - millimeter or meter from global grid extents
//!
//! # Example
//!
//! ```ignore
//! use gridzone_parser::JsonDocumentParser;
//! use gridzone_model::DocumentParser;
//!
//! let parser = JsonDocumentParser::new();
//! let document = parser.parse(json)?;
//! let unit = gridzone_parser::detect_unit(&document)?;
//! ```

mod document;
mod units;

pub use document::JsonDocumentParser;
pub use units::{classify_extent, detect_unit, GridExtent};

use gridzone_model::{DocumentParser, InputDocument, Result};

/// Quick parse function for simple use cases
pub fn parse(content: &str) -> Result<InputDocument> {
    JsonDocumentParser::new().parse(content)
}
