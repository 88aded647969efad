// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core traits for document decoding

use crate::{InputDocument, Result};

/// Parsing interface - entry point for decoding an input document
///
/// Implementations turn raw document content into an [`InputDocument`] with
/// building order preserved and element geometry fields normalized to
/// plan-view coordinates.
///
/// # Example
///
/// ```ignore
/// use gridzone_model::DocumentParser;
///
/// let parser: Box<dyn DocumentParser> = get_parser();
/// let document = parser.parse(content)?;
/// println!("{} elements", document.elements.len());
/// ```
pub trait DocumentParser: Send + Sync {
    /// Parse document content
    ///
    /// # Arguments
    /// * `content` - The raw document text
    ///
    /// # Returns
    /// The decoded document, or a `ParseError` on malformed input
    fn parse(&self, content: &str) -> Result<InputDocument>;

    /// Parse document content from a reader
    fn parse_reader(&self, reader: &mut dyn std::io::Read) -> Result<InputDocument> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse(&content)
    }
}
