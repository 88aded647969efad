// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gridzone Model - Shared types for structural grid zone classification
//!
//! This crate provides the data model used by the grid-zone locator: the
//! decoded input document (buildings, named grid lines, element
//! descriptors), the structured zone labels produced by classification, and
//! the configuration threaded through every stage.
//!
//! # Architecture
//!
//! - [`InputDocument`] - Buildings with their grid lines plus element descriptors
//! - [`ZoneLabel`] - Structured zone identity, rendered to `"2-3/B"` on output
//! - [`Assignment`] - One `(element, building, zone)` result row
//! - [`LocatorConfig`] - Buffer distances, size cap and pass tuning
//! - [`DocumentParser`] - Entry point implemented by document decoders
//!
//! # Example
//!
//! ```ignore
//! use gridzone_model::{DocumentParser, InputDocument};
//!
//! let parser: Box<dyn DocumentParser> = get_parser();
//! let document = parser.parse(json)?;
//! println!("{} buildings", document.buildings.len());
//! ```

pub mod config;
pub mod error;
pub mod label;
pub mod traits;
pub mod types;

// Re-export all public types
pub use config::*;
pub use error::*;
pub use label::*;
pub use traits::*;
pub use types::*;
