// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Gridzone Geometry
//!
//! Classifies building elements into structural grid zones.
//!
//! ## Overview
//!
//! Given the named axes of a building grid and a set of element footprints,
//! this crate finds the most specific zone each element sits in:
//!
//! - **Footprints**: Sized rectangles or explicit outlines, validated
//! - **Intersections**: Single-point crossings between named axes
//! - **Zones**: Points, axis-to-axis lines and axis-bounded areas, size capped
//! - **Matching**: Buffered containment with an area-overlap tolerance,
//!   smallest zone first, ties broken by centroid distance
//!
//! ## Architecture
//!
//! - `ZoneBuilder`: Derives zones from intersections
//! - `ZoneMatcher`: Runs one matching pass over pending elements
//! - `ZoneLocator`: Runs point, line and area passes per building
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gridzone_geometry::ZoneLocator;
//! use gridzone_model::LocatorConfig;
//!
//! let locator = ZoneLocator::new(LocatorConfig::default());
//! for row in locator.locate_json(json)? {
//!     println!("{} {} {}", row.element_name, row.building_label(), row.zone_label());
//! }
//! ```

pub mod buffer;
pub mod error;
pub mod footprint;
pub mod intersections;
pub mod locator;
pub mod matcher;
pub mod zones;

// Re-export main types
pub use buffer::{buffer_geometry, circle_offsets, BufferedZone};
pub use error::{Error, Result};
pub use footprint::{build_elements, build_footprint, rectangle_corners, Element};
pub use intersections::{find_intersections, Intersection};
pub use locator::{locate, ZoneLocator};
pub use matcher::{ZoneMatch, ZoneMatcher};
pub use zones::{Zone, ZoneBuilder, ZoneGeometry, ZoneSet};
