// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for grid and element representation
//!
//! Coordinates are plan-view `[x, y]` pairs. Any height component present in
//! the source document is dropped during decoding.

use crate::ZoneLabel;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Plan-view coordinate `[x, y]`
pub type Coord2 = [f64; 2];

/// Label used for elements that no zone could claim
pub const NOT_FOUND: &str = "Not found";

/// Decoded input document
///
/// Buildings keep the order in which they were declared.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputDocument {
    pub buildings: Vec<Building>,
    pub elements: Vec<ElementDescriptor>,
}

impl InputDocument {
    /// Look up a building by name
    pub fn building(&self, name: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.name == name)
    }

    /// Iterate every grid line endpoint across all buildings
    pub fn grid_endpoints(&self) -> impl Iterator<Item = &Coord2> {
        self.buildings
            .iter()
            .flat_map(|b| b.grid_lines.iter())
            .flat_map(|g| g.segment.iter())
    }
}

/// A building and its structural grid
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    /// Grid lines in declaration order
    pub grid_lines: Vec<GridLine>,
}

impl Building {
    pub fn new(name: impl Into<String>, grid_lines: Vec<GridLine>) -> Self {
        Self {
            name: name.into(),
            grid_lines,
        }
    }
}

/// Named structural axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub name: String,
    pub segment: [Coord2; 2],
}

impl GridLine {
    pub fn new(name: impl Into<String>, start: Coord2, end: Coord2) -> Self {
        Self {
            name: name.into(),
            segment: [start, end],
        }
    }
}

/// Raw element description, before footprint construction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub name: String,
    pub shape: ElementShape,
}

impl ElementDescriptor {
    /// Element described by origin corner, plan size and rotation
    pub fn sized(name: impl Into<String>, origin: Coord2, size: Coord2, rotation_degrees: f64) -> Self {
        Self {
            name: name.into(),
            shape: ElementShape::Sized {
                origin,
                size,
                rotation_degrees,
            },
        }
    }

    /// Element described by an explicit outline
    pub fn boundary(name: impl Into<String>, vertices: Vec<Coord2>) -> Self {
        Self {
            name: name.into(),
            shape: ElementShape::Boundary { vertices },
        }
    }
}

/// The two ways an element footprint can be described
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementShape {
    /// Rectangle from `origin` spanning `size`, rotated counter-clockwise
    /// about `origin`
    Sized {
        origin: Coord2,
        size: Coord2,
        rotation_degrees: f64,
    },
    /// Ordered outline vertices
    Boundary { vertices: Vec<Coord2> },
}

/// Linear unit of the grid coordinates
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Millimeter,
    Meter,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Meter => "m",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One classification result row
///
/// Serializes as `[element_name, building_name, zone_label]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub element_name: String,
    /// `None` for elements that were never matched
    pub building_name: Option<String>,
    pub zone: Option<ZoneLabel>,
}

impl Assignment {
    pub fn matched(
        element_name: impl Into<String>,
        building_name: impl Into<String>,
        zone: ZoneLabel,
    ) -> Self {
        Self {
            element_name: element_name.into(),
            building_name: Some(building_name.into()),
            zone: Some(zone),
        }
    }

    pub fn unresolved(element_name: impl Into<String>) -> Self {
        Self {
            element_name: element_name.into(),
            building_name: None,
            zone: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.zone.is_some()
    }

    pub fn building_label(&self) -> &str {
        self.building_name.as_deref().unwrap_or(NOT_FOUND)
    }

    /// Display label of the zone, or `"Not found"`
    pub fn zone_label(&self) -> String {
        self.zone
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

impl Serialize for Assignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_tuple(3)?;
        row.serialize_element(&self.element_name)?;
        row.serialize_element(self.building_label())?;
        row.serialize_element(&self.zone_label())?;
        row.end()
    }
}
