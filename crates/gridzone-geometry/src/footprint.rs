// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element footprint construction
//!
//! Turns element descriptors into validated plan-view polygons. Sized
//! elements become a rectangle anchored at the origin corner and rotated
//! about it; boundary elements use their outline as given.

use crate::{Error, Result};
use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Area, Centroid, Coord, Line, LineString, Point, Polygon};
use gridzone_model::{Coord2, ElementDescriptor, ElementShape};
use nalgebra::{Point2, Rotation2, Vector2};

/// Element with its validated footprint
///
/// Centroid and area are computed once at construction and reused by every
/// matching pass.
#[derive(Debug, Clone)]
pub struct Element {
    pub name: String,
    pub footprint: Polygon<f64>,
    pub centroid: Point<f64>,
    pub area: f64,
}

impl Element {
    /// Validate an outline and build the element
    ///
    /// Rejects non-finite coordinates, fewer than three distinct vertices,
    /// self-intersecting outlines and zero-area outlines.
    pub fn new(name: impl Into<String>, outline: Vec<Coord<f64>>) -> Result<Self> {
        let name = name.into();

        if outline.iter().any(|c| !(c.x.is_finite() && c.y.is_finite())) {
            return Err(Error::invalid_geometry(name, "non-finite coordinate"));
        }

        let mut ring = outline;
        ring.dedup();
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if ring.len() < 3 {
            return Err(Error::invalid_geometry(
                name,
                "footprint needs at least 3 distinct vertices",
            ));
        }

        let footprint = Polygon::new(LineString::from(ring), vec![]);
        if !is_simple(footprint.exterior()) {
            return Err(Error::invalid_geometry(name, "footprint is self-intersecting"));
        }

        let area = footprint.unsigned_area();
        if area <= f64::EPSILON {
            return Err(Error::invalid_geometry(name, "footprint has zero area"));
        }

        let centroid = footprint
            .centroid()
            .ok_or_else(|| Error::invalid_geometry(&name, "footprint has no centroid"))?;

        Ok(Self {
            name,
            footprint,
            centroid,
            area,
        })
    }
}

/// Corners of a sized element, rotated counter-clockwise about `origin`
pub fn rectangle_corners(origin: Coord2, size: Coord2, rotation_degrees: f64) -> [Point2<f64>; 4] {
    let origin = Point2::new(origin[0], origin[1]);
    let rotation = Rotation2::new(rotation_degrees.to_radians());
    let [dx, dy] = size;

    [
        Vector2::new(0.0, 0.0),
        Vector2::new(dx, 0.0),
        Vector2::new(dx, dy),
        Vector2::new(0.0, dy),
    ]
    .map(|offset| origin + rotation * offset)
}

/// Build the footprint of a single descriptor
pub fn build_footprint(descriptor: &ElementDescriptor) -> Result<Element> {
    let outline: Vec<Coord<f64>> = match &descriptor.shape {
        ElementShape::Sized {
            origin,
            size,
            rotation_degrees,
        } => {
            if !rotation_degrees.is_finite() {
                return Err(Error::invalid_geometry(
                    &descriptor.name,
                    "rotation is not a finite number",
                ));
            }
            rectangle_corners(*origin, *size, *rotation_degrees)
                .iter()
                .map(|p| Coord { x: p.x, y: p.y })
                .collect()
        }
        ElementShape::Boundary { vertices } => {
            vertices.iter().map(|[x, y]| Coord { x: *x, y: *y }).collect()
        }
    };

    Element::new(descriptor.name.clone(), outline)
}

/// Build footprints for all descriptors, keeping input order
pub fn build_elements(descriptors: &[ElementDescriptor]) -> Result<Vec<Element>> {
    descriptors.iter().map(build_footprint).collect()
}

/// Check that no two ring edges cross or overlap
///
/// Adjacent edges may only touch at their shared vertex.
fn is_simple(ring: &LineString<f64>) -> bool {
    let edges: Vec<Line<f64>> = ring.lines().collect();
    let n = edges.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match line_intersection(edges[i], edges[j]) {
                None => {}
                Some(LineIntersection::SinglePoint { .. }) if adjacent => {}
                Some(_) => return false,
            }
        }
    }

    true
}
