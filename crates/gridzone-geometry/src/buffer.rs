// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Radial zone buffering
//!
//! Zones built from a grid are convex (a point, a segment or a
//! quadrilateral), so their buffer is the convex hull of polygonal circles
//! placed on the defining vertices. Each circle has `4 * quad_segs` vertices
//! and starts on the normal of an adjacent edge, so every offset edge lies
//! exactly `distance` away from the zone whatever the grid orientation.

use crate::zones::{Zone, ZoneGeometry};
use crate::{Error, Result};
use geo::{Area, Centroid, ConvexHull, Coord, MultiPoint, Point, Polygon};
use gridzone_model::ZoneLabel;

/// Zone expanded by the unit buffer distance
#[derive(Debug, Clone)]
pub struct BufferedZone {
    pub label: ZoneLabel,
    pub polygon: Polygon<f64>,
    pub area: f64,
    pub centroid: Point<f64>,
}

impl BufferedZone {
    pub fn new(zone: &Zone, distance: f64, quad_segs: usize) -> Result<Self> {
        let polygon = buffer_geometry(&zone.geometry, distance, quad_segs)?;
        let area = polygon.unsigned_area();
        let centroid = polygon
            .centroid()
            .ok_or_else(|| Error::geometry(format!("buffered zone {} is empty", zone.label)))?;

        Ok(Self {
            label: zone.label.clone(),
            polygon,
            area,
            centroid,
        })
    }
}

/// Offsets of a polygonal circle of radius `distance`, starting at `phase` radians
pub fn circle_offsets(distance: f64, quad_segs: usize, phase: f64) -> Vec<Coord<f64>> {
    let segments = 4 * quad_segs.max(1);
    (0..segments)
        .map(|i| {
            let angle = phase + 2.0 * std::f64::consts::PI * (i as f64) / (segments as f64);
            Coord {
                x: distance * angle.cos(),
                y: distance * angle.sin(),
            }
        })
        .collect()
}

/// Edges of the zone outline as vertex pairs
fn edges(geometry: &ZoneGeometry) -> Vec<(Coord<f64>, Coord<f64>)> {
    match geometry {
        ZoneGeometry::Point(_) => Vec::new(),
        ZoneGeometry::Line(line) => vec![(line.start, line.end)],
        ZoneGeometry::Area(polygon) => polygon
            .exterior()
            .lines()
            .map(|l| (l.start, l.end))
            .collect(),
    }
}

/// Buffer a zone geometry by `distance`
pub fn buffer_geometry(
    geometry: &ZoneGeometry,
    distance: f64,
    quad_segs: usize,
) -> Result<Polygon<f64>> {
    if !(distance.is_finite() && distance > 0.0) {
        return Err(Error::geometry(format!(
            "buffer distance must be positive, got {distance}"
        )));
    }

    let mut points: Vec<Point<f64>> = Vec::new();
    let edges = edges(geometry);
    if edges.is_empty() {
        let offsets = circle_offsets(distance, quad_segs, 0.0);
        for vertex in geometry.vertices() {
            points.extend(offsets.iter().map(|o| Point::from(vertex + *o)));
        }
    }
    for (start, end) in edges {
        let delta = end - start;
        let normal = delta.y.atan2(delta.x) + std::f64::consts::FRAC_PI_2;
        let offsets = circle_offsets(distance, quad_segs, normal);
        for vertex in [start, end] {
            points.extend(offsets.iter().map(|o| Point::from(vertex + *o)));
        }
    }

    let hull = MultiPoint::new(points).convex_hull();
    if hull.unsigned_area() <= 0.0 {
        return Err(Error::geometry("buffer produced an empty polygon"));
    }
    Ok(hull)
}
