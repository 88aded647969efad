// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone construction from grid intersections
//!
//! Every zone is derived from intersection points only:
//!
//! - **Point** zones: one per intersection
//! - **Line** zones: two intersections on a common axis
//! - **Area** zones: two intersections on no common axis, closed by the two
//!   complementary intersections
//!
//! Line and area zones larger than the configured cap are dropped so that
//! far-apart axes do not produce zones swallowing unrelated elements.

use crate::Intersection;
use geo::{Area, Coord, Line, LineString, Point, Polygon};
use gridzone_model::{LengthUnit, LocatorConfig, ZoneKind, ZoneLabel};
use rustc_hash::FxHashMap;

/// Unbuffered zone geometry
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneGeometry {
    Point(Point<f64>),
    Line(Line<f64>),
    Area(Polygon<f64>),
}

impl ZoneGeometry {
    pub fn kind(&self) -> ZoneKind {
        match self {
            ZoneGeometry::Point(_) => ZoneKind::Point,
            ZoneGeometry::Line(_) => ZoneKind::Line,
            ZoneGeometry::Area(_) => ZoneKind::Area,
        }
    }

    /// Defining vertices (closing vertex excluded for areas)
    pub fn vertices(&self) -> Vec<Coord<f64>> {
        match self {
            ZoneGeometry::Point(p) => vec![p.0],
            ZoneGeometry::Line(l) => vec![l.start, l.end],
            ZoneGeometry::Area(polygon) => {
                let ring = &polygon.exterior().0;
                ring[..ring.len().saturating_sub(1)].to_vec()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub label: ZoneLabel,
    pub geometry: ZoneGeometry,
}

/// Zones of one building, grouped by matching pass
#[derive(Debug, Clone, Default)]
pub struct ZoneSet {
    pub points: Vec<Zone>,
    pub lines: Vec<Zone>,
    pub areas: Vec<Zone>,
}

impl ZoneSet {
    pub fn of_kind(&self, kind: ZoneKind) -> &[Zone] {
        match kind {
            ZoneKind::Point => &self.points,
            ZoneKind::Line => &self.lines,
            ZoneKind::Area => &self.areas,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len() + self.lines.len() + self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds point, line and area zones under a size cap
#[derive(Debug, Clone, Copy)]
pub struct ZoneBuilder {
    /// Line zones must be strictly shorter than this
    pub max_length: f64,
    /// Area zones must be strictly smaller than this
    pub max_area: f64,
}

impl ZoneBuilder {
    pub fn new(max_length: f64) -> Self {
        Self {
            max_length,
            max_area: max_length * max_length,
        }
    }

    /// Caps derived from the configured size for a unit
    pub fn from_config(config: &LocatorConfig, unit: LengthUnit) -> Self {
        Self {
            max_length: config.max_length(unit),
            max_area: config.max_area(unit),
        }
    }

    pub fn build(&self, intersections: &[Intersection]) -> ZoneSet {
        let points = intersections
            .iter()
            .map(|i| Zone {
                label: ZoneLabel::point(&i.first, &i.second),
                geometry: ZoneGeometry::Point(Point::from(i.point)),
            })
            .collect();

        // Both orientations map to the first intersection joining the pair
        let mut by_pair: FxHashMap<(&str, &str), &Intersection> = FxHashMap::default();
        for i in intersections {
            by_pair
                .entry((i.first.as_str(), i.second.as_str()))
                .or_insert(i);
            by_pair
                .entry((i.second.as_str(), i.first.as_str()))
                .or_insert(i);
        }

        let mut lines = Vec::new();
        let mut areas = Vec::new();

        for (index, i1) in intersections.iter().enumerate() {
            for i2 in &intersections[index + 1..] {
                let firsts = [i1.first.as_str(), i2.first.as_str()];
                let seconds = [i1.second.as_str(), i2.second.as_str()];

                if i1.shares_axis_with(i2) {
                    let line = Line::new(i1.point, i2.point);
                    if line_length(&line) < self.max_length {
                        lines.push(Zone {
                            label: ZoneLabel::span(ZoneKind::Line, firsts, seconds),
                            geometry: ZoneGeometry::Line(line),
                        });
                    }
                    continue;
                }

                let complement_a = by_pair.get(&(i1.first.as_str(), i2.second.as_str()));
                let complement_b = by_pair.get(&(i1.second.as_str(), i2.first.as_str()));
                if let (Some(a), Some(b)) = (complement_a, complement_b) {
                    let polygon = Polygon::new(
                        LineString::from(vec![i1.point, a.point, i2.point, b.point]),
                        vec![],
                    );
                    if polygon.unsigned_area() < self.max_area {
                        areas.push(Zone {
                            label: ZoneLabel::span(ZoneKind::Area, firsts, seconds),
                            geometry: ZoneGeometry::Area(polygon),
                        });
                    }
                }
            }
        }

        ZoneSet {
            points,
            lines,
            areas,
        }
    }
}

#[inline]
fn line_length(line: &Line<f64>) -> f64 {
    line.dx().hypot(line.dy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_intersections;
    use approx::assert_relative_eq;
    use gridzone_model::{Building, GridLine};

    /// Axes 1-3 at x = 0, 6000, 12000 plus 4 at x = 40000; B, C at y = 6000, 12000
    fn building() -> Building {
        Building::new(
            "HUS1",
            vec![
                GridLine::new("1", [0.0, 0.0], [0.0, 50_000.0]),
                GridLine::new("2", [6000.0, 0.0], [6000.0, 50_000.0]),
                GridLine::new("3", [12_000.0, 0.0], [12_000.0, 50_000.0]),
                GridLine::new("4", [40_000.0, 0.0], [40_000.0, 50_000.0]),
                GridLine::new("B", [0.0, 6000.0], [50_000.0, 6000.0]),
                GridLine::new("C", [0.0, 12_000.0], [50_000.0, 12_000.0]),
            ],
        )
    }

    fn labels(zones: &[Zone]) -> Vec<String> {
        zones.iter().map(|z| z.label.to_string()).collect()
    }

    fn zones() -> ZoneSet {
        let intersections = find_intersections(&building());
        ZoneBuilder::from_config(&LocatorConfig::default(), LengthUnit::Millimeter)
            .build(&intersections)
    }

    #[test]
    fn test_point_zones_follow_intersections() {
        let set = zones();
        assert_eq!(set.points.len(), 8);
        assert_eq!(set.points[0].label.to_string(), "1/B");
        assert_eq!(set.points[0].geometry.kind(), ZoneKind::Point);
    }

    #[test]
    fn test_line_zones_respect_cap() {
        let set = zones();
        let lines = labels(&set.lines);
        assert!(lines.contains(&"2-3/B".to_string()));
        assert!(lines.contains(&"1-3/C".to_string()));
        assert!(lines.contains(&"2/B-C".to_string()));
        // 40000 long
        assert!(!lines.contains(&"1-4/B".to_string()));
        // 28000 long, under the 30000 cap
        assert!(lines.contains(&"3-4/B".to_string()));
    }

    #[test]
    fn test_area_zone_geometry() {
        let set = zones();
        let zone = set
            .areas
            .iter()
            .find(|z| z.label.to_string() == "2-3/B-C")
            .unwrap();
        match &zone.geometry {
            ZoneGeometry::Area(polygon) => {
                assert_relative_eq!(polygon.unsigned_area(), 36_000_000.0, max_relative = 1e-9);
            }
            other => panic!("unexpected geometry {other:?}"),
        }
        assert_eq!(zone.geometry.vertices().len(), 4);
    }

    #[test]
    fn test_area_zones_respect_cap() {
        let set = zones();
        let areas = labels(&set.areas);
        // 28000 x 6000 is under 30000^2
        assert!(areas.contains(&"3-4/B-C".to_string()));

        let tight = ZoneBuilder::new(10_000.0).build(&find_intersections(&building()));
        let tight_areas = labels(&tight.areas);
        assert!(tight_areas.contains(&"1-3/B-C".to_string()));
        assert!(!tight_areas.contains(&"3-4/B-C".to_string()));
        assert!(labels(&tight.lines).iter().all(|l| !l.starts_with("1-3")));
    }

    #[test]
    fn test_no_intersections_no_zones() {
        let set = ZoneBuilder::new(100.0).build(&[]);
        assert!(set.is_empty());
    }
}
