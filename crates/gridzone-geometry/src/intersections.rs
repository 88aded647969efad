// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grid line intersection

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Coord, Line};
use gridzone_model::{Building, GridLine};

/// Point where two named axes cross
///
/// `first` is the axis declared earlier in the building's grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub first: String,
    pub second: String,
    pub point: Coord<f64>,
}

impl Intersection {
    pub fn axes(&self) -> [&str; 2] {
        [self.first.as_str(), self.second.as_str()]
    }

    /// Whether both intersections lie on at least one common axis
    pub fn shares_axis_with(&self, other: &Intersection) -> bool {
        self.axes().iter().any(|a| other.axes().contains(a))
    }
}

fn segment(grid_line: &GridLine) -> Line<f64> {
    let [start, end] = grid_line.segment;
    Line::new(
        Coord {
            x: start[0],
            y: start[1],
        },
        Coord { x: end[0], y: end[1] },
    )
}

/// Find every single-point crossing between distinct axes of a building
///
/// Pairs are visited in declaration order; parallel, disjoint and
/// overlapping axes contribute nothing.
pub fn find_intersections(building: &Building) -> Vec<Intersection> {
    let lines = &building.grid_lines;
    let mut intersections = Vec::new();

    for (i, axis1) in lines.iter().enumerate() {
        for axis2 in &lines[i + 1..] {
            if axis1.name == axis2.name {
                continue;
            }

            if let Some(LineIntersection::SinglePoint { intersection, .. }) =
                line_intersection(segment(axis1), segment(axis2))
            {
                intersections.push(Intersection {
                    first: axis1.name.clone(),
                    second: axis2.name.clone(),
                    point: intersection,
                });
            }
        }
    }

    log::debug!(
        "Building {}: {} intersections across {} axes",
        building.name,
        intersections.len(),
        lines.len()
    );

    intersections
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn grid() -> Building {
        Building::new(
            "HUS1",
            vec![
                GridLine::new("1", [0.0, 0.0], [0.0, 50.0]),
                GridLine::new("2", [6.0, 0.0], [6.0, 50.0]),
                GridLine::new("9", [40.0, 0.0], [40.0, 50.0]),
                GridLine::new("A", [0.0, 0.0], [30.0, 0.0]),
                GridLine::new("B", [0.0, 6.0], [50.0, 6.0]),
            ],
        )
    }

    #[test]
    fn test_crossings_in_declaration_order() {
        let found = find_intersections(&grid());
        let pairs: Vec<_> = found.iter().map(|i| i.axes()).collect();
        assert_eq!(
            pairs,
            [["1", "A"], ["1", "B"], ["2", "A"], ["2", "B"], ["9", "B"]]
        );
        assert_relative_eq!(found[3].point.x, 6.0, epsilon = 1e-9);
        assert_relative_eq!(found[3].point.y, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_touching_endpoints_count() {
        let found = find_intersections(&grid());
        let corner = found.iter().find(|i| i.axes() == ["1", "A"]).unwrap();
        assert_abs_diff_eq!(corner.point.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(corner.point.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_collinear_overlap_ignored() {
        let building = Building::new(
            "X",
            vec![
                GridLine::new("A", [0.0, 0.0], [10.0, 0.0]),
                GridLine::new("A2", [5.0, 0.0], [15.0, 0.0]),
                GridLine::new("B", [0.0, 5.0], [10.0, 5.0]),
            ],
        );
        assert!(find_intersections(&building).is_empty());
    }

    #[test]
    fn test_shares_axis() {
        let found = find_intersections(&grid());
        assert!(found[0].shares_axis_with(&found[1]));
        assert!(!found[0].shares_axis_with(&found[3]));
    }
}
