// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end classification on a meter grid and on a rotated grid

use gridzone_geometry::ZoneLocator;
use gridzone_model::{
    Assignment, Building, Coord2, ElementDescriptor, GridLine, InputDocument, LengthUnit,
};
use gridzone_parser::detect_unit;

/// Rotate a local grid coordinate counter-clockwise about the origin
fn rotate([x, y]: Coord2, degrees: f64) -> Coord2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [x * cos - y * sin, x * sin + y * cos]
}

/// Axes 1-3 at x = 0, 6, 12 and A-C at y = 0, 6, 12, scaled and rotated
fn grid(scale: f64, degrees: f64) -> Building {
    let at = |x: f64, y: f64| rotate([x * scale, y * scale], degrees);
    let mut lines = Vec::new();
    for (name, x) in [("1", 0.0), ("2", 6.0), ("3", 12.0)] {
        lines.push(GridLine::new(name, at(x, -2.0), at(x, 20.0)));
    }
    for (name, y) in [("A", 0.0), ("B", 6.0), ("C", 12.0)] {
        lines.push(GridLine::new(name, at(-2.0, y), at(20.0, y)));
    }
    Building::new("HUS", lines)
}

/// Rectangle given in local grid coordinates
fn element(
    name: &str,
    origin: Coord2,
    size: Coord2,
    scale: f64,
    degrees: f64,
) -> ElementDescriptor {
    ElementDescriptor::sized(
        name,
        rotate([origin[0] * scale, origin[1] * scale], degrees),
        [size[0] * scale, size[1] * scale],
        degrees,
    )
}

fn flatten(rows: &[Assignment]) -> Vec<(String, String, String)> {
    rows.iter()
        .map(|r| {
            (
                r.element_name.clone(),
                r.building_label().to_string(),
                r.zone_label(),
            )
        })
        .collect()
}

fn owned(rows: &[(&str, &str, &str)]) -> Vec<(String, String, String)> {
    rows.iter()
        .map(|(e, b, z)| (e.to_string(), b.to_string(), z.to_string()))
        .collect()
}

#[test]
fn meter_grid_uses_unit_buffer() {
    let document = InputDocument {
        buildings: vec![grid(1.0, 0.0)],
        elements: vec![
            element("SLAB", [0.5, 0.5], [5.0, 5.0], 1.0, 0.0),
            element("FAR", [50.0, 50.0], [1.0, 1.0], 1.0, 0.0),
            element("WALL", [6.0, 5.9], [4.3, 0.2], 1.0, 0.0),
            element("COL", [5.7, 5.7], [0.6, 0.6], 1.0, 0.0),
        ],
    };
    assert_eq!(detect_unit(&document).unwrap(), LengthUnit::Meter);

    let rows = ZoneLocator::default().locate(&document).unwrap();
    assert_eq!(
        flatten(&rows),
        owned(&[
            ("COL", "HUS", "2/B"),
            ("WALL", "HUS", "2-3/B"),
            ("SLAB", "HUS", "1-2/A-B"),
            ("FAR", "Not found", "Not found"),
        ])
    );
}

#[test]
fn rotated_grid_keeps_full_buffer_width() {
    let scale = 1000.0;
    let degrees = 45.0;
    let document = InputDocument {
        buildings: vec![grid(scale, degrees)],
        elements: vec![
            element("COL", [11.7, 5.7], [0.6, 0.6], scale, degrees),
            // 800 mm off axis B, inside the 1000 mm band of the line zone
            element("WALL", [6.0, 6.7], [4.3, 0.2], scale, degrees),
            element("SLAB", [0.5, 0.5], [5.0, 5.0], scale, degrees),
        ],
    };
    assert_eq!(detect_unit(&document).unwrap(), LengthUnit::Millimeter);

    let rows = ZoneLocator::default().locate(&document).unwrap();
    assert_eq!(
        flatten(&rows),
        owned(&[
            ("COL", "HUS", "3/B"),
            ("WALL", "HUS", "2-3/B"),
            ("SLAB", "HUS", "1-2/A-B"),
        ])
    );
}

#[test]
fn rotation_does_not_change_labels() {
    let local = |scale: f64, degrees: f64| InputDocument {
        buildings: vec![grid(scale, degrees)],
        elements: vec![
            element("COL", [5.7, 11.7], [0.6, 0.6], scale, degrees),
            element("WALL", [5.9, 6.5], [0.2, 4.0], scale, degrees),
        ],
    };
    let locator = ZoneLocator::default();
    let straight = locator.locate(&local(1000.0, 0.0)).unwrap();
    for degrees in [15.0, 30.0, 60.0] {
        let turned = locator.locate(&local(1000.0, degrees)).unwrap();
        assert_eq!(flatten(&turned), flatten(&straight), "{degrees} degrees");
    }
    assert_eq!(
        flatten(&straight),
        owned(&[("COL", "HUS", "2/C"), ("WALL", "HUS", "2/B-C")])
    );
}
