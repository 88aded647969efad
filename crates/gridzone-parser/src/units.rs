// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length unit inference from grid extents

use gridzone_model::{InputDocument, LengthUnit, ParseError, Result};

/// Bounding extents of every grid line endpoint in a document
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridExtent {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl GridExtent {
    /// Compute the extent over all buildings
    ///
    /// Returns `None` when the document has no grid lines at all.
    pub fn of(document: &InputDocument) -> Option<Self> {
        let mut endpoints = document.grid_endpoints();
        let first = endpoints.next()?;
        let mut extent = GridExtent {
            min: *first,
            max: *first,
        };
        for [x, y] in endpoints {
            extent.min[0] = extent.min[0].min(*x);
            extent.min[1] = extent.min[1].min(*y);
            extent.max[0] = extent.max[0].max(*x);
            extent.max[1] = extent.max[1].max(*y);
        }
        Some(extent)
    }

    /// `(diff_x, diff_y)`
    pub fn diagonal(&self) -> (f64, f64) {
        (self.max[0] - self.min[0], self.max[1] - self.min[1])
    }
}

/// Millimeter band, exclusive on both ends
const MILLIMETER_BAND: (f64, f64) = (3000.0, 3_000_000.0);
/// Meter band, exclusive on both ends
const METER_BAND: (f64, f64) = (0.0, 3000.0);

#[inline]
fn within(value: f64, (low, high): (f64, f64)) -> bool {
    low < value && value < high
}

/// Classify extents into a unit
///
/// Both extents must fall in the same band.
pub fn classify_extent(diff_x: f64, diff_y: f64) -> Option<LengthUnit> {
    if within(diff_x, MILLIMETER_BAND) && within(diff_y, MILLIMETER_BAND) {
        Some(LengthUnit::Millimeter)
    } else if within(diff_x, METER_BAND) && within(diff_y, METER_BAND) {
        Some(LengthUnit::Meter)
    } else {
        None
    }
}

/// Detect the length unit shared by every building in the document
pub fn detect_unit(document: &InputDocument) -> Result<LengthUnit> {
    let (diff_x, diff_y) = GridExtent::of(document)
        .map(|extent| extent.diagonal())
        .unwrap_or((0.0, 0.0));

    let unit = classify_extent(diff_x, diff_y)
        .ok_or(ParseError::UnitDetectionFailed { diff_x, diff_y })?;

    log::debug!("Detected unit {unit} from grid extents {diff_x} x {diff_y}");
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridzone_model::{Building, GridLine};

    fn document(extent: f64) -> InputDocument {
        InputDocument {
            buildings: vec![Building::new(
                "B",
                vec![
                    GridLine::new("1", [0.0, 0.0], [0.0, extent]),
                    GridLine::new("A", [0.0, 0.0], [extent, 0.0]),
                ],
            )],
            elements: vec![],
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_extent(3001.0, 3001.0), Some(LengthUnit::Millimeter));
        assert_eq!(classify_extent(2999.0, 2999.0), Some(LengthUnit::Meter));
        assert_eq!(classify_extent(3000.0, 3000.0), None);
        assert_eq!(classify_extent(3_000_000.0, 5000.0), None);
        assert_eq!(classify_extent(0.0, 10.0), None);
    }

    #[test]
    fn test_mixed_bands_fail() {
        assert_eq!(classify_extent(50_000.0, 20.0), None);
    }

    #[test]
    fn test_detect_unit() {
        assert_eq!(detect_unit(&document(50_000.0)).unwrap(), LengthUnit::Millimeter);
        assert_eq!(detect_unit(&document(50.0)).unwrap(), LengthUnit::Meter);
    }

    #[test]
    fn test_detect_unit_failure_is_reported() {
        let err = detect_unit(&document(3000.0)).unwrap_err();
        match err {
            ParseError::UnitDetectionFailed { diff_x, diff_y } => {
                assert_eq!(diff_x, 3000.0);
                assert_eq!(diff_y, 3000.0);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_extent_spans_all_buildings() {
        let mut doc = document(10.0);
        doc.buildings.push(Building::new(
            "C",
            vec![GridLine::new("1", [-20.0, -5.0], [-20.0, 0.0])],
        ));
        let extent = GridExtent::of(&doc).unwrap();
        assert_eq!(extent.diagonal(), (30.0, 15.0));
    }

    #[test]
    fn test_empty_document_has_no_extent() {
        assert!(GridExtent::of(&InputDocument::default()).is_none());
        assert!(detect_unit(&InputDocument::default()).is_err());
    }
}
