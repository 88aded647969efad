// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Locator configuration

use crate::{LengthUnit, ParseError, Result};
use serde::{Deserialize, Serialize};

/// Tuning parameters threaded through every classification stage
///
/// Distances are expressed per unit: `area_size_mm` applies to millimeter
/// grids, `area_size_m` to meter grids. `max_size` is a count of those
/// unit distances.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Buffer distance for millimeter grids
    pub area_size_mm: f64,
    /// Buffer distance for meter grids
    pub area_size_m: f64,
    /// Zone size cap, in unit distances
    pub max_size: f64,
    /// Allowed relative deviation of footprint/zone overlap from footprint area
    pub overlap_tolerance: f64,
    /// Arc segments per quarter circle when buffering point zones
    pub point_quad_segs: usize,
    /// Arc segments per quarter circle when buffering line and area zones
    pub zone_quad_segs: usize,
    /// Continue with later buildings instead of stopping after the first
    pub process_all_buildings: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            area_size_mm: 1000.0,
            area_size_m: 1.0,
            max_size: 30.0,
            overlap_tolerance: 0.01,
            point_quad_segs: 3,
            zone_quad_segs: 1,
            process_all_buildings: false,
        }
    }
}

impl LocatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer distance for the given unit
    pub fn area_size(&self, unit: LengthUnit) -> f64 {
        match unit {
            LengthUnit::Millimeter => self.area_size_mm,
            LengthUnit::Meter => self.area_size_m,
        }
    }

    /// Maximum line zone length for the given unit
    pub fn max_length(&self, unit: LengthUnit) -> f64 {
        self.max_size * self.area_size(unit)
    }

    /// Maximum area zone area for the given unit
    pub fn max_area(&self, unit: LengthUnit) -> f64 {
        self.max_length(unit).powi(2)
    }

    pub fn with_max_size(mut self, max_size: f64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_area_sizes(mut self, millimeter: f64, meter: f64) -> Self {
        self.area_size_mm = millimeter;
        self.area_size_m = meter;
        self
    }

    pub fn with_overlap_tolerance(mut self, tolerance: f64) -> Self {
        self.overlap_tolerance = tolerance;
        self
    }

    pub fn with_quad_segs(mut self, point: usize, zone: usize) -> Self {
        self.point_quad_segs = point;
        self.zone_quad_segs = zone;
        self
    }

    pub fn with_all_buildings(mut self, enabled: bool) -> Self {
        self.process_all_buildings = enabled;
        self
    }

    /// Reject values that would produce empty or inverted geometry
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("area_size_mm", self.area_size_mm),
            ("area_size_m", self.area_size_m),
            ("max_size", self.max_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParseError::format(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !(self.overlap_tolerance.is_finite() && (0.0..1.0).contains(&self.overlap_tolerance)) {
            return Err(ParseError::format(format!(
                "overlap_tolerance must lie in [0, 1), got {}",
                self.overlap_tolerance
            )));
        }
        if self.point_quad_segs == 0 || self.zone_quad_segs == 0 {
            return Err(ParseError::format("quad_segs must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_caps() {
        let config = LocatorConfig::default();
        assert_eq!(config.area_size(LengthUnit::Millimeter), 1000.0);
        assert_eq!(config.area_size(LengthUnit::Meter), 1.0);
        assert_eq!(config.max_length(LengthUnit::Millimeter), 30_000.0);
        assert_eq!(config.max_area(LengthUnit::Meter), 900.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LocatorConfig =
            serde_json::from_str(r#"{"max_size": 12, "process_all_buildings": true}"#).unwrap();
        assert_eq!(config.max_size, 12.0);
        assert!(config.process_all_buildings);
        assert_eq!(config.point_quad_segs, 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(LocatorConfig::new().with_max_size(0.0).validate().is_err());
        assert!(LocatorConfig::new()
            .with_overlap_tolerance(1.5)
            .validate()
            .is_err());
        assert!(LocatorConfig::new().with_quad_segs(0, 1).validate().is_err());
    }
}
