// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone matching
//!
//! One matching pass buffers a zone collection, orders it by buffered area
//! and assigns each pending element to the smallest zone that contains its
//! centroid and almost all of its footprint. Equal-area candidates are
//! ranked by centroid distance.

use crate::buffer::BufferedZone;
use crate::footprint::Element;
use crate::zones::Zone;
use crate::Result;
use geo::{Area, BooleanOps, Contains, Point};
use gridzone_model::ZoneLabel;
use rayon::prelude::*;

/// Relative tolerance under which two buffered areas count as equal
const AREA_EPSILON: f64 = 1e-9;

#[inline]
fn same_area(a: f64, b: f64) -> bool {
    (a - b).abs() <= AREA_EPSILON * a.abs().max(b.abs())
}

#[inline]
fn distance(a: Point<f64>, b: Point<f64>) -> f64 {
    (a.x() - b.x()).hypot(a.y() - b.y())
}

/// Element assigned to a zone by a pass
#[derive(Debug, Clone)]
pub struct ZoneMatch {
    pub element: Element,
    pub label: ZoneLabel,
}

/// Runs matching passes with a fixed buffer distance
#[derive(Debug, Clone, Copy)]
pub struct ZoneMatcher {
    /// Radial buffer applied to every zone
    pub distance: f64,
    /// Accepted relative deviation of overlap area from footprint area
    pub tolerance: f64,
}

impl ZoneMatcher {
    pub fn new(distance: f64, tolerance: f64) -> Self {
        Self {
            distance,
            tolerance,
        }
    }

    /// Buffer zones and sort them by ascending area
    ///
    /// The sort is stable: equal areas keep construction order.
    pub fn prepare(&self, zones: &[Zone], quad_segs: usize) -> Result<Vec<BufferedZone>> {
        let mut buffered = zones
            .par_iter()
            .map(|zone| BufferedZone::new(zone, self.distance, quad_segs))
            .collect::<Result<Vec<_>>>()?;
        buffered.sort_by(|a, b| a.area.total_cmp(&b.area));
        Ok(buffered)
    }

    /// Whether the zone holds the element's centroid and nearly all of its footprint
    pub fn is_candidate(&self, element: &Element, zone: &BufferedZone) -> bool {
        if !zone.polygon.contains(&element.centroid) {
            return false;
        }
        let overlap = element.footprint.intersection(&zone.polygon).unsigned_area();
        let low = element.area * (1.0 - self.tolerance);
        let high = element.area * (1.0 + self.tolerance);
        (low..=high).contains(&overlap)
    }

    /// Index of the best zone for an element, if any
    ///
    /// `zones` must be sorted by ascending area. Scanning stops at the first
    /// zone whose area differs from the area of an already found candidate.
    pub fn best_zone(&self, element: &Element, zones: &[BufferedZone]) -> Option<usize> {
        let mut candidates: Vec<usize> = Vec::new();
        let mut matched_area: Option<f64> = None;

        for (index, zone) in zones.iter().enumerate() {
            if let Some(area) = matched_area {
                if !same_area(area, zone.area) {
                    break;
                }
            }
            if self.is_candidate(element, zone) {
                matched_area = Some(zone.area);
                candidates.push(index);
            }
        }

        let mut best = *candidates.first()?;
        let mut best_distance = distance(zones[best].centroid, element.centroid);
        for &index in &candidates[1..] {
            let zone = &zones[index];
            let zone_distance = distance(zone.centroid, element.centroid);
            let smaller = zone.area < zones[best].area && !same_area(zone.area, zones[best].area);
            let closer = same_area(zone.area, zones[best].area) && zone_distance < best_distance;
            if smaller || closer {
                best = index;
                best_distance = zone_distance;
            }
        }

        log::trace!(
            "{}: {} candidates, picked {}",
            element.name,
            candidates.len(),
            zones[best].label
        );
        Some(best)
    }

    /// Run one pass over `pending`
    ///
    /// Matched elements are moved out of `pending` and returned in their
    /// original order; unmatched elements stay behind for the next pass.
    pub fn run_pass(
        &self,
        pending: &mut Vec<Element>,
        zones: &[Zone],
        quad_segs: usize,
    ) -> Result<Vec<ZoneMatch>> {
        if pending.is_empty() || zones.is_empty() {
            return Ok(Vec::new());
        }

        let buffered = self.prepare(zones, quad_segs)?;
        let choices: Vec<Option<usize>> = pending
            .par_iter()
            .map(|element| self.best_zone(element, &buffered))
            .collect();

        let mut matches = Vec::new();
        let mut remaining = Vec::with_capacity(pending.len());
        for (element, choice) in pending.drain(..).zip(choices) {
            match choice {
                Some(index) => matches.push(ZoneMatch {
                    element,
                    label: buffered[index].label.clone(),
                }),
                None => remaining.push(element),
            }
        }
        *pending = remaining;

        Ok(matches)
    }
}
