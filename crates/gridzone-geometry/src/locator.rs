// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone Locator - Runs the point, line and area passes per building
//!
//! Footprints are built once and the length unit is detected once from the
//! extents of every building. Each building then contributes its point,
//! line and area zones in that order; every pass only sees elements that
//! earlier passes left unmatched.
//!
//! By default processing stops after the first building, which is how the
//! locator has always behaved. Set `process_all_buildings` to carry
//! unmatched elements into later buildings.

use crate::footprint::{build_elements, Element};
use crate::{find_intersections, Result, ZoneBuilder, ZoneMatcher, ZoneSet};
use gridzone_model::{Assignment, DocumentParser, InputDocument, LocatorConfig, ZoneKind};
use gridzone_parser::{detect_unit, JsonDocumentParser};
use std::time::Instant;

/// Pass order, most specific first
const PASSES: [ZoneKind; 3] = [ZoneKind::Point, ZoneKind::Line, ZoneKind::Area];

/// Classifies elements into grid zones
#[derive(Debug, Clone, Default)]
pub struct ZoneLocator {
    config: LocatorConfig,
}

impl ZoneLocator {
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Decode a JSON document and classify its elements
    pub fn locate_json(&self, content: &str) -> Result<Vec<Assignment>> {
        let document = JsonDocumentParser::new().parse(content)?;
        self.locate(&document)
    }

    /// Classify every element of a document
    ///
    /// Matches come first in discovery order, followed by unresolved
    /// elements in input order.
    pub fn locate(&self, document: &InputDocument) -> Result<Vec<Assignment>> {
        self.config.validate()?;
        let started = Instant::now();

        let mut pending = build_elements(&document.elements)?;
        let total = pending.len();
        let mut assignments = Vec::with_capacity(total);

        if !document.buildings.is_empty() {
            let unit = detect_unit(document)?;
            let builder = ZoneBuilder::from_config(&self.config, unit);
            let matcher =
                ZoneMatcher::new(self.config.area_size(unit), self.config.overlap_tolerance);

            for (index, building) in document.buildings.iter().enumerate() {
                if pending.is_empty() {
                    break;
                }

                let intersections = find_intersections(building);
                if intersections.is_empty() {
                    log::warn!("Building {} has no grid intersections", building.name);
                }
                let zones = builder.build(&intersections);
                log::debug!(
                    "Building {}: {} point, {} line, {} area zones",
                    building.name,
                    zones.points.len(),
                    zones.lines.len(),
                    zones.areas.len()
                );

                for found in self.run_passes(&matcher, &zones, &mut pending)? {
                    assignments.push(Assignment::matched(
                        found.element.name,
                        building.name.as_str(),
                        found.label,
                    ));
                }

                if !self.config.process_all_buildings {
                    let skipped = document.buildings.len() - index - 1;
                    if skipped > 0 && !pending.is_empty() {
                        log::warn!(
                            "Stopping after building {}; {} buildings not searched for {} unmatched elements",
                            building.name,
                            skipped,
                            pending.len()
                        );
                    }
                    break;
                }
            }
        }

        let unresolved = pending.len();
        assignments.extend(pending.into_iter().map(|e| Assignment::unresolved(e.name)));

        log::info!(
            "Located {} of {} elements ({} unresolved) in {:?}",
            total - unresolved,
            total,
            unresolved,
            started.elapsed()
        );

        Ok(assignments)
    }

    /// Build the zones of a named building
    ///
    /// Returns `Ok(None)` if the building does not exist.
    pub fn zones_for(&self, document: &InputDocument, building: &str) -> Result<Option<ZoneSet>> {
        self.config.validate()?;
        let Some(building) = document.building(building) else {
            return Ok(None);
        };
        let unit = detect_unit(document)?;
        let intersections = find_intersections(building);
        Ok(Some(
            ZoneBuilder::from_config(&self.config, unit).build(&intersections),
        ))
    }

    fn run_passes(
        &self,
        matcher: &ZoneMatcher,
        zones: &ZoneSet,
        pending: &mut Vec<Element>,
    ) -> Result<Vec<crate::ZoneMatch>> {
        let mut matches = Vec::new();
        for kind in PASSES {
            if pending.is_empty() {
                break;
            }
            let quad_segs = match kind {
                ZoneKind::Point => self.config.point_quad_segs,
                ZoneKind::Line | ZoneKind::Area => self.config.zone_quad_segs,
            };
            let found = matcher.run_pass(pending, zones.of_kind(kind), quad_segs)?;
            log::debug!(
                "{kind} pass: {} matched, {} pending",
                found.len(),
                pending.len()
            );
            matches.extend(found);
        }
        Ok(matches)
    }
}

/// Classify a document with the default configuration
pub fn locate(document: &InputDocument) -> Result<Vec<Assignment>> {
    ZoneLocator::default().locate(document)
}
