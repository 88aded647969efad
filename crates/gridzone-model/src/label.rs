// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structured zone identity
//!
//! A zone is identified by the axes it spans, split into the axes declared
//! first in each intersection pair and the axes declared second. Rendering
//! joins each side with `-` and the two sides with `/`, e.g. `"2-3/B-C"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zone granularity, ordered from most to least specific
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// A single grid intersection
    Point,
    /// Axis-to-axis segment along a shared axis
    Line,
    /// Rectangle bounded by four axes
    Area,
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneKind::Point => write!(f, "point"),
            ZoneKind::Line => write!(f, "line"),
            ZoneKind::Area => write!(f, "area"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ZoneLabel {
    pub kind: ZoneKind,
    /// `[first-axis names, second-axis names]`
    pub components: [Vec<String>; 2],
}

impl ZoneLabel {
    /// Label of a single intersection, keeping declaration order
    pub fn point(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            kind: ZoneKind::Point,
            components: [vec![first.into()], vec![second.into()]],
        }
    }

    /// Label spanning two intersections
    ///
    /// Each side is sorted and deduplicated independently.
    pub fn span(kind: ZoneKind, firsts: [&str; 2], seconds: [&str; 2]) -> Self {
        Self {
            kind,
            components: [sorted_names(firsts), sorted_names(seconds)],
        }
    }

    /// All axis names referenced by this zone
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.components.iter().flatten().map(String::as_str)
    }
}

fn sorted_names(names: [&str; 2]) -> Vec<String> {
    let mut names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    names.sort();
    names.dedup();
    names
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.components[0].join("-"),
            self.components[1].join("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_label_keeps_order() {
        assert_eq!(ZoneLabel::point("2", "B").to_string(), "2/B");
    }

    #[test]
    fn test_line_label_dedups_shared_axis() {
        let label = ZoneLabel::span(ZoneKind::Line, ["3", "2"], ["B", "B"]);
        assert_eq!(label.to_string(), "2-3/B");
    }

    #[test]
    fn test_area_label_sorts_each_side() {
        let label = ZoneLabel::span(ZoneKind::Area, ["3", "2"], ["C", "B"]);
        assert_eq!(label.to_string(), "2-3/B-C");
        assert_eq!(label.axes().count(), 4);
    }

    #[test]
    fn test_lexicographic_ordering() {
        let label = ZoneLabel::span(ZoneKind::Line, ["2", "10"], ["A", "A"]);
        assert_eq!(label.to_string(), "10-2/A");
    }
}
