// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON document decoding

use gridzone_model::{
    Building, Coord2, DocumentParser, ElementDescriptor, GridLine, InputDocument, ParseError,
    Result,
};
use serde_json::{Map, Value};

/// JSON decoder implementing `DocumentParser`
#[derive(Clone, Debug, Default)]
pub struct JsonDocumentParser {
    /// Drop elements carrying neither `size` nor `boundary` instead of failing
    pub skip_incomplete_elements: bool,
}

impl JsonDocumentParser {
    /// Create a new parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether incomplete elements are skipped
    pub fn with_skip_incomplete(mut self, enabled: bool) -> Self {
        self.skip_incomplete_elements = enabled;
        self
    }

    /// Decode an already parsed JSON value
    pub fn decode(&self, value: &Value) -> Result<InputDocument> {
        let root = value
            .as_object()
            .ok_or_else(|| ParseError::format("document root must be an object"))?;

        let buildings = root
            .get("buildings")
            .ok_or_else(|| ParseError::missing("document", "buildings"))?
            .as_object()
            .ok_or_else(|| ParseError::format("`buildings` must be an object"))?;

        let elements = root
            .get("elements")
            .ok_or_else(|| ParseError::missing("document", "elements"))?
            .as_array()
            .ok_or_else(|| ParseError::format("`elements` must be an array"))?;

        let buildings = buildings
            .iter()
            .map(|(name, data)| decode_building(name, data))
            .collect::<Result<Vec<_>>>()?;

        let mut descriptors = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            match decode_element(index, element)? {
                Some(descriptor) => descriptors.push(descriptor),
                None if self.skip_incomplete_elements => {
                    log::warn!("Skipping element #{index}: neither `size` nor `boundary` given");
                }
                None => {
                    return Err(ParseError::missing(
                        format!("element #{index}"),
                        "size or boundary",
                    ))
                }
            }
        }

        log::debug!(
            "Decoded {} buildings and {} elements",
            buildings.len(),
            descriptors.len()
        );

        Ok(InputDocument {
            buildings,
            elements: descriptors,
        })
    }
}

impl DocumentParser for JsonDocumentParser {
    fn parse(&self, content: &str) -> Result<InputDocument> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ParseError::Json(e.to_string()))?;
        self.decode(&value)
    }
}


fn decode_building(name: &str, data: &Value) -> Result<Building> {
    let context = format!("building {name}");
    let grid_lines = data
        .get("grid_lines")
        .ok_or_else(|| ParseError::missing(&context, "grid_lines"))?
        .as_object()
        .ok_or_else(|| ParseError::format(format!("{context}: `grid_lines` must be an object")))?;

    let grid_lines = grid_lines
        .iter()
        .map(|(axis, segment)| decode_grid_line(name, axis, segment))
        .collect::<Result<Vec<_>>>()?;

    Ok(Building::new(name, grid_lines))
}

fn decode_grid_line(building: &str, axis: &str, segment: &Value) -> Result<GridLine> {
    let invalid = || {
        ParseError::format(format!(
            "building {building}, axis {axis}: expected two [x, y] points"
        ))
    };
    let points = segment.as_array().ok_or_else(invalid)?;
    if points.len() != 2 {
        return Err(invalid());
    }
    let start = coord(&points[0]).ok_or_else(invalid)?;
    let end = coord(&points[1]).ok_or_else(invalid)?;
    Ok(GridLine::new(axis, start, end))
}

/// Returns `Ok(None)` for elements with neither `size` nor `boundary`
fn decode_element(index: usize, value: &Value) -> Result<Option<ElementDescriptor>> {
    let context = format!("element #{index}");
    let fields = value
        .as_object()
        .ok_or_else(|| ParseError::format(format!("{context} must be an object")))?;

    let name = fields
        .get("element_name")
        .ok_or_else(|| ParseError::missing(&context, "element_name"))?
        .as_str()
        .ok_or_else(|| ParseError::format(format!("{context}: `element_name` must be a string")))?;

    // `size` takes precedence when both forms are present
    if let Some(size) = fields.get("size") {
        let origin = fields
            .get("coords")
            .ok_or_else(|| ParseError::missing(name, "coords"))?;
        let origin = coord(origin)
            .ok_or_else(|| ParseError::geometry(name, "`coords` must hold at least two numbers"))?;
        let size = coord(size)
            .ok_or_else(|| ParseError::geometry(name, "`size` must hold at least two numbers"))?;
        let rotation = rotation(name, fields)?;
        return Ok(Some(ElementDescriptor::sized(name, origin, size, rotation)));
    }

    if let Some(boundary) = fields.get("boundary") {
        let vertices = boundary
            .as_array()
            .ok_or_else(|| ParseError::geometry(name, "`boundary` must be an array of points"))?
            .iter()
            .map(|v| {
                coord(v).ok_or_else(|| {
                    ParseError::geometry(name, "boundary vertex must hold at least two numbers")
                })
            })
            .collect::<Result<Vec<_>>>()?;
        return Ok(Some(ElementDescriptor::boundary(name, vertices)));
    }

    Ok(None)
}

/// Rotation in degrees, given either as `[deg]` or `deg`; absent means 0
fn rotation(name: &str, fields: &Map<String, Value>) -> Result<f64> {
    let invalid = || ParseError::geometry(name, "`rotation` must be a number or [number]");
    match fields.get("rotation") {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Array(values)) if values.is_empty() => Ok(0.0),
        Some(Value::Array(values)) => values[0].as_f64().ok_or_else(invalid),
        Some(value) => value.as_f64().ok_or_else(invalid),
    }
}

/// First two numeric components of a coordinate array
fn coord(value: &Value) -> Option<Coord2> {
    let components = value.as_array()?;
    if components.len() < 2 {
        return None;
    }
    Some([components[0].as_f64()?, components[1].as_f64()?])
}
