// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;

use log::debug;
use yaml_rust::Yaml;

use crate::city::{City, CityError};
use crate::rect::Rect;

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ParseError {
    InvalidDimension(i64), // grid size in the document is negative
    Malformed(String),     // a node does not have the expected shape
}
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::InvalidDimension(value) =>
                write!(f, "grid size must be a nonnegative integer, got {}", value),
            ParseError::Malformed(message) =>
                write!(f, "malformed city description: {}", message),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Placement {
    pub label: String,
    pub floor: usize,
    pub rect: Rect,
}

/// A rejected placement, with enough context to point at the document entry
/// that caused it.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct BuildError {
    pub label: String,
    pub floor: usize,
    pub cause: CityError,
}
impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cannot place {} on floor {}: {}", self.label, self.floor, self.cause)
    }
}

/// A parsed city description: a grid size and an ordered list of rectangle
/// placements, replayed in document order to erect the buildings.
///
/// Document shape:
/// ```yaml
/// size: 8
/// buildings:
///   tower:
///     - [0, 0, 0, 2, 2]   # floor, x1, y1, x2, y2
///     - [1, 0, 0, 1, 2]
/// ```
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Blueprint {
    pub size: usize,
    pub placements: Vec<Placement>,
}

impl Blueprint {
    pub fn from_yaml(doc: &Yaml) -> Result<Blueprint, ParseError> {
        let size = match &doc["size"] {
            Yaml::Integer(value) if *value >= 0 => *value as usize,
            Yaml::Integer(value) => return Err(ParseError::InvalidDimension(*value)),
            _ => return Err(ParseError::Malformed("size must be an integer".to_string())),
        };

        let mut placements = Vec::new();
        match &doc["buildings"] {
            Yaml::Hash(entries) => {
                for (key, value) in entries {
                    let label = key.as_str()
                                   .ok_or_else(|| ParseError::Malformed(
                                       "building labels must be strings".to_string()))?;
                    let rows = value.as_vec()
                                    .ok_or_else(|| ParseError::Malformed(
                                        format!("building {}: expected a list of placements", label)))?;
                    for row in rows {
                        placements.push(Self::parse_placement(label, row)?);
                    }
                }
            }
            Yaml::BadValue => {} // no buildings key: an empty city
            _ => return Err(ParseError::Malformed(
                     "buildings must be a mapping from label to placements".to_string())),
        }

        Ok(Blueprint { size, placements })
    }

    fn parse_placement(label: &str, row: &Yaml) -> Result<Placement, ParseError> {
        let items = row.as_vec()
                       .ok_or_else(|| ParseError::Malformed(
                           format!("building {}: each placement must be a list", label)))?;
        if items.len() != 5 {
            return Err(ParseError::Malformed(
                format!("building {}: a placement needs floor, x1, y1, x2, y2", label)));
        }
        let mut numbers = Vec::new();
        for item in items {
            match item.as_i64() {
                Some(value) if value >= 0 => numbers.push(value as usize),
                Some(value) => return Err(ParseError::Malformed(
                    format!("building {}: negative coordinate {}", label, value))),
                None => return Err(ParseError::Malformed(
                    format!("building {}: placements hold integers only", label))),
            }
        }
        let (floor, x1, y1, x2, y2) = (numbers[0], numbers[1], numbers[2], numbers[3], numbers[4]);
        if x1 > x2 || y1 > y2 {
            return Err(ParseError::Malformed(
                format!("building {}: corners ({},{}) and ({},{}) are not ordered", label, x1, y1, x2, y2)));
        }
        Ok(Placement {
            label: label.to_string(),
            floor,
            rect: Rect::new(x1, y1, x2, y2),
        })
    }

    /// Replay the placements against a fresh city. The first rejected
    /// placement aborts the build and is reported with its document entry.
    pub fn build(&self) -> Result<City<String>, BuildError> {
        let mut city = City::new(self.size);
        for placement in &self.placements {
            debug!("placing {} for {} on floor {}", placement.rect, placement.label, placement.floor);
            city.expand(placement.label.clone(), placement.floor, placement.rect)
                .map_err(|cause| BuildError {
                    label: placement.label.clone(),
                    floor: placement.floor,
                    cause,
                })?;
        }
        Ok(city)
    }
}
