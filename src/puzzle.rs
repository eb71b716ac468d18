use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::location::Location;

/// Reasons a puzzle description cannot be loaded.
///
/// These are the only errors the engine ever surfaces. Once a session is
/// loaded, illegal player moves are defined no-ops, not errors.
#[derive(Debug, Error)]
pub enum InvalidPuzzle {
    /// The description text is not well-formed JSON for the expected schema.
    #[error("puzzle description is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The grid side length is zero.
    #[error("grid size must be at least 1")]
    BadSize,
    /// An endpoint lies outside the `size`-by-`size` grid.
    #[error("endpoint ({x}, {y}) of color {color:?} is outside a {size}x{size} grid")]
    EndpointOutOfBounds {
        /// The offending color's name.
        color: String,
        /// The endpoint's `x` coordinate.
        x: usize,
        /// The endpoint's `y` coordinate.
        y: usize,
        /// The grid side length.
        size: usize,
    },
    /// A color is listed with both endpoints on the same cell.
    #[error("color {color:?} has coincident endpoints at ({x}, {y})")]
    EndpointsCoincide {
        /// The offending color's name.
        color: String,
        /// The shared `x` coordinate.
        x: usize,
        /// The shared `y` coordinate.
        y: usize,
    },
    /// Two colors claim the same endpoint cell.
    #[error("colors {first:?} and {second:?} both claim endpoint ({x}, {y})")]
    EndpointShared {
        /// The color listed earlier in the description.
        first: String,
        /// The color listed later.
        second: String,
        /// The contested endpoint's `x` coordinate.
        x: usize,
        /// The contested endpoint's `y` coordinate.
        y: usize,
    },
    /// The same color name appears more than once.
    #[error("color {0:?} appears more than once")]
    DuplicateColor(String),
}

/// One color's two fixed endpoints, in the `(x, y)` axis convention of the
/// external description format.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EndpointSpec {
    /// The color's name, e.g. `"red"`.
    pub color: String,
    /// `x` coordinate of the first endpoint.
    pub start_x: usize,
    /// `y` coordinate of the first endpoint.
    pub start_y: usize,
    /// `x` coordinate of the second endpoint.
    pub end_x: usize,
    /// `y` coordinate of the second endpoint.
    pub end_y: usize,
}

impl EndpointSpec {
    pub(crate) fn endpoints(&self) -> (Location, Location) {
        (Location(self.start_x, self.start_y), Location(self.end_x, self.end_y))
    }
}

/// An external puzzle description: a square grid side length and the endpoint
/// pair of every color. Mirrors the static JSON configuration files the
/// surrounding application ships.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Puzzle {
    /// Identifier carried through from the configuration file.
    #[serde(default)]
    pub puzzle_id: u32,
    /// The grid side length.
    pub size: usize,
    /// One entry per color pair to connect.
    pub colors: Vec<EndpointSpec>,
}

impl Puzzle {
    /// Parse a single puzzle description from JSON.
    pub fn parse(json: &str) -> Result<Self, InvalidPuzzle> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a whole puzzle file, which is a JSON array of descriptions.
    pub fn parse_set(json: &str) -> Result<Vec<Self>, InvalidPuzzle> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check this description for contradictions.
    ///
    /// [`Session::load`](crate::Session::load) runs this before building any
    /// state, so loading never produces a partial session.
    pub fn validate(&self) -> Result<(), InvalidPuzzle> {
        if self.size == 0 {
            return Err(InvalidPuzzle::BadSize);
        }

        let mut claimed: HashMap<Location, &str> = HashMap::with_capacity(self.colors.len() * 2);
        let mut names: HashSet<&str> = HashSet::with_capacity(self.colors.len());

        for spec in &self.colors {
            if !names.insert(spec.color.as_str()) {
                return Err(InvalidPuzzle::DuplicateColor(spec.color.clone()));
            }

            let (start, end) = spec.endpoints();
            for location in [start, end] {
                if location.0 >= self.size || location.1 >= self.size {
                    return Err(InvalidPuzzle::EndpointOutOfBounds {
                        color: spec.color.clone(),
                        x: location.0,
                        y: location.1,
                        size: self.size,
                    });
                }
            }

            if start == end {
                return Err(InvalidPuzzle::EndpointsCoincide {
                    color: spec.color.clone(),
                    x: start.0,
                    y: start.1,
                });
            }

            for location in [start, end] {
                if let Some(first) = claimed.insert(location, spec.color.as_str()) {
                    return Err(InvalidPuzzle::EndpointShared {
                        first: first.to_owned(),
                        second: spec.color.clone(),
                        x: location.0,
                        y: location.1,
                    });
                }
            }
        }

        Ok(())
    }
}
