//! Shared types used across Megaverse crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A goal grid as served by the remote service: rows of cell labels.
pub type Grid = Vec<Vec<String>>;

/// Position of a cell in the grid, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u32,
    pub column: u32,
}

impl Coordinate {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The three placeable object types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Polyanet,
    Soloon,
    Cometh,
}

impl EntityKind {
    /// Sub-resource path the service exposes for this kind.
    pub fn endpoint(&self) -> &'static str {
        match self {
            EntityKind::Polyanet => "/polyanets",
            EntityKind::Soloon => "/soloons",
            EntityKind::Cometh => "/comeths",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            EntityKind::Polyanet => "🪐",
            EntityKind::Soloon => "🌕",
            EntityKind::Cometh => "☄️",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Polyanet => "polyanet",
            EntityKind::Soloon => "soloon",
            EntityKind::Cometh => "cometh",
        };
        f.write_str(name)
    }
}

/// Soloon color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Purple,
    White,
}

/// Cometh direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Kind-specific parameter of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Color(Color),
    Direction(Direction),
}

/// A decoded, placeable entity. The attribute travels with the kind that
/// owns it, so a Soloon can never carry a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Polyanet,
    Soloon(Color),
    Cometh(Direction),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Polyanet => EntityKind::Polyanet,
            Entity::Soloon(_) => EntityKind::Soloon,
            Entity::Cometh(_) => EntityKind::Cometh,
        }
    }

    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            Entity::Polyanet => None,
            Entity::Soloon(color) => Some(Attribute::Color(*color)),
            Entity::Cometh(direction) => Some(Attribute::Direction(*direction)),
        }
    }
}

/// One creation request to issue: an entity at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementCommand {
    pub coordinate: Coordinate,
    pub entity: Entity,
}

impl PlacementCommand {
    pub fn new(coordinate: Coordinate, entity: Entity) -> Self {
        Self { coordinate, entity }
    }

    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }

    pub fn attribute(&self) -> Option<Attribute> {
        self.entity.attribute()
    }
}
