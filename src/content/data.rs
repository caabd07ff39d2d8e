//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron and are only used for
//! deserialization. The ContentRegistry holds the loaded values.

use serde::{Deserialize, Serialize};

use crate::movement::controller::ControllerConfig;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Player (player.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerDef {
    pub controller: ControllerConfig,
    pub body: BodyDef,
    pub spawn: (f32, f32),
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            controller: ControllerConfig::default(),
            body: BodyDef::default(),
            spawn: (0.0, 1.0),
        }
    }
}

/// Collider dimensions in world units.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BodyDef {
    pub mass: f32,
    pub size: (f32, f32),
    pub foot_size: (f32, f32),
    /// Vertical offset of the foot collider's centre from the body centre.
    pub foot_offset: f32,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            mass: 1.0,
            size: (0.8, 1.0),
            foot_size: (0.6, 0.1),
            foot_offset: -0.45,
        }
    }
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub edges: Vec<EdgeDef>,
}

/// A static terrain boundary made of an ordered point list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EdgeDef {
    /// Local-space points, applied to the collider as given.
    pub points: Vec<(f32, f32)>,
    #[serde(default)]
    pub position: (f32, f32),
    /// Draw the boundary as a line overlay while playing.
    #[serde(default)]
    pub show_edges: bool,
    #[serde(default)]
    pub line_color: Option<(f32, f32, f32)>,
}
