//! ContentRegistry resource holding the loaded player and level data.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for loaded game content.
#[derive(Resource, Debug, Clone)]
pub struct ContentRegistry {
    pub player: PlayerDef,
    pub levels: HashMap<String, LevelDef>,
    /// First level listed in levels.ron.
    pub start_level: Option<String>,
}

impl Default for ContentRegistry {
    /// Built-in content used when the data files are missing or invalid.
    fn default() -> Self {
        let floor = EdgeDef {
            points: vec![(-12.0, 0.0), (12.0, 0.0)],
            position: (0.0, -3.0),
            show_edges: true,
            line_color: None,
        };
        let ledge = EdgeDef {
            points: vec![(-2.0, 0.0), (2.0, 0.0)],
            position: (4.0, -0.5),
            show_edges: true,
            line_color: None,
        };
        let level = LevelDef {
            id: "level_fallback".to_string(),
            name: "Fallback".to_string(),
            edges: vec![floor, ledge],
        };
        Self::from_defs(PlayerDef::default(), vec![level])
    }
}

impl ContentRegistry {
    pub fn from_defs(player: PlayerDef, levels: Vec<LevelDef>) -> Self {
        let start_level = levels.first().map(|level| level.id.clone());
        Self {
            player,
            levels: levels
                .into_iter()
                .map(|level| (level.id.clone(), level))
                .collect(),
            start_level,
        }
    }

    /// The level to spawn when a run starts.
    pub fn current_level(&self) -> Option<&LevelDef> {
        self.start_level
            .as_ref()
            .and_then(|id| self.levels.get(id))
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let edge_count: usize = self.levels.values().map(|level| level.edges.len()).sum();
        format!(
            "ContentRegistry loaded:\n\
             - Levels: {}\n\
             - Edges: {}\n\
             - Start level: {}",
            self.levels.len(),
            edge_count,
            self.start_level.as_deref().unwrap_or("<none>"),
        )
    }
}
