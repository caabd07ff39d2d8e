//! Movement domain: terrain ray probes backed by the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::movement::controller::GroundProbe;

/// Ground probe that only hits the terrain layer.
pub(crate) struct TerrainProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> TerrainProbe<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask(GameLayer::Terrain),
        }
    }
}

impl GroundProbe for TerrainProbe<'_, '_, '_> {
    fn probe(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool {
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &self.filter)
            .is_some()
    }
}
