//! Sprite manifest loading and asset management.
//!
//! The manifest JSON maps animation clip names (`z_idle`, `z_walk`, ...) to
//! horizontal sprite strips and their frame timing.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Resource containing all loaded clip definitions.
#[derive(Resource, Default)]
pub struct SpriteManifest {
    /// Version of the manifest schema.
    pub version: u32,
    /// Map of clip names to their definitions.
    pub clips: HashMap<String, ClipDef>,
    /// Texture and atlas layout per clip, only for strips present on disk.
    pub textures: HashMap<String, (Handle<Image>, Handle<TextureAtlasLayout>)>,
}

/// Definition of a single animation clip.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipDef {
    /// Path to the strip image, relative to assets/.
    pub path: String,
    /// Number of frames laid out left to right.
    pub frames: u32,
    /// Size of each square frame in pixels.
    pub size: u32,
    /// Seconds per frame at normal playback speed.
    #[serde(default = "default_frame_duration")]
    pub frame_duration: f32,
}

fn default_frame_duration() -> f32 {
    0.1
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
pub(crate) struct ManifestJson {
    pub(crate) version: u32,
    pub(crate) clips: HashMap<String, ClipDef>,
}

pub(crate) fn parse_manifest(contents: &str) -> Result<ManifestJson, serde_json::Error> {
    serde_json::from_str(contents)
}

impl SpriteManifest {
    /// Load the manifest from a JSON file. Clips whose strip image is missing
    /// keep their timing but render as a plain placeholder.
    pub fn load_from_file(
        &mut self,
        path: &str,
        asset_server: &AssetServer,
        layouts: &mut Assets<TextureAtlasLayout>,
    ) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!(
                "Sprite manifest not found at {:?}, using empty manifest",
                path
            );
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sprite manifest: {}", e);
                return;
            }
        };

        let manifest_json = match parse_manifest(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to parse sprite manifest: {}", e);
                return;
            }
        };

        self.version = manifest_json.version;
        self.clips = manifest_json.clips;

        for (name, def) in &self.clips {
            if !Path::new("assets").join(&def.path).exists() {
                warn!("Strip for clip '{}' not found at {}, using placeholder", name, def.path);
                continue;
            }
            let image = asset_server.load(&def.path);
            let layout = layouts.add(TextureAtlasLayout::from_grid(
                UVec2::splat(def.size),
                def.frames,
                1,
                None,
                None,
            ));
            self.textures.insert(name.clone(), (image, layout));
        }

        info!(
            "Loaded sprite manifest v{} with {} clips ({} textured)",
            self.version,
            self.clips.len(),
            self.textures.len()
        );
    }

    /// Get a clip definition by name.
    pub fn get(&self, name: &str) -> Option<&ClipDef> {
        self.clips.get(name)
    }

    /// Get the texture and atlas layout for a clip, if its strip was loaded.
    pub fn get_texture(&self, name: &str) -> Option<(Handle<Image>, Handle<TextureAtlasLayout>)> {
        self.textures.get(name).cloned()
    }
}
