use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use super::loader::Validate;
use crate::parallax::config::{LayerDef, TextureDef};

/// Largest generated texture side, in pixels.
pub const MAX_TEXTURE_SIDE: u32 = 8192;

/// Camera section of a scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraDef {
    /// Pan speed in world units per second.
    pub speed: f32,
    #[serde(default)]
    pub start: [f32; 2],
}

/// Asset loaded from *.scene.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct SceneAsset {
    pub camera: CameraDef,
    pub layers: Vec<LayerDef>,
}

impl Validate for SceneAsset {
    fn validate(&self) -> Result<(), String> {
        if !(self.camera.speed.is_finite() && self.camera.speed >= 0.0) {
            return Err(format!(
                "camera speed {} must be finite and non-negative",
                self.camera.speed
            ));
        }
        for layer in &self.layers {
            if !(layer.pixels_per_unit.is_finite() && layer.pixels_per_unit > 0.0) {
                return Err(format!(
                    "layer '{}' has pixels_per_unit {}, expected > 0",
                    layer.name, layer.pixels_per_unit
                ));
            }
            let (width, height) = match layer.texture {
                TextureDef::Empty => continue,
                TextureDef::Stars { width, height, .. }
                | TextureDef::Hills { width, height, .. } => (width, height),
            };
            let side = 1..=MAX_TEXTURE_SIDE;
            if !side.contains(&width) || !side.contains(&height) {
                return Err(format!(
                    "layer '{}' texture is {width}x{height}, sides must be 1..={MAX_TEXTURE_SIDE}",
                    layer.name
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::loader::{self, RonLoaderError};

    const SCENE_WITH_LAYER: &str = "(camera: (speed: 1.0), layers: [(name: \"wide\", texture: Stars(width: WIDTH, height: 64, density: 0.01, seed: 1), z_order: 0.0, pixels_per_unit: PPU)])";

    fn scene_with(width: u32, ppu: f32) -> Result<SceneAsset, RonLoaderError> {
        let source = SCENE_WITH_LAYER
            .replace("WIDTH", &width.to_string())
            .replace("PPU", &format!("{ppu:?}"));
        loader::parse(source.as_bytes())
    }

    #[test]
    fn bundled_scene_parses() {
        let scene: SceneAsset =
            ron::from_str(include_str!("../../assets/scene/skyline.scene.ron")).unwrap();

        assert!(scene.camera.speed > 0.0);
        assert!(!scene.layers.is_empty());
        assert!(
            scene
                .layers
                .iter()
                .any(|layer| layer.x.is_some_and(|x| x.infinite_scroll))
        );
        assert!(
            scene
                .layers
                .iter()
                .any(|layer| layer.texture == TextureDef::Empty)
        );
    }

    #[test]
    fn bundled_scene_passes_validation() {
        let bytes = include_bytes!("../../assets/scene/skyline.scene.ron");
        assert!(loader::parse::<SceneAsset>(bytes).is_ok());
    }

    #[test]
    fn oversized_texture_is_rejected_at_load() {
        assert!(scene_with(64, 1.0).is_ok());
        assert!(scene_with(MAX_TEXTURE_SIDE, 1.0).is_ok());

        let err = scene_with(100_000, 1.0).err().unwrap();
        assert!(matches!(err, RonLoaderError::Invalid { .. }));
        assert!(err.to_string().contains("wide"));
        assert!(matches!(scene_with(0, 1.0), Err(RonLoaderError::Invalid { .. })));
    }

    #[test]
    fn non_positive_pixels_per_unit_is_rejected() {
        assert!(matches!(scene_with(64, 0.0), Err(RonLoaderError::Invalid { .. })));
        assert!(matches!(scene_with(64, -2.0), Err(RonLoaderError::Invalid { .. })));
    }

    #[test]
    fn malformed_scene_is_rejected() {
        let result = ron::from_str::<SceneAsset>("(camera: (speed: 1.0))");
        assert!(result.is_err());
    }
}
