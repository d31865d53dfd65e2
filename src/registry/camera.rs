use bevy::prelude::*;

use super::assets::CameraDef;

/// Demo camera parameters loaded from the scene file.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub speed: f32,
    pub start: Vec2,
}

impl From<&CameraDef> for CameraConfig {
    fn from(def: &CameraDef) -> Self {
        Self {
            speed: def.speed,
            start: Vec2::from(def.start),
        }
    }
}
