pub mod config;
pub mod controller;
pub mod error;
pub mod layer;
pub mod rule;
pub mod scroll;
pub mod spawn;
pub mod texture;

use bevy::prelude::*;

use crate::sets::GameSet;

pub use controller::ScrollController;
pub use layer::{Layer, LayerConfig};

/// Marks the camera whose motion drives every parallax layer.
#[derive(Component, Debug, Default)]
pub struct ParallaxCamera;

/// Texture pixels per world unit for a layer's sprite. Bevy draws one pixel
/// per unit, so sprites without this component use 1.0.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PixelsPerUnit(pub f32);

impl Default for PixelsPerUnit {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Whether parallax pipelines are built. Entering `Active` builds them,
/// leaving it tears them down and restores stretched sprites.
#[derive(States, Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ParallaxActivity {
    #[default]
    Inactive,
    Active,
}

pub struct ParallaxPlugin;

impl Plugin for ParallaxPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ParallaxActivity>()
            .init_resource::<ScrollController>()
            .add_systems(
                OnEnter(ParallaxActivity::Active),
                controller::activate_parallax,
            )
            .add_systems(
                OnExit(ParallaxActivity::Active),
                controller::deactivate_parallax,
            )
            .add_systems(
                Update,
                scroll::parallax_scroll
                    .in_set(GameSet::Parallax)
                    .run_if(in_state(ParallaxActivity::Active)),
            );
    }
}
