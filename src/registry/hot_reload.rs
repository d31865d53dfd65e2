//! Hot-reload of the scene file.

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::assets::SceneAsset;
use super::camera::CameraConfig;
use super::SceneHandle;

use crate::parallax::config::SceneConfig;
use crate::parallax::spawn::PendingRespawn;
use crate::parallax::ParallaxActivity;

/// Replace the scene config and cycle parallax off so the layers are respawned
/// and their pipelines rebuilt from the new definitions.
pub(crate) fn hot_reload_scene(
    mut commands: Commands,
    mut events: MessageReader<AssetEvent<SceneAsset>>,
    handle: Res<SceneHandle>,
    assets: Res<Assets<SceneAsset>>,
    mut next_activity: ResMut<NextState<ParallaxActivity>>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handle.0.id()
            && let Some(asset) = assets.get(&handle.0)
        {
            commands.insert_resource(SceneConfig {
                layers: asset.layers.clone(),
            });
            commands.insert_resource(CameraConfig::from(&asset.camera));
            commands.insert_resource(PendingRespawn);
            next_activity.set(ParallaxActivity::Inactive);
            info!("Hot-reloaded scene ({} layers)", asset.layers.len());
        }
    }
}
