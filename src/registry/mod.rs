pub mod assets;
pub mod camera;
pub mod hot_reload;
pub mod loader;

use bevy::prelude::*;

use assets::SceneAsset;
use camera::CameraConfig;
use loader::RonLoader;

use crate::parallax::config::SceneConfig;

pub const SCENE_PATH: &str = "scene/skyline.scene.ron";

/// Application state: Loading waits for the scene file, Ready runs the scene.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
}

/// Keeps the scene handle alive for hot-reload.
#[derive(Resource)]
pub(crate) struct SceneHandle(pub(crate) Handle<SceneAsset>);

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<SceneAsset>()
            .register_asset_loader(RonLoader::<SceneAsset>::new(&["scene.ron"]))
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                hot_reload::hot_reload_scene.run_if(in_state(AppState::Ready)),
            );
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle = asset_server.load::<SceneAsset>(SCENE_PATH);
    commands.insert_resource(SceneHandle(handle));
}

fn check_loading(
    mut commands: Commands,
    handle: Res<SceneHandle>,
    asset_server: Res<AssetServer>,
    scenes: Res<Assets<SceneAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if let bevy::asset::LoadState::Failed(err) = asset_server.load_state(&handle.0) {
        error!("Failed to load scene {SCENE_PATH}: {err}");
        return;
    }

    let Some(scene) = scenes.get(&handle.0) else {
        return; // not loaded yet
    };

    commands.insert_resource(SceneConfig {
        layers: scene.layers.clone(),
    });
    commands.insert_resource(CameraConfig::from(&scene.camera));

    next_state.set(AppState::Ready);
    info!(
        "Scene loaded ({} layers), entering Ready",
        scene.layers.len()
    );
}
