pub mod pan;

use bevy::prelude::*;

use crate::parallax::ParallaxCamera;
use crate::registry::camera::CameraConfig;
use crate::registry::AppState;
use crate::sets::GameSet;

const CAMERA_SCALE: f32 = 1.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<pan::CameraIntent>()
            .add_systems(OnEnter(AppState::Ready), spawn_camera)
            .add_systems(
                Update,
                (
                    pan::read_camera_input.in_set(GameSet::Input),
                    pan::pan_camera.in_set(GameSet::Camera),
                )
                    .run_if(in_state(AppState::Ready)),
            );
    }
}

fn spawn_camera(mut commands: Commands, config: Res<CameraConfig>) {
    commands.spawn((
        Camera2d,
        ParallaxCamera,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(config.start.extend(0.0)),
    ));
}
