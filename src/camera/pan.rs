use bevy::prelude::*;

use crate::parallax::ParallaxCamera;
use crate::registry::camera::CameraConfig;

/// Longest frame step the camera will integrate, so a hitch does not fling it.
pub const MAX_DELTA_SECS: f32 = 1.0 / 20.0;

/// Normalized pan direction requested this frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraIntent(pub Vec2);

pub fn read_camera_input(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<CameraIntent>) {
    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y += 1.0;
    }
    intent.0 = dir.normalize_or_zero();
}

pub fn pan_camera(
    time: Res<Time>,
    intent: Res<CameraIntent>,
    config: Res<CameraConfig>,
    mut query: Query<&mut Transform, With<ParallaxCamera>>,
) {
    let dt = time.delta_secs().min(MAX_DELTA_SECS);
    let step = intent.0 * config.speed * dt;
    if step == Vec2::ZERO {
        return;
    }
    for mut transform in &mut query {
        transform.translation += step.extend(0.0);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;

    use super::*;
    use crate::test_helpers::fixtures;

    #[test]
    fn diagonal_input_is_normalized() {
        let mut app = fixtures::test_app();
        app.init_resource::<CameraIntent>();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyD);
        keys.press(KeyCode::KeyW);
        app.insert_resource(keys);
        app.add_systems(Update, read_camera_input);

        app.update();

        let intent = app.world().resource::<CameraIntent>().0;
        assert!((intent.length() - 1.0).abs() < 1e-5);
        assert!(intent.x > 0.0 && intent.y > 0.0);
    }

    #[test]
    fn pan_moves_camera_along_intent() {
        let mut app = fixtures::test_app();
        // A one-second step also exercises the hitch clamp.
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs(1)));
        app.insert_resource(CameraIntent(Vec2::X));
        app.insert_resource(CameraConfig {
            speed: 100.0,
            start: Vec2::ZERO,
        });
        let camera = fixtures::spawn_camera(&mut app, Vec2::ZERO);
        app.add_systems(Update, pan_camera);

        // The first update only latches the clock.
        app.update();
        let before = app.world().get::<Transform>(camera).unwrap().translation;
        app.update();
        let after = app.world().get::<Transform>(camera).unwrap().translation;

        assert!((after.x - before.x - 100.0 * MAX_DELTA_SECS).abs() < 1e-4);
        assert_eq!(after.y, 0.0);
    }
}
