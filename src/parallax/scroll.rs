use bevy::prelude::*;

use super::{ParallaxCamera, ScrollController};

/// Move every layer by this frame's camera displacement.
///
/// Must run after the camera has been moved for the frame.
pub fn parallax_scroll(
    mut controller: ResMut<ScrollController>,
    cameras: Query<&Transform, With<ParallaxCamera>>,
    mut targets: Query<&mut Transform, Without<ParallaxCamera>>,
) {
    let Some(camera) = controller.camera() else {
        return;
    };
    let Ok(camera_tf) = cameras.get(camera) else {
        return;
    };

    let frame = controller.advance(camera_tf.translation.truncate());
    for layer in controller.layers() {
        if let Some(target) = layer.config().target
            && let Ok(mut transform) = targets.get_mut(target)
        {
            layer.apply(&mut transform.translation, &frame);
        }
    }
}
