use bevy::prelude::*;

/// Top-level system ordering sets for the frame loop.
///
/// Configured as a chain: Input → Camera → Parallax → Ui.
/// Parallax must observe the camera position after it has been finalized for
/// the frame, so it always runs after `Camera`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Camera,
    Parallax,
    Ui,
}

pub fn configure_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Camera,
            GameSet::Parallax,
            GameSet::Ui,
        )
            .chain(),
    );
}
