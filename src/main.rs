use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use skyscroll::parallax::spawn::ParallaxScenePlugin;
use skyscroll::{camera, parallax, registry, sets, ui};

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(ImagePlugin::default_nearest())
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Skyscroll".into(),
                    resolution: (1280, 720).into(),
                    ..default()
                }),
                ..default()
            }),
    )
    .add_plugins(EguiPlugin::default())
    .add_plugins(FrameTimeDiagnosticsPlugin::default())
    .add_plugins(registry::RegistryPlugin)
    .add_plugins(camera::CameraPlugin)
    .add_plugins(parallax::ParallaxPlugin)
    .add_plugins(ParallaxScenePlugin)
    .add_plugins(ui::UiPlugin)
    .insert_resource(ClearColor(Color::srgb(0.05, 0.06, 0.12)));

    sets::configure_sets(&mut app);
    app.run();
}
