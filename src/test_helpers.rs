pub mod fixtures {
    use bevy::prelude::*;
    use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
    use bevy::state::app::StatesPlugin;

    use crate::parallax::{ParallaxActivity, ParallaxCamera};

    /// Create a minimal Bevy App with the resources parallax systems read.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }
        app.init_state::<ParallaxActivity>();
        app.insert_resource(Assets::<Image>::default());
        app
    }

    pub fn spawn_camera(app: &mut App, position: Vec2) -> Entity {
        app.world_mut()
            .spawn((ParallaxCamera, Transform::from_translation(position.extend(0.0))))
            .id()
    }

    /// Add a solid white `width`×`height` image and return its handle.
    pub fn add_test_image(app: &mut App, width: u32, height: u32) -> Handle<Image> {
        let image = Image::new_fill(
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &[255, 255, 255, 255],
            TextureFormat::Rgba8UnormSrgb,
            default(),
        );
        app.world_mut().resource_mut::<Assets<Image>>().add(image)
    }
}
