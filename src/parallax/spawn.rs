use bevy::prelude::*;

use super::config::{LayerDef, SceneConfig};
use super::layer::LayerConfig;
use super::{texture, ParallaxActivity, PixelsPerUnit, ScrollController};
use crate::registry::AppState;

/// Marker for entities spawned from the scene file, so they can be replaced
/// on hot reload.
#[derive(Component, Debug)]
pub struct SceneLayer {
    pub name: String,
}

/// Set when the scene config changed and the layers must be rebuilt once
/// parallax has been torn down.
#[derive(Resource, Debug, Default)]
pub struct PendingRespawn;

pub struct ParallaxScenePlugin;

impl Plugin for ParallaxScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Ready), spawn_scene_layers)
            .add_systems(
                Update,
                respawn_scene_layers.run_if(
                    resource_exists::<PendingRespawn>
                        .and(in_state(ParallaxActivity::Inactive)),
                ),
            );
    }
}

/// Spawn the entity for one layer definition and return the runtime config
/// pointing at it.
pub fn spawn_layer(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    def: &LayerDef,
) -> LayerConfig {
    let mut entity = commands.spawn((
        SceneLayer {
            name: def.name.clone(),
        },
        Transform::from_xyz(def.origin[0], def.origin[1], def.z_order),
        PixelsPerUnit(def.pixels_per_unit),
    ));

    if let Some(image) = texture::generate(&def.texture) {
        let size = (def.pixels_per_unit > 0.0).then(|| image.size_f32() / def.pixels_per_unit);
        entity.insert(Sprite {
            image: images.add(image),
            custom_size: size,
            ..default()
        });
    }

    LayerConfig {
        name: def.name.clone(),
        target: Some(entity.id()),
        footprint: None,
        x: def.x,
        y: def.y,
    }
}

pub fn spawn_scene_layers(
    mut commands: Commands,
    scene: Res<SceneConfig>,
    mut images: ResMut<Assets<Image>>,
    mut next_activity: ResMut<NextState<ParallaxActivity>>,
) {
    let layers: Vec<LayerConfig> = scene
        .layers
        .iter()
        .map(|def| spawn_layer(&mut commands, &mut images, def))
        .collect();

    info!("Spawned {} scene layers", layers.len());
    commands.insert_resource(ScrollController::new(layers));
    next_activity.set(ParallaxActivity::Active);
}

pub fn respawn_scene_layers(
    mut commands: Commands,
    existing: Query<Entity, With<SceneLayer>>,
    scene: Res<SceneConfig>,
    images: ResMut<Assets<Image>>,
    next_activity: ResMut<NextState<ParallaxActivity>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<PendingRespawn>();
    spawn_scene_layers(commands, scene, images, next_activity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallax::config::{AxisDef, TextureDef};
    use crate::test_helpers::fixtures;

    fn def(name: &str, texture: TextureDef) -> LayerDef {
        LayerDef {
            name: name.into(),
            texture,
            z_order: -3.0,
            pixels_per_unit: 2.0,
            origin: [1.0, 2.0],
            x: Some(AxisDef {
                multiplier: -0.5,
                infinite_scroll: true,
            }),
            y: None,
        }
    }

    #[test]
    fn spawned_layer_matches_definition() {
        let mut app = fixtures::test_app();
        app.insert_resource(SceneConfig {
            layers: vec![
                def(
                    "stars",
                    TextureDef::Stars {
                        width: 64,
                        height: 32,
                        density: 0.01,
                        seed: 1,
                    },
                ),
                def("blank", TextureDef::Empty),
            ],
        });
        app.add_systems(Update, spawn_scene_layers);
        app.update();

        let controller = app.world().resource::<ScrollController>();
        assert_eq!(controller.layers().len(), 2);
        let stars = controller.layers()[0].config().clone();
        let blank = controller.layers()[1].config().clone();
        assert_eq!(stars.name, "stars");
        assert_eq!(
            stars.x,
            Some(AxisDef {
                multiplier: -0.5,
                infinite_scroll: true,
            })
        );

        let stars_entity = stars.target.unwrap();
        let tf = app.world().get::<Transform>(stars_entity).unwrap();
        assert_eq!(tf.translation, Vec3::new(1.0, 2.0, -3.0));
        let sprite = app.world().get::<Sprite>(stars_entity).unwrap();
        assert_eq!(sprite.custom_size, Some(Vec2::new(32.0, 16.0)));

        assert!(app.world().get::<Sprite>(blank.target.unwrap()).is_none());
    }

    #[test]
    fn pending_respawn_replaces_layers_and_reactivates() {
        let mut app = fixtures::test_app();
        let stale = app
            .world_mut()
            .spawn((
                SceneLayer {
                    name: "stale".into(),
                },
                Transform::default(),
            ))
            .id();
        app.insert_resource(SceneConfig {
            layers: vec![def("front", TextureDef::Empty), def("back", TextureDef::Empty)],
        });
        app.init_resource::<PendingRespawn>();
        app.add_systems(
            Update,
            respawn_scene_layers.run_if(
                resource_exists::<PendingRespawn>.and(in_state(ParallaxActivity::Inactive)),
            ),
        );

        app.update();

        assert!(app.world().get::<SceneLayer>(stale).is_none());
        assert!(!app.world().contains_resource::<PendingRespawn>());
        let names: Vec<String> = app
            .world_mut()
            .query::<&SceneLayer>()
            .iter(app.world())
            .map(|layer| layer.name.clone())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"front".to_string()) && names.contains(&"back".to_string()));

        let controller = app.world().resource::<ScrollController>();
        let layers: Vec<&str> = controller.layers().iter().map(|layer| layer.name()).collect();
        assert_eq!(layers, ["front", "back"]);

        app.update();
        assert_eq!(
            *app.world().resource::<State<ParallaxActivity>>().get(),
            ParallaxActivity::Active
        );
    }
}
