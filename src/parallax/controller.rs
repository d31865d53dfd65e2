use bevy::prelude::*;

use super::error::ParallaxError;
use super::layer::{Footprint, Layer, LayerConfig};
use super::rule::FrameContext;
use super::{ParallaxCamera, PixelsPerUnit};

/// Owns the parallax layers and the camera motion that drives them.
#[derive(Resource, Debug, Default)]
pub struct ScrollController {
    camera: Option<Entity>,
    previous_camera_position: Vec2,
    frame_displacement: Vec2,
    layers: Vec<Layer>,
}

impl ScrollController {
    pub fn new(layers: impl IntoIterator<Item = LayerConfig>) -> Self {
        Self {
            layers: layers.into_iter().map(Layer::new).collect(),
            ..default()
        }
    }

    pub fn camera(&self) -> Option<Entity> {
        self.camera
    }

    pub fn frame_displacement(&self) -> Vec2 {
        self.frame_displacement
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Latch the camera and its current position as the motion baseline.
    pub fn attach_camera(&mut self, camera: Entity, position: Vec2) {
        self.camera = Some(camera);
        self.previous_camera_position = position;
        self.frame_displacement = Vec2::ZERO;
    }

    pub fn detach_camera(&mut self) {
        self.camera = None;
        self.frame_displacement = Vec2::ZERO;
    }

    /// Record this frame's camera position and return what layers need to see.
    pub fn advance(&mut self, camera_position: Vec2) -> FrameContext {
        self.frame_displacement = camera_position - self.previous_camera_position;
        self.previous_camera_position = camera_position;
        FrameContext {
            displacement: self.frame_displacement,
            camera: camera_position,
        }
    }
}

type CameraQuery<'w, 's> = Query<'w, 's, (Entity, &'static Transform), With<ParallaxCamera>>;

fn resolve_camera(cameras: &CameraQuery) -> Result<(Entity, Vec2), ParallaxError> {
    let mut iter = cameras.iter();
    match (iter.next(), iter.next()) {
        (Some((entity, transform)), None) => Ok((entity, transform.translation.truncate())),
        (None, _) => Err(ParallaxError::NoCamera),
        (Some(_), Some(_)) => Err(ParallaxError::MultipleCameras(cameras.iter().count())),
    }
}

fn report(err: &ParallaxError) {
    if err.is_fatal() {
        error!("{err}");
    } else {
        warn!("{err}");
    }
}

/// Resolve the camera and build every layer's pipeline.
pub fn activate_parallax(
    mut controller: ResMut<ScrollController>,
    cameras: CameraQuery,
    targets: Query<(), With<Transform>>,
    mut sprites: Query<(&mut Sprite, Option<&PixelsPerUnit>)>,
    images: Res<Assets<Image>>,
) {
    let (camera, position) = match resolve_camera(&cameras) {
        Ok(camera) => camera,
        Err(err) => {
            report(&err);
            controller.detach_camera();
            for layer in &mut controller.layers {
                layer.disable();
            }
            return;
        }
    };
    controller.attach_camera(camera, position);

    let mut active = 0;
    let mut wrapping = 0;
    for layer in &mut controller.layers {
        let config = layer.config();
        if !config.target.is_some_and(|target| targets.contains(target)) {
            report(&ParallaxError::MissingTarget {
                layer: config.name.clone(),
            });
            layer.disable();
            continue;
        }

        let footprint_entity = config
            .footprint_entity()
            .filter(|_| config.wants_footprint());
        let mut resolved = match footprint_entity {
            Some(entity) => match sprites.get_mut(entity) {
                Ok((sprite, ppu)) => Some((entity, sprite, ppu.copied().unwrap_or_default())),
                Err(_) => None,
            },
            None => None,
        };

        let footprint = resolved.as_mut().map(|(entity, sprite, ppu)| {
            let native_size = images.get(&sprite.image).map(|image| image.size_f32());
            Footprint {
                entity: *entity,
                sprite: &mut **sprite,
                native_size,
                pixels_per_unit: ppu.0,
            }
        });

        for problem in layer.rebuild(footprint) {
            report(&problem);
        }

        active += 1;
        if layer.expanded_footprint().is_some() {
            wrapping += 1;
        }
        debug!(
            "Parallax layer '{}' pipeline: [{}]",
            layer.name(),
            layer
                .pipeline()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    info!(
        "Parallax active: {active}/{} layers ({wrapping} wrapping)",
        controller.layers.len()
    );
}

/// Clear every pipeline and restore stretched footprints. Layers are torn
/// down last-in-first-out: when two layers stretch the same sprite, the later
/// one saved the earlier one's expansion.
pub fn deactivate_parallax(
    mut controller: ResMut<ScrollController>,
    mut sprites: Query<&mut Sprite>,
) {
    for layer in controller.layers.iter_mut().rev() {
        let mut sprite = match layer.expanded_footprint() {
            Some(entity) => sprites.get_mut(entity).ok(),
            None => None,
        };
        layer.teardown(sprite.as_deref_mut());
    }
    controller.detach_camera();
    info!("Parallax deactivated");
}
