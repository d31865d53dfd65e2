use bevy::prelude::*;
use bevy::sprite::SpriteImageMode;

use super::config::AxisDef;
use super::error::ParallaxError;
use super::rule::{self, Axis, FrameContext, MovementRule};

/// Copies of the footprint laid out along a wrapping axis. One on each side of
/// the anchor covers the gap for a full wrap cycle.
pub const WRAP_TILES: f32 = 3.0;

/// Static description of one parallax layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerConfig {
    pub name: String,
    /// Entity whose `Transform` this layer moves.
    pub target: Option<Entity>,
    /// Explicit sprite entity. Falls back to the target's own sprite.
    pub footprint: Option<Entity>,
    pub x: Option<AxisDef>,
    pub y: Option<AxisDef>,
}

impl LayerConfig {
    pub fn new(name: impl Into<String>, target: Entity) -> Self {
        Self {
            name: name.into(),
            target: Some(target),
            ..default()
        }
    }

    pub fn with_x(mut self, axis: AxisDef) -> Self {
        self.x = Some(axis);
        self
    }

    pub fn with_y(mut self, axis: AxisDef) -> Self {
        self.y = Some(axis);
        self
    }

    pub fn with_footprint(mut self, footprint: Entity) -> Self {
        self.footprint = Some(footprint);
        self
    }

    pub fn axis(&self, axis: Axis) -> Option<AxisDef> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// True when any enabled axis asks for infinite scroll.
    pub fn wants_footprint(&self) -> bool {
        Axis::ALL
            .into_iter()
            .any(|axis| self.axis(axis).is_some_and(|def| def.infinite_scroll))
    }

    pub fn footprint_entity(&self) -> Option<Entity> {
        self.footprint.or(self.target)
    }
}

/// Sprite backing a layer, resolved at activation.
pub struct Footprint<'a> {
    pub entity: Entity,
    pub sprite: &'a mut Sprite,
    /// Native texture size in pixels, `None` while the image is unavailable.
    pub native_size: Option<Vec2>,
    pub pixels_per_unit: f32,
}

impl Footprint<'_> {
    fn span(&self, axis: Axis) -> f32 {
        self.native_size
            .map_or(0.0, |size| rule::span(axis.of(size), self.pixels_per_unit))
    }

    fn display_size(&self) -> Option<Vec2> {
        self.sprite
            .custom_size
            .or_else(|| self.native_size.map(|size| size / self.pixels_per_unit))
    }
}

/// Sprite state captured before the first expansion.
#[derive(Debug, Clone)]
struct SavedFootprint {
    entity: Entity,
    custom_size: Option<Vec2>,
    image_mode: SpriteImageMode,
}

/// A configured layer plus the movement pipeline derived from it.
#[derive(Debug, Clone)]
pub struct Layer {
    config: LayerConfig,
    pipeline: Vec<MovementRule>,
    saved: Option<SavedFootprint>,
}

impl Layer {
    pub fn new(config: LayerConfig) -> Self {
        Self {
            config,
            pipeline: Vec::new(),
            saved: None,
        }
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn pipeline(&self) -> &[MovementRule] {
        &self.pipeline
    }

    /// Entity whose sprite is currently stretched for wrapping, if any.
    pub fn expanded_footprint(&self) -> Option<Entity> {
        self.saved.as_ref().map(|saved| saved.entity)
    }

    /// Rebuild the pipeline from the configuration.
    ///
    /// For every enabled axis, X then Y: the parallax rule, then (when
    /// infinite scroll is requested and the footprint has a usable span) the
    /// footprint is stretched `WRAP_TILES`× and tiled, and a wrap rule follows.
    /// Returns the per-layer configuration problems encountered; none of them
    /// prevent the remaining rules from being built.
    pub fn rebuild(&mut self, mut footprint: Option<Footprint<'_>>) -> Vec<ParallaxError> {
        self.pipeline.clear();
        match footprint.as_mut() {
            Some(fp) => self.restore_footprint(fp.entity, fp.sprite),
            None => self.saved = None,
        }

        let mut problems = Vec::new();
        if footprint.is_none() && self.config.wants_footprint() {
            problems.push(ParallaxError::MissingFootprint {
                layer: self.config.name.clone(),
            });
        }

        for axis in Axis::ALL {
            let Some(def) = self.config.axis(axis) else {
                continue;
            };
            self.pipeline.push(MovementRule::Parallax {
                axis,
                multiplier: def.multiplier,
            });

            if !def.infinite_scroll {
                continue;
            }
            let Some(fp) = footprint.as_mut() else {
                continue;
            };

            let span = fp.span(axis);
            if !(span > 0.0 && span.is_finite()) {
                problems.push(ParallaxError::DegenerateSpan {
                    layer: self.config.name.clone(),
                    axis,
                    span,
                });
                continue;
            }

            self.expand(fp, axis);
            self.pipeline.push(MovementRule::Wrap { axis, span });
        }

        problems
    }

    /// Drop every rule, e.g. when the layer's target cannot be resolved.
    pub fn disable(&mut self) {
        self.pipeline.clear();
    }

    /// Clear the pipeline and put the footprint back to its pre-activation
    /// size and image mode. Safe to call repeatedly.
    pub fn teardown(&mut self, sprite: Option<&mut Sprite>) {
        self.pipeline.clear();
        match (sprite, self.expanded_footprint()) {
            (Some(sprite), Some(entity)) => self.restore_footprint(entity, sprite),
            _ => self.saved = None,
        }
    }

    /// Run the pipeline against the target's translation.
    pub fn apply(&self, translation: &mut Vec3, frame: &FrameContext) {
        for rule in &self.pipeline {
            rule.apply(translation, frame);
        }
    }

    fn expand(&mut self, fp: &mut Footprint<'_>, axis: Axis) {
        let Some(size) = fp.display_size() else {
            return;
        };

        if self.saved.is_none() {
            self.saved = Some(SavedFootprint {
                entity: fp.entity,
                custom_size: fp.sprite.custom_size,
                image_mode: fp.sprite.image_mode.clone(),
            });
        }

        let (tile_x, tile_y) = match fp.sprite.image_mode {
            SpriteImageMode::Tiled { tile_x, tile_y, .. } => (tile_x, tile_y),
            _ => (false, false),
        };
        fp.sprite.custom_size = Some(axis.scale(size, WRAP_TILES));
        fp.sprite.image_mode = SpriteImageMode::Tiled {
            tile_x: tile_x || axis == Axis::X,
            tile_y: tile_y || axis == Axis::Y,
            stretch_value: 1.0 / fp.pixels_per_unit,
        };
    }

    // Restores the exact captured values rather than dividing by WRAP_TILES,
    // so repeated cycles never drift.
    fn restore_footprint(&mut self, entity: Entity, sprite: &mut Sprite) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        if saved.entity == entity {
            sprite.custom_size = saved.custom_size;
            sprite.image_mode = saved.image_mode;
        }
    }
}
