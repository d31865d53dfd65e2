use std::fmt;

use bevy::prelude::*;

/// A single scroll axis. Z is never touched by parallax movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    pub fn of_mut(self, v: &mut Vec3) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }

    /// Scale a 2D size along this axis only.
    pub fn scale(self, size: Vec2, factor: f32) -> Vec2 {
        match self {
            Axis::X => Vec2::new(size.x * factor, size.y),
            Axis::Y => Vec2::new(size.x, size.y * factor),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Camera state shared read-only by every layer during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameContext {
    /// Camera movement since the previous frame.
    pub displacement: Vec2,
    /// Camera position this frame.
    pub camera: Vec2,
}

/// One step of a layer's per-frame pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementRule {
    /// Move along `axis` by the camera displacement scaled by `1 + multiplier`.
    Parallax { axis: Axis, multiplier: f32 },
    /// Keep the layer anchor within one `span` of the camera along `axis`.
    Wrap { axis: Axis, span: f32 },
}

impl MovementRule {
    pub fn apply(&self, translation: &mut Vec3, frame: &FrameContext) {
        match *self {
            MovementRule::Parallax { axis, multiplier } => {
                *axis.of_mut(translation) += parallax_delta(axis.of(frame.displacement), multiplier);
            }
            MovementRule::Wrap { axis, span } => {
                let pos = axis.of_mut(translation);
                *pos += wrap_offset(axis.of(frame.camera), *pos, span);
            }
        }
    }
}

impl fmt::Display for MovementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementRule::Parallax { axis, multiplier } => {
                write!(f, "parallax {axis} x{:.2}", 1.0 + multiplier)
            }
            MovementRule::Wrap { axis, span } => write!(f, "wrap {axis} span {span:.1}"),
        }
    }
}

/// Per-axis layer movement for a camera displacement `d`: `d * (1 + multiplier)`.
///
/// - multiplier = -1 → layer stays put in the world (infinitely far)
/// - multiplier =  0 → layer moves exactly with the camera
/// - multiplier >  0 → layer moves faster than the camera (foreground)
pub fn parallax_delta(displacement: f32, multiplier: f32) -> f32 {
    displacement + displacement * multiplier
}

/// Offset that re-anchors a tiled layer once the camera has travelled a full
/// span away from it. Returns `0.0`, `+span` or `-span`.
pub fn wrap_offset(camera: f32, position: f32, span: f32) -> f32 {
    if !(span > 0.0) {
        return 0.0;
    }

    let mut offset = 0.0;
    if camera - (position + offset) >= span {
        offset += span;
    }
    if camera - (position + offset) <= -span {
        offset -= span;
    }
    offset
}

/// World-space extent of one un-tiled copy of a texture along one axis.
pub fn span(pixel_size: f32, pixels_per_unit: f32) -> f32 {
    if !(pixels_per_unit > 0.0) {
        return 0.0;
    }
    pixel_size / pixels_per_unit
}
