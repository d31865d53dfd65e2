use bevy::prelude::*;
use serde::Deserialize;

/// Per-axis parallax settings. An axis is enabled by being present in the
/// layer definition; `multiplier` 0.0 on an enabled axis moves 1:1 with the
/// camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AxisDef {
    pub multiplier: f32,
    pub infinite_scroll: bool,
}

/// Procedural texture source for a scene layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum TextureDef {
    /// Layer with no sprite at all.
    Empty,
    Stars {
        width: u32,
        height: u32,
        density: f32,
        seed: u64,
    },
    Hills {
        width: u32,
        height: u32,
        frequency: f64,
        amplitude: f64,
        base: f64,
        seed: u32,
        color: [u8; 4],
    },
}

/// One background layer as declared in a `*.scene.ron` file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayerDef {
    pub name: String,
    pub texture: TextureDef,
    pub z_order: f32,
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f32,
    #[serde(default)]
    pub origin: [f32; 2],
    #[serde(default)]
    pub x: Option<AxisDef>,
    #[serde(default)]
    pub y: Option<AxisDef>,
}

fn default_pixels_per_unit() -> f32 {
    1.0
}

/// Active scene layout, rebuilt from the scene asset on load and hot reload.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneConfig {
    pub layers: Vec<LayerDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_axis_means_disabled() {
        let def: LayerDef = ron::from_str(
            r#"(
                name: "sky",
                texture: Empty,
                z_order: -10.0,
                x: Some((multiplier: -1.0)),
            )"#,
        )
        .unwrap();
        assert_eq!(
            def.x,
            Some(AxisDef {
                multiplier: -1.0,
                infinite_scroll: false,
            })
        );
        assert_eq!(def.y, None);
        assert_eq!(def.pixels_per_unit, 1.0);
        assert_eq!(def.origin, [0.0, 0.0]);
    }

    #[test]
    fn enabled_axis_defaults_to_camera_speed() {
        let axis: AxisDef = ron::from_str("(infinite_scroll: true)").unwrap();
        assert_eq!(axis.multiplier, 0.0);
        assert!(axis.infinite_scroll);
    }

    #[test]
    fn hills_texture_parses() {
        let tex: TextureDef = ron::from_str(
            "Hills(width: 256, height: 64, frequency: 0.02, amplitude: 20.0, base: 24.0, seed: 7, color: (40, 60, 90, 255))",
        )
        .unwrap();
        assert!(matches!(tex, TextureDef::Hills { width: 256, .. }));
    }
}
