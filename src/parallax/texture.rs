use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::TextureDef;

/// Build the image for a layer texture definition. `Empty` yields no image.
pub fn generate(def: &TextureDef) -> Option<Image> {
    match *def {
        TextureDef::Empty => None,
        TextureDef::Stars {
            width,
            height,
            density,
            seed,
        } => Some(star_field(width, height, density, seed)),
        TextureDef::Hills {
            width,
            height,
            frequency,
            amplitude,
            base,
            seed,
            color,
        } => {
            let hills = HillProfile {
                noise: Perlin::new(seed),
                width,
                frequency,
                amplitude,
                base,
            };
            Some(hills.render(height, color))
        }
    }
}

fn rgba_image(width: u32, height: u32, data: Vec<u8>) -> Image {
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        default(),
    )
}

/// Byte offset of pixel `(x, y)` in an RGBA8 buffer, computed in `usize` so
/// large images do not wrap around `u32`.
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * 4
}

/// Transparent image sprinkled with single-pixel stars. Stars never cross an
/// edge, so the image tiles on both axes.
pub fn star_field(width: u32, height: u32, density: f32, seed: u64) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; width as usize * height as usize * 4];

    let count = (width as f32 * height as f32 * density.clamp(0.0, 1.0)) as u32;
    for _ in 0..count {
        let x = rng.gen_range(0..width);
        let y = rng.gen_range(0..height);
        let brightness: u8 = rng.gen_range(140..=255);
        let idx = pixel_index(width, x, y);
        data[idx] = brightness;
        data[idx + 1] = brightness;
        data[idx + 2] = brightness.saturating_add(20);
        data[idx + 3] = 255;
    }

    rgba_image(width, height, data)
}

/// Horizontally periodic ridge line. Noise is sampled around a circle so the
/// first and last columns line up when the image is tiled.
pub struct HillProfile {
    pub noise: Perlin,
    pub width: u32,
    pub frequency: f64,
    pub amplitude: f64,
    pub base: f64,
}

impl HillProfile {
    /// Ridge height in pixels above the bottom edge at column `x`.
    pub fn height_at(&self, x: f64) -> f64 {
        let angle = x / self.width as f64 * std::f64::consts::TAU;
        let radius = self.width as f64 * self.frequency / std::f64::consts::TAU;
        let sample = self.noise.get([radius * angle.cos(), radius * angle.sin()]);
        (self.base + sample * self.amplitude).max(0.0)
    }

    pub fn render(&self, height: u32, color: [u8; 4]) -> Image {
        let width = self.width;
        let mut data = vec![0u8; width as usize * height as usize * 4];

        for x in 0..width {
            let ridge = self.height_at(x as f64).min(height as f64) as u32;
            // Row 0 is the top of the image.
            for y in (height - ridge)..height {
                let idx = pixel_index(width, x, y);
                data[idx..idx + 4].copy_from_slice(&color);
            }
        }

        rgba_image(width, height, data)
    }
}
