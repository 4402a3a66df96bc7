//! Minimal PNG rendering for point sets, plus tracing setup for the binaries.
use std::path::Path;

use anyhow::Context;
use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call from the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Filled circle drawn at every point of one set.
#[derive(Debug, Clone, Copy)]
pub struct DotStyle {
    pub color: [u8; 3],
    /// Radius in pixels.
    pub radius: f32,
}

impl DotStyle {
    pub fn new(color: [u8; 3], radius: f32) -> Self {
        Self { color, radius }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image size in pixels.
    pub image_size: (u32, u32),
    /// Canvas extent the points were sampled in.
    pub canvas_extent: Vec2,
    pub background: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), canvas_extent: Vec2) -> Self {
        Self {
            image_size,
            canvas_extent,
            background: [102, 102, 102],
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    fn to_pixels(&self, p: Vec2) -> Vec2 {
        let scale = Vec2::new(
            self.image_size.0 as f32 / self.canvas_extent.x,
            self.image_size.1 as f32 / self.canvas_extent.y,
        );
        p * scale
    }
}

/// Renders point sets in order, later sets drawn on top, and writes a PNG.
pub fn render_points_to_png(
    layers: &[(&[Vec2], DotStyle)],
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    for (points, style) in layers {
        for p in points.iter() {
            draw_disc(&mut img, config.to_pixels(*p), style);
        }
    }

    let out_path = out_path.as_ref();
    img.save(out_path)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    info!("Wrote {}.", out_path.display());
    Ok(())
}

fn draw_disc(img: &mut RgbImage, center: Vec2, style: &DotStyle) {
    let r = style.radius;
    let min_x = (center.x - r).floor().max(0.0) as u32;
    let min_y = (center.y - r).floor().max(0.0) as u32;
    let max_x = ((center.x + r).ceil() as u32).min(img.width());
    let max_y = ((center.y + r).ceil() as u32).min(img.height());

    for y in min_y..max_y {
        for x in min_x..max_x {
            let pixel_center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if pixel_center.distance_squared(center) <= r * r {
                img.put_pixel(x, y, Rgb(style.color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pixels_scales_canvas_onto_image() {
        let config = RenderConfig::new((1420, 800), Vec2::new(710.0, 400.0));
        assert_eq!(config.to_pixels(Vec2::new(100.0, 50.0)), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn draw_disc_clips_at_image_edges() {
        let mut img = RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]));
        draw_disc(&mut img, Vec2::new(0.0, 0.0), &DotStyle::new([255, 0, 0], 2.0));

        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(3, 3), &Rgb([0, 0, 0]));
    }
}
