//! The freehand drawing surface
//!
//! An owned RGBA raster buffer accumulating signature strokes at the
//! fixed dialog resolution. All-zero pixels are blank; strokes stamp
//! opaque black ink as a walked sequence of round brush tips, so the
//! surface is independent of whichever input device produced the
//! points. Nothing clears it between strokes.

use base64::{engine::general_purpose::STANDARD, Engine};

/// Drawing surface width in logical pixels
pub const SURFACE_WIDTH: u32 = 500;
/// Drawing surface height in logical pixels
pub const SURFACE_HEIGHT: u32 = 200;

/// Stroke width in pixels
const STROKE_WIDTH: f32 = 2.0;
/// Ink laid down by strokes (opaque black)
const INK: [u8; 4] = [0, 0, 0, 255];

const BYTES_PER_PIXEL: usize = 4;

/// A point on the drawing surface, in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An owned raster buffer accumulating freehand signature strokes
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    pixels: Vec<u8>,
}

impl DrawingSurface {
    /// A blank surface at the fixed capture resolution
    pub fn new() -> Self {
        Self {
            pixels: vec![0; SURFACE_WIDTH as usize * SURFACE_HEIGHT as usize * BYTES_PER_PIXEL],
        }
    }

    /// True while no ink has been laid down since creation or
    /// [`DrawingSurface::clear`]
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&byte| byte == 0)
    }

    /// Reset every pixel to blank, discarding all strokes
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Read one pixel as RGBA, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= SURFACE_WIDTH || y >= SURFACE_HEIGHT {
            return None;
        }
        let idx = (y as usize * SURFACE_WIDTH as usize + x as usize) * BYTES_PER_PIXEL;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    /// Draw one stroke segment as a walked sequence of round stamps.
    /// Both endpoints get ink; points outside the surface clip silently.
    pub(crate) fn draw_segment(&mut self, from: Point, to: Point) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let len = (dx * dx + dy * dy).sqrt();
        let steps = (len * 2.0).max(1.0) as i32;

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp(Point::new(from.x + dx * t, from.y + dy * t));
        }
    }

    /// Stamp a filled round brush tip at one point
    fn stamp(&mut self, at: Point) {
        let half_width = (STROKE_WIDTH / 2.0).ceil() as i32;
        let cx = at.x.round() as i32;
        let cy = at.y.round() as i32;

        for dy in -half_width..=half_width {
            for dx in -half_width..=half_width {
                if dx * dx + dy * dy > half_width * half_width {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                if x < 0 || x >= SURFACE_WIDTH as i32 || y < 0 || y >= SURFACE_HEIGHT as i32 {
                    continue;
                }
                let idx = (y as usize * SURFACE_WIDTH as usize + x as usize) * BYTES_PER_PIXEL;
                self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&INK);
            }
        }
    }

    /// Encode the current buffer as a PNG image
    pub fn to_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut bytes = Vec::new();
        let mut encoder = png::Encoder::new(&mut bytes, SURFACE_WIDTH, SURFACE_HEIGHT);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        writer.finish()?;
        Ok(bytes)
    }

    /// Encode the current buffer as a self-contained `data:` URI, the
    /// form persisted inside `drawn:` signatures
    pub fn to_data_uri(&self) -> Result<String, png::EncodingError> {
        let png_bytes = self.to_png()?;
        Ok(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(&png_bytes)
        ))
    }
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}
