use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{MoodwallError, MoodwallResult};
use crate::render::composite::{CompositeMode, PremulRgba8};
use crate::render::gradient::{LinearGradient, RadialGradient};

/// Premultiplied RGBA8 pixel buffer, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    canvas: Canvas,
    data: Vec<u8>,
}

impl Raster {
    /// Allocate a transparent raster. Fails for invalid canvases.
    pub fn new(canvas: Canvas) -> MoodwallResult<Self> {
        canvas.validate()?;
        Ok(Self {
            canvas,
            data: vec![0; canvas.byte_len()],
        })
    }

    pub fn from_premul_bytes(canvas: Canvas, data: Vec<u8>) -> MoodwallResult<Self> {
        canvas.validate()?;
        if data.len() != canvas.byte_len() {
            return Err(MoodwallError::validation(format!(
                "raster expects {} bytes for {canvas}, got {}",
                canvas.byte_len(),
                data.len()
            )));
        }
        Ok(Self { canvas, data })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let i = self.index(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4
    }

    fn blend_at(&mut self, idx: usize, src: PremulRgba8, mode: CompositeMode) {
        if src[3] == 0 && src[0] == 0 && src[1] == 0 && src[2] == 0 {
            return;
        }
        let dst = [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ];
        let out = mode.apply(dst, src);
        self.data[idx..idx + 4].copy_from_slice(&out);
    }

    /// Paint a linear gradient over the whole raster.
    pub fn fill_linear(&mut self, g: &LinearGradient, mode: CompositeMode) {
        let (w, h) = (self.canvas.width, self.canvas.height);
        for y in 0..h {
            let py = f64::from(y) + 0.5;
            for x in 0..w {
                let p = Point::new(f64::from(x) + 0.5, py);
                let idx = self.index(x, y);
                self.blend_at(idx, g.sample(p), mode);
            }
        }
    }

    /// Paint a radial gradient clipped to its disc. Pixels are sampled at their centers.
    pub fn fill_radial(&mut self, g: &RadialGradient, mode: CompositeMode) {
        let (w, h) = (f64::from(self.canvas.width), f64::from(self.canvas.height));
        let x0 = (g.center.x - g.radius).floor().clamp(0.0, w) as u32;
        let x1 = (g.center.x + g.radius).ceil().clamp(0.0, w) as u32;
        let y0 = (g.center.y - g.radius).floor().clamp(0.0, h) as u32;
        let y1 = (g.center.y + g.radius).ceil().clamp(0.0, h) as u32;

        for y in y0..y1 {
            let py = f64::from(y) + 0.5;
            for x in x0..x1 {
                let p = Point::new(f64::from(x) + 0.5, py);
                let Some(t) = g.offset_at(p) else {
                    continue;
                };
                let idx = self.index(x, y);
                self.blend_at(idx, g.stops.sample(t), mode);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
