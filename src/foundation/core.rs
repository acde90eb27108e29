use crate::foundation::error::{MoodwallError, MoodwallResult};

pub use kurbo::{Point, Vec2};

/// Largest accepted raster edge, in pixels.
pub const MAX_CANVAS_DIM: u32 = 16_384;

/// Pixel dimensions of a raster target.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a validated canvas.
    pub fn new(width: u32, height: u32) -> MoodwallResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    /// Reject empty or oversized canvases.
    pub fn validate(self) -> MoodwallResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MoodwallError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_CANVAS_DIM || self.height > MAX_CANVAS_DIM {
            return Err(MoodwallError::validation(format!(
                "canvas edge must be <= {MAX_CANVAS_DIM}, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub fn byte_len(self) -> usize {
        self.pixel_count().saturating_mul(4)
    }

    /// Far corner of the canvas in pixel space.
    pub fn far_corner(self) -> Point {
        Point::new(f64::from(self.width), f64::from(self.height))
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Display viewport as reported by the host shell, in CSS-like logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Device pixel ratio; non-finite or non-positive values are read as 1.
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    pub fn effective_dpr(self, cap: f64) -> f64 {
        let dpr = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        dpr.min(cap)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
