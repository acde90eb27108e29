use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::lerp;
use crate::mood::style::RgbaColor;
use crate::render::composite::PremulRgba8;

/// Ordered gradient stops, interpolated in premultiplied space like a 2D canvas does.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorStops {
    // (offset, premultiplied rgba scaled to 0..255)
    stops: Vec<(f64, [f64; 4])>,
}

impl ColorStops {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stop. Offsets are clamped to `[0, 1]` and must be non-decreasing.
    pub fn with_stop(mut self, offset: f64, color: RgbaColor) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let offset = self.stops.last().map_or(offset, |(prev, _)| offset.max(*prev));
        let a = color.a.clamp(0.0, 1.0);
        let premul = [
            f64::from(color.r) * a,
            f64::from(color.g) * a,
            f64::from(color.b) * a,
            a * 255.0,
        ];
        self.stops.push((offset, premul));
        self
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn sample(&self, t: f64) -> PremulRgba8 {
        let Some(&(first_off, first)) = self.stops.first() else {
            return [0; 4];
        };
        if t <= first_off {
            return quantize(first);
        }

        for pair in self.stops.windows(2) {
            let (o0, c0) = pair[0];
            let (o1, c1) = pair[1];
            if t <= o1 {
                let span = o1 - o0;
                let u = if span <= 0.0 { 1.0 } else { (t - o0) / span };
                let mut out = [0.0; 4];
                for i in 0..4 {
                    out[i] = lerp(c0[i], c1[i], u);
                }
                return quantize(out);
            }
        }

        let &(_, last) = self.stops.last().unwrap_or(&(first_off, first));
        quantize(last)
    }
}

fn quantize(c: [f64; 4]) -> PremulRgba8 {
    let a = c[3].round().clamp(0.0, 255.0) as u8;
    let ch = |v: f64| (v.round().clamp(0.0, 255.0) as u8).min(a);
    [ch(c[0]), ch(c[1]), ch(c[2]), a]
}

/// Linear gradient along `start -> end`, padded beyond both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: ColorStops,
}

impl LinearGradient {
    pub fn offset_at(&self, p: Point) -> f64 {
        let axis: Vec2 = self.end - self.start;
        let len2 = axis.hypot2();
        if len2 <= 0.0 {
            return 0.0;
        }
        ((p - self.start).dot(axis) / len2).clamp(0.0, 1.0)
    }

    pub fn sample(&self, p: Point) -> PremulRgba8 {
        self.stops.sample(self.offset_at(p))
    }
}

/// Circular gradient from `center` (offset 0) to `radius` (offset 1).
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f64,
    pub stops: ColorStops,
}

impl RadialGradient {
    /// Offset for a point, or `None` outside the disc.
    pub fn offset_at(&self, p: Point) -> Option<f64> {
        if self.radius <= 0.0 {
            return None;
        }
        let d = (p - self.center).hypot();
        (d < self.radius).then(|| d / self.radius)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
