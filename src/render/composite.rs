use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff operator used when painting into a raster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompositeMode {
    /// Normal source-over.
    #[default]
    SourceOver,
    /// Additive ("lighter"): overlaps brighten instead of occluding.
    Lighter,
}

impl CompositeMode {
    pub fn apply(self, dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
        match self {
            Self::SourceOver => over(dst, src, 1.0),
            Self::Lighter => lighter(dst, src),
        }
    }
}

pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Saturating per-channel sum of premultiplied pixels.
pub fn lighter(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    [
        add_sat_u8(dst[0], src[0]),
        add_sat_u8(dst[1], src[1]),
        add_sat_u8(dst[2], src[2]),
        add_sat_u8(dst[3], src[3]),
    ]
}

/// Straight-alpha channel for a premultiplied value.
pub fn unpremul_channel(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
}

pub fn premul_channel(c: u8, a: u8) -> u8 {
    mul_div255(u16::from(c), u16::from(a))
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
