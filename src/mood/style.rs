use crate::mood::category::MoodCategory;

/// Opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Build from a packed `0xRRGGBB` value.
    pub const fn hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    pub const fn with_alpha(self, a: f64) -> RgbaColor {
        RgbaColor {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Straight (non-premultiplied) sRGB color with a unit alpha.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl RgbaColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    /// CSS `rgba()` notation.
    pub fn css(self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Immutable visual style for one mood.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MoodStyle {
    /// Gradient color at the canvas origin corner.
    pub gradient_start: RgbaColor,
    /// Gradient color at the far corner.
    pub gradient_end: RgbaColor,
    /// Blob palette; never empty.
    pub palette: &'static [Rgb8],
}

impl MoodStyle {
    /// Overlay gradient applied above the wallpaper image on the display surface.
    pub fn css_overlay(&self) -> String {
        format!(
            "linear-gradient(135deg, {}, {})",
            self.gradient_start.css(),
            self.gradient_end.css()
        )
    }
}

const NIGHT: Rgb8 = Rgb8::hex(0x0e1327);

const HAPPY: MoodStyle = MoodStyle {
    gradient_start: Rgb8::hex(0x26d07c).with_alpha(0.24),
    gradient_end: NIGHT.with_alpha(0.62),
    palette: &[
        Rgb8::hex(0x26d07c),
        Rgb8::hex(0x4ff0b8),
        Rgb8::hex(0xfff8b5),
        Rgb8::hex(0x2ccf9c),
    ],
};

const SAD: MoodStyle = MoodStyle {
    gradient_start: Rgb8::hex(0x3f5efb).with_alpha(0.20),
    gradient_end: NIGHT.with_alpha(0.72),
    palette: &[
        Rgb8::hex(0x6ea8fe),
        Rgb8::hex(0x86b6ff),
        Rgb8::hex(0x1f5ccc),
        Rgb8::hex(0x9cc9ff),
    ],
};

const ANGRY: MoodStyle = MoodStyle {
    gradient_start: Rgb8::hex(0xff5a54).with_alpha(0.24),
    gradient_end: NIGHT.with_alpha(0.68),
    palette: &[
        Rgb8::hex(0xff5a54),
        Rgb8::hex(0xff8a73),
        Rgb8::hex(0xffb199),
        Rgb8::hex(0xff3b3b),
    ],
};

const SURPRISED: MoodStyle = MoodStyle {
    gradient_start: Rgb8::hex(0xf6c945).with_alpha(0.28),
    gradient_end: NIGHT.with_alpha(0.58),
    palette: &[
        Rgb8::hex(0xffd166),
        Rgb8::hex(0xf6c945),
        Rgb8::hex(0xfff3a1),
        Rgb8::hex(0xffc857),
    ],
};

const FEARFUL: MoodStyle = MoodStyle {
    gradient_start: Rgb8::hex(0x9b7bff).with_alpha(0.24),
    gradient_end: NIGHT.with_alpha(0.66),
    palette: &[
        Rgb8::hex(0x9b7bff),
        Rgb8::hex(0xc1adff),
        Rgb8::hex(0x7a5cf0),
        Rgb8::hex(0xbfa4ff),
    ],
};

const DISGUSTED: MoodStyle = MoodStyle {
    gradient_start: Rgb8::hex(0x53d17b).with_alpha(0.24),
    gradient_end: NIGHT.with_alpha(0.68),
    palette: &[
        Rgb8::hex(0x53d17b),
        Rgb8::hex(0x89e3ad),
        Rgb8::hex(0x3bbf76),
        Rgb8::hex(0xbaf2cd),
    ],
};

const NEUTRAL: MoodStyle = MoodStyle {
    gradient_start: Rgb8::hex(0x86b6ff).with_alpha(0.20),
    gradient_end: NIGHT.with_alpha(0.66),
    palette: &[
        Rgb8::hex(0x86b6ff),
        Rgb8::hex(0xc8dcff),
        Rgb8::hex(0xa8c5ff),
        Rgb8::hex(0x6ea8fe),
    ],
};

/// Style for a mood. Total over the closed category set.
pub fn style_for(mood: MoodCategory) -> &'static MoodStyle {
    match mood {
        MoodCategory::Happy => &HAPPY,
        MoodCategory::Sad => &SAD,
        MoodCategory::Angry => &ANGRY,
        MoodCategory::Surprised => &SURPRISED,
        MoodCategory::Fearful => &FEARFUL,
        MoodCategory::Disgusted => &DISGUSTED,
        MoodCategory::Neutral => &NEUTRAL,
    }
}

/// Style for a free-form label; unrecognized labels get the neutral style.
pub fn style_for_label(label: &str) -> &'static MoodStyle {
    style_for(MoodCategory::from_label_lenient(label))
}

#[cfg(test)]
#[path = "../../tests/unit/mood/style.rs"]
mod tests;
