use std::sync::Arc;

use crate::foundation::clock::Clock;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{MoodwallError, MoodwallResult};
use crate::foundation::rng::SeededRandom;
use crate::mood::category::MoodCategory;
use crate::mood::style::{MoodStyle, RgbaColor, style_for};
use crate::render::composite::{CompositeMode, premul_channel, unpremul_channel};
use crate::render::encode::{EncodedImage, ImageFormat, encode_raster};
use crate::render::gradient::{ColorStops, LinearGradient, RadialGradient};
use crate::render::raster::Raster;

/// Encoding and grain knobs for wallpaper synthesis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub format: ImageFormat,
    /// JPEG quality, 1..=100.
    pub jpeg_quality: u8,
    /// Fixed seed of the grain generator; constant across calls.
    pub grain_seed: u32,
    /// Per-pixel probability of a grain perturbation.
    pub grain_density: f64,
    /// Grain offsets are drawn from `[-grain_range, grain_range]`.
    pub grain_range: i32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            format: ImageFormat::Jpeg,
            jpeg_quality: 95,
            grain_seed: 21,
            grain_density: 0.03,
            grain_range: 20,
        }
    }
}

impl SynthConfig {
    pub fn validate(&self) -> MoodwallResult<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(MoodwallError::config("synth.jpeg_quality must be in 1..=100"));
        }
        if !(0.0..=1.0).contains(&self.grain_density) {
            return Err(MoodwallError::config("synth.grain_density must be in [0, 1]"));
        }
        if !(0..=255).contains(&self.grain_range) {
            return Err(MoodwallError::config("synth.grain_range must be in 0..=255"));
        }
        Ok(())
    }
}

/// Parameters of one additive blob layer.
#[derive(Clone, Copy, Debug)]
struct BlobPass {
    base_count: u32,
    count_jitter: f64,
    radius_min: f64,
    radius_span: f64,
    alpha_min: f64,
    alpha_span: f64,
    /// Extra stop `(offset, fraction of center alpha)` for a sharper falloff.
    mid_stop: Option<(f64, f64)>,
}

const LARGE_BLOBS: BlobPass = BlobPass {
    base_count: 160,
    count_jitter: 80.0,
    radius_min: 90.0,
    radius_span: 300.0,
    alpha_min: 0.05,
    alpha_span: 0.08,
    mid_stop: None,
};

const SMALL_BLOBS: BlobPass = BlobPass {
    base_count: 280,
    count_jitter: 120.0,
    radius_min: 10.0,
    radius_span: 70.0,
    alpha_min: 0.10,
    alpha_span: 0.14,
    mid_stop: Some((0.8, 0.25)),
};

/// A synthesized, encoded wallpaper. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wallpaper {
    pub mood: MoodCategory,
    pub canvas: Canvas,
    /// Seed of the blob-placement generator.
    pub seed: u32,
    pub image: EncodedImage,
}

/// Seed for a wall-clock second, keeping the low 32 bits.
pub fn seed_for_unix_secs(secs: u64) -> u32 {
    secs as u32
}

/// Paint the wallpaper raster. Pure in `(mood, canvas, seed, cfg)`.
#[tracing::instrument(skip(cfg))]
pub fn render_raster(
    mood: MoodCategory,
    canvas: Canvas,
    seed: u32,
    cfg: &SynthConfig,
) -> MoodwallResult<Raster> {
    cfg.validate()?;
    let mut raster = Raster::new(canvas)?;
    let style = style_for(mood);
    let mut rnd = SeededRandom::new(seed);

    paint_base(&mut raster, style);
    let large = paint_blobs(&mut raster, style, &LARGE_BLOBS, &mut rnd);
    let small = paint_blobs(&mut raster, style, &SMALL_BLOBS, &mut rnd);
    tracing::debug!(large, small, "blob passes painted");

    apply_grain(&mut raster, cfg);
    Ok(raster)
}

/// Render and encode a wallpaper for an explicit seed.
pub fn synthesize(
    mood: MoodCategory,
    canvas: Canvas,
    seed: u32,
    cfg: &SynthConfig,
) -> MoodwallResult<Wallpaper> {
    let raster = render_raster(mood, canvas, seed, cfg)?;
    let image = encode_raster(&raster, cfg.format, cfg.jpeg_quality)?;
    Ok(Wallpaper {
        mood,
        canvas,
        seed,
        image,
    })
}

/// Diagonal base gradient from the origin corner to the far corner.
fn paint_base(raster: &mut Raster, style: &MoodStyle) {
    let base = LinearGradient {
        start: Point::ORIGIN,
        end: raster.canvas().far_corner(),
        stops: ColorStops::new()
            .with_stop(0.0, style.gradient_start)
            .with_stop(1.0, style.gradient_end),
    };
    raster.fill_linear(&base, CompositeMode::SourceOver);
}

fn paint_blobs(
    raster: &mut Raster,
    style: &MoodStyle,
    pass: &BlobPass,
    rnd: &mut SeededRandom,
) -> u32 {
    let (w, h) = (f64::from(raster.width()), f64::from(raster.height()));
    let count = pass.base_count + (rnd.next_f64() * pass.count_jitter).floor() as u32;

    for _ in 0..count {
        let center = Point::new(rnd.next_f64() * w, rnd.next_f64() * h);
        let radius = pass.radius_min + rnd.next_f64() * pass.radius_span;
        let color = style.palette[rnd.index(style.palette.len())];
        let alpha = pass.alpha_min + rnd.next_f64() * pass.alpha_span;

        let mut stops = ColorStops::new().with_stop(0.0, color.with_alpha(alpha));
        if let Some((offset, frac)) = pass.mid_stop {
            stops = stops.with_stop(offset, color.with_alpha(alpha * frac));
        }
        let stops = stops.with_stop(1.0, RgbaColor::transparent());

        raster.fill_radial(
            &RadialGradient {
                center,
                radius,
                stops,
            },
            CompositeMode::Lighter,
        );
    }
    count
}

/// Sparse per-pixel noise on straight-alpha rgb; alpha is left as is.
fn apply_grain(raster: &mut Raster, cfg: &SynthConfig) {
    let mut rnd = SeededRandom::new(cfg.grain_seed);
    for px in raster.data_mut().chunks_exact_mut(4) {
        if rnd.next_f64() >= cfg.grain_density {
            continue;
        }
        let n = rnd.signed_offset(cfg.grain_range);
        let a = px[3];
        if a == 0 {
            continue;
        }
        for c in &mut px[..3] {
            let straight = i32::from(unpremul_channel(*c, a)) + n;
            *c = premul_channel(straight.clamp(0, 255) as u8, a);
        }
    }
}

/// Clock-seeded synthesizer: calls within the same wall-clock second are pixel-identical.
#[derive(Clone)]
pub struct WallpaperSynthesizer {
    clock: Arc<dyn Clock>,
    cfg: SynthConfig,
}

impl WallpaperSynthesizer {
    pub fn new(clock: Arc<dyn Clock>, cfg: SynthConfig) -> Self {
        Self { clock, cfg }
    }

    pub fn config(&self) -> &SynthConfig {
        &self.cfg
    }

    pub fn current_seed(&self) -> u32 {
        seed_for_unix_secs(self.clock.unix_secs())
    }
}

impl std::fmt::Debug for WallpaperSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WallpaperSynthesizer")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

impl crate::cache::WallpaperSource for WallpaperSynthesizer {
    fn synthesize(&self, mood: MoodCategory, canvas: Canvas) -> MoodwallResult<Wallpaper> {
        synthesize(mood, canvas, self.current_seed(), &self.cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/synth.rs"]
mod tests;
