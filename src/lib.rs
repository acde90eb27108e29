//! Moodwall turns a noisy stream of per-frame emotion classifications into a calm, mood-matched
//! procedural backdrop.
//!
//! # Pipeline overview
//!
//! 1. **Stabilize**: `DetectionFrame -> Observation` via [`MoodStabilizer`] (confidence gate +
//!    N-consecutive-frames hysteresis).
//! 2. **Trigger**: stable-mood commits and debounced resizes reach [`RegenerationTrigger`].
//! 3. **Cache**: [`WallpaperCache`] returns an existing wallpaper for `(mood, width, height)` or
//!    asks its [`WallpaperSource`] for a new one.
//! 4. **Synthesize**: [`WallpaperSynthesizer`] paints a diagonal base gradient, two additive
//!    blob passes and a grain pass into a premultiplied RGBA8 [`Raster`], then encodes it.
//! 5. **Present**: the resulting [`Backdrop`] is handed to a host [`DisplaySurface`].
//!
//! [`MoodSession`] owns all mutable state for one running session; there are no globals.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Injected time**: wall-clock seeds and debounce timers come from a [`Clock`], so tests pin
//!   them with [`ManualClock`].
//! - **No IO**: wallpapers live only in memory; nothing is persisted.
#![forbid(unsafe_code)]

mod cache;
mod config;
mod foundation;
mod mood;
mod render;
mod session;
mod trigger;

pub use cache::{CacheKey, WallpaperCache, WallpaperSource};
pub use config::MoodwallConfig;
pub use foundation::clock::{Clock, ManualClock, SystemClock};
pub use foundation::core::{Canvas, MAX_CANVAS_DIM, Point, Vec2, Viewport};
pub use foundation::error::{MoodwallError, MoodwallResult};
pub use foundation::rng::{SeededRandom, ZERO_SEED_FALLBACK};
pub use mood::category::MoodCategory;
pub use mood::detection::{DetectionFrame, EmotionScore, FaceEmotions};
pub use mood::stabilizer::{
    MoodChange, MoodStabilizer, Observation, StabilizationState, StabilizerConfig,
};
pub use mood::style::{MoodStyle, Rgb8, RgbaColor, style_for, style_for_label};
pub use render::composite::{CompositeMode, lighter, over};
pub use render::encode::{EncodedImage, ImageFormat, encode_raster};
pub use render::gradient::{ColorStops, LinearGradient, RadialGradient};
pub use render::raster::Raster;
pub use render::synth::{
    SynthConfig, Wallpaper, WallpaperSynthesizer, render_raster, seed_for_unix_secs, synthesize,
};
pub use session::{FrameOutcome, MoodSession};
pub use trigger::debounce::{Debouncer, TaskHandle};
pub use trigger::display::{
    Backdrop, DisplaySurface, RecordingSurface, SharedViewport, ViewportSource,
};
pub use trigger::regen::{RegenConfig, RegenerationTrigger};
