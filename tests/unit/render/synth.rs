use std::collections::BTreeSet;

use super::*;
use crate::foundation::clock::ManualClock;

fn no_grain() -> SynthConfig {
    SynthConfig {
        grain_density: 0.0,
        ..SynthConfig::default()
    }
}

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

/// Large enough that the additive blob passes do not saturate to white.
fn open_canvas() -> Canvas {
    canvas(1280, 720)
}

fn assert_not_saturated(r: &Raster) {
    let white = r
        .data()
        .chunks_exact(4)
        .filter(|px| px[..3] == [255, 255, 255])
        .count();
    assert!(white * 100 < r.canvas().pixel_count(), "white={white}");
}

/// Pixel indices the grain generator perturbs by a non-zero offset.
fn grain_sites(cfg: &SynthConfig, pixels: usize) -> BTreeSet<usize> {
    let mut rnd = SeededRandom::new(cfg.grain_seed);
    let mut sites = BTreeSet::new();
    for i in 0..pixels {
        if rnd.next_f64() >= cfg.grain_density {
            continue;
        }
        if rnd.signed_offset(cfg.grain_range) != 0 {
            sites.insert(i);
        }
    }
    sites
}

fn rgb_changed(a: &Raster, b: &Raster) -> BTreeSet<usize> {
    a.data()
        .chunks_exact(4)
        .zip(b.data().chunks_exact(4))
        .enumerate()
        .filter(|(_, (p, q))| p[..3] != q[..3])
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn same_seed_same_pixels_different_seed_moves_blobs() {
    let cfg = no_grain();
    let a = render_raster(MoodCategory::Angry, open_canvas(), 10, &cfg).unwrap();
    let again = render_raster(MoodCategory::Angry, open_canvas(), 10, &cfg).unwrap();
    let b = render_raster(MoodCategory::Angry, open_canvas(), 11, &cfg).unwrap();
    assert_not_saturated(&a);
    assert_not_saturated(&b);
    assert_eq!(a, again);
    assert_ne!(a, b);
}

#[test]
fn base_gradient_tone_follows_mood() {
    let paint = |mood| {
        let mut r = Raster::new(canvas(16, 16)).unwrap();
        paint_base(&mut r, style_for(mood));
        r
    };
    let happy = paint(MoodCategory::Happy);
    let angry = paint(MoodCategory::Angry);
    assert_ne!(happy, angry);
    // Greenish origin corner for happy, reddish for angry.
    let h = happy.pixel(0, 0).unwrap();
    let a = angry.pixel(0, 0).unwrap();
    assert!(h[1] > h[0]);
    assert!(a[0] > a[1]);
}

#[test]
fn base_gradient_is_translucent_everywhere() {
    for mood in MoodCategory::ALL {
        let mut r = Raster::new(canvas(32, 18)).unwrap();
        paint_base(&mut r, style_for(mood));
        assert!(r.data().chunks_exact(4).all(|px| px[3] > 0 && px[3] < 255));
    }
}

#[test]
fn blob_counts_stay_in_range() {
    let style = style_for(MoodCategory::Neutral);
    for seed in [1u32, 2, 3, 99, 12_345] {
        let mut r = Raster::new(canvas(4, 4)).unwrap();
        let mut rnd = SeededRandom::new(seed);
        let large = paint_blobs(&mut r, style, &LARGE_BLOBS, &mut rnd);
        let small = paint_blobs(&mut r, style, &SMALL_BLOBS, &mut rnd);
        assert!((160..240).contains(&large), "large={large}");
        assert!((280..400).contains(&small), "small={small}");
    }
}

#[test]
fn grain_touches_roughly_three_percent_and_keeps_alpha() {
    let c = canvas(100, 100);
    let mut r = Raster::from_premul_bytes(c, [128, 128, 128, 255].repeat(c.pixel_count())).unwrap();
    apply_grain(&mut r, &SynthConfig::default());

    let changed = r
        .data()
        .chunks_exact(4)
        .filter(|px| px[0] != 128)
        .count();
    assert!((150..=450).contains(&changed), "changed={changed}");
    assert!(r.data().chunks_exact(4).all(|px| px[3] == 255));
    assert!(
        r.data()
            .chunks_exact(4)
            .all(|px| px[0] == px[1] && px[1] == px[2])
    );
    assert!(
        r.data()
            .chunks_exact(4)
            .all(|px| (108..=148).contains(&px[0]))
    );
}

#[test]
fn grain_pattern_is_seed_stable() {
    let c = canvas(32, 32);
    let base = Raster::from_premul_bytes(c, [90, 90, 90, 255].repeat(c.pixel_count())).unwrap();
    let mut a = base.clone();
    let mut b = base.clone();
    apply_grain(&mut a, &SynthConfig::default());
    apply_grain(&mut b, &SynthConfig::default());
    assert_eq!(a, b);
}

#[test]
fn grain_positions_do_not_depend_on_blob_seed() {
    let cfg = SynthConfig::default();
    let c = open_canvas();
    let sites = grain_sites(&cfg, c.pixel_count());
    assert!(!sites.is_empty());

    let mut hit = Vec::new();
    for seed in [10u32, 11] {
        let plain = render_raster(MoodCategory::Angry, c, seed, &no_grain()).unwrap();
        let grainy = render_raster(MoodCategory::Angry, c, seed, &cfg).unwrap();
        assert_not_saturated(&plain);

        // Nothing outside the grain sites moves, and alpha never moves.
        let changed = rgb_changed(&plain, &grainy);
        assert!(changed.is_subset(&sites), "seed {seed}");
        assert!(
            changed.len() * 10 >= sites.len() * 8,
            "seed {seed}: {} of {}",
            changed.len(),
            sites.len()
        );
        assert!(
            plain
                .data()
                .chunks_exact(4)
                .zip(grainy.data().chunks_exact(4))
                .all(|(p, q)| p[3] == q[3])
        );
        hit.push(changed);
    }
    let common = hit[0].intersection(&hit[1]).count();
    assert!(common * 10 >= sites.len() * 6, "common={common}");
}

#[test]
fn invalid_config_is_rejected() {
    let bad = SynthConfig {
        jpeg_quality: 0,
        ..SynthConfig::default()
    };
    assert!(render_raster(MoodCategory::Happy, canvas(2, 2), 1, &bad).is_err());
    let bad = SynthConfig {
        grain_density: 1.5,
        ..SynthConfig::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn zero_dimensions_fail_fast() {
    let err = synthesize(
        MoodCategory::Happy,
        Canvas {
            width: 0,
            height: 10,
        },
        1,
        &SynthConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, MoodwallError::Validation(_)));
}

#[test]
fn synthesizer_seeds_from_clock_second() {
    use crate::cache::WallpaperSource as _;

    let cfg = SynthConfig::default();
    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let synth = WallpaperSynthesizer::new(clock.clone(), cfg);
    let a = synth.synthesize(MoodCategory::Sad, canvas(20, 10)).unwrap();
    clock.advance(std::time::Duration::from_millis(400));
    let b = synth.synthesize(MoodCategory::Sad, canvas(20, 10)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.seed, 1_700_000_000);
    assert_eq!(
        a,
        synthesize(MoodCategory::Sad, canvas(20, 10), 1_700_000_000, &cfg).unwrap()
    );

    clock.advance(std::time::Duration::from_millis(700));
    let c = synth.synthesize(MoodCategory::Sad, canvas(20, 10)).unwrap();
    assert_eq!(c.seed, 1_700_000_001);
    assert_eq!(
        c,
        synthesize(MoodCategory::Sad, canvas(20, 10), 1_700_000_001, &cfg).unwrap()
    );
}
