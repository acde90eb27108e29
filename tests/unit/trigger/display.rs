use super::*;
use crate::foundation::core::Canvas;
use crate::render::encode::{EncodedImage, ImageFormat};

fn wallpaper(mood: MoodCategory) -> Arc<Wallpaper> {
    Arc::new(Wallpaper {
        mood,
        canvas: Canvas::new(2, 2).unwrap(),
        seed: 1,
        image: EncodedImage {
            format: ImageFormat::Jpeg,
            width: 2,
            height: 2,
            bytes: Vec::new(),
        },
    })
}

#[test]
fn backdrop_overlay_is_the_mood_style_overlay() {
    for mood in MoodCategory::ALL {
        let b = Backdrop::new(mood, wallpaper(mood));
        assert!(std::ptr::eq(b.style, style_for(mood)));
        assert_eq!(b.css_overlay(), style_for(mood).css_overlay());
    }
}

#[test]
fn recording_surface_tracks_presents_and_clears() {
    let mut s = RecordingSurface::new();
    let view = s.clone();
    s.present(&Backdrop::new(MoodCategory::Happy, wallpaper(MoodCategory::Happy)));
    s.clear();
    assert_eq!(view.current(), None);
    s.present(&Backdrop::new(MoodCategory::Sad, wallpaper(MoodCategory::Sad)));
    assert_eq!(view.present_count(), 2);
    assert_eq!(view.current().unwrap().mood, MoodCategory::Sad);
    let moods: Vec<_> = view.presented().iter().map(|b| b.mood).collect();
    assert_eq!(moods, vec![MoodCategory::Happy, MoodCategory::Sad]);
}

#[test]
fn shared_viewport_is_read_on_demand() {
    let shared = SharedViewport::new(Viewport::new(10.0, 20.0, 1.0));
    let reader = shared.clone();
    shared.set(Viewport::new(30.0, 40.0, 2.0));
    assert_eq!(reader.viewport(), Viewport::new(30.0, 40.0, 2.0));
}
