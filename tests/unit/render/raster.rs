use super::*;
use crate::mood::style::RgbaColor;
use crate::render::gradient::ColorStops;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn new_raster_is_transparent_and_sized() {
    let r = Raster::new(canvas(3, 2)).unwrap();
    assert_eq!(r.data().len(), 3 * 2 * 4);
    assert!(r.data().iter().all(|&b| b == 0));
    assert_eq!(r.pixel(3, 0), None);
}

#[test]
fn zero_canvas_is_rejected() {
    assert!(
        Raster::new(Canvas {
            width: 0,
            height: 1
        })
        .is_err()
    );
}

#[test]
fn byte_length_mismatch_is_rejected() {
    assert!(Raster::from_premul_bytes(canvas(2, 2), vec![0; 15]).is_err());
    assert!(Raster::from_premul_bytes(canvas(2, 2), vec![0; 16]).is_ok());
}

#[test]
fn linear_fill_runs_corner_to_corner() {
    let mut r = Raster::new(canvas(16, 16)).unwrap();
    let g = LinearGradient {
        start: Point::new(0.0, 0.0),
        end: Point::new(16.0, 16.0),
        stops: ColorStops::new()
            .with_stop(0.0, RgbaColor::rgba(255, 0, 0, 1.0))
            .with_stop(1.0, RgbaColor::rgba(0, 0, 255, 1.0)),
    };
    r.fill_linear(&g, CompositeMode::SourceOver);
    let tl = r.pixel(0, 0).unwrap();
    let br = r.pixel(15, 15).unwrap();
    assert!(tl[0] > 230 && tl[2] < 25);
    assert!(br[2] > 230 && br[0] < 25);
    assert_eq!(r.pixel(15, 0), r.pixel(0, 15));
}

#[test]
fn radial_fill_is_clipped_and_additive() {
    let mut r = Raster::new(canvas(20, 20)).unwrap();
    let g = RadialGradient {
        center: Point::new(10.0, 10.0),
        radius: 5.0,
        stops: ColorStops::new()
            .with_stop(0.0, RgbaColor::rgba(0, 255, 0, 0.5))
            .with_stop(1.0, RgbaColor::transparent()),
    };
    r.fill_radial(&g, CompositeMode::Lighter);
    let once = r.pixel(10, 10).unwrap();
    assert!(once[1] > 100);
    assert_eq!(r.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(r.pixel(16, 10), Some([0, 0, 0, 0]));

    r.fill_radial(&g, CompositeMode::Lighter);
    let twice = r.pixel(10, 10).unwrap();
    assert!(twice[1] > once[1]);
    assert!(twice[3] > once[3]);
}

#[test]
fn radial_blob_partially_off_canvas_is_safe() {
    let mut r = Raster::new(canvas(4, 4)).unwrap();
    let g = RadialGradient {
        center: Point::new(-2.0, 3.9),
        radius: 300.0,
        stops: ColorStops::new()
            .with_stop(0.0, RgbaColor::rgba(255, 255, 255, 0.2))
            .with_stop(1.0, RgbaColor::transparent()),
    };
    r.fill_radial(&g, CompositeMode::Lighter);
    assert!(r.data().chunks_exact(4).all(|px| px[3] > 0));
}
