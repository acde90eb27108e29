use std::io::Cursor;

use image::ImageEncoder as _;

use crate::foundation::error::{MoodwallError, MoodwallResult};
use crate::render::composite::unpremul_channel;
use crate::render::raster::Raster;

/// Container format of an encoded wallpaper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossy, opaque. Transparent regions flatten onto black.
    #[default]
    Jpeg,
    /// Lossless, straight alpha.
    Png,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// Encoded image bytes plus the dimensions they decode to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

/// Encode a premultiplied raster. `jpeg_quality` is 1..=100 and ignored for PNG.
pub fn encode_raster(
    raster: &Raster,
    format: ImageFormat,
    jpeg_quality: u8,
) -> MoodwallResult<EncodedImage> {
    let (w, h) = (raster.width(), raster.height());
    let mut bytes = Vec::new();

    match format {
        ImageFormat::Jpeg => {
            if !(1..=100).contains(&jpeg_quality) {
                return Err(MoodwallError::validation(format!(
                    "jpeg quality must be in 1..=100, got {jpeg_quality}"
                )));
            }
            // Premultiplied rgb is exactly the raster composited over black.
            let rgb: Vec<u8> = raster
                .data()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            let mut enc =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, jpeg_quality);
            enc.encode(&rgb, w, h, image::ExtendedColorType::Rgb8)
                .map_err(|e| MoodwallError::encode(format!("jpeg: {e}")))?;
        }
        ImageFormat::Png => {
            let rgba: Vec<u8> = raster
                .data()
                .chunks_exact(4)
                .flat_map(|px| {
                    let a = px[3];
                    [
                        unpremul_channel(px[0], a),
                        unpremul_channel(px[1], a),
                        unpremul_channel(px[2], a),
                        a,
                    ]
                })
                .collect();
            image::codecs::png::PngEncoder::new(Cursor::new(&mut bytes))
                .write_image(&rgba, w, h, image::ExtendedColorType::Rgba8)
                .map_err(|e| MoodwallError::encode(format!("png: {e}")))?;
        }
    }

    Ok(EncodedImage {
        format,
        width: w,
        height: h,
        bytes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
