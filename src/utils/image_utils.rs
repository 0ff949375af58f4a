use std::io::Cursor;

use base64::Engine;
use image::{imageops, ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::utils::error::ImageError;

#[inline]
fn luminance(pixel: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32).round() as u8
}

/// Converts an RGBA buffer to grayscale and stretches its contrast.
///
/// Gray values are mapped linearly from the observed `[min, max]` range onto
/// `[0, 255]`; alpha is left untouched. A uniform image is only converted to
/// gray.
///
/// # Errors
///
/// Returns [`ImageError::InvalidInput`] if `rgba.len() != width * height * 4`.
pub fn preprocess_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, ImageError> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(ImageError::InvalidInput {
            message: format!(
                "expected {} bytes for a {}x{} RGBA buffer, got {}",
                expected,
                width,
                height,
                rgba.len()
            ),
        });
    }

    let image: RgbaImage =
        ImageBuffer::from_raw(width, height, rgba.to_vec()).ok_or_else(|| {
            ImageError::InvalidInput {
                message: "buffer does not match image dimensions".to_string(),
            }
        })?;

    Ok(preprocess_image(&image).into_raw())
}

/// Image-typed variant of [`preprocess_rgba`].
pub fn preprocess_image(image: &RgbaImage) -> RgbaImage {
    let gray: Vec<u8> = image.pixels().map(luminance).collect();

    let min = gray.iter().copied().min().unwrap_or(0);
    let max = gray.iter().copied().max().unwrap_or(0);
    let range = (max - min) as f32;

    let mut output: RgbaImage = ImageBuffer::new(image.width(), image.height());

    for ((out, src), &value) in output.pixels_mut().zip(image.pixels()).zip(gray.iter()) {
        let stretched = if range > 0.0 {
            (((value - min) as f32 / range) * 255.0).round() as u8
        } else {
            value
        };
        *out = Rgba([stretched, stretched, stretched, src.0[3]]);
    }

    output
}

/// Resizes an image to exactly `width x height`.
pub fn resize_to(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.width() == width && image.height() == height {
        return image.clone();
    }
    imageops::resize(image, width, height, imageops::FilterType::Triangle)
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Wraps PNG bytes in a `data:image/png;base64,` URL.
pub fn to_data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}
