//! Diagnostic overlay rendering for detected spines.
//!
//! Draws each spine's box, a translucent label background and a numbered,
//! truncated title over a resized copy of the source image. Output is meant for
//! a human checking detections; detection never depends on it.

use ab_glyph::{FontArc, FontRef, PxScale};
use image::{Pixel, Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::spine::book_spine::BookSpine;
use crate::utils::error::ImageError;
use crate::utils::image_utils;

/// Golden angle in degrees; consecutive spines get well separated hues.
const HUE_STEP: f64 = 137.5;

/// Label font shipped with the crate, used unless another one is configured.
static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

/// Horizontal padding around label text, in pixels.
const LABEL_PADDING: u32 = 2;

/// Visualization rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Line thickness for bounding boxes
    pub line_thickness: u32,
    /// Font scale for labels
    pub font_scale: f32,
    /// Background label color opacity (0-255)
    pub label_bg_opacity: u8,
    /// Height of the label strip in pixels
    pub label_height: u32,
    /// Titles longer than this are cut in labels
    pub label_max_chars: usize,
    /// HSL saturation of box colors (0.0-1.0)
    pub saturation: f32,
    /// HSL lightness of box colors (0.0-1.0)
    pub lightness: f32,
}

impl Default for RenderOptions {
    #[inline]
    fn default() -> Self {
        Self {
            line_thickness: 3,
            font_scale: 14.0,
            label_bg_opacity: 180,
            label_height: 18,
            label_max_chars: 25,
            saturation: 0.8,
            lightness: 0.5,
        }
    }
}

/// Hue in degrees for the spine at `index`.
#[inline]
pub fn spine_hue(index: usize) -> f64 {
    (index as f64 * HUE_STEP) % 360.0
}

/// Converts an HSL color (`hue` in degrees, `s`/`l` in 0-1) to opaque RGBA.
pub fn hsl_to_rgba(hue: f64, saturation: f32, lightness: f32) -> Rgba<u8> {
    let s = saturation.clamp(0.0, 1.0) as f64;
    let l = lightness.clamp(0.0, 1.0) as f64;
    let h = hue.rem_euclid(360.0) / 60.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba([channel(r), channel(g), channel(b), 255])
}

/// Label text for the spine at `index`: `"<index+1>: <title prefix>"`.
pub fn spine_label(index: usize, title: &str, max_chars: usize) -> String {
    let truncated: String = title.chars().take(max_chars).collect();
    format!("{}: {}", index + 1, truncated)
}

fn blend_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x_end = x.saturating_add(w).min(img.width());
    let y_end = y.saturating_add(h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.get_pixel_mut(px, py).blend(&color);
        }
    }
}

/// Render spine overlays on top of a resized copy of `source`.
///
/// Spine boxes are expected in `source` pixel coordinates and are scaled to
/// the `width x height` canvas. Labels are drawn only when `font` is given;
/// the label background is drawn regardless.
///
/// # Errors
///
/// Returns [`ImageError::InvalidInput`] if either the source or the target
/// has a zero dimension.
pub fn render_visualization(
    source: &RgbaImage,
    spines: &[BookSpine],
    width: u32,
    height: u32,
    options: &RenderOptions,
    font: Option<&FontArc>,
) -> Result<RgbaImage, ImageError> {
    if width == 0 || height == 0 || source.width() == 0 || source.height() == 0 {
        return Err(ImageError::InvalidInput {
            message: format!(
                "cannot render {}x{} source onto {}x{} canvas",
                source.width(),
                source.height(),
                width,
                height
            ),
        });
    }

    let mut img = image_utils::resize_to(source, width, height);
    let sx = width as f64 / source.width() as f64;
    let sy = height as f64 / source.height() as f64;
    let font_scale = PxScale::from(options.font_scale);

    for (index, spine) in spines.iter().enumerate() {
        let color = hsl_to_rgba(spine_hue(index), options.saturation, options.lightness);

        let rect: geo::Rect<f64> = spine.bbox.scaled(sx, sy).into();
        let x = rect.min().x.round().max(0.0) as u32;
        let y = rect.min().y.round().max(0.0) as u32;
        let w = (rect.width().round() as u32).min(width.saturating_sub(x));
        let h = (rect.height().round() as u32).min(height.saturating_sub(y));

        if w == 0 || h == 0 {
            continue;
        }

        for t in 0..options.line_thickness {
            let inner_w = w.saturating_sub(2 * t);
            let inner_h = h.saturating_sub(2 * t);
            if inner_w > 0 && inner_h > 0 {
                let rect = Rect::at((x + t) as i32, (y + t) as i32).of_size(inner_w, inner_h);
                draw_hollow_rect_mut(&mut img, rect, color);
            }
        }

        let label = spine_label(index, &spine.title, options.label_max_chars);
        let label_y = if y < options.label_height {
            y + h
        } else {
            y - options.label_height
        };
        let label_w = label_width(&label, options.font_scale, font);

        let bg = Rgba([color.0[0], color.0[1], color.0[2], options.label_bg_opacity]);
        blend_rect(&mut img, x, label_y, label_w, options.label_height, bg);

        if let Some(font) = font {
            draw_text_mut(
                &mut img,
                Rgba([255, 255, 255, 255]),
                (x + LABEL_PADDING) as i32,
                label_y as i32 + 1,
                font_scale,
                font,
                &label,
            );
        }
    }

    Ok(img)
}

/// Width of the label strip for `label`, text plus padding on both sides.
///
/// Without a font the width is estimated from the font scale, assuming
/// monospaced glyphs of 0.6 em.
pub fn label_width(label: &str, font_scale: f32, font: Option<&FontArc>) -> u32 {
    let text_w = match font {
        Some(font) => text_size(PxScale::from(font_scale), font, label).0,
        None => (label.chars().count() as f32 * font_scale * 0.6).ceil() as u32,
    };
    (text_w + 2 * LABEL_PADDING).max(1)
}

/// The label font embedded in the crate.
///
/// # Errors
///
/// Returns [`ImageError::InvalidInput`] if the embedded font cannot be parsed.
pub fn embedded_font() -> Result<FontArc, ImageError> {
    FontRef::try_from_slice(EMBEDDED_FONT)
        .map(FontArc::new)
        .map_err(|e| ImageError::InvalidInput {
            message: format!("invalid embedded font: {}", e),
        })
}

/// Parses font bytes for label rendering.
///
/// # Errors
///
/// Returns [`ImageError::InvalidInput`] if the bytes are not a usable font.
pub fn load_font(bytes: Vec<u8>) -> Result<FontArc, ImageError> {
    FontArc::try_from_vec(bytes).map_err(|e| ImageError::InvalidInput {
        message: format!("invalid label font: {}", e),
    })
}
