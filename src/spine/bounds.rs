//! Axis-aligned bounding box representation with utility methods.
//!
//! This module provides the [`BoundingBox`] type used by every stage of spine
//! detection: recognized words, merged text regions and whole spines.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in image pixel coordinates.
///
/// # Coordinate System
///
/// The coordinate system assumes:
/// - **X-axis**: Increases from left to right
/// - **Y-axis**: Increases from top to bottom (standard image coordinates)
///
/// ```text
/// (x0, y0) -------------+
///     |                 |
///     |                 |
///     +------------- (x1, y1)
/// ```
///
/// Well-formed boxes satisfy `x0 <= x1` and `y0 <= y1`. Boxes handed over by a
/// recognition engine are not validated; degenerate (zero-area) boxes are
/// carried through unchanged.
///
/// # Serialization
///
/// ```json
/// {"x0": 0.0, "y0": 0.0, "x1": 100.0, "y1": 50.0}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x0: f64,
    /// Top edge.
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub y1: f64,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` from its edges.
    #[inline]
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Returns the width of the box (`x1 - x0`).
    ///
    /// No minimum is enforced: a zero-width box reports `0.0`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Returns the height of the box (`y1 - y0`).
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Returns the center point of the box.
    #[inline]
    pub fn center(&self) -> Coord<f64> {
        Coord {
            x: self.center_x(),
            y: self.center_y(),
        }
    }

    /// Returns the center x coordinate.
    ///
    /// Equivalent to `self.center().x` but avoids computing the y coordinate.
    #[inline]
    pub fn center_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    /// Returns the center y coordinate.
    ///
    /// Equivalent to `self.center().y` but avoids computing the x coordinate.
    #[inline]
    pub fn center_y(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }

    /// Returns the smallest box covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Grows this box in place so that it also covers `other`.
    #[inline]
    pub fn expand_to_include(&mut self, other: &BoundingBox) {
        *self = self.union(other);
    }

    /// Returns a copy of the box with x scaled by `sx` and y scaled by `sy`.
    ///
    /// Used to map detection coordinates onto a resized rendering surface.
    #[inline]
    #[must_use]
    pub fn scaled(&self, sx: f64, sy: f64) -> BoundingBox {
        BoundingBox {
            x0: self.x0 * sx,
            y0: self.y0 * sy,
            x1: self.x1 * sx,
            y1: self.y1 * sy,
        }
    }
}

/// Creates a `BoundingBox` from a `[x0, y0, x1, y1]` array.
impl From<[f64; 4]> for BoundingBox {
    #[inline]
    fn from(edges: [f64; 4]) -> Self {
        Self::new(edges[0], edges[1], edges[2], edges[3])
    }
}

/// Converts a `BoundingBox` into a `geo::Rect`.
///
/// `geo::Rect` normalizes its corners, so an inverted box becomes well-formed.
impl From<BoundingBox> for geo::Rect<f64> {
    #[inline]
    fn from(bbox: BoundingBox) -> Self {
        geo::Rect::new(
            Coord {
                x: bbox.x0,
                y: bbox.y0,
            },
            Coord {
                x: bbox.x1,
                y: bbox.y1,
            },
        )
    }
}
