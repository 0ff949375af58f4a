//! Utility functions for bounding box operations.

use std::cmp::Ordering;

use crate::spine::bounds::BoundingBox;

/// Anything that occupies an axis-aligned box in the image.
pub trait HasBounds {
    fn get_bounds(&self) -> &BoundingBox;
}

impl HasBounds for BoundingBox {
    fn get_bounds(&self) -> &BoundingBox {
        self
    }
}

/// Calculates the Euclidean distance between the centers of two boxes.
///
/// # Returns
///
/// The straight-line distance in pixels between both box centers.
#[inline]
#[must_use]
pub fn center_distance(a: &BoundingBox, b: &BoundingBox) -> f64 {
    let ca = a.center();
    let cb = b.center();
    (ca.x - cb.x).hypot(ca.y - cb.y)
}

/// Absolute horizontal distance between two box centers.
#[inline]
#[must_use]
pub fn center_dx(a: &BoundingBox, b: &BoundingBox) -> f64 {
    (a.center_x() - b.center_x()).abs()
}

/// Absolute vertical distance between two box centers.
#[inline]
#[must_use]
pub fn center_dy(a: &BoundingBox, b: &BoundingBox) -> f64 {
    (a.center_y() - b.center_y()).abs()
}

/// Mean of the heights of two boxes.
#[inline]
#[must_use]
pub fn average_height(a: &BoundingBox, b: &BoundingBox) -> f64 {
    (a.height() + b.height()) / 2.0
}

/// Folds a new confidence into an accumulated one.
///
/// This is a pairwise midpoint, not a true mean: after merging `n` items the
/// latest one carries half of the weight. Grouping results depend on this
/// exact formula.
#[inline]
#[must_use]
pub fn running_confidence(current: f64, new: f64) -> f64 {
    (current + new) / 2.0
}

/// Sorts items top-to-bottom by the vertical center of their boxes.
///
/// The sort is stable, so items sharing a center keep their relative order.
pub fn sort_top_to_bottom<T: HasBounds>(items: &mut [T]) {
    items.sort_by(|a, b| {
        a.get_bounds()
            .center_y()
            .partial_cmp(&b.get_bounds().center_y())
            .unwrap_or(Ordering::Equal)
    });
}
