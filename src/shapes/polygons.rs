//! Polygon shapes made from straight lines.

use claims::debug_assert_ok;
use num_traits::Float;

use super::{Polyline, PolylineShape};
use crate::data::BoundingBox;

/// Fractional offsets tracing a five-pointed star, outer points and inner
/// concave vertices alternating. The outline starts and ends at the
/// left-middle vertex, so pairing the entries yields a closed path of 10
/// segments. Assumes a square frame.
pub const STAR_OUTLINE: [(f64, f64); 11] = [
  (0.0, 0.625),
  (0.375, 0.625),
  (0.5, 1.0),
  (0.625, 0.625),
  (1.0, 0.625),
  (0.6875, 0.375),
  (0.8125, 0.0),
  (0.5, 0.25),
  (0.1875, 0.0),
  (0.3125, 0.375),
  (0.0, 0.625),
];

/// Fractional offsets tracing the corners of the frame, 4 segments.
pub const RECTANGLE_OUTLINE: [(f64, f64); 5] = [
  (0.0, 0.0),
  (0.0, 1.0),
  (1.0, 1.0),
  (1.0, 0.0),
  (0.0, 0.0),
];

/// Fractional offsets tracing the edge midpoints of the frame, 4 segments.
pub const DIAMOND_OUTLINE: [(f64, f64); 5] = [
  (0.0, 0.5),
  (0.5, 1.0),
  (1.0, 0.5),
  (0.5, 0.0),
  (0.0, 0.5),
];

/// A five-pointed star inscribed in a bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Star<T> {
  outline: Polyline<T>,
}

impl<T: Float> Star<T> {
  /// Compute the star outline for a bounding box.
  ///
  /// The box is aspect-ratio-normalized first (the caller's value is not
  /// touched), then [`STAR_OUTLINE`] is applied to the normalized box.
  ///
  /// # Properties
  ///
  /// * The outline has exactly 10 segments and is closed.
  /// * Every control point lies within the normalized box, inclusive.
  /// * Equal boxes produce identical outlines.
  ///
  /// There are no error conditions: a zero-range box produces a collapsed
  /// star rather than failing.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use morph_shapes::data::BoundingBox;
  /// # use morph_shapes::shapes::{PolylineShape, Star};
  /// let bounds = BoundingBox::from_ranges((0.0, 10.0), (0.0, 10.0)).unwrap();
  /// let star = Star::new(&bounds);
  /// assert_eq!(star.outline().len(), 10);
  /// assert!(star.outline().is_closed());
  /// ```
  pub fn new(bounds: &BoundingBox<T>) -> Star<T> {
    let bounds = bounds.align_aspect_ratio();
    let outline = Polyline::from_fractions(&bounds, &STAR_OUTLINE);
    debug_assert_ok!(outline.validate_closed());
    Star { outline }
  }
}

impl<T: Float> PolylineShape<T> for Star<T> {
  fn name(&self) -> &'static str {
    "star"
  }

  fn outline(&self) -> &Polyline<T> {
    &self.outline
  }
}

/// The bounding box itself, traced corner to corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle<T> {
  outline: Polyline<T>,
}

impl<T: Float> Rectangle<T> {
  /// Trace the box as given. No aspect-ratio normalization.
  pub fn new(bounds: &BoundingBox<T>) -> Rectangle<T> {
    let outline = Polyline::from_fractions(bounds, &RECTANGLE_OUTLINE);
    debug_assert_ok!(outline.validate_closed());
    Rectangle { outline }
  }
}

impl<T: Float> PolylineShape<T> for Rectangle<T> {
  fn name(&self) -> &'static str {
    "rectangle"
  }

  fn outline(&self) -> &Polyline<T> {
    &self.outline
  }
}

/// A diamond connecting the box's edge midpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diamond<T> {
  outline: Polyline<T>,
}

impl<T: Float> Diamond<T> {
  /// Trace the box as given. No aspect-ratio normalization.
  pub fn new(bounds: &BoundingBox<T>) -> Diamond<T> {
    let outline = Polyline::from_fractions(bounds, &DIAMOND_OUTLINE);
    debug_assert_ok!(outline.validate_closed());
    Diamond { outline }
  }
}

impl<T: Float> PolylineShape<T> for Diamond<T> {
  fn name(&self) -> &'static str {
    "diamond"
  }

  fn outline(&self) -> &Polyline<T> {
    &self.outline
  }
}
