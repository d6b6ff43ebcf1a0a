// This module contains strategies and helpers for:
//  * intervals
//  * bounding boxes
//  * tolerant float comparisons
use proptest::prelude::*;

use crate::data::{BoundingBox, Interval, Point};

const COORD_LIMIT: f64 = 1e6;

pub fn any_interval() -> impl Strategy<Value = Interval<f64>> {
  (-COORD_LIMIT..COORD_LIMIT, 0.0..COORD_LIMIT)
    .prop_map(|(min, len)| Interval::new(min, min + len).unwrap())
}

// Positive finite range, bounded away from zero.
pub fn any_positive_interval() -> impl Strategy<Value = Interval<f64>> {
  (-COORD_LIMIT..COORD_LIMIT, 1e-3..COORD_LIMIT)
    .prop_map(|(min, len)| Interval::new(min, min + len).unwrap())
}

pub fn any_bounding_box() -> impl Strategy<Value = BoundingBox<f64>> {
  (any_interval(), any_interval()).prop_map(|(x, y)| BoundingBox::new(x, y))
}

pub fn any_positive_bounding_box() -> impl Strategy<Value = BoundingBox<f64>> {
  (any_positive_interval(), any_positive_interval()).prop_map(|(x, y)| BoundingBox::new(x, y))
}

// Equality up to a relative tolerance; the bounds arithmetic accumulates a
// few ulps per operation.
pub fn approx_eq(a: f64, b: f64) -> bool {
  let scale = a.abs().max(b.abs()).max(1.0);
  (a - b).abs() <= scale * 1e-9
}

// Inclusive containment, padded by a relative tolerance per axis.
pub fn contains_approx(bounds: &BoundingBox<f64>, point: Point<f64>) -> bool {
  let x = bounds.x_bounds();
  let y = bounds.y_bounds();
  let pad_x = (x.min().abs() + x.max().abs() + 1.0) * 1e-9;
  let pad_y = (y.min().abs() + y.max().abs() + 1.0) * 1e-9;
  x.min() - pad_x <= point.x
    && point.x <= x.max() + pad_x
    && y.min() - pad_y <= point.y
    && point.y <= y.max() + pad_y
}
