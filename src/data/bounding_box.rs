use num_traits::*;

use super::{Interval, Point};
use crate::Error;

/// Axis-aligned rectangle given as independent per-axis intervals.
///
/// Read-only once constructed: every adjustment returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox<T> {
  x: Interval<T>,
  y: Interval<T>,
}

impl<T: Float> BoundingBox<T> {
  pub fn new(x: Interval<T>, y: Interval<T>) -> BoundingBox<T> {
    BoundingBox { x, y }
  }

  /// # Errors
  ///
  /// Will return an error if either axis has a NaN, infinite, or inverted
  /// endpoint pair. See [`Interval::new`].
  pub fn from_ranges(x: (T, T), y: (T, T)) -> Result<BoundingBox<T>, Error> {
    Ok(BoundingBox {
      x: Interval::new(x.0, x.1)?,
      y: Interval::new(y.0, y.1)?,
    })
  }

  pub fn x_bounds(&self) -> &Interval<T> {
    &self.x
  }

  pub fn y_bounds(&self) -> &Interval<T> {
    &self.y
  }

  pub fn width(&self) -> T {
    self.x.range()
  }

  pub fn height(&self) -> T {
    self.y.range()
  }

  /// Width divided by height. Infinite when the box has zero height.
  pub fn aspect_ratio(&self) -> T {
    self.width() / self.height()
  }

  pub fn contains(&self, point: &Point<T>) -> bool {
    self.x.contains(point.x) && self.y.contains(point.y)
  }

  /// Copy of the box with the smaller-range axis symmetrically widened
  /// until width equals height. Already-square boxes pass through
  /// unchanged, as do boxes with zero range on both axes.
  #[must_use]
  pub fn align_aspect_ratio(&self) -> BoundingBox<T> {
    let diff = self.width() - self.height();
    if diff < T::zero() {
      BoundingBox {
        x: self.x.widen(-diff),
        y: self.y,
      }
    } else if diff > T::zero() {
      BoundingBox {
        x: self.x,
        y: self.y.widen(diff),
      }
    } else {
      *self
    }
  }
}
