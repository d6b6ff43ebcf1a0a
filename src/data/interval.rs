use num_traits::*;

use crate::Error;

/// One axis of a bounding box: a closed `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval<T> {
  min: T,
  max: T,
}

impl<T: Float> Interval<T> {
  /// # Errors
  ///
  /// Will return an error if either endpoint is NaN or infinite, or if
  /// `max < min`. Zero-range intervals are accepted.
  pub fn new(min: T, max: T) -> Result<Interval<T>, Error> {
    if !min.is_finite() || !max.is_finite() {
      return Err(Error::NonFiniteBounds);
    }
    if max < min {
      return Err(Error::InvertedBounds);
    }
    Ok(Interval { min, max })
  }

  pub fn min(&self) -> T {
    self.min
  }

  pub fn max(&self) -> T {
    self.max
  }

  pub fn range(&self) -> T {
    self.max - self.min
  }

  // Inclusive on both ends.
  pub fn contains(&self, value: T) -> bool {
    self.min <= value && value <= self.max
  }

  /// Copy of the interval expanded by `amount / 2` on each side.
  #[must_use]
  pub fn widen(&self, amount: T) -> Interval<T> {
    let half = amount / (T::one() + T::one());
    Interval {
      min: self.min - half,
      max: self.max + half,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use proptest::prelude::*;

  use crate::testing::*;

  #[test]
  fn rejects_non_finite_endpoints() {
    assert_eq!(Interval::new(f64::NAN, 1.0).err(), Some(Error::NonFiniteBounds));
    assert_eq!(Interval::new(0.0, f64::NAN).err(), Some(Error::NonFiniteBounds));
    assert_eq!(
      Interval::new(f64::NEG_INFINITY, 0.0).err(),
      Some(Error::NonFiniteBounds)
    );
    assert_eq!(
      Interval::new(0.0, f64::INFINITY).err(),
      Some(Error::NonFiniteBounds)
    );
  }

  #[test]
  fn rejects_inverted_endpoints() {
    assert_eq!(Interval::new(1.0, 0.0).err(), Some(Error::InvertedBounds));
  }

  #[test]
  fn accepts_zero_range() {
    let interval = Interval::new(2.0, 2.0).unwrap();
    assert_eq!(interval.range(), 0.0);
    assert!(interval.contains(2.0));
  }

  #[test]
  fn contains_is_inclusive() {
    let interval = Interval::new(0.0, 10.0).unwrap();
    assert!(interval.contains(0.0));
    assert!(interval.contains(10.0));
    assert!(!interval.contains(10.1));
    assert!(!interval.contains(-0.1));
  }

  proptest! {
    #[test]
    fn widen_is_symmetric(interval in any_interval(), amount in 0.0..1e6f64) {
      let widened = interval.widen(amount);
      prop_assert!(approx_eq(
        interval.min() - widened.min(),
        widened.max() - interval.max()
      ));
      prop_assert!(widened.min() <= interval.min());
      prop_assert!(interval.max() <= widened.max());
    }

    #[test]
    fn range_is_non_negative(interval in any_interval()) {
      prop_assert!(interval.range() >= 0.0);
    }
  }
}
