use num_traits::*;
use ordered_float::OrderedFloat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point<T> {
  pub x: T,
  pub y: T,
}

impl<T> Point<T> {
  pub const fn new(x: T, y: T) -> Point<T> {
    Point { x, y }
  }

  pub fn cast<U, F>(self, f: F) -> Point<U>
  where
    F: Fn(T) -> U,
  {
    Point {
      x: f(self.x),
      y: f(self.y),
    }
  }
}

impl<T: Float> Point<T> {
  pub fn to_f64(self) -> Point<f64> {
    self.cast(|v| v.to_f64().unwrap())
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      x: point.0,
      y: point.1,
    }
  }
}

impl From<Point<f64>> for Point<OrderedFloat<f64>> {
  fn from(point: Point<f64>) -> Point<OrderedFloat<f64>> {
    point.cast(OrderedFloat)
  }
}

impl From<Point<OrderedFloat<f64>>> for Point<f64> {
  fn from(point: Point<OrderedFloat<f64>>) -> Point<f64> {
    point.cast(OrderedFloat::into_inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tuple_conversion() {
    assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
  }

  #[test]
  fn ordered_float_round_trip() {
    let pt = Point::new(0.5, -3.25);
    let ordered: Point<OrderedFloat<f64>> = pt.into();
    assert_eq!(Point::<f64>::from(ordered), pt);
  }
}
