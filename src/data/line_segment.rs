use super::Point;

/// Straight line between two points. Start/end order is drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment<T> {
  pub start: Point<T>,
  pub end: Point<T>,
}

impl<T> LineSegment<T> {
  pub const fn new(start: Point<T>, end: Point<T>) -> LineSegment<T> {
    LineSegment { start, end }
  }
}

impl<T> From<(Point<T>, Point<T>)> for LineSegment<T> {
  fn from(endpoints: (Point<T>, Point<T>)) -> LineSegment<T> {
    LineSegment::new(endpoints.0, endpoints.1)
  }
}
