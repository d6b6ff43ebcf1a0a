use num_traits::Float;

use crate::data::{BoundingBox, LineSegment, Point};
use crate::render::{Color, Figure, GraphicsContext, PlotStyle};
use crate::Error;

/// Ordered collection of line segments. Insertion order is drawing order
/// and the sequence is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyline<T> {
  segments: Vec<LineSegment<T>>,
}

impl<T: Float> Polyline<T> {
  pub fn new_unchecked(segments: Vec<LineSegment<T>>) -> Polyline<T> {
    Polyline { segments }
  }

  /// Pair each consecutive pair of control points into a segment: segment
  /// `i` connects point `i` to point `i+1`.
  ///
  /// # Errors
  ///
  /// Will return an error if fewer than two control points are given.
  pub fn from_control_points(points: &[Point<T>]) -> Result<Polyline<T>, Error> {
    if points.len() < 2 {
      return Err(Error::InsufficientControlPoints);
    }
    let segments = points
      .windows(2)
      .map(|pair| LineSegment::new(pair[0], pair[1]))
      .collect();
    Ok(Polyline::new_unchecked(segments))
  }

  /// Apply a table of fractional offsets to a bounding box. Entry
  /// `(fx, fy)` maps to `(xmin + width * fx, ymin + height * fy)`.
  ///
  /// Tables must hold at least two entries; the tables in this crate are
  /// compile-time constants.
  pub fn from_fractions(bounds: &BoundingBox<T>, fractions: &[(f64, f64)]) -> Polyline<T> {
    debug_assert!(fractions.len() >= 2);
    let xmin = bounds.x_bounds().min();
    let ymin = bounds.y_bounds().min();
    let width = bounds.width();
    let height = bounds.height();
    let segments = fractions
      .windows(2)
      .map(|pair| {
        let corner = |&(fx, fy): &(f64, f64)| {
          Point::new(
            xmin + width * T::from(fx).unwrap(),
            ymin + height * T::from(fy).unwrap(),
          )
        };
        LineSegment::new(corner(&pair[0]), corner(&pair[1]))
      })
      .collect();
    Polyline::new_unchecked(segments)
  }

  pub fn segments(&self) -> &[LineSegment<T>] {
    &self.segments
  }

  pub fn len(&self) -> usize {
    self.segments.len()
  }

  pub fn is_empty(&self) -> bool {
    self.segments.is_empty()
  }

  /// The end of the final segment equals the start of the first.
  ///
  /// The comparison is exact: closed control tables repeat their first
  /// entry verbatim and the point computation is deterministic.
  pub fn is_closed(&self) -> bool {
    match (self.segments.first(), self.segments.last()) {
      (Some(first), Some(last)) => first.start == last.end,
      _ => false,
    }
  }

  /// # Errors
  ///
  /// Will return an error if [`Polyline::is_closed`] is false.
  pub fn validate_closed(&self) -> Result<(), Error> {
    if self.is_closed() {
      Ok(())
    } else {
      Err(Error::OpenOutline)
    }
  }

  /// Draw every segment, in order, in a single color.
  pub fn draw(&self, gc: &mut impl GraphicsContext, color: Color) {
    for segment in &self.segments {
      gc.line(segment.start.to_f64(), segment.end.to_f64(), color);
    }
  }
}

/// An outline shape a scatter plot can morph toward.
///
/// Concrete shapes own a [`Polyline`] and configure it through their
/// control-point tables; the rendering behavior is shared here.
pub trait PolylineShape<T: Float> {
  /// Short lowercase shape name.
  fn name(&self) -> &'static str;

  fn outline(&self) -> &Polyline<T>;

  /// Draw the outline onto a fresh [`Figure`] as plain black lines, one
  /// line instruction per stored segment, in sequence order.
  fn plot(&self) -> Figure {
    let mut figure = Figure::new();
    self.outline().draw(&mut figure, Color::BLACK);
    figure
  }

  /// [`PolylineShape::plot`] with a presentation style recorded before
  /// any geometry.
  fn plot_styled(&self, style: &PlotStyle) -> Figure {
    let mut figure = Figure::new();
    style.apply(&mut figure);
    self.outline().draw(&mut figure, Color::BLACK);
    figure
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn too_few_control_points() {
    assert_eq!(
      Polyline::<f64>::from_control_points(&[]).err(),
      Some(Error::InsufficientControlPoints)
    );
    assert_eq!(
      Polyline::from_control_points(&[Point::new(0.0, 0.0)]).err(),
      Some(Error::InsufficientControlPoints)
    );
  }

  #[test]
  fn consecutive_points_become_segments() {
    let points = [
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(1.0, 1.0),
    ];
    let polyline = Polyline::from_control_points(&points).unwrap();
    assert_eq!(polyline.len(), 2);
    assert_eq!(polyline.segments()[0].end, polyline.segments()[1].start);
  }

  #[test]
  fn open_polyline_fails_closure_check() {
    let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    let polyline = Polyline::from_control_points(&points).unwrap();
    assert!(!polyline.is_closed());
    assert_eq!(polyline.validate_closed().err(), Some(Error::OpenOutline));
  }

  #[test]
  fn closed_polyline_passes_closure_check() {
    let points = [
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(0.0, 1.0),
      Point::new(0.0, 0.0),
    ];
    let polyline = Polyline::from_control_points(&points).unwrap();
    assert!(polyline.is_closed());
  }
}
