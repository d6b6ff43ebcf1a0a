use super::Color;
use crate::data::Point;

/// One recorded drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
  /// Straight line between two points.
  Line {
    from: Point<f64>,
    to: Point<f64>,
    color: Color,
  },
  /// Stroke width for subsequent lines.
  LineWidth(f64),
  /// Clear the whole surface to a colour.
  ClearCanvas(Color),
}

/// The basic set of drawing actions a surface accepts.
pub trait GraphicsContext {
  fn line(&mut self, from: Point<f64>, to: Point<f64>, color: Color);
  fn line_width(&mut self, width: f64);
  fn clear_canvas(&mut self, color: Color);

  fn draw(&mut self, d: Draw) {
    match d {
      Draw::Line { from, to, color } => self.line(from, to, color),
      Draw::LineWidth(width) => self.line_width(width),
      Draw::ClearCanvas(color) => self.clear_canvas(color),
    }
  }
}

/// A drawing surface that records instructions in order without
/// committing to a rasterizer.
///
/// A fresh figure is created per plot call and returned to the caller,
/// who owns its lifetime. Nothing is persisted to disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
  ops: Vec<Draw>,
}

impl Figure {
  pub fn new() -> Figure {
    Figure { ops: Vec::new() }
  }

  /// Every recorded instruction, in drawing order.
  pub fn ops(&self) -> &[Draw] {
    &self.ops
  }

  /// Line instructions only, in drawing order.
  pub fn lines(&self) -> impl Iterator<Item = (Point<f64>, Point<f64>, Color)> + '_ {
    self.ops.iter().filter_map(|op| match op {
      Draw::Line { from, to, color } => Some((*from, *to, *color)),
      _ => None,
    })
  }
}

impl GraphicsContext for Figure {
  fn line(&mut self, from: Point<f64>, to: Point<f64>, color: Color) {
    self.ops.push(Draw::Line { from, to, color });
  }

  fn line_width(&mut self, width: f64) {
    self.ops.push(Draw::LineWidth(width));
  }

  fn clear_canvas(&mut self, color: Color) {
    self.ops.push(Draw::ClearCanvas(color));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn instructions_are_recorded_in_order() {
    let mut figure = Figure::new();
    figure.clear_canvas(Color::WHITE);
    figure.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Color::BLACK);
    assert_eq!(figure.ops().len(), 2);
    assert_eq!(figure.ops()[0], Draw::ClearCanvas(Color::WHITE));
    assert_eq!(figure.lines().count(), 1);
  }

  #[test]
  fn draw_dispatches_to_primitives() {
    let mut via_draw = Figure::new();
    via_draw.draw(Draw::LineWidth(3.0));
    via_draw.draw(Draw::Line {
      from: Point::new(0.0, 0.0),
      to: Point::new(2.0, 0.0),
      color: Color::BLACK,
    });

    let mut direct = Figure::new();
    direct.line_width(3.0);
    direct.line(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Color::BLACK);

    assert_eq!(via_draw, direct);
  }
}
