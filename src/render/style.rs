use super::{Color, Figure, GraphicsContext};

/// Shared presentation style, applied by the caller around a render call.
///
/// Shapes stay style-agnostic: their plain `plot` emits bare black lines,
/// and callers opt in to a style with [`with_style`] or
/// [`PolylineShape::plot_styled`](crate::shapes::PolylineShape::plot_styled).
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
  pub line_width: f64,
  pub background: Color,
}

impl Default for PlotStyle {
  fn default() -> PlotStyle {
    PlotStyle {
      line_width: 2.0,
      background: Color::WHITE,
    }
  }
}

impl PlotStyle {
  /// Record this style's instructions on a figure. Must run before any
  /// geometry is drawn for the style to cover the whole surface.
  pub fn apply(&self, figure: &mut Figure) {
    figure.clear_canvas(self.background);
    figure.line_width(self.line_width);
  }
}

/// Fresh figure with `style` applied, then `draw` run against it.
///
/// # Examples
///
/// ```rust
/// # use morph_shapes::data::BoundingBox;
/// # use morph_shapes::render::{with_style, Color, PlotStyle};
/// # use morph_shapes::shapes::{PolylineShape, Star};
/// let bounds = BoundingBox::from_ranges((0.0, 1.0), (0.0, 1.0)).unwrap();
/// let star = Star::new(&bounds);
/// let figure = with_style(&PlotStyle::default(), |figure| {
///   star.outline().draw(figure, Color::BLACK);
/// });
/// assert_eq!(figure.lines().count(), 10);
/// ```
pub fn with_style<F>(style: &PlotStyle, draw: F) -> Figure
where
  F: FnOnce(&mut Figure),
{
  let mut figure = Figure::new();
  style.apply(&mut figure);
  draw(&mut figure);
  figure
}
