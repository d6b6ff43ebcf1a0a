/// An RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
  Rgba(f32, f32, f32, f32),
}

impl Color {
  pub const BLACK: Color = Color::Rgba(0.0, 0.0, 0.0, 1.0);
  pub const WHITE: Color = Color::Rgba(1.0, 1.0, 1.0, 1.0);

  /// Returns this colour as RGBA components.
  pub fn to_rgba(&self) -> (f32, f32, f32, f32) {
    match self {
      &Color::Rgba(r, g, b, a) => (r, g, b, a),
    }
  }

  /// Returns the same colour with a different alpha value.
  #[must_use]
  pub fn with_alpha(&self, new_alpha: f32) -> Color {
    match self {
      &Color::Rgba(r, g, b, _) => Color::Rgba(r, g, b, new_alpha),
    }
  }
}
