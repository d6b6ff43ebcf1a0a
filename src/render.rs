mod color;
mod figure;
mod style;

pub use color::Color;
pub use figure::{Draw, Figure, GraphicsContext};
pub use style::{with_style, PlotStyle};
