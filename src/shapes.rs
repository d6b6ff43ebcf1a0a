mod polyline;
pub mod polygons;

pub use polygons::{Diamond, Rectangle, Star};
pub use polyline::{Polyline, PolylineShape};
