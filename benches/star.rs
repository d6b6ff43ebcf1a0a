use criterion::{criterion_group, criterion_main, Criterion};
use morph_shapes::data::BoundingBox;
use morph_shapes::shapes::{PolylineShape, Star};

pub fn criterion_benchmark(c: &mut Criterion) {
  let bounds = BoundingBox::from_ranges((0.0, 640.0), (0.0, 480.0)).unwrap();
  c.bench_function("Star::new", |b| b.iter(|| Star::new(&bounds)));
  let star = Star::new(&bounds);
  c.bench_function("Star::plot", |b| b.iter(|| star.plot()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
