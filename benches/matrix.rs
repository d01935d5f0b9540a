use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vecmat::{DMat4, DQuat, DVec3, DVec4};

pub fn bench_dmat4_product(c: &mut Criterion) {
    let a = DMat4::from_fn(|col, row| (col * 4 + row) as f64);
    let b = DMat4::identity() * 2.0;
    c.bench_function("dmat4_product", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b))
    });
}

pub fn bench_dmat4_determinant(c: &mut Criterion) {
    let m = DMat4::from_fn(|col, row| if col == row { 2.0 } else { (col + row) as f64 * 0.1 });
    c.bench_function("dmat4_determinant", |bencher| {
        bencher.iter(|| black_box(m).determinant())
    });
}

pub fn bench_dmat4_vector_product(c: &mut Criterion) {
    let m = DMat4::from_fn(|col, row| (col + row) as f64);
    let v = DVec4::new(1.0, -1.0, 0.5, 2.0);
    c.bench_function("dmat4_vector_product", |bencher| {
        bencher.iter(|| black_box(m) * black_box(v))
    });
}

pub fn bench_quaternion_rotation(c: &mut Criterion) {
    let rotation = DQuat::from_axis_angle(&DVec3::unit_z(), 0.7);
    let v = DVec3::new(1.0, 2.0, 3.0);
    c.bench_function("quaternion_rotation", |bencher| {
        bencher.iter(|| black_box(rotation) * black_box(v))
    });
}

criterion_group!(
    benches,
    bench_dmat4_product,
    bench_dmat4_determinant,
    bench_dmat4_vector_product,
    bench_quaternion_rotation
);
criterion_main!(benches);
