use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vector_math::{generate_random_vectors, Vector};

fn bench_vector_ops(c: &mut Criterion) {
    let vectors = generate_random_vectors(128, 2).unwrap();
    let (a, b) = (&vectors[0], &vectors[1]);

    c.bench_function("dot_128", |bencher| {
        bencher.iter(|| black_box(a).dot(black_box(b)).unwrap())
    });

    c.bench_function("magnitude_128", |bencher| {
        bencher.iter(|| black_box(a).magnitude())
    });

    c.bench_function("normalize_128", |bencher| {
        bencher.iter(|| black_box(a).normalize().unwrap())
    });

    c.bench_function("add_128", |bencher| {
        bencher.iter(|| black_box(a).add(black_box(b)).unwrap())
    });

    let u = Vector::new(vec![1.0, -2.0, 3.0]).unwrap();
    let w = Vector::new(vec![4.0, 0.5, -1.0]).unwrap();
    c.bench_function("cross_3", |bencher| {
        bencher.iter(|| black_box(&u).cross(black_box(&w)).unwrap())
    });
}

criterion_group!(benches, bench_vector_ops);
criterion_main!(benches);
