use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use planar_kmeans::synthetic::generate_dataset;
use planar_kmeans::{choose_seeds, run, Point};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// `k` Gaussian blobs on a line, `n_per_cluster` points each
fn blob_data(k: usize, n_per_cluster: usize) -> Vec<Point> {
    let origins: Vec<Point> = (0..k).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    generate_dataset(&origins, n_per_cluster, 2.0, &mut rng).unwrap()
}

fn benchmark_kmeans_varying_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_samples");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let k = 5;
    let sample_sizes = [200, 1_000, 5_000];

    for n_per_cluster in sample_sizes.iter() {
        group.throughput(Throughput::Elements((*n_per_cluster * k) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_per_cluster * k),
            n_per_cluster,
            |b, &n_per_cluster| {
                let data = blob_data(k, n_per_cluster);

                b.iter(|| {
                    let mut rng = ChaCha8Rng::seed_from_u64(42);
                    run(black_box(&data), k, &mut rng).unwrap()
                });
            },
        );
    }
    group.finish();
}

fn benchmark_kmeans_varying_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_clusters");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let cluster_counts = [3, 10, 30];

    for k in cluster_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let data = blob_data(k, 200);

            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(42);
                run(black_box(&data), k, &mut rng).unwrap()
            });
        });
    }
    group.finish();
}

fn benchmark_seeding(c: &mut Criterion) {
    let mut group = c.benchmark_group("seeding");
    group.sample_size(20);

    let data = blob_data(10, 500);

    for k in [10, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                choose_seeds(black_box(&data), k, &mut rng).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_kmeans_varying_samples,
    benchmark_kmeans_varying_clusters,
    benchmark_seeding,
);

criterion_main!(benches);
