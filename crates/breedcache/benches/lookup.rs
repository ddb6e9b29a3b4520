use breedcache::CachingBreedFetcher;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dogbreeds::StaticCatalog;

fn catalog(breeds: usize) -> StaticCatalog {
    let mut catalog = StaticCatalog::new();
    for i in 0..breeds {
        catalog.insert(&format!("breed{i}"), [format!("sub{i}a"), format!("sub{i}b")]);
    }
    catalog
}

fn bench_cached_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_lookup");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("hit", |b| {
        let cache = CachingBreedFetcher::new(catalog(100));
        let names: Vec<String> = (0..100).map(|i| format!("breed{i}")).collect();

        // Warm the cache
        for name in &names {
            cache.lookup(name).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.lookup(&names[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.bench_function("hit_unnormalized", |b| {
        let cache = CachingBreedFetcher::new(catalog(100));
        let names: Vec<String> = (0..100).map(|i| format!("  BREED{i} ")).collect();

        for name in &names {
            cache.lookup(name).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.lookup(&names[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_uncached_failure(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncached_failure");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("unknown_breed", |b| {
        let cache = CachingBreedFetcher::new(catalog(100));

        // Failures are never stored, so every iteration forwards
        b.iter(|| {
            black_box(cache.lookup("unicorn").is_err());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cached_lookup, bench_uncached_failure);
criterion_main!(benches);
