//! Benchmarks for scoring and linear search

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use keyfuzz::{Fuzzy, Levenshtein};
use serde_json::{json, Value};

fn catalog(size: usize) -> Vec<Value> {
    let makers = ["Acer", "Lenovo", "Dell", "Asus", "Apple", "Razer", "Microsoft"];
    let cpus = ["Intel", "AMD", "Apple", "Qualcomm"];
    (0..size)
        .map(|i| {
            json!({
                "Manufacturer": makers[i % makers.len()],
                "CPU": {"Manufacturer": cpus[i % cpus.len()], "Series": format!("S-{i}")},
            })
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    group.bench_function("short", |b| {
        b.iter(|| Levenshtein::distance(black_box("inetl"), black_box("intel")))
    });

    group.bench_function("long", |b| {
        b.iter(|| {
            Levenshtein::distance(
                black_box("the quick brown fox jumps over the lazy dog"),
                black_box("a quick brown dog jumps over the lazy fox"),
            )
        })
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let items = catalog(10_000);

    let mut group = c.benchmark_group("search");
    group.throughput(Throughput::Elements(items.len() as u64));

    group.bench_function("two_keys_10k", |b| {
        let mut fuzzy = Fuzzy::new();
        fuzzy.set(&items);
        fuzzy.set_keys(["Manufacturer", "CPU.Manufacturer"]);
        b.iter(|| black_box(fuzzy.search(black_box("Inetl"))))
    });

    group.bench_function("identifier_10k", |b| {
        let mut fuzzy = Fuzzy::new();
        fuzzy.set(&items);
        fuzzy.set_keys(["Manufacturer", "CPU.Manufacturer"]);
        fuzzy.set_id("CPU.Series");
        b.iter(|| black_box(fuzzy.search(black_box("Lenvo"))))
    });

    group.finish();
}

criterion_group!(benches, bench_distance, bench_search);
criterion_main!(benches);
