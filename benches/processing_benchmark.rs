use city_merger::models::{Table, Value};
use city_merger::processors::{DataMerger, Deduplicator, Sorter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Create a source table where roughly a third of the names repeat
fn create_test_city_table(city_count: usize, offset: usize) -> Table {
    let cells = (0..city_count)
        .map(|i| {
            let id = (i * 7 + offset) % (city_count * 2 / 3 + 1);
            vec![
                Value::from(format!("City {:06}", id)),
                Value::from(if id % 5 == 0 { "BRA" } else { "USA" }),
                Value::Int(10_000 + (id as i64) * 37),
            ]
        })
        .collect();

    Table::from_cells(&["Name", "CountryCode", "Population"], cells)
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for size in [1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("three_sources", size), size, |b, &size| {
            b.iter_batched(
                || {
                    vec![
                        create_test_city_table(size, 0),
                        create_test_city_table(size, 1),
                        create_test_city_table(size, 2),
                    ]
                },
                |tables| black_box(DataMerger::new().merge(tables)),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_dedup_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup_and_sort");

    for size in [1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("name_key", size), size, |b, &size| {
            b.iter_batched(
                || create_test_city_table(size, 0),
                |table| black_box(Sorter::new().sort(Deduplicator::new().dedup(table))),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_merge, benchmark_dedup_and_sort);
criterion_main!(benches);
