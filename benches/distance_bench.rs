use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lexdist::prelude::*;

const ALPHABET: &[char] = &['a', 'e', 'i', 'o', 'u', 'n', 'r', 's', 't', 'l'];

fn generate_words(count: usize, max_len: usize) -> Vec<Vec<char>> {
    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let len = 3 + (i * 7) % (max_len - 2);
        let word = (0..len)
            .map(|j| ALPHABET[(i * 31 + j * 17 + j * j) % ALPHABET.len()])
            .collect();
        words.push(word);
    }
    words
}

fn bench_distance(c: &mut Criterion) {
    let words = generate_words(101, 12);
    let query = &words[0];
    let targets = &words[1..];

    let unit = CostModel::default();
    let weighted = CostModel::default()
        .with_substitution('a', 'e', 0.3)
        .with_substitution('o', 'u', 0.3)
        .with_deletion('s', 0.5)
        .with_insertion('n', 0.7);

    let mut group = c.benchmark_group("distance");
    for (name, costs) in [("unit", &unit), ("weighted", &weighted)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for target in targets {
                    black_box(distance(black_box(query), black_box(target), costs));
                }
            })
        });
    }
    group.bench_function("align", |b| {
        b.iter(|| {
            for target in targets {
                black_box(align(black_box(query), black_box(target)));
            }
        })
    });
    group.finish();
}

fn bench_find_closest(c: &mut Criterion) {
    let lexicon = generate_words(20_000, 12);
    let queries = generate_words(8, 10);
    let costs = CostModel::default();

    let mut group = c.benchmark_group("find_closest");
    group.sample_size(20);
    for threads in [1, 4] {
        let config = SearchConfig::new(5).with_threads(threads);
        let search = NearestNeighborSearch::new(&lexicon, &costs, config).unwrap();
        group.bench_with_input(BenchmarkId::new("threads", threads), &queries, |b, queries| {
            b.iter(|| {
                for query in queries {
                    black_box(search.find_closest(query));
                }
            })
        });
    }

    let pruned = NearestNeighborSearch::new(
        &lexicon,
        &costs,
        SearchConfig::new(5).with_max_length_diff(1),
    )
    .unwrap();
    group.bench_function("length_bound", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(pruned.find_closest(query));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_distance, bench_find_closest);
criterion_main!(benches);
