use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{hint::black_box, time::Duration};

use slotmatch::{
    Choice, Config, Pattern, Scorer, SimilarityMatrix, Slot, alignment::match_words, score,
};

const VOCABULARY: [&str; 16] = [
    "new", "york", "city", "pizza", "best", "cheap", "near", "me", "open", "late", "delivery",
    "italian", "slice", "brooklyn", "style", "thin",
];

/// Shared-prefix similarity, roughly what an edit distance comparator costs
fn prefix_similarity(a: &str, b: &str) -> f64 {
    let shared = a.bytes().zip(b.bytes()).take_while(|(a, b)| a == b).count();
    shared as f64 / a.len().max(b.len()).max(1) as f64
}

fn generate_haystacks(count: usize, len: usize) -> Vec<Vec<&'static str>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| VOCABULARY[rng.random_range(0..VOCABULARY.len())])
                .collect()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let simple = Pattern::from_words(["cheap", "pizza", "near", "me"]);
    let complex = Pattern::new([
        Slot::words(["best", "cheap"]),
        Slot::new([
            Choice::composite(["new", "york"]),
            Choice::composite(["brooklyn", "style"]),
            Choice::word("italian"),
        ]),
        Slot::words(["pizza", "slice"]),
        Slot::new([Choice::composite(["open", "late"]), Choice::word("delivery")]),
    ]);
    let haystack = ["best", "new", "york", "style", "pizza", "open", "late", "near", "me"];

    c.bench_function("score simple", |b| {
        b.iter(|| score(black_box(&simple), black_box(&haystack), prefix_similarity))
    });

    c.bench_function("score complex", |b| {
        b.iter(|| score(black_box(&complex), black_box(&haystack), prefix_similarity))
    });

    c.bench_function("match words 32x32", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = (0..32)
            .map(|_| (0..32).map(|_| rng.random::<f64>()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let matrix = SimilarityMatrix::from_rows(&rows);
        b.iter(|| match_words(black_box(&matrix)))
    });

    let haystacks = generate_haystacks(10_000, 12);
    c.bench_function("rank 10k haystacks", |b| {
        let scorer = Scorer::new(&complex, &Config::default()).unwrap();
        b.iter(|| {
            scorer.try_rank_list(black_box(&haystacks), |a: &str, b: &str| {
                Ok::<_, std::convert::Infallible>(prefix_similarity(a, b))
            })
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(200))
        .measurement_time(Duration::from_secs(2));
    targets = criterion_benchmark
}
criterion_main!(benches);
