//! Criterion benchmarks for the mcda decision methods.
//!
//! Uses seeded synthetic inputs (random reciprocal matrices, random
//! decision matrices, random ballot profiles) to measure pure algorithm
//! overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mcda::ahp::{check_consistency, JudgmentMatrix, WeightMethod};
use mcda::decision::{entropy_weights, DecisionMatrix, IndicatorType};
use mcda::electre::{analyze, ElectreConfig, Thresholds};
use mcda::topsis;
use mcda::voting::{aggregate, Ballot, BallotSet};
use mcda::weight::WeightVector;

/// Random reciprocal judgment matrix of the given order.
fn random_judgments(order: usize, seed: u64) -> JudgmentMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![vec![1.0; order]; order];
    for i in 0..order {
        for j in (i + 1)..order {
            let v = rng.random_range(1.0..9.0);
            rows[i][j] = v;
            rows[j][i] = 1.0 / v;
        }
    }
    JudgmentMatrix::from_rows(rows).unwrap()
}

/// Random decision matrix with all-benefit indicators.
fn random_decisions(alternatives: usize, criteria: usize, seed: u64) -> DecisionMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..alternatives)
        .map(|_| (0..criteria).map(|_| rng.random_range(1.0..100.0)).collect())
        .collect();
    DecisionMatrix::from_rows(rows, vec![IndicatorType::Benefit; criteria]).unwrap()
}

/// Random ballot profile: each block is a shuffled permutation.
fn random_ballots(candidates: usize, blocks: usize, seed: u64) -> BallotSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let ballots = (0..blocks)
        .map(|_| {
            let mut preference: Vec<usize> = (0..candidates).collect();
            // Fisher-Yates
            for i in (1..candidates).rev() {
                let j = rng.random_range(0..=i);
                preference.swap(i, j);
            }
            Ballot::new(rng.random_range(1..20), preference)
        })
        .collect();
    BallotSet::new(candidates, ballots).unwrap()
}

fn bench_ahp_weights(c: &mut Criterion) {
    let mut group = c.benchmark_group("ahp_weights");

    for &order in &[3usize, 6, 9] {
        let matrix = random_judgments(order, 42);
        for method in [WeightMethod::Sum, WeightMethod::Root, WeightMethod::Eigen] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", method), order),
                &matrix,
                |b, m| {
                    b.iter(|| {
                        let weights = black_box(m).weights(method);
                        let report = check_consistency(m, &weights).unwrap();
                        black_box(report)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_topsis(c: &mut Criterion) {
    let mut group = c.benchmark_group("topsis");

    for &(alternatives, criteria) in &[(10usize, 5usize), (50, 8), (200, 12)] {
        let matrix = random_decisions(alternatives, criteria, 42).normalized();
        let weights = entropy_weights(&matrix).unwrap();
        group.bench_with_input(
            BenchmarkId::new("rank", format!("{}x{}", alternatives, criteria)),
            &(matrix, weights),
            |b, (m, w)| {
                b.iter(|| {
                    let ranked = topsis::rank(black_box(m), black_box(w)).unwrap();
                    black_box(ranked)
                })
            },
        );
    }
    group.finish();
}

fn bench_electre(c: &mut Criterion) {
    let mut group = c.benchmark_group("electre");
    group.sample_size(20);

    for &(alternatives, criteria) in &[(10usize, 5usize), (20, 8), (50, 8)] {
        let matrix = random_decisions(alternatives, criteria, 42).normalized();
        let weights = WeightVector::uniform(criteria).unwrap();
        let thresholds = vec![Thresholds::new(0.05, 0.15, 0.6).unwrap(); criteria];
        let config = ElectreConfig::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", alternatives, criteria)),
            &(matrix, weights, thresholds, config),
            |b, (m, w, t, cfg)| {
                b.iter(|| {
                    let analysis = analyze(black_box(m), w, t, cfg).unwrap();
                    black_box(analysis)
                })
            },
        );
    }
    group.finish();
}

fn bench_voting(c: &mut Criterion) {
    let mut group = c.benchmark_group("voting");

    for &(candidates, blocks) in &[(5usize, 20usize), (10, 100), (20, 500)] {
        let ballots = random_ballots(candidates, blocks, 42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("c{}_b{}", candidates, blocks)),
            &ballots,
            |b, set| {
                b.iter(|| {
                    let scores = aggregate(black_box(set));
                    black_box(scores)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ahp_weights,
    bench_topsis,
    bench_electre,
    bench_voting
);
criterion_main!(benches);
