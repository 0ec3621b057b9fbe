//! Property checks over randomly generated sequences.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use lexdist::prelude::*;

const ALPHABET: [char; 5] = ['a', 'b', 'c', 'd', 'é'];
const ROUNDS: usize = 200;

fn random_sequence(rng: &mut StdRng, max_len: usize) -> Vec<char> {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

fn random_cost_model(rng: &mut StdRng) -> CostModel<char> {
    let mut costs = CostModel::new(
        CostDefaults::new(
            rng.random_range(1..=4) as f32 * 0.5,
            rng.random_range(1..=4) as f32 * 0.5,
            rng.random_range(1..=4) as f32 * 0.5,
        )
        .unwrap(),
    );
    for _ in 0..rng.random_range(0..6) {
        let a = ALPHABET[rng.random_range(0..ALPHABET.len())];
        let b = ALPHABET[rng.random_range(0..ALPHABET.len())];
        let cost = rng.random_range(0..=8) as f32 * 0.25;
        costs = match rng.random_range(0..3) {
            0 => costs.with_insertion(a, cost),
            1 => costs.with_deletion(a, cost),
            _ => costs.with_substitution(a, b, cost),
        };
    }
    costs
}

#[test]
fn test_distance_to_self_is_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let s = random_sequence(&mut rng, 10);
        let costs = random_cost_model(&mut rng);
        assert_eq!(distance(&s, &s, &costs), 0.0, "sequence {s:?}");
    }
}

#[test]
fn test_symmetry_under_uniform_costs() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ROUNDS {
        let cost = rng.random_range(1..=4) as f32 * 0.5;
        let costs = CostModel::new(CostDefaults::new(cost, cost, cost).unwrap());
        let a = random_sequence(&mut rng, 8);
        let b = random_sequence(&mut rng, 8);
        assert_eq!(
            distance(&a, &b, &costs),
            distance(&b, &a, &costs),
            "{a:?} vs {b:?}"
        );
    }
}

#[test]
fn test_empty_side_sums_operation_costs() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let s = random_sequence(&mut rng, 10);
        let costs = random_cost_model(&mut rng);
        let insertions: f32 = s.iter().map(|c| costs.insertion_cost(c)).sum();
        let deletions: f32 = s.iter().map(|c| costs.deletion_cost(c)).sum();
        assert_eq!(distance(&[], &s, &costs), insertions);
        assert_eq!(distance(&s, &[], &costs), deletions);
    }
}

#[test]
fn test_triangle_inequality_unit_costs() {
    let mut rng = StdRng::seed_from_u64(4);
    let costs = CostModel::default();
    for _ in 0..ROUNDS {
        let a = random_sequence(&mut rng, 8);
        let b = random_sequence(&mut rng, 8);
        let c = random_sequence(&mut rng, 8);
        assert!(
            distance(&a, &c, &costs) <= distance(&a, &b, &costs) + distance(&b, &c, &costs),
            "{a:?} {b:?} {c:?}"
        );
    }
}

#[test]
fn test_alignment_agrees_with_unit_distance() {
    let mut rng = StdRng::seed_from_u64(5);
    let costs = CostModel::default();
    for _ in 0..ROUNDS {
        let a = random_sequence(&mut rng, 8);
        let b = random_sequence(&mut rng, 8);
        let alignment = trace(&a, &b, Backtrack::DrainBorder);

        assert_eq!(alignment.distance() as f32, distance(&a, &b, &costs));
        assert_eq!(alignment.changes().count(), alignment.distance());

        // Replaying the drained edits reproduces both sequences.
        let mut source = Vec::new();
        let mut target = Vec::new();
        for edit in alignment.edits() {
            match edit {
                Edit::Insert(t) => target.push(*t),
                Edit::Delete(s) => source.push(*s),
                Edit::Substitute(s, t) => {
                    source.push(*s);
                    target.push(*t);
                }
                Edit::NoOp(s) => {
                    source.push(*s);
                    target.push(*s);
                }
            }
        }
        assert_eq!(source, a);
        assert_eq!(target, b);
    }
}

#[test]
fn test_equal_sequences_align_to_noops() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..ROUNDS {
        let s = random_sequence(&mut rng, 10);
        let edits = align(&s, &s);
        assert_eq!(edits.len(), s.len());
        assert!(edits.iter().all(Edit::is_identity));

        let mut estimator = WeightEstimator::default();
        estimator.observe(&s, &s);
        assert_eq!(estimator.total_edits(), 0);
    }
}

#[test]
fn test_bounded_top_k_keeps_k_smallest() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let n = rng.random_range(1..40);
        let k = rng.random_range(1..=n);
        let mut values: Vec<u32> = (0..n).map(|_| rng.random_range(0..100)).collect();
        values.shuffle(&mut rng);

        let mut top = BoundedTopK::new(k);
        for &value in &values {
            top.push(value);
        }

        let mut expected = values.clone();
        expected.sort();
        expected.truncate(k);
        assert_eq!(top.into_sorted_vec(), expected);
    }
}

#[test]
fn test_search_distances_independent_of_thread_count() {
    let mut rng = StdRng::seed_from_u64(8);
    let lexicon: Vec<Vec<char>> = (0..300).map(|_| random_sequence(&mut rng, 7)).collect();
    let costs = random_cost_model(&mut rng);
    let queries: Vec<Vec<char>> = (0..10).map(|_| random_sequence(&mut rng, 7)).collect();

    let single = NearestNeighborSearch::new(&lexicon, &costs, SearchConfig::new(5).with_threads(1))
        .unwrap();
    let parallel = NearestNeighborSearch::new(&lexicon, &costs, SearchConfig::new(5).with_threads(4))
        .unwrap();

    for query in &queries {
        let a: Vec<f32> = single.find_closest(query).iter().map(|n| n.distance).collect();
        let b: Vec<f32> = parallel.find_closest(query).iter().map(|n| n.distance).collect();
        assert_eq!(a, b);

        // Brute force reference.
        let mut all: Vec<f32> = lexicon.iter().map(|e| distance(e, query, &costs)).collect();
        all.sort_by(|x, y| x.total_cmp(y));
        all.truncate(5);
        assert_eq!(a, all);
    }
}
