//! Weighted edit distance between two symbol sequences.

use crate::cost::CostModel;
use crate::symbol::Symbol;

/// Calculate the minimum total cost of transforming `s1` into `s2`.
///
/// Deleting a symbol of `s1`, inserting a symbol of `s2` and substituting one
/// for the other are each charged according to `costs`. Costs accumulate as
/// plain `f32` sums without normalization, so `distance(&[], s2, costs)` is
/// the sum of the insertion costs of `s2`.
///
/// Only two rows of the DP grid are kept, giving O(|s1|·|s2|) time and
/// O(|s2|) space.
pub fn distance<S: Symbol>(s1: &[S], s2: &[S], costs: &CostModel<S>) -> f32 {
    let len2 = s2.len();

    // Row 0: cumulative insertion costs of the s2 prefix.
    let mut prev_row = Vec::with_capacity(len2 + 1);
    prev_row.push(0.0f32);
    for (j, symbol) in s2.iter().enumerate() {
        prev_row.push(prev_row[j] + costs.insertion_cost(symbol));
    }
    let mut curr_row = vec![0.0f32; len2 + 1];

    for from in s1 {
        let delete = costs.deletion_cost(from);
        // Column 0: cumulative deletion costs of the s1 prefix.
        curr_row[0] = prev_row[0] + delete;

        for (j, to) in s2.iter().enumerate() {
            curr_row[j + 1] = (prev_row[j + 1] + delete) // deletion
                .min(curr_row[j] + costs.insertion_cost(to)) // insertion
                .min(prev_row[j] + costs.substitution_cost(from, to)); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostDefaults;
    use crate::symbol::Word;
    use crate::text::{decode, split_words};

    fn chars_distance(a: &str, b: &str, costs: &CostModel<char>) -> f32 {
        distance(&decode(a), &decode(b), costs)
    }

    #[test]
    fn test_unit_distance() {
        let costs = CostModel::default();
        assert_eq!(chars_distance("", "", &costs), 0.0);
        assert_eq!(chars_distance("", "a", &costs), 1.0);
        assert_eq!(chars_distance("a", "", &costs), 1.0);
        assert_eq!(chars_distance("a", "a", &costs), 0.0);
        assert_eq!(chars_distance("ab", "ac", &costs), 1.0);
        assert_eq!(chars_distance("abc", "def", &costs), 3.0);
        assert_eq!(chars_distance("kitten", "sitting", &costs), 3.0);
        assert_eq!(chars_distance("search", "serach", &costs), 2.0);
    }

    #[test]
    fn test_non_ascii() {
        let costs = CostModel::default();
        assert_eq!(chars_distance("příliš", "prilis", &costs), 3.0);
    }

    #[test]
    fn test_border_uses_per_symbol_costs() {
        let costs = CostModel::default()
            .with_deletion('x', 0.25)
            .with_insertion('y', 4.0);
        assert_eq!(chars_distance("xxa", "", &costs), 1.5);
        assert_eq!(chars_distance("", "yb", &costs), 5.0);
    }

    #[test]
    fn test_substitution_override() {
        let mut costs = CostModel::default();
        costs.load_from_table(["s\ta\tb\t0.5"]).unwrap();
        assert_eq!(chars_distance("a", "b", &costs), 0.5);
        assert_eq!(chars_distance("a", "c", &costs), 1.0);
        // Cheaper to delete and insert than to pay an expensive substitution.
        let costs = CostModel::default().with_substitution('a', 'b', 5.0);
        assert_eq!(chars_distance("a", "b", &costs), 2.0);
    }

    #[test]
    fn test_custom_defaults() {
        let costs = CostModel::new(CostDefaults::new(1.0, 1.0, 3.0).unwrap());
        // Substitution is more expensive than delete + insert.
        assert_eq!(chars_distance("cat", "cut", &costs), 2.0);
    }

    #[test]
    fn test_word_distance() {
        let costs = CostModel::<Word>::default();
        let a = split_words("a b c");
        let b = split_words("a x c");
        assert_eq!(distance(&a, &b, &costs), 1.0);
        assert_eq!(distance(&a, &split_words("a b c d"), &costs), 1.0);
        assert_eq!(distance(&a, &[], &costs), 3.0);
    }
}
