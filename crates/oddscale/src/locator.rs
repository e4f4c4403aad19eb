//! Ternary-partition search for the single anomalous item.

use crate::oracle::WeighingOracle;
use crate::types::{ItemId, Outcome, ScaleError, ScaleResult};

/// Locate the single anomalous item among `items`.
///
/// Splits the candidates into contiguous thirds, weighs the first third
/// against the second, and recurses into whichever group the reading
/// implicates (the remainder on `Balanced`). A set of three resolves with
/// one single-vs-single weighing; a set of one resolves with none.
///
/// Population sizes that cannot reach a base case through this reduction
/// (0, 2, 4, 6, ...) are rejected with [`ScaleError::InvalidPopulation`]
/// before any weighing. Oracle failures abort the search unchanged; a
/// weighing is never retried.
pub fn locate(items: &[ItemId], oracle: &mut dyn WeighingOracle) -> ScaleResult<ItemId> {
    if items.is_empty() {
        return Err(ScaleError::InvalidPopulation(
            "candidate set is empty".to_string(),
        ));
    }
    if !is_resolvable(items.len()) {
        return Err(ScaleError::InvalidPopulation(format!(
            "population of {} cannot be reduced to a base case",
            items.len()
        )));
    }

    resolve(items, oracle)
}

fn resolve(items: &[ItemId], oracle: &mut dyn WeighingOracle) -> ScaleResult<ItemId> {
    if items.len() == 1 {
        return Ok(items[0]);
    }

    if items.len() == 3 {
        let outcome = oracle.compare(&items[0..1], &items[1..2])?;
        tracing::debug!(left = items[0], right = items[1], %outcome, "weighed");
        return Ok(match outcome {
            Outcome::Balanced => items[2],
            Outcome::LeftIndicated => items[0],
            Outcome::RightIndicated => items[1],
        });
    }

    let group = items.len() / 3;
    let one = &items[..group];
    let two = &items[group..2 * group];
    let three = &items[2 * group..];

    let outcome = oracle.compare(one, two)?;
    tracing::debug!(?one, ?two, %outcome, "weighed");

    match outcome {
        Outcome::Balanced => resolve(three, oracle),
        Outcome::LeftIndicated => resolve(one, oracle),
        Outcome::RightIndicated => resolve(two, oracle),
    }
}

/// Whether a population of `n` items can be reduced to a base case.
///
/// Sizes 1 and 3 resolve directly. Larger sizes resolve only if both the
/// compared-group size `n / 3` and the remainder size `n - 2 * (n / 3)` do,
/// since either branch may be taken depending on the readings. Sizes 0 and 2
/// never resolve.
pub fn is_resolvable(n: usize) -> bool {
    match n {
        1 | 3 => true,
        0 | 2 => false,
        _ => {
            let group = n / 3;
            is_resolvable(group) && is_resolvable(n - 2 * group)
        }
    }
}

/// Worst-case number of weighings for a population of `n` items, or `None`
/// if `n` is not resolvable. ⌈log₃ n⌉ for powers of three.
pub fn max_weighings(n: usize) -> Option<usize> {
    match n {
        1 => Some(0),
        3 => Some(1),
        0 | 2 => None,
        _ => {
            let group = n / 3;
            let compared = max_weighings(group)?;
            let remainder = max_weighings(n - 2 * group)?;
            Some(1 + compared.max(remainder))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::Transcript;
    use crate::sim::SimulatedScale;

    /// Oracle that answers like a simulated scale until a configured number
    /// of weighings, then fails every call.
    struct FailingScale {
        inner: SimulatedScale,
        fail_after: usize,
        calls: usize,
    }

    impl FailingScale {
        fn new(anomaly: ItemId, fail_after: usize) -> Self {
            Self {
                inner: SimulatedScale::new(anomaly),
                fail_after,
                calls: 0,
            }
        }
    }

    impl WeighingOracle for FailingScale {
        fn compare(&mut self, left: &[ItemId], right: &[ItemId]) -> ScaleResult<Outcome> {
            self.calls += 1;
            if self.calls > self.fail_after {
                return Err(ScaleError::Oracle("scale went offline".to_string()));
            }
            self.inner.compare(left, right)
        }
    }

    #[test]
    fn test_single_item_needs_no_weighing() {
        let mut scale = SimulatedScale::new(7);
        assert_eq!(locate(&[7], &mut scale).unwrap(), 7);
        assert_eq!(scale.comparisons(), 0);
    }

    #[test]
    fn test_three_items_balanced_points_at_third() {
        let mut scale = SimulatedScale::new(12);
        assert_eq!(locate(&[10, 11, 12], &mut scale).unwrap(), 12);
        assert_eq!(scale.comparisons(), 1);
    }

    #[test]
    fn test_three_items_left_indicated() {
        let mut scale = SimulatedScale::new(10);
        assert_eq!(locate(&[10, 11, 12], &mut scale).unwrap(), 10);
        assert_eq!(scale.comparisons(), 1);
    }

    #[test]
    fn test_three_items_right_indicated() {
        let mut scale = SimulatedScale::new(11);
        assert_eq!(locate(&[10, 11, 12], &mut scale).unwrap(), 11);
        assert_eq!(scale.comparisons(), 1);
    }

    #[test]
    fn test_nine_items_every_anomaly_position() {
        let items: Vec<ItemId> = (0..9).collect();
        for anomaly in 0..9 {
            let mut scale = SimulatedScale::new(anomaly);
            assert_eq!(locate(&items, &mut scale).unwrap(), anomaly);
            assert_eq!(scale.comparisons(), 2, "anomaly at {anomaly}");
        }
    }

    #[test]
    fn test_nine_items_first_weighing_compares_thirds() {
        let items: Vec<ItemId> = (0..9).collect();
        let mut scale = Transcript::new(SimulatedScale::new(8));
        assert_eq!(locate(&items, &mut scale).unwrap(), 8);

        let weighings = scale.into_weighings();
        assert_eq!(weighings.len(), 2);
        assert_eq!(weighings[0].left, vec![0, 1, 2]);
        assert_eq!(weighings[0].right, vec![3, 4, 5]);
        assert_eq!(weighings[0].outcome, Outcome::Balanced);
        // Down to [6, 7, 8]: one single-vs-single weighing resolves it.
        assert_eq!(weighings[1].left, vec![6]);
        assert_eq!(weighings[1].right, vec![7]);
    }

    #[test]
    fn test_weighing_count_is_log3_for_powers_of_three() {
        for (n, expected) in [(3usize, 1usize), (9, 2), (27, 3), (81, 4)] {
            let items: Vec<ItemId> = (0..n as ItemId).collect();
            let mut scale = SimulatedScale::new(items[n - 1]);
            locate(&items, &mut scale).unwrap();
            assert_eq!(scale.comparisons(), expected, "population {n}");
            assert_eq!(max_weighings(n), Some(expected));
        }
    }

    #[test]
    fn test_every_resolvable_size_up_to_100() {
        for n in (1..=100).filter(|&n| is_resolvable(n)) {
            let items: Vec<ItemId> = (0..n as ItemId).collect();
            let bound = max_weighings(n).unwrap();
            for &anomaly in &items {
                let mut scale = SimulatedScale::new(anomaly);
                assert_eq!(locate(&items, &mut scale).unwrap(), anomaly);
                assert!(
                    scale.comparisons() <= bound,
                    "population {n}, anomaly {anomaly}: {} > {bound}",
                    scale.comparisons()
                );
            }
        }
    }

    #[test]
    fn test_empty_population_rejected_without_weighing() {
        let mut scale = SimulatedScale::new(0);
        let err = locate(&[], &mut scale).unwrap_err();
        assert!(matches!(err, ScaleError::InvalidPopulation(_)));
        assert_eq!(scale.comparisons(), 0);
    }

    #[test]
    fn test_irreducible_populations_rejected_without_weighing() {
        for n in [2usize, 4, 6, 7, 8, 10] {
            let items: Vec<ItemId> = (0..n as ItemId).collect();
            let mut scale = SimulatedScale::new(0);
            let err = locate(&items, &mut scale).unwrap_err();
            assert!(matches!(err, ScaleError::InvalidPopulation(_)), "n = {n}");
            assert_eq!(scale.comparisons(), 0, "n = {n}");
        }
    }

    #[test]
    fn test_resolvable_sizes() {
        let accepted: Vec<usize> = (0..=30).filter(|&n| is_resolvable(n)).collect();
        assert_eq!(accepted, vec![1, 3, 5, 9, 11, 15, 27, 29]);
    }

    #[test]
    fn test_oracle_failure_at_first_weighing() {
        let items: Vec<ItemId> = (0..9).collect();
        let mut scale = FailingScale::new(8, 0);
        let err = locate(&items, &mut scale).unwrap_err();
        assert!(matches!(err, ScaleError::Oracle(_)));
        assert_eq!(scale.calls, 1);
    }

    #[test]
    fn test_oracle_failure_mid_recursion_stops_weighing() {
        // 27 items take 3 weighings; fail on the second.
        let items: Vec<ItemId> = (0..27).collect();
        let mut scale = FailingScale::new(26, 1);
        let err = locate(&items, &mut scale).unwrap_err();
        assert!(matches!(err, ScaleError::Oracle(_)));
        assert_eq!(scale.calls, 2, "no weighing beyond the failing one");
    }

    #[test]
    fn test_five_items_resolve_via_remainder_of_three() {
        // groups of one, one, and a remainder of three
        let items: Vec<ItemId> = vec![20, 21, 22, 23, 24];
        for &anomaly in &items {
            let mut scale = SimulatedScale::new(anomaly);
            assert_eq!(locate(&items, &mut scale).unwrap(), anomaly);
        }
    }
}
