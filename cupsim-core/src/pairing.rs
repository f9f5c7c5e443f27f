/// Random pair generation, the matching round, and the termination check.
///
/// Functions take `rng: &mut impl Rng` so callers control seeding; the
/// driver threads one `StdRng` through the whole simulation.
use rand::Rng;

use crate::constants::MIN_DIAMETER;
use crate::types::{Diameter, Pair, RoundOutcome};

/// Draw one diameter, uniform over the closed range [`MIN_DIAMETER`, max].
/// Balls and cups use the same distribution with independent draws.
pub fn random_diameter(max_diameter: Diameter, rng: &mut impl Rng) -> Diameter {
    rng.random_range(MIN_DIAMETER..=max_diameter)
}

/// First round: create `count` fresh pairs from independent ball/cup draws
/// and classify each one with the strict predicate.
pub fn generate_initial_round(
    count: usize,
    max_diameter: Diameter,
    rng: &mut impl Rng,
) -> RoundOutcome {
    let mut outcome = RoundOutcome::default();

    for _ in 0..count {
        let pair = Pair::new(
            random_diameter(max_diameter, rng),
            random_diameter(max_diameter, rng),
        );
        if pair.is_match() {
            outcome.used_pairs.push(pair);
        } else {
            outcome.unused_pairs.push(pair);
        }
    }

    outcome
}

/// Re-pair a pool of leftover pairs.
///
/// Each iteration extracts two uniformly random pairs: the first contributes
/// its ball and the second its cup to a new candidate. The two orphans (the
/// second pair's ball, the first pair's cup) are recombined into one new
/// unused pair, so every diameter stays in play, only re-associated.
/// Leftovers are reshuffled this way on purpose; the second pair is never
/// returned untouched.
///
/// With two or fewer pairs left, impossibility is checked before extracting,
/// the same certificate the driver applies between rounds.
pub fn rematch_round(mut pool: Vec<Pair>, rng: &mut impl Rng) -> RoundOutcome {
    let mut outcome = RoundOutcome::default();

    let count = pool.len();
    for _ in 0..count {
        if pool.len() <= 2 && matching_impossible(&pool) {
            outcome.unused_pairs.append(&mut pool);
            return outcome;
        }

        // Pairing order is irrelevant, so O(1) swap_remove stands in for
        // popping at a random index.
        let first = pool.swap_remove(rng.random_range(0..pool.len()));
        let second = pool.swap_remove(rng.random_range(0..pool.len()));
        outcome.unused_pairs.push(Pair::new(second.ball, first.cup));

        let candidate = Pair::new(first.ball, second.cup);
        if candidate.is_match() {
            outcome.used_pairs.push(candidate);
        } else {
            outcome.unused_pairs.push(candidate);
        }
    }

    outcome
}

/// Whether no future re-pairing of `pairs` can ever produce a match.
///
/// Fewer than two pairs cannot form a new candidate. Otherwise one linear
/// scan finds the smallest ball and the largest cup: when the largest cup is
/// no larger than the smallest ball, no re-association can succeed. No
/// sorting needed, the two extremes decide.
pub fn matching_impossible(pairs: &[Pair]) -> bool {
    if pairs.len() < 2 {
        return true;
    }

    let mut min_ball = Diameter::MAX;
    let mut max_cup = 0;
    for pair in pairs {
        min_ball = min_ball.min(pair.ball);
        max_cup = max_cup.max(pair.cup);
    }

    max_cup <= min_ball
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn pairs(raw: &[(Diameter, Diameter)]) -> Vec<Pair> {
        raw.iter().map(|&(b, c)| Pair::new(b, c)).collect()
    }

    #[test]
    fn test_diameters_stay_in_range() {
        let mut rng = rng(1);
        for _ in 0..1000 {
            let d = random_diameter(10, &mut rng);
            assert!((1..=10).contains(&d), "diameter {} out of range", d);
        }
    }

    #[test]
    fn test_initial_round_conserves_pairs() {
        let mut rng = rng(2);
        let outcome = generate_initial_round(500, 10, &mut rng);
        assert_eq!(outcome.total(), 500);
    }

    #[test]
    fn test_initial_round_classification() {
        let mut rng = rng(3);
        let outcome = generate_initial_round(200, 10, &mut rng);
        assert!(outcome.used_pairs.iter().all(|p| p.is_match()));
        assert!(outcome.unused_pairs.iter().all(|p| !p.is_match()));
    }

    #[test]
    fn test_rematch_conserves_pairs() {
        for n in [2usize, 3, 7, 100, 101] {
            let mut rng = rng(4 + n as u64);
            let pool = generate_initial_round(n, 10, &mut rng).unused_pairs;
            let input = pool.len();
            let outcome = rematch_round(pool, &mut rng);
            assert_eq!(outcome.total(), input, "pool of {} lost pairs", input);
        }
    }

    #[test]
    fn test_rematch_conserves_diameters() {
        let mut rng = rng(5);
        let pool = pairs(&[(5, 3), (4, 2), (1, 9), (6, 6), (2, 8)]);

        let mut balls_in: Vec<_> = pool.iter().map(|p| p.ball).collect();
        let mut cups_in: Vec<_> = pool.iter().map(|p| p.cup).collect();
        balls_in.sort_unstable();
        cups_in.sort_unstable();

        let outcome = rematch_round(pool, &mut rng);
        let all: Vec<_> = outcome
            .used_pairs
            .iter()
            .chain(outcome.unused_pairs.iter())
            .collect();
        let mut balls_out: Vec<_> = all.iter().map(|p| p.ball).collect();
        let mut cups_out: Vec<_> = all.iter().map(|p| p.cup).collect();
        balls_out.sort_unstable();
        cups_out.sort_unstable();

        assert_eq!(balls_in, balls_out);
        assert_eq!(cups_in, cups_out);
    }

    #[test]
    fn test_rematch_on_impossible_pool_returns_everything_unused() {
        let mut rng = rng(6);
        let pool = pairs(&[(5, 3), (4, 2)]);
        let outcome = rematch_round(pool.clone(), &mut rng);
        assert!(outcome.used_pairs.is_empty());
        assert_eq!(outcome.unused_pairs, pool);
    }

    #[test]
    fn test_rematch_on_short_pool_returns_everything_unused() {
        let mut rng = rng(7);
        let outcome = rematch_round(pairs(&[(1, 9)]), &mut rng);
        assert!(outcome.used_pairs.is_empty());
        assert_eq!(outcome.unused_pairs, pairs(&[(1, 9)]));

        let outcome = rematch_round(Vec::new(), &mut rng);
        assert!(outcome.used_pairs.is_empty());
        assert!(outcome.unused_pairs.is_empty());
    }

    #[test]
    fn test_impossible_when_max_cup_below_min_ball() {
        // max cup = 3 <= min ball = 4
        assert!(matching_impossible(&pairs(&[(5, 3), (4, 2)])));
    }

    #[test]
    fn test_possible_when_a_cup_exceeds_a_ball() {
        // max cup = 9 > min ball = 4
        assert!(!matching_impossible(&pairs(&[(5, 9), (4, 2)])));
    }

    #[test]
    fn test_impossible_at_equal_extremes() {
        // max cup = 4 equals min ball = 4: strict predicate can never fire
        assert!(matching_impossible(&pairs(&[(4, 4), (6, 4)])));
    }

    #[test]
    fn test_fewer_than_two_pairs_is_impossible() {
        assert!(matching_impossible(&[]));
        assert!(matching_impossible(&pairs(&[(1, 9)])));
    }
}
