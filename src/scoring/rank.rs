// ============================================================
// Layer 5 - Reciprocal Rank
// ============================================================
// Wikidata track scoring. The rank of a question is the 1-based
// position, in the GOLD type list, of the first predicted type
// that the gold list contains. 0 means no hit.
//
//   gold      = [Q5, Q215627, Q35120]
//   predicted = [Q515, Q215627]
//   rank      = 2  (Q215627 is the second gold type)
//   rr        = 1/2

pub fn gold_rank<P: AsRef<str>, G: AsRef<str>>(predicted: &[P], gold: &[G]) -> usize {
    predicted
        .iter()
        .find_map(|p| gold.iter().position(|g| g.as_ref() == p.as_ref()))
        .map(|pos| pos + 1)
        .unwrap_or(0)
}

pub fn reciprocal_rank(rank: usize) -> f64 {
    if rank == 0 {
        0.0
    } else {
        1.0 / rank as f64
    }
}

/// Rounds to two decimals, exact halves to the even digit (0.125 → 0.12).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_is_position_in_gold_list() {
        let gold = ["Q5", "Q215627", "Q35120"];
        assert_eq!(gold_rank(&["Q515", "Q215627"], &gold), 2);
        assert_eq!(gold_rank(&["Q35120", "Q5"], &gold), 3);
    }

    #[test]
    fn test_no_hit_is_rank_zero() {
        let gold = ["Q5"];
        assert_eq!(gold_rank(&["Q515"], &gold), 0);
        assert_eq!(gold_rank::<&str, &str>(&[], &gold), 0);
    }

    #[test]
    fn test_reciprocal_rank() {
        assert_eq!(reciprocal_rank(0), 0.0);
        assert_eq!(reciprocal_rank(1), 1.0);
        assert_eq!(reciprocal_rank(4), 0.25);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.666_666), 0.67);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_round2_halves_go_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.625), 0.62);
        assert_eq!(round2(0.875), 0.88);
        assert_eq!(round2(0.375), 0.38);
    }
}
