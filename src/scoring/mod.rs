// ============================================================
// Layer 5 - Scoring
// ============================================================
// The ranking metrics behind both tracks. Pure functions over
// slices of gains, type names and ranks; no I/O.
//
//   ndcg.rs  - DCG/NDCG and the lenient type gains used on the
//              DBpedia track (Balog and Neumayer, CIKM'12)
//   rank.rs  - reciprocal rank used on the Wikidata track

pub mod ndcg;
pub mod rank;

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 0.0, 0.5]), Some(0.5));
    }
}
