// ============================================================
// Layer 5 - Lenient NDCG over a type hierarchy
// ============================================================
// A predicted type earns partial credit when it sits on the same
// branch as a gold type:
//
//   gain(t) = 1 - d(t, t_q) / h
//
//   d(t, t_q) - steps to the closest gold type on the same path
//   h         - maximum depth of the hierarchy
//
// Types off every gold branch earn 0. The ideal ranking is every
// type in the expanded gold set, sorted by gain.
//
//   DCG_k = Σ_{i=1}^{k} gain_i / log2(i + 1)
//
// Reference: Balog and Neumayer, "Hierarchical target type
//            identification for entity-oriented queries", CIKM'12

use std::collections::BTreeSet;

use crate::domain::hierarchy::TypeHierarchy;

pub fn dcg(gains: &[f64], k: usize) -> f64 {
    gains
        .iter()
        .take(k)
        .enumerate()
        .map(|(i, gain)| gain / ((i + 2) as f64).log2())
        .sum()
}

/// NDCG@k; 0 when the ideal ranking has no gain at all.
pub fn ndcg(gains: &[f64], ideal_gains: &[f64], k: usize) -> f64 {
    let ideal = dcg(ideal_gains, k);
    if ideal <= 0.0 {
        return 0.0;
    }
    dcg(gains, k) / ideal
}

/// Gain for each predicted type, in prediction order.
///
/// `gold` should already be reduced to its most specific types.
pub fn type_gains<S: AsRef<str>>(
    predicted: &[S],
    gold: &BTreeSet<String>,
    hierarchy: &TypeHierarchy,
) -> Vec<f64> {
    let expanded_gold = hierarchy.expanded(gold);

    predicted
        .iter()
        .map(|p| {
            let p = p.as_ref();
            if !expanded_gold.contains(p) {
                return 0.0;
            }
            // gold types may sit on different branches; the closest one counts
            gold.iter()
                .filter_map(|g| hierarchy.distance(p, g))
                .min()
                .map(|d| linear_gain(d, hierarchy.max_depth()))
                .unwrap_or(0.0)
        })
        .collect()
}

/// Gains of the best possible ranking, highest first.
pub fn ideal_gains(gold: &BTreeSet<String>, hierarchy: &TypeHierarchy) -> Vec<f64> {
    let candidates: Vec<String> = hierarchy.expanded(gold).into_iter().collect();
    let mut gains = type_gains(&candidates, gold, hierarchy);
    gains.sort_by(|a, b| b.total_cmp(a));
    gains
}

fn linear_gain(distance: usize, max_depth: usize) -> f64 {
    if max_depth == 0 {
        return if distance == 0 { 1.0 } else { 0.0 };
    }
    1.0 - distance as f64 / max_depth as f64
}
