//! Ranking with average ranks for ties.

/// Ranks of a pooled sample, 1-based, with tied values sharing the mean
/// of the ranks they span.
#[derive(Debug, Clone)]
pub struct Ranking {
    /// Rank of each input value, in input order.
    pub ranks: Vec<f64>,
    /// Sizes of every group of tied values (groups of one are omitted).
    pub tie_groups: Vec<usize>,
}

impl Ranking {
    /// True if any value occurs more than once.
    pub fn has_ties(&self) -> bool {
        !self.tie_groups.is_empty()
    }

    /// Tie correction term `Σ (t³ - t)` over all tie groups.
    pub fn tie_term(&self) -> f64 {
        self.tie_groups
            .iter()
            .map(|&t| {
                let t = t as f64;
                t * t * t - t
            })
            .sum()
    }
}

/// Rank `data` in ascending order, averaging the ranks of ties.
///
/// # Formula
///
/// ```text
/// values at sorted positions i..=j that compare equal all receive
/// rank (i + j) / 2 + 1
/// ```
pub fn average_ranks(data: &[f64]) -> Ranking {
    let n = data.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| data[a].total_cmp(&data[b]));

    let mut ranks = vec![0.0; n];
    let mut tie_groups = Vec::new();

    let mut start = 0;
    while start < n {
        let mut end = start;
        while end + 1 < n && data[order[end + 1]] == data[order[start]] {
            end += 1;
        }

        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &idx in &order[start..=end] {
            ranks[idx] = rank;
        }

        let group = end - start + 1;
        if group > 1 {
            tie_groups.push(group);
        }
        start = end + 1;
    }

    Ranking { ranks, tie_groups }
}
