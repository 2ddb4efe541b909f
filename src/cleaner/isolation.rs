//! Single-feature isolation forest (Liu et al., 2008).
//!
//! Anomalous values are easier to isolate by random splits, so their
//! average path length across a forest of random trees is shorter. The
//! anomaly score is `2^(-E[h(x)] / c(n))`: close to 1 for anomalies,
//! around 0.5 and below for inliers.
//!
//! The forest is built from a seeded RNG, so the same input and seed
//! always flag the same values.

use rand::Rng as _;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;

/// Trees per forest.
pub const TREE_COUNT: usize = 100;

/// Subsample size per tree; smaller inputs are used whole.
pub const MAX_SAMPLES: usize = 256;

enum Node {
    Split {
        at: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf {
        size: usize,
    },
}

/// A fitted forest over one numeric feature.
pub struct IsolationForest {
    trees: Vec<Node>,
    expected_depth: f64,
}

impl IsolationForest {
    /// Fits a forest on the given values with a deterministic RNG seed.
    ///
    /// The caller must pass at least two values with nonzero spread;
    /// degenerate inputs are screened out before fitting.
    pub fn fit(values: &[f64], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let sample_size = values.len().min(MAX_SAMPLES);
        let depth_limit = (sample_size as f64).log2().ceil() as usize;

        let trees = (0..TREE_COUNT)
            .map(|_| {
                let sample: Vec<f64> = values
                    .choose_multiple(&mut rng, sample_size)
                    .copied()
                    .collect();
                grow(sample, 0, depth_limit, &mut rng)
            })
            .collect();

        Self {
            trees,
            expected_depth: average_path_length(sample_size),
        }
    }

    /// Anomaly score for one value, in `(0, 1)`.
    pub fn anomaly_score(&self, value: f64) -> f64 {
        let total: f64 = self
            .trees
            .iter()
            .map(|tree| path_length(tree, value, 0))
            .sum();
        let mean_path = total / self.trees.len() as f64;
        2_f64.powf(-mean_path / self.expected_depth)
    }
}

fn grow(sample: Vec<f64>, depth: usize, limit: usize, rng: &mut StdRng) -> Node {
    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if depth >= limit || sample.len() <= 1 || (max - min) <= f64::EPSILON {
        return Node::Leaf {
            size: sample.len(),
        };
    }

    let at = rng.gen_range(min..max);
    let (left, right): (Vec<f64>, Vec<f64>) = sample.into_iter().partition(|&x| x < at);
    Node::Split {
        at,
        left: Box::new(grow(left, depth + 1, limit, rng)),
        right: Box::new(grow(right, depth + 1, limit, rng)),
    }
}

fn path_length(node: &Node, value: f64, depth: usize) -> f64 {
    match node {
        Node::Leaf { size } => depth as f64 + average_path_length(*size),
        Node::Split { at, left, right } => {
            if value < *at {
                path_length(left, value, depth + 1)
            } else {
                path_length(right, value, depth + 1)
            }
        }
    }
}

/// `c(n)`: expected path length of an unsuccessful BST search, used both
/// to normalize scores and to credit unsplit leaves.
fn average_path_length(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let n = n as f64;
    2.0 * harmonic(n - 1.0) - 2.0 * (n - 1.0) / n
}

fn harmonic(x: f64) -> f64 {
    const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;
    x.ln() + EULER_MASCHERONI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlier_scores_highest() {
        let mut values: Vec<f64> = (0..50).map(|i| 10.0 + (i % 7) as f64 * 0.1).collect();
        values.push(500.0);

        let forest = IsolationForest::fit(&values, 42);
        let outlier_score = forest.anomaly_score(500.0);
        let inlier_score = forest.anomaly_score(10.3);

        assert!(
            outlier_score > inlier_score,
            "isolated value must score higher ({outlier_score} vs {inlier_score})"
        );
        assert!(outlier_score > 0.6, "clear outlier should score high");
    }

    #[test]
    fn test_same_seed_same_scores() {
        let values: Vec<f64> = (0..100).map(|i| (i as f64).sin() * 10.0).collect();

        let a = IsolationForest::fit(&values, 7);
        let b = IsolationForest::fit(&values, 7);
        for &v in &values {
            assert!(
                (a.anomaly_score(v) - b.anomaly_score(v)).abs() < f64::EPSILON,
                "same seed must reproduce scores"
            );
        }
    }

    #[test]
    fn test_average_path_length_edge_cases() {
        assert_eq!(average_path_length(0), 0.0);
        assert_eq!(average_path_length(1), 0.0);
        assert!(average_path_length(2) > 0.0);
        assert!(average_path_length(256) > average_path_length(16));
    }
}
