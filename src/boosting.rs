//! AdaBoost over depth-limited decision trees.
//!
//! Each boosting round fits a weak tree (a stump by default) to the
//! current instance weights, scores it, and reweights the instances so
//! the next round concentrates on the misclassified ones. The fitted
//! ensemble predicts by a weighted vote of its trees.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::instance::{check_training_set, init_weights, normalize_weights, Instance};
use crate::metrics;
use crate::tree::{DecisionTreeClassifier, TreeNode};
use crate::traits::Classifier;

/// Default number of boosting rounds.
pub const DEFAULT_MAX_ROUNDS: usize = 50;

/// AdaBoost ensemble of depth-limited decision trees.
///
/// # Examples
///
/// ```
/// use arbol::boosting::AdaBoostClassifier;
/// use arbol::instance::Instance;
///
/// // Majority vote of three bits: no single stump gets it right,
/// // but three boosted stumps recover it exactly.
/// let instances: Vec<Instance> = (0u32..8)
///     .map(|bits| {
///         let attrs = vec![bits & 1, (bits >> 1) & 1, (bits >> 2) & 1];
///         let label = attrs.iter().sum::<u32>() >= 2;
///         Instance::new(attrs, label)
///     })
///     .collect();
///
/// let mut model = AdaBoostClassifier::new().with_max_rounds(3);
/// model.fit(&instances).unwrap();
/// assert!(model.score(&instances).unwrap() > 0.99);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaBoostClassifier {
    max_rounds: usize,
    max_depth: usize,
    /// Fitted (weight, tree) pairs, in round order
    estimators: Vec<(f64, TreeNode)>,
}

impl AdaBoostClassifier {
    /// Creates an unfitted ensemble with 50 rounds of depth-1 stumps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            max_depth: 1,
            estimators: Vec::new(),
        }
    }

    /// Sets the maximum number of boosting rounds.
    ///
    /// At least one round always runs, even with `max_rounds` of zero.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Sets the depth limit for each weak tree (default 1, a stump).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The fitted (weight, tree) pairs, in round order.
    #[must_use]
    pub fn estimators(&self) -> &[(f64, TreeNode)] {
        &self.estimators
    }

    /// Fits the ensemble to labeled training instances.
    ///
    /// Training weights are managed internally; the caller's instance
    /// weights are left untouched. A round whose weak tree classifies
    /// everything correctly ends training with that tree as the sole
    /// estimator at weight 1.0. A round with weighted error at or above
    /// 0.5 is discarded and ends training with the rounds fitted so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the training set is empty, ragged, or
    /// contains unlabeled instances.
    pub fn fit(&mut self, instances: &[Instance]) -> Result<()> {
        check_training_set(instances)?;
        self.estimators.clear();

        let mut working: Vec<Instance> = instances.to_vec();
        init_weights(&mut working);

        let mut rounds = 0;
        loop {
            let (tree, alpha, error) = self.boost_round(&mut working)?;
            if error <= 0.0 {
                // A perfect weak tree makes the rest of the ensemble moot.
                self.estimators = vec![(1.0, tree)];
                return Ok(());
            }
            if error >= 0.5 {
                break;
            }
            self.estimators.push((alpha, tree));
            rounds += 1;
            if rounds >= self.max_rounds {
                break;
            }
        }
        Ok(())
    }

    /// Fits one weak tree to the current weights and reweights the
    /// instances for the next round. Returns the tree, its vote weight,
    /// and its weighted error.
    fn boost_round(&self, working: &mut [Instance]) -> Result<(TreeNode, f64, f64)> {
        let mut weak = DecisionTreeClassifier::new().with_max_depth(self.max_depth);
        weak.fit(working)?;
        let tree = weak
            .into_tree()
            .ok_or(crate::error::ArbolError::NotFitted)?;

        let result = metrics::evaluate(|inst| tree.classify(inst), working)?;
        let error = result.error(working);
        if error <= 0.0 || error >= 1.0 {
            return Ok((tree, 0.0, error));
        }

        let alpha = 0.5 * ((1.0 - error) / error).ln();
        for &idx in &result.correct {
            working[idx].weight *= (-alpha).exp();
        }
        for &idx in &result.incorrect {
            working[idx].weight *= alpha.exp();
        }
        normalize_weights(working);
        Ok((tree, alpha, error))
    }

    /// Predicts by weighted vote over the fitted trees.
    ///
    /// An empty ensemble votes `false`.
    #[must_use]
    pub fn predict(&self, instance: &Instance) -> bool {
        let mut score = 0.0;
        for (alpha, tree) in &self.estimators {
            if tree.classify(instance) {
                score += alpha;
            } else {
                score -= alpha;
            }
        }
        score > 0.0
    }

    /// Weighted accuracy over a slice of labeled instances.
    ///
    /// # Errors
    ///
    /// Returns an error if any instance lacks a label.
    pub fn score(&self, instances: &[Instance]) -> Result<f64> {
        metrics::weighted_accuracy(|inst| self.predict(inst), instances)
    }
}

impl Default for AdaBoostClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for AdaBoostClassifier {
    fn predict(&self, instance: &Instance) -> bool {
        AdaBoostClassifier::predict(self, instance)
    }
}
