//! Weighted evaluation metrics for binary classifiers.
//!
//! Evaluation partitions a labeled instance slice into correctly and
//! incorrectly classified index lists, so callers (boosting in
//! particular) can reweight the underlying instances afterwards without
//! holding references into the slice.

use crate::error::Result;
use crate::instance::Instance;

/// Outcome of evaluating a classifier over a slice of labeled instances.
///
/// Holds indices into the evaluated slice, partitioned by whether the
/// prediction matched the label.
#[derive(Debug, Clone, Default)]
pub struct EvaluationResult {
    /// Indices of correctly classified instances
    pub correct: Vec<usize>,
    /// Indices of misclassified instances
    pub incorrect: Vec<usize>,
}

impl EvaluationResult {
    /// Sums the weights of (correct, incorrect) instances.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbol::instance::Instance;
    /// use arbol::metrics::evaluate;
    ///
    /// let instances = vec![
    ///     Instance::new(vec![], true).with_weight(0.25),
    ///     Instance::new(vec![], false).with_weight(0.50),
    /// ];
    /// let result = evaluate(|_| true, &instances).unwrap();
    /// assert_eq!(result.weight_correct_incorrect(&instances), (0.25, 0.5));
    /// ```
    #[must_use]
    pub fn weight_correct_incorrect(&self, instances: &[Instance]) -> (f64, f64) {
        let sum = |indices: &[usize]| indices.iter().map(|&idx| instances[idx].weight).sum();
        (sum(&self.correct), sum(&self.incorrect))
    }

    /// Weighted fraction misclassified.
    ///
    /// Returns NaN when the total weight is zero.
    #[must_use]
    pub fn error(&self, instances: &[Instance]) -> f64 {
        let (correct, incorrect) = self.weight_correct_incorrect(instances);
        incorrect / (correct + incorrect)
    }

    /// Weighted fraction correctly classified.
    ///
    /// Returns NaN when the total weight is zero.
    #[must_use]
    pub fn accuracy(&self, instances: &[Instance]) -> f64 {
        let (correct, incorrect) = self.weight_correct_incorrect(instances);
        correct / (correct + incorrect)
    }
}

/// Runs a prediction function over labeled instances and partitions them
/// into correct/incorrect index lists.
///
/// # Errors
///
/// Returns an error if any instance lacks a label.
pub fn evaluate<F>(predict: F, instances: &[Instance]) -> Result<EvaluationResult>
where
    F: Fn(&Instance) -> bool,
{
    let mut result = EvaluationResult::default();
    for (idx, inst) in instances.iter().enumerate() {
        let label = inst.known_label()?;
        if predict(inst) == label {
            result.correct.push(idx);
        } else {
            result.incorrect.push(idx);
        }
    }
    Ok(result)
}

/// Weighted accuracy of a prediction function over labeled instances.
///
/// Returns NaN for an empty or zero-weight slice.
///
/// # Errors
///
/// Returns an error if any instance lacks a label.
pub fn weighted_accuracy<F>(predict: F, instances: &[Instance]) -> Result<f64>
where
    F: Fn(&Instance) -> bool,
{
    Ok(evaluate(predict, instances)?.accuracy(instances))
}
