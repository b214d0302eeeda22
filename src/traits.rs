//! Core traits shared across the crate.

use crate::error::Result;
use crate::instance::Instance;

/// Common interface for fitted binary classifiers.
///
/// `predict` maps a single instance to a boolean label; `score` reports
/// weighted accuracy over a labeled slice.
pub trait Classifier {
    /// Predicts the label for a single instance.
    fn predict(&self, instance: &Instance) -> bool;

    /// Weighted accuracy over a slice of labeled instances.
    ///
    /// # Errors
    ///
    /// Returns an error if any instance lacks a label.
    fn score(&self, instances: &[Instance]) -> Result<f64> {
        crate::metrics::weighted_accuracy(|inst| self.predict(inst), instances)
    }
}
