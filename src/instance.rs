//! Weighted, labeled data points over discrete attribute vectors.
//!
//! An [`Instance`] is one row of a dataset: an ordered list of discrete
//! attribute values, an optional boolean label, and a positive weight used
//! by boosting. Unlabeled instances are representable but rejected by every
//! operation that requires supervision.

use serde::{Deserialize, Serialize};

use crate::error::{ArbolError, Result};

/// Discrete attribute value. Datasets are expected to use small
/// non-negative integers.
pub type AttrValue = u32;

/// One labeled, weighted data point.
///
/// Attribute values are treated as immutable after construction; the weight
/// is mutated in place by boosting, which always operates on its own copy of
/// the training set.
///
/// # Examples
///
/// ```
/// use arbol::instance::Instance;
///
/// let inst = Instance::new(vec![1, 0, 2], true);
/// assert_eq!(inst.attrs.len(), 3);
/// assert_eq!(inst.label, Some(true));
/// assert_eq!(inst.weight, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Ordered discrete attribute values
    pub attrs: Vec<AttrValue>,
    /// Boolean class label, if known
    pub label: Option<bool>,
    /// Instance weight (default 1.0)
    pub weight: f64,
}

impl Instance {
    /// Creates a labeled instance with weight 1.0.
    #[must_use]
    pub fn new(attrs: Vec<AttrValue>, label: bool) -> Self {
        Self {
            attrs,
            label: Some(label),
            weight: 1.0,
        }
    }

    /// Creates an unlabeled instance with weight 1.0.
    ///
    /// Unlabeled instances can be classified but not used for training,
    /// pruning, or evaluation.
    #[must_use]
    pub fn unlabeled(attrs: Vec<AttrValue>) -> Self {
        Self {
            attrs,
            label: None,
            weight: 1.0,
        }
    }

    /// Sets the instance weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Returns the label, or [`ArbolError::MissingLabel`] if the instance
    /// is unlabeled.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance has no label.
    pub fn known_label(&self) -> Result<bool> {
        self.label.ok_or(ArbolError::MissingLabel)
    }
}

/// Normalizes the weights of all instances so they sum to 1.0, in place.
///
/// A slice whose weights sum to zero (including the empty slice) is left
/// unchanged.
///
/// # Examples
///
/// ```
/// use arbol::instance::{normalize_weights, Instance};
///
/// let mut instances = vec![
///     Instance::new(vec![], true).with_weight(0.1),
///     Instance::new(vec![], false).with_weight(0.3),
/// ];
/// normalize_weights(&mut instances);
/// assert!((instances[0].weight - 0.25).abs() < 1e-12);
/// assert!((instances[1].weight - 0.75).abs() < 1e-12);
/// ```
pub fn normalize_weights(instances: &mut [Instance]) {
    let total: f64 = instances.iter().map(|inst| inst.weight).sum();
    if total <= 0.0 {
        return;
    }
    for inst in instances {
        inst.weight /= total;
    }
}

/// Sets every instance's weight to 1/N, in place.
///
/// # Examples
///
/// ```
/// use arbol::instance::{init_weights, Instance};
///
/// let mut instances = vec![
///     Instance::new(vec![], true).with_weight(0.5),
///     Instance::new(vec![], true).with_weight(0.25),
/// ];
/// init_weights(&mut instances);
/// assert_eq!(instances[0].weight, 0.5);
/// assert_eq!(instances[1].weight, 0.5);
/// ```
pub fn init_weights(instances: &mut [Instance]) {
    for inst in instances.iter_mut() {
        inst.weight = 1.0;
    }
    normalize_weights(instances);
}

/// Checks that every instance carries a label.
pub(crate) fn check_labeled(instances: &[Instance]) -> Result<()> {
    for inst in instances {
        inst.known_label()?;
    }
    Ok(())
}

/// Validates a training set: non-empty, fully labeled, uniform attribute
/// arity. Returns the shared attribute count.
pub(crate) fn check_training_set(instances: &[Instance]) -> Result<usize> {
    let first = instances.first().ok_or(ArbolError::EmptyTrainingSet)?;
    let expected = first.attrs.len();
    for inst in instances {
        inst.known_label()?;
        if inst.attrs.len() != expected {
            return Err(ArbolError::RaggedInstances {
                expected,
                actual: inst.attrs.len(),
            });
        }
    }
    Ok(expected)
}
