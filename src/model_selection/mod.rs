//! Positional k-fold cross-validation.
//!
//! Folds are carved from the instance slice in order, without
//! shuffling: callers who want randomized folds shuffle beforehand.
//! Plain folds hold a train and a test partition; pruned-tree folds
//! additionally carve a validation partition adjacent to the test one.

use crate::boosting::AdaBoostClassifier;
use crate::error::{ArbolError, Result};
use crate::instance::{check_labeled, Instance};
use crate::tree::DecisionTreeClassifier;
use crate::traits::Classifier;

/// One cross-validation fold.
#[derive(Debug, Clone)]
pub struct Fold {
    /// Training partition
    pub train: Vec<Instance>,
    /// Held-out test partition
    pub test: Vec<Instance>,
    /// Pruning validation partition, when the strategy needs one
    pub validation: Option<Vec<Instance>>,
}

impl Fold {
    /// Builds a train/test fold.
    ///
    /// # Errors
    ///
    /// Returns an error if any instance lacks a label.
    pub fn new(train: Vec<Instance>, test: Vec<Instance>) -> Result<Self> {
        check_labeled(&train)?;
        check_labeled(&test)?;
        Ok(Self {
            train,
            test,
            validation: None,
        })
    }

    /// Builds a train/test/validation fold.
    ///
    /// # Errors
    ///
    /// Returns an error if any instance lacks a label.
    pub fn with_validation(
        train: Vec<Instance>,
        test: Vec<Instance>,
        validation: Vec<Instance>,
    ) -> Result<Self> {
        check_labeled(&validation)?;
        let mut fold = Self::new(train, test)?;
        fold.validation = Some(validation);
        Ok(fold)
    }
}

/// What to fit on each fold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Unpruned decision tree
    Tree,
    /// Decision tree with reduced-error pruning on the validation set
    Pruned,
    /// AdaBoost ensemble of depth-limited trees
    Boosted {
        /// Maximum boosting rounds
        max_rounds: usize,
        /// Depth limit per weak tree
        max_depth: usize,
    },
}

impl Strategy {
    /// Boosting with the default 50 rounds of stumps.
    #[must_use]
    pub fn boosted() -> Self {
        Strategy::Boosted {
            max_rounds: crate::boosting::DEFAULT_MAX_ROUNDS,
            max_depth: 1,
        }
    }
}

/// A model fitted on one fold.
#[derive(Debug, Clone)]
pub enum FoldModel {
    /// Fitted (possibly pruned) decision tree
    Tree(DecisionTreeClassifier),
    /// Fitted boosted ensemble
    Boosted(AdaBoostClassifier),
}

impl FoldModel {
    /// Predicts the label for a single instance.
    #[must_use]
    pub fn predict(&self, instance: &Instance) -> bool {
        match self {
            FoldModel::Tree(model) => model.predict(instance),
            FoldModel::Boosted(model) => model.predict(instance),
        }
    }
}

impl Classifier for FoldModel {
    fn predict(&self, instance: &Instance) -> bool {
        FoldModel::predict(self, instance)
    }
}

/// Validates a fold count against the instance count.
///
/// # Errors
///
/// Returns an error if there are fewer instances than folds, or fewer
/// instances than the strategy's minimum fold count.
pub fn check_folds(n_instances: usize, n_folds: usize, min_folds: usize) -> Result<()> {
    if n_instances < n_folds {
        return Err(ArbolError::TooManyFolds {
            folds: n_folds,
            instances: n_instances,
        });
    }
    if n_instances < min_folds {
        return Err(ArbolError::TooFewFolds { min_folds });
    }
    Ok(())
}

/// Carves `n_folds` train/test folds from the instances in order.
///
/// Fold size is `len / n_folds`; any remainder stays in every training
/// partition and is never tested.
///
/// # Errors
///
/// Returns an error if there are fewer instances than folds, or fewer
/// than two instances.
pub fn tree_folds(instances: &[Instance], n_folds: usize) -> Result<Vec<Fold>> {
    check_folds(instances.len(), n_folds, 2)?;
    let fold_size = instances.len() / n_folds;
    let mut folds = Vec::with_capacity(n_folds);
    for i in 0..n_folds {
        let start = i * fold_size;
        let end = start + fold_size;
        let test = instances[start..end].to_vec();
        let mut train = instances[..start].to_vec();
        train.extend_from_slice(&instances[end..]);
        folds.push(Fold::new(train, test)?);
    }
    Ok(folds)
}

/// Carves `n_folds` train/test/validation folds from the instances in
/// order.
///
/// Each fold's validation partition is the fold-sized block after its
/// test partition; the final fold wraps around, validating on the first
/// block and testing on the last.
///
/// # Errors
///
/// Returns an error if there are fewer instances than folds, or fewer
/// than three instances.
pub fn pruned_folds(instances: &[Instance], n_folds: usize) -> Result<Vec<Fold>> {
    check_folds(instances.len(), n_folds, 3)?;
    let len = instances.len();
    let fold_size = len / n_folds;
    let mut folds = Vec::with_capacity(n_folds);
    for i in 0..n_folds.saturating_sub(1) {
        let start = i * fold_size;
        let test = instances[start..start + fold_size].to_vec();
        let validation = instances[start + fold_size..start + 2 * fold_size].to_vec();
        let mut train = instances[..start].to_vec();
        train.extend_from_slice(&instances[start + 2 * fold_size..]);
        folds.push(Fold::with_validation(train, test, validation)?);
    }
    // Final fold wraps: test on the tail block, validate on the head.
    let train = if 2 * fold_size <= len {
        instances[fold_size..len - fold_size].to_vec()
    } else {
        Vec::new()
    };
    let test = instances[len - fold_size..].to_vec();
    let validation = instances[..fold_size].to_vec();
    folds.push(Fold::with_validation(train, test, validation)?);
    Ok(folds)
}

/// Carves train/test folds for boosting. Identical to [`tree_folds`].
///
/// # Errors
///
/// Returns an error if there are fewer instances than folds, or fewer
/// than two instances.
pub fn boosted_folds(instances: &[Instance], n_folds: usize) -> Result<Vec<Fold>> {
    tree_folds(instances, n_folds)
}

/// Fits the strategy's model on one fold's training partition.
///
/// # Errors
///
/// Returns an error if fitting fails, or if the strategy is
/// [`Strategy::Pruned`] and the fold carries no validation partition.
pub fn train_fold(fold: &Fold, strategy: Strategy) -> Result<FoldModel> {
    match strategy {
        Strategy::Tree => {
            let mut model = DecisionTreeClassifier::new();
            model.fit(&fold.train)?;
            Ok(FoldModel::Tree(model))
        }
        Strategy::Pruned => {
            let validation = fold
                .validation
                .as_ref()
                .ok_or(ArbolError::MissingValidation)?;
            let mut model = DecisionTreeClassifier::new();
            model.fit(&fold.train)?;
            model.prune(validation)?;
            Ok(FoldModel::Tree(model))
        }
        Strategy::Boosted {
            max_rounds,
            max_depth,
        } => {
            let mut model = AdaBoostClassifier::new()
                .with_max_rounds(max_rounds)
                .with_max_depth(max_depth);
            model.fit(&fold.train)?;
            Ok(FoldModel::Boosted(model))
        }
    }
}

/// Trains the strategy on every fold and returns the weighted accuracy
/// over all test partitions, pooled by weight rather than averaged per
/// fold.
///
/// # Errors
///
/// Returns an error if the fold list is empty or any fold fails to
/// train or score.
pub fn cross_val_score(folds: &[Fold], strategy: Strategy) -> Result<f64> {
    if folds.is_empty() {
        return Err(ArbolError::empty_input("folds"));
    }
    let mut correct = 0.0;
    let mut total = 0.0;
    for fold in folds {
        let model = train_fold(fold, strategy)?;
        let result = crate::metrics::evaluate(|inst| model.predict(inst), &fold.test)?;
        let (fold_correct, fold_incorrect) = result.weight_correct_incorrect(&fold.test);
        correct += fold_correct;
        total += fold_correct + fold_incorrect;
    }
    Ok(correct / total)
}
