//! Convenience re-exports of the most commonly used types.
//!
//! # Examples
//!
//! ```
//! use arbol::prelude::*;
//!
//! let instances = vec![
//!     Instance::new(vec![0], false),
//!     Instance::new(vec![1], true),
//! ];
//! let mut model = DecisionTreeClassifier::new();
//! model.fit(&instances).unwrap();
//! assert_eq!(model.score(&instances).unwrap(), 1.0);
//! ```

pub use crate::boosting::AdaBoostClassifier;
pub use crate::dataset::{load_dataset, parse_dataset};
pub use crate::error::{ArbolError, Result};
pub use crate::instance::{init_weights, normalize_weights, AttrValue, Instance};
pub use crate::model_selection::{
    boosted_folds, cross_val_score, pruned_folds, tree_folds, Fold, FoldModel, Strategy,
};
pub use crate::traits::Classifier;
pub use crate::tree::{DecisionTreeClassifier, Leaf, Node, TreeNode};
