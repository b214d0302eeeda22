//! Arbol: Decision trees and boosting over discrete attribute vectors.
//!
//! Arbol implements binary classification on instances with discrete
//! integer attributes: ID3-style decision tree induction, reduced-error
//! pruning on a validation set, AdaBoost over depth-limited trees, and
//! positional k-fold cross-validation tying them together.
//!
//! # Quick Start
//!
//! ```
//! use arbol::prelude::*;
//!
//! // Label equals the first attribute.
//! let instances = vec![
//!     Instance::new(vec![0, 1], false),
//!     Instance::new(vec![1, 0], true),
//!     Instance::new(vec![0, 0], false),
//!     Instance::new(vec![1, 1], true),
//! ];
//!
//! let mut model = DecisionTreeClassifier::new();
//! model.fit(&instances).unwrap();
//! assert_eq!(model.score(&instances).unwrap(), 1.0);
//! ```
//!
//! # Modules
//!
//! - [`instance`]: Labeled, weighted attribute vectors
//! - [`tree`]: ID3 decision trees and reduced-error pruning
//! - [`boosting`]: AdaBoost over depth-limited trees
//! - [`model_selection`]: Positional k-fold cross-validation
//! - [`split`]: Entropy and split selection
//! - [`metrics`]: Weighted evaluation metrics
//! - [`dataset`]: Whitespace-delimited dataset loading
//! - [`synthetic`]: Seeded synthetic datasets

pub mod boosting;
pub mod dataset;
pub mod error;
pub mod instance;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod split;
pub mod synthetic;
pub mod traits;
pub mod tree;

pub use boosting::AdaBoostClassifier;
pub use error::{ArbolError, Result};
pub use instance::{AttrValue, Instance};
pub use traits::Classifier;
pub use tree::{DecisionTreeClassifier, TreeNode};
