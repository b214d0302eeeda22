//! Binary-label decision trees over discrete attributes.
//!
//! This module implements:
//! - The recursive [`TreeNode`] structure (internal nodes and leaves)
//! - Greedy ID3 induction driven by information gain
//! - Traversal-based classification with a default-label fallback
//! - Reduced-error pruning against a validation set (see [`prune`])
//!
//! # Example
//!
//! ```
//! use arbol::instance::Instance;
//! use arbol::tree::DecisionTreeClassifier;
//!
//! // Training data: the second attribute determines the label.
//! let instances = vec![
//!     Instance::new(vec![0, 0], false),
//!     Instance::new(vec![1, 0], false),
//!     Instance::new(vec![0, 1], true),
//!     Instance::new(vec![1, 1], true),
//! ];
//!
//! let mut tree = DecisionTreeClassifier::new();
//! tree.fit(&instances).unwrap();
//! assert!(tree.predict(&Instance::unlabeled(vec![9, 1])));
//! assert!(!tree.predict(&Instance::unlabeled(vec![9, 0])));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ArbolError, Result};
use crate::instance::{check_training_set, AttrValue, Instance};
use crate::split::{choose_split, common_label, majority_label};

pub mod prune;

pub use prune::prune_tree;

/// Leaf node carrying a definitive boolean label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    /// Predicted label for every instance reaching this leaf
    pub label: bool,
}

/// Internal node splitting on one attribute.
///
/// Children are keyed by the attribute values observed during training;
/// values unseen at training time fall back to `default_label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Index of the attribute to split on
    pub attr_idx: usize,
    /// Majority label of the training instances that reached this node
    pub default_label: bool,
    /// Subtree per observed attribute value
    pub children: HashMap<AttrValue, TreeNode>,
}

impl Node {
    /// Adds a child subtree under an attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`ArbolError::DuplicateChild`] if the value already has a
    /// child.
    pub fn add_child(&mut self, value: AttrValue, child: TreeNode) -> Result<()> {
        if self.children.contains_key(&value) {
            return Err(ArbolError::DuplicateChild { value });
        }
        self.children.insert(value, child);
        Ok(())
    }
}

/// A node in a decision tree (either internal node or leaf).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Leaf node with a definitive label
    Leaf(Leaf),
    /// Internal decision node with per-value children
    Node(Node),
}

impl TreeNode {
    /// Creates a leaf with the given label.
    #[must_use]
    pub fn leaf(label: bool) -> Self {
        TreeNode::Leaf(Leaf { label })
    }

    /// Returns true if this node is a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    /// Returns the depth of the tree rooted at this node.
    ///
    /// Leaf nodes have depth 0, internal nodes have depth 1 + the deepest
    /// child.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 0,
            TreeNode::Node(node) => {
                1 + node
                    .children
                    .values()
                    .map(TreeNode::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Returns the total number of nodes in this subtree.
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Node(node) => 1 + node.children.values().map(TreeNode::n_nodes).sum::<usize>(),
        }
    }

    /// Classifies an instance by walking from this node to a leaf.
    ///
    /// At an internal node, an attribute value with no matching child
    /// returns the node's default label.
    ///
    /// # Panics
    ///
    /// Panics if the instance has fewer attributes than a node's split
    /// index requires.
    #[must_use]
    pub fn classify(&self, instance: &Instance) -> bool {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf(leaf) => return leaf.label,
                TreeNode::Node(internal) => {
                    let value = instance.attrs[internal.attr_idx];
                    match internal.children.get(&value) {
                        Some(child) => node = child,
                        None => return internal.default_label,
                    }
                }
            }
        }
    }

    /// Collapses an internal node into a leaf carrying its default label,
    /// in place. Leaves are left untouched.
    pub fn convert_to_leaf(&mut self) {
        if let TreeNode::Node(node) = self {
            *self = TreeNode::leaf(node.default_label);
        }
    }
}

/// Recursive ID3 induction over a set of candidate attribute indices.
///
/// The candidate list is copied (minus the chosen attribute) for each level
/// of recursion, so sibling subtrees never observe each other's state.
fn build_node(
    candidates: &[usize],
    instances: &[&Instance],
    min_gain: f64,
    remaining_depth: Option<usize>,
) -> TreeNode {
    debug_assert!(!instances.is_empty());

    if let Some(label) = common_label(instances) {
        return TreeNode::leaf(label);
    }
    let majority = majority_label(instances);
    if candidates.is_empty() || remaining_depth == Some(0) {
        return TreeNode::leaf(majority);
    }
    let Some((attr_idx, partition)) = choose_split(candidates, instances, min_gain) else {
        return TreeNode::leaf(majority);
    };

    let child_candidates: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&idx| idx != attr_idx)
        .collect();
    let next_depth = remaining_depth.map(|depth| depth - 1);
    let mut children = HashMap::with_capacity(partition.len());
    for (value, group) in partition {
        children.insert(
            value,
            build_node(&child_candidates, &group, min_gain, next_depth),
        );
    }
    TreeNode::Node(Node {
        attr_idx,
        default_label: majority,
        children,
    })
}

/// Decision tree classifier using the ID3 algorithm.
///
/// Splits greedily on the attribute with the highest information gain and
/// stops on pure nodes, exhausted attributes, the depth limit, or when no
/// split's gain strictly exceeds `min_gain`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    tree: Option<TreeNode>,
    min_gain: f64,
    max_depth: Option<usize>,
}

impl DecisionTreeClassifier {
    /// Creates a new classifier with no depth limit and a minimum gain
    /// of 0.0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: None,
            min_gain: 0.0,
            max_depth: None,
        }
    }

    /// Sets the minimum information gain a split must strictly exceed.
    ///
    /// A negative floor admits zero-gain splits, which matters for targets
    /// like XOR where no single attribute has positive gain on its own.
    #[must_use]
    pub fn with_min_gain(mut self, min_gain: f64) -> Self {
        self.min_gain = min_gain;
        self
    }

    /// Sets the maximum tree depth. Depth 1 yields decision stumps.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Fits the tree to training instances.
    ///
    /// # Errors
    ///
    /// Returns an error if the training set is empty, contains an unlabeled
    /// instance, or mixes attribute-vector lengths.
    pub fn fit(&mut self, instances: &[Instance]) -> Result<()> {
        let n_attrs = check_training_set(instances)?;
        let candidates: Vec<usize> = (0..n_attrs).collect();
        let refs: Vec<&Instance> = instances.iter().collect();
        self.tree = Some(build_node(&candidates, &refs, self.min_gain, self.max_depth));
        Ok(())
    }

    /// Predicts the label for a single instance.
    ///
    /// # Panics
    ///
    /// Panics if called before `fit()`.
    #[must_use]
    pub fn predict(&self, instance: &Instance) -> bool {
        self.tree
            .as_ref()
            .expect("Model not fitted")
            .classify(instance)
    }

    /// Computes the weighted accuracy on labeled instances.
    ///
    /// # Errors
    ///
    /// Returns an error if any instance lacks a label.
    pub fn score(&self, instances: &[Instance]) -> Result<f64> {
        crate::metrics::weighted_accuracy(|inst| self.predict(inst), instances)
    }

    /// Prunes the fitted tree in place using a validation set.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or the validation set
    /// contains an unlabeled instance.
    pub fn prune(&mut self, validation: &[Instance]) -> Result<()> {
        let tree = self.tree.as_mut().ok_or(ArbolError::NotFitted)?;
        prune::prune_tree(tree, validation)
    }

    /// Returns the fitted tree, if any.
    #[must_use]
    pub fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    /// Consumes the classifier and returns the fitted tree, if any.
    #[must_use]
    pub fn into_tree(self) -> Option<TreeNode> {
        self.tree
    }
}

impl Default for DecisionTreeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::traits::Classifier for DecisionTreeClassifier {
    fn predict(&self, instance: &Instance) -> bool {
        DecisionTreeClassifier::predict(self, instance)
    }
}

impl crate::traits::Classifier for TreeNode {
    fn predict(&self, instance: &Instance) -> bool {
        self.classify(instance)
    }
}
