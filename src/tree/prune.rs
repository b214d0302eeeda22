//! Reduced-error pruning against a held-out validation set.
//!
//! Pruning walks the tree bottom-up and collapses an internal node into a
//! leaf whenever labeling every validation instance at that node with the
//! node's default label would outscore the subtree. The tree is modified
//! in place; node count never grows.

use crate::error::Result;
use crate::instance::{check_labeled, Instance};
use crate::split::partition_by_attribute;
use crate::tree::TreeNode;

/// Prunes a tree in place using labeled validation instances.
///
/// Validation instances are routed down the tree: each child is pruned
/// with the instances whose attribute value reaches it, and instances
/// whose value matches no child are dropped from the descent. After the
/// children are pruned, the node itself is collapsed when the default
/// label's weight fraction strictly exceeds the subtree's weighted
/// correct count over all instances at the node.
///
/// # Errors
///
/// Returns an error if any validation instance lacks a label.
///
/// # Examples
///
/// ```
/// use arbol::instance::Instance;
/// use arbol::tree::{prune_tree, DecisionTreeClassifier};
///
/// let train = vec![
///     Instance::new(vec![0], false),
///     Instance::new(vec![1], true),
/// ];
/// let mut model = DecisionTreeClassifier::new();
/// model.fit(&train).unwrap();
///
/// let mut tree = model.into_tree().unwrap();
/// let validation = vec![Instance::new(vec![0], false)];
/// prune_tree(&mut tree, &validation).unwrap();
/// ```
pub fn prune_tree(tree: &mut TreeNode, validation: &[Instance]) -> Result<()> {
    check_labeled(validation)?;
    let refs: Vec<&Instance> = validation.iter().collect();
    prune_node(tree, &refs);
    Ok(())
}

fn prune_node(tree: &mut TreeNode, validation: &[&Instance]) {
    let default_label = match tree {
        TreeNode::Leaf(_) => return,
        TreeNode::Node(node) => {
            let partition = partition_by_attribute(validation, node.attr_idx);
            for (value, child) in node.children.iter_mut() {
                if let Some(group) = partition.get(value) {
                    prune_node(child, group);
                }
            }
            node.default_label
        }
    };

    // Weighted correct count of the (possibly already pruned) subtree vs
    // the default label's weight fraction, both over every validation
    // instance reaching this node. The strict comparison of a raw count
    // against a fraction is deliberate and matches the reference scoring.
    let mut base_score = 0.0;
    let mut default_weight = 0.0;
    let mut total_weight = 0.0;
    for inst in validation {
        let label = inst.label.expect("validation labels checked at entry");
        if tree.classify(inst) == label {
            base_score += inst.weight;
        }
        if label == default_label {
            default_weight += inst.weight;
        }
        total_weight += inst.weight;
    }
    if total_weight <= 0.0 {
        return;
    }
    if default_weight / total_weight > base_score {
        tree.convert_to_leaf();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use crate::tree::{DecisionTreeClassifier, Node, TreeNode};
    use std::collections::HashMap;

    fn two_way_split(default_label: bool) -> TreeNode {
        let mut node = Node {
            attr_idx: 0,
            default_label,
            children: HashMap::new(),
        };
        node.add_child(0, TreeNode::leaf(false)).unwrap();
        node.add_child(1, TreeNode::leaf(true)).unwrap();
        TreeNode::Node(node)
    }

    #[test]
    fn test_leaf_left_untouched() {
        let mut tree = TreeNode::leaf(true);
        let validation = vec![Instance::new(vec![0], false)];
        prune_tree(&mut tree, &validation).unwrap();
        assert_eq!(tree, TreeNode::leaf(true));
    }

    #[test]
    fn test_misclassifying_subtree_collapses() {
        // The single validation instance is sent to the `false` leaf but
        // is labeled true; the node's default label matches it, so the
        // fraction 1.0 beats the count 0.0.
        let mut tree = two_way_split(true);
        let validation = vec![Instance::new(vec![0], true)];
        prune_tree(&mut tree, &validation).unwrap();
        assert_eq!(tree, TreeNode::leaf(true));
    }

    #[test]
    fn test_accurate_subtree_is_kept() {
        let mut tree = two_way_split(false);
        let validation = vec![
            Instance::new(vec![0], false),
            Instance::new(vec![1], true),
        ];
        prune_tree(&mut tree, &validation).unwrap();
        assert!(!tree.is_leaf());
    }

    #[test]
    fn test_node_count_never_grows() {
        let train = vec![
            Instance::new(vec![0, 0], false),
            Instance::new(vec![0, 1], true),
            Instance::new(vec![1, 0], true),
            Instance::new(vec![1, 1], true),
        ];
        let mut model = DecisionTreeClassifier::new();
        model.fit(&train).unwrap();
        let mut tree = model.into_tree().unwrap();
        let before = tree.n_nodes();

        let validation = vec![
            Instance::new(vec![0, 0], true),
            Instance::new(vec![1, 1], true),
        ];
        prune_tree(&mut tree, &validation).unwrap();
        assert!(tree.n_nodes() <= before);
    }

    #[test]
    fn test_unmatched_values_are_dropped_from_descent() {
        // Value 7 has no child; the instance still participates in this
        // node's scores but never reaches a child pruning pass.
        let mut tree = two_way_split(false);
        let validation = vec![
            Instance::new(vec![7], false),
            Instance::new(vec![1], true),
        ];
        prune_tree(&mut tree, &validation).unwrap();
        // Fallback answers false for value 7, the leaf answers true for
        // value 1: base score 2.0 beats the 0.5 default fraction.
        assert!(!tree.is_leaf());
    }

    #[test]
    fn test_zero_weight_validation_keeps_tree() {
        let mut tree = two_way_split(true);
        let validation = vec![Instance::new(vec![0], true).with_weight(0.0)];
        prune_tree(&mut tree, &validation).unwrap();
        assert!(!tree.is_leaf());
    }

    #[test]
    fn test_unlabeled_validation_rejected() {
        let mut tree = two_way_split(true);
        let validation = vec![Instance::unlabeled(vec![0])];
        assert!(prune_tree(&mut tree, &validation).is_err());
    }

    #[test]
    fn test_prune_recurses_into_children() {
        // Inner node under value 0 misclassifies all of its validation
        // slice; it collapses to its default label even though the root
        // survives.
        let mut inner = Node {
            attr_idx: 1,
            default_label: true,
            children: HashMap::new(),
        };
        inner.add_child(0, TreeNode::leaf(false)).unwrap();
        inner.add_child(1, TreeNode::leaf(false)).unwrap();

        let mut root = Node {
            attr_idx: 0,
            default_label: true,
            children: HashMap::new(),
        };
        root.add_child(0, TreeNode::Node(inner)).unwrap();
        root.add_child(1, TreeNode::leaf(true)).unwrap();
        let mut tree = TreeNode::Node(root);

        let validation = vec![
            Instance::new(vec![0, 0], true),
            Instance::new(vec![0, 1], true),
            Instance::new(vec![1, 5], true),
        ];
        prune_tree(&mut tree, &validation).unwrap();

        let TreeNode::Node(root) = &tree else {
            panic!("root should survive");
        };
        assert_eq!(root.children[&0], TreeNode::leaf(true));
    }
}
