//! Entropy and information-gain computation for attribute splits.
//!
//! The tree builder asks this module two questions: how impure is a set of
//! labeled instances, and which attribute reduces that impurity the most.
//! All weights are the instances' own; nothing here renormalizes.

use std::collections::HashMap;

use crate::instance::{AttrValue, Instance};

fn log2_or_zero(p: f64) -> f64 {
    if p > 0.0 {
        p.log2()
    } else {
        0.0
    }
}

/// Shannon entropy (in bits) of a two-class weighted population.
///
/// A class with zero weight contributes exactly zero. An empty population
/// (both weights zero) returns 0.0 so that weighted averages over
/// zero-weight groups stay finite.
///
/// # Examples
///
/// ```
/// use arbol::split::entropy;
///
/// assert_eq!(entropy(0.0, 1000.0), 0.0);
/// assert_eq!(entropy(0.0001, 0.0), 0.0);
/// assert_eq!(entropy(10.0, 10.0), 1.0);
/// ```
#[must_use]
pub fn entropy(weight_true: f64, weight_false: f64) -> f64 {
    let total = weight_true + weight_false;
    if total <= 0.0 {
        return 0.0;
    }
    let p_true = weight_true / total;
    let p_false = weight_false / total;
    -(p_true * log2_or_zero(p_true) + p_false * log2_or_zero(p_false))
}

/// Sums label weights of a group of instances.
///
/// # Panics
///
/// Panics if any instance lacks a label; supervised entry points validate
/// labels before reaching this computation.
fn label_weights(instances: &[&Instance]) -> (f64, f64) {
    let mut weight_true = 0.0;
    let mut weight_false = 0.0;
    for inst in instances {
        let label = inst
            .label
            .expect("entropy computation requires labeled instances");
        if label {
            weight_true += inst.weight;
        } else {
            weight_false += inst.weight;
        }
    }
    (weight_true, weight_false)
}

/// Groups instances by their value at the given attribute index.
///
/// # Panics
///
/// Panics if an instance has fewer than `attr_idx + 1` attributes.
///
/// # Examples
///
/// ```
/// use arbol::instance::Instance;
/// use arbol::split::partition_by_attribute;
///
/// let instances = vec![
///     Instance::new(vec![5, 0], true),
///     Instance::new(vec![9, 0], true),
/// ];
/// let refs: Vec<&Instance> = instances.iter().collect();
/// let partition = partition_by_attribute(&refs, 0);
/// assert_eq!(partition.len(), 2);
/// assert_eq!(partition[&5].len(), 1);
/// ```
#[must_use]
pub fn partition_by_attribute<'a>(
    instances: &[&'a Instance],
    attr_idx: usize,
) -> HashMap<AttrValue, Vec<&'a Instance>> {
    let mut partition: HashMap<AttrValue, Vec<&'a Instance>> = HashMap::new();
    for inst in instances {
        partition.entry(inst.attrs[attr_idx]).or_default().push(inst);
    }
    partition
}

/// Weight-weighted mean entropy across the groups of a partition.
///
/// Each group contributes its own entropy scaled by its total weight; a
/// one-label group contributes entropy 0 but still counts its weight in
/// the denominator.
///
/// # Panics
///
/// Panics if any instance lacks a label.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use arbol::instance::Instance;
/// use arbol::split::split_entropy;
///
/// let group0 = vec![
///     Instance::new(vec![], true).with_weight(0.5),
///     Instance::new(vec![], false).with_weight(0.5),
/// ];
/// let group1 = vec![
///     Instance::new(vec![], false).with_weight(3.0),
///     Instance::new(vec![], true).with_weight(0.0),
/// ];
/// let mut partition = HashMap::new();
/// partition.insert(0, group0.iter().collect());
/// partition.insert(1, group1.iter().collect());
/// assert_eq!(split_entropy(&partition), 0.25);
/// ```
#[must_use]
pub fn split_entropy(partition: &HashMap<AttrValue, Vec<&Instance>>) -> f64 {
    let mut weighted_entropy = 0.0;
    let mut total_weight = 0.0;
    for group in partition.values() {
        let (weight_true, weight_false) = label_weights(group);
        let group_weight = weight_true + weight_false;
        weighted_entropy += entropy(weight_true, weight_false) * group_weight;
        total_weight += group_weight;
    }
    weighted_entropy / total_weight
}

/// Entropy of an unsplit instance set.
///
/// # Panics
///
/// Panics if any instance lacks a label.
#[must_use]
pub fn set_entropy(instances: &[&Instance]) -> f64 {
    let (weight_true, weight_false) = label_weights(instances);
    entropy(weight_true, weight_false)
}

/// Picks the candidate attribute with the largest information gain.
///
/// Candidates are examined in the order given (the tree builder passes
/// ascending indices); an attribute replaces the incumbent only when its
/// gain is strictly greater, so equal-gain ties keep the lowest index.
/// Returns `None` when no candidate's gain strictly exceeds `min_gain`.
///
/// # Panics
///
/// Panics if any instance lacks a label or is shorter than a candidate
/// index requires.
///
/// # Examples
///
/// ```
/// use arbol::instance::Instance;
/// use arbol::split::choose_split;
///
/// let instances = vec![
///     Instance::new(vec![0, 0], false),
///     Instance::new(vec![0, 1], true),
/// ];
/// let refs: Vec<&Instance> = instances.iter().collect();
/// let (attr_idx, partition) = choose_split(&[0, 1], &refs, 0.0).unwrap();
/// assert_eq!(attr_idx, 1);
/// assert_eq!(partition.len(), 2);
/// ```
#[must_use]
pub fn choose_split<'a>(
    candidates: &[usize],
    instances: &[&'a Instance],
    min_gain: f64,
) -> Option<(usize, HashMap<AttrValue, Vec<&'a Instance>>)> {
    let parent_entropy = set_entropy(instances);
    let mut best_gain = min_gain;
    let mut best = None;
    for &attr_idx in candidates {
        let partition = partition_by_attribute(instances, attr_idx);
        let gain = parent_entropy - split_entropy(&partition);
        if gain > best_gain {
            best_gain = gain;
            best = Some((attr_idx, partition));
        }
    }
    best
}

/// Returns the label shared by every instance, or `None` if labels differ.
///
/// # Panics
///
/// Panics if any instance lacks a label.
#[must_use]
pub fn common_label(instances: &[&Instance]) -> Option<bool> {
    let mut shared = None;
    for inst in instances {
        let label = inst.label.expect("common_label requires labeled instances");
        match shared {
            None => shared = Some(label),
            Some(seen) if seen != label => return None,
            Some(_) => {}
        }
    }
    shared
}

/// Returns the label carrying the most weight.
///
/// An exact tie yields `false`: the comparison is strictly
/// `weight_true > weight_false`.
///
/// # Panics
///
/// Panics if any instance lacks a label.
///
/// # Examples
///
/// ```
/// use arbol::instance::Instance;
/// use arbol::split::majority_label;
///
/// let instances = vec![
///     Instance::new(vec![], true),
///     Instance::new(vec![], false).with_weight(0.75),
/// ];
/// let refs: Vec<&Instance> = instances.iter().collect();
/// assert!(majority_label(&refs));
/// ```
#[must_use]
pub fn majority_label(instances: &[&Instance]) -> bool {
    let (weight_true, weight_false) = label_weights(instances);
    weight_true > weight_false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;

    fn refs(instances: &[Instance]) -> Vec<&Instance> {
        instances.iter().collect()
    }

    #[test]
    fn test_entropy_pure_population_is_zero() {
        assert_eq!(entropy(0.0, 1000.0), 0.0);
        assert_eq!(entropy(0.0001, 0.0), 0.0);
    }

    #[test]
    fn test_entropy_balanced_population_is_one() {
        assert_eq!(entropy(10.0, 10.0), 1.0);
        assert_eq!(entropy(0.5, 0.5), 1.0);
    }

    #[test]
    fn test_entropy_symmetric() {
        assert_eq!(entropy(1.0, 3.0), entropy(3.0, 1.0));
    }

    #[test]
    fn test_entropy_empty_population() {
        assert_eq!(entropy(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_partition_groups_by_value() {
        let instances = vec![
            Instance::new(vec![5, 0], true),
            Instance::new(vec![9, 0], true),
            Instance::new(vec![5, 1], false),
        ];
        let refs = refs(&instances);
        let partition = partition_by_attribute(&refs, 0);
        assert_eq!(partition.len(), 2);
        assert_eq!(partition[&5].len(), 2);
        assert_eq!(partition[&9].len(), 1);

        let partition = partition_by_attribute(&refs, 1);
        assert_eq!(partition[&0].len(), 2);
        assert_eq!(partition[&1].len(), 1);
    }

    #[test]
    fn test_split_entropy_weighted_mean() {
        // Balanced 1-weight group (entropy 1) plus a pure 3-weight group
        // (entropy 0): (1*1 + 0*3) / 4 = 0.25.
        let group0 = vec![
            Instance::new(vec![], true).with_weight(0.5),
            Instance::new(vec![], false).with_weight(0.5),
        ];
        let group1 = vec![
            Instance::new(vec![], false).with_weight(3.0),
            Instance::new(vec![], true).with_weight(0.0),
        ];
        let mut partition = HashMap::new();
        partition.insert(0, group0.iter().collect());
        partition.insert(1, group1.iter().collect());
        assert_eq!(split_entropy(&partition), 0.25);
    }

    #[test]
    fn test_split_entropy_single_group_equals_set_entropy() {
        let instances = vec![
            Instance::new(vec![0], true).with_weight(2.0),
            Instance::new(vec![0], false).with_weight(1.0),
        ];
        let refs = refs(&instances);
        let mut partition = HashMap::new();
        partition.insert(0, refs.clone());
        assert_eq!(split_entropy(&partition), set_entropy(&refs));
    }

    #[test]
    fn test_choose_split_picks_informative_attribute() {
        let instances = vec![
            Instance::new(vec![0, 0], false),
            Instance::new(vec![0, 1], true),
        ];
        let refs = refs(&instances);
        let (attr_idx, partition) = choose_split(&[0, 1], &refs, 0.0).unwrap();
        assert_eq!(attr_idx, 1);
        assert_eq!(partition.len(), 2);
    }

    #[test]
    fn test_choose_split_lowest_index_wins_ties() {
        // Columns 0 and 1 are identical, so their gains tie exactly.
        let instances = vec![
            Instance::new(vec![0, 0, 7], false),
            Instance::new(vec![1, 1, 7], true),
        ];
        let refs = refs(&instances);
        let (attr_idx, _) = choose_split(&[0, 1, 2], &refs, -1.0).unwrap();
        assert_eq!(attr_idx, 0);
    }

    #[test]
    fn test_choose_split_requires_strict_gain() {
        // No attribute separates an exactly balanced, uninformative set.
        let instances = vec![
            Instance::new(vec![0], true),
            Instance::new(vec![0], false),
        ];
        let refs = refs(&instances);
        assert!(choose_split(&[0], &refs, 0.0).is_none());
    }

    #[test]
    fn test_choose_split_min_gain_gate() {
        let instances = vec![
            Instance::new(vec![0], false),
            Instance::new(vec![1], true),
        ];
        let refs = refs(&instances);
        // Gain is exactly 1 bit; a 1.0 floor filters it (strict comparison).
        assert!(choose_split(&[0], &refs, 1.0).is_none());
        assert!(choose_split(&[0], &refs, 0.99).is_some());
    }

    #[test]
    fn test_common_label() {
        let all_true = vec![Instance::new(vec![], true), Instance::new(vec![], true)];
        assert_eq!(common_label(&refs(&all_true)), Some(true));

        let all_false = vec![Instance::new(vec![], false), Instance::new(vec![], false)];
        assert_eq!(common_label(&refs(&all_false)), Some(false));

        let mixed = vec![Instance::new(vec![], true), Instance::new(vec![], false)];
        assert_eq!(common_label(&refs(&mixed)), None);

        assert_eq!(common_label(&[]), None);
    }

    #[test]
    fn test_majority_label_by_weight() {
        let instances = vec![
            Instance::new(vec![], true).with_weight(1.0),
            Instance::new(vec![], false).with_weight(0.75),
        ];
        assert!(majority_label(&refs(&instances)));

        let instances = vec![
            Instance::new(vec![], false),
            Instance::new(vec![], true),
            Instance::new(vec![], false),
        ];
        assert!(!majority_label(&refs(&instances)));
    }

    #[test]
    fn test_majority_label_tie_is_false() {
        let instances = vec![Instance::new(vec![], true), Instance::new(vec![], false)];
        assert!(!majority_label(&refs(&instances)));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Entropy is symmetric in its two class weights.
        #[test]
        fn prop_entropy_symmetric(t in 0.0_f64..1000.0, f in 0.0_f64..1000.0) {
            prop_assert!((entropy(t, f) - entropy(f, t)).abs() < 1e-12);
        }

        /// A one-class population has zero entropy.
        #[test]
        fn prop_entropy_pure_is_zero(t in 0.0001_f64..1000.0) {
            prop_assert_eq!(entropy(t, 0.0), 0.0);
            prop_assert_eq!(entropy(0.0, t), 0.0);
        }

        /// An exactly balanced population has entropy 1 bit.
        #[test]
        fn prop_entropy_balanced_is_one(x in 0.0001_f64..1000.0) {
            prop_assert!((entropy(x, x) - 1.0).abs() < 1e-12);
        }

        /// Entropy is bounded by [0, 1] for two classes.
        #[test]
        fn prop_entropy_bounded(t in 0.0_f64..1000.0, f in 0.0_f64..1000.0) {
            let h = entropy(t, f);
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&h));
        }
    }
}
