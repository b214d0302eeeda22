//! Seeded synthetic datasets for tests and benchmarks.
//!
//! Generators take an explicit seed so results are reproducible across
//! runs and platforms.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::instance::{AttrValue, Instance};

/// Generates random binary attribute vectors labeled by a single
/// deciding attribute.
///
/// Every instance's label equals its `deciding_attr` bit, so a single
/// stump separates the dataset perfectly.
///
/// # Panics
///
/// Panics if `deciding_attr >= n_attrs`.
///
/// # Examples
///
/// ```
/// use arbol::synthetic::stump_separable;
///
/// let instances = stump_separable(16, 4, 2, 42);
/// assert_eq!(instances.len(), 16);
/// for inst in &instances {
///     assert_eq!(inst.label, Some(inst.attrs[2] == 1));
/// }
/// ```
#[must_use]
pub fn stump_separable(
    n_instances: usize,
    n_attrs: usize,
    deciding_attr: usize,
    seed: u64,
) -> Vec<Instance> {
    assert!(deciding_attr < n_attrs, "deciding attribute out of range");
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_instances)
        .map(|_| {
            let attrs: Vec<AttrValue> = (0..n_attrs).map(|_| rng.gen_range(0..2)).collect();
            let label = attrs[deciding_attr] == 1;
            Instance::new(attrs, label)
        })
        .collect()
}

/// Generates random binary attribute vectors labeled by the majority
/// bit.
///
/// No single attribute decides the label, making this a natural target
/// for boosting. `n_attrs` should be odd so the majority is never tied.
#[must_use]
pub fn majority_vote(n_instances: usize, n_attrs: usize, seed: u64) -> Vec<Instance> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_instances)
        .map(|_| {
            let attrs: Vec<AttrValue> = (0..n_attrs).map(|_| rng.gen_range(0..2)).collect();
            let label = 2 * attrs.iter().sum::<AttrValue>() as usize > n_attrs;
            Instance::new(attrs, label)
        })
        .collect()
}
