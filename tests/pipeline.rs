//! End-to-end pipeline tests: parse a dataset, fit each strategy, and
//! cross-validate.

use std::io::Cursor;

use arbol::prelude::*;
use arbol::synthetic;

fn parity_free_dataset() -> Vec<Instance> {
    // Label equals attribute 1; attributes 0 and 2 are distractors.
    let text = "\
0 1 0 1
1 1 1 1
0 0 1 0
1 0 0 0
0 1 1 1
1 0 1 0
0 0 0 0
1 1 0 1
";
    parse_dataset(Cursor::new(text)).unwrap()
}

#[test]
fn parse_then_fit_tree() {
    let instances = parity_free_dataset();
    let mut model = DecisionTreeClassifier::new();
    model.fit(&instances).unwrap();
    assert_eq!(model.score(&instances).unwrap(), 1.0);
    for inst in &instances {
        assert_eq!(model.predict(inst), inst.attrs[1] == 1);
    }
}

#[test]
fn cross_validate_all_strategies() {
    let instances = synthetic::stump_separable(60, 4, 1, 42);

    let folds = tree_folds(&instances, 5).unwrap();
    assert_eq!(cross_val_score(&folds, Strategy::Tree).unwrap(), 1.0);
    assert_eq!(cross_val_score(&folds, Strategy::boosted()).unwrap(), 1.0);

    let folds = pruned_folds(&instances, 5).unwrap();
    assert_eq!(cross_val_score(&folds, Strategy::Pruned).unwrap(), 1.0);
}

#[test]
fn boosting_recovers_majority_vote() {
    let instances: Vec<Instance> = (0u32..8)
        .map(|bits| {
            let attrs = vec![bits & 1, (bits >> 1) & 1, (bits >> 2) & 1];
            let label = attrs.iter().sum::<u32>() >= 2;
            Instance::new(attrs, label)
        })
        .collect();

    let mut model = AdaBoostClassifier::new().with_max_rounds(3);
    model.fit(&instances).unwrap();
    assert!((model.score(&instances).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn pruning_shrinks_overfit_tree() {
    // Training labels follow attribute 0 except for one noisy row that
    // drags in a spurious split on attribute 1.
    let train = vec![
        Instance::new(vec![0, 0], false),
        Instance::new(vec![0, 1], false),
        Instance::new(vec![1, 0], true),
        Instance::new(vec![1, 1], false),
        Instance::new(vec![1, 0], true),
    ];
    // Validation follows attribute 0 exactly, contradicting the
    // spurious attribute-1 split.
    let validation = vec![
        Instance::new(vec![1, 1], true),
        Instance::new(vec![0, 1], false),
    ];

    let mut model = DecisionTreeClassifier::new();
    model.fit(&train).unwrap();
    let before = model.tree().unwrap().n_nodes();
    model.prune(&validation).unwrap();
    let after = model.tree().unwrap().n_nodes();
    assert!(after < before);
    assert_eq!(model.score(&validation).unwrap(), 1.0);
}

#[test]
fn fold_training_leaves_input_unchanged() {
    let instances = synthetic::majority_vote(30, 3, 7);
    let folds = boosted_folds(&instances, 3).unwrap();
    let _ = cross_val_score(&folds, Strategy::boosted()).unwrap();
    for inst in &instances {
        assert_eq!(inst.weight, 1.0);
        assert!(inst.label.is_some());
    }
}
