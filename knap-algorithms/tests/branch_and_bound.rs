use knap_algorithms::knapsack::{branch_and_bound::*, greedy};
use knap_challenges::knapsack::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::{json, Map, Value};
use test_case::test_case;

fn warm_start() -> Option<Map<String, Value>> {
    match json!({"warm_start": true}) {
        Value::Object(m) => Some(m),
        _ => None,
    }
}

#[test_case(&[(60, 10), (100, 20), (120, 30)], 50, 220, &[1, 2]; "textbook")]
#[test_case(&[(500, 30)], 10, 0, &[]; "too heavy")]
#[test_case(&[(60, 10), (100, 20)], 0, 0, &[]; "zero capacity")]
#[test_case(&[], 10, 0, &[]; "no items")]
#[test_case(&[(10, 5), (40, 4), (30, 6), (50, 3)], 10, 90, &[1, 3]; "four items")]
#[test_case(&[(5, 2), (5, 2), (5, 2), (5, 2), (21, 10)], 10, 21, &[4]; "not greedy by weight")]
#[test_case(&[(0, 3), (0, 1)], 5, 0, &[]; "zero values")]
fn test_branch_and_bound(pairs: &[(i64, i64)], capacity: u64, value: u64, taken: &[usize]) {
    let challenge = Challenge::from_pairs(capacity, pairs).unwrap();
    let order = challenge.density_order();
    let (output, _) = solve(challenge.capacity, &order, None);
    assert_eq!(output.value, value);
    assert_eq!(order.to_original(&output.taken), taken);
}

#[test]
fn test_search_stats() {
    let challenge = Challenge::from_pairs(50, &[(60, 10), (100, 20), (120, 30)]).unwrap();
    let order = challenge.density_order();
    let (output, stats) = solve(challenge.capacity, &order, None);
    assert_eq!(output.value, 220);
    // Leaves in order: {0, 1} = 160, {0, 2} = 180, {0} = 60, {1, 2} = 220, {1} = 100
    assert_eq!(stats.leaves, 5);
    assert_eq!(stats.improvements, 3);
    assert_eq!(stats.expanded, 6);
    assert_eq!(stats.pruned, 1);
}

#[test]
fn test_non_improving_leaves_are_counted() {
    // Everything fits: the first leaf is optimal and every other leaf reached ties or loses
    let challenge = Challenge::from_pairs(10, &[(6, 2), (4, 2), (3, 2)]).unwrap();
    let order = challenge.density_order();
    let (output, stats) = solve(challenge.capacity, &order, None);
    assert_eq!(output.value, 13);
    assert_eq!(stats.improvements, 1);
    assert!(stats.leaves > stats.improvements);
}

#[test]
fn test_leaves_bound_improvements() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut with_extra_leaves = 0;
    for _ in 0..50 {
        let n = rng.gen_range(1..=10);
        let pairs: Vec<(i64, i64)> = (0..n)
            .map(|_| (rng.gen_range(0..=30), rng.gen_range(1..=15)))
            .collect();
        let capacity = rng.gen_range(0..=60);
        let challenge = Challenge::from_pairs(capacity, &pairs).unwrap();
        let order = challenge.density_order();
        let (_, stats) = solve(challenge.capacity, &order, None);
        assert!(stats.leaves >= stats.improvements);
        if stats.leaves > stats.improvements {
            with_extra_leaves += 1;
        }
    }
    assert!(with_extra_leaves > 0);
}

#[test]
fn test_unvalidated_order_saturates() {
    let items: Vec<Item> = (0..3)
        .map(|i| make_item(i, i64::MAX, 1).unwrap())
        .collect();
    let order = DensityOrder::new(&items);
    let (output, _) = solve(3, &order, None);
    assert_eq!(output.value, u64::MAX);
    assert_eq!(output.taken, vec![0, 1, 2]);
}

#[test]
fn test_include_branch_first() {
    // {0} and {1, 2} are both worth 10. The include-first traversal reaches {0} first.
    let challenge = Challenge::from_pairs(5, &[(10, 5), (4, 2), (6, 3)]).unwrap();
    let order = challenge.density_order();
    let (output, _) = solve(challenge.capacity, &order, None);
    assert_eq!(output.value, 10);
    assert_eq!(order.to_original(&output.taken), vec![0]);
}

#[test]
fn test_warm_start_keeps_greedy_when_optimal() {
    let challenge = Challenge::from_pairs(6, &[(1, 1), (10, 2), (3, 3)]).unwrap();
    let order = challenge.density_order();
    let incumbent = greedy::solve(challenge.capacity, &order);
    let (output, stats) = solve(challenge.capacity, &order, Some(incumbent.clone()));
    assert_eq!(output, incumbent);
    assert_eq!(stats.improvements, 0);
    assert_eq!(stats.expanded, 0);
    assert_eq!(stats.pruned, 1);
}

#[test]
fn test_warm_start_solve_challenge() {
    let challenge = Challenge::from_pairs(50, &[(60, 10), (100, 20), (120, 30)]).unwrap();
    let order = challenge.density_order();
    let (cold, cold_stats) = solve_challenge(&challenge, &order, &None).unwrap();
    let (warm, warm_stats) = solve_challenge(&challenge, &order, &warm_start()).unwrap();
    assert_eq!(cold.value, 220);
    assert_eq!(warm.value, 220);
    assert_eq!(order.to_original(&warm.taken), vec![1, 2]);
    assert!(warm_stats.improvements < cold_stats.improvements);
}

#[test]
fn test_params() {
    assert_eq!(Params::initialize(&None), Params { warm_start: false });
    assert_eq!(Params::initialize(&warm_start()), Params { warm_start: true });
    let mut m = Map::new();
    m.insert("warm_start".to_string(), json!("yes"));
    assert_eq!(Params::initialize(&Some(m)), Params { warm_start: false });
}

#[test]
fn test_classify() {
    let node = Node {
        level: 2,
        value: 30,
        weight: 7,
        branch: Branch::Include,
    };
    assert_eq!(classify(&node, 50, 40, 5), NodeStatus::Active);
    assert_eq!(classify(&node, 40, 40, 5), NodeStatus::Pruned);
    assert_eq!(classify(&node, 35, 40, 5), NodeStatus::Pruned);
    assert_eq!(classify(&node, 30, 20, 2), NodeStatus::Leaf);
    // A leaf that cannot beat the incumbent is still a leaf
    assert_eq!(classify(&node, 30, 30, 2), NodeStatus::Leaf);
    assert_eq!(classify(&Node::root(), 0, 0, 0), NodeStatus::Leaf);
    assert_eq!(classify(&Node::root(), 0, 0, 1), NodeStatus::Pruned);
}

#[test]
fn test_relaxation_bound() {
    let challenge = Challenge::from_pairs(50, &[(60, 10), (100, 20), (120, 30)]).unwrap();
    let order = challenge.density_order();
    let relaxation = Relaxation::new(&order);
    assert_eq!(relaxation.num_items(), 3);
    // 60 + 100 + 20/30 of 120
    assert_eq!(relaxation.upper_bound(0, 0, 0, 50), 240);
    // Item 0 excluded: 100 + 120 fit exactly
    assert_eq!(relaxation.upper_bound(1, 0, 0, 50), 220);
    // Items 0 and 1 included, 20/30 of 120 left
    assert_eq!(relaxation.upper_bound(2, 160, 30, 50), 240);
    // Leaf
    assert_eq!(relaxation.upper_bound(3, 180, 40, 50), 180);
    // Nothing left to fill
    assert_eq!(relaxation.upper_bound(1, 60, 50, 50), 60);
}

#[test]
fn test_relaxation_floors_fraction() {
    let challenge = Challenge::from_pairs(2, &[(10, 3)]).unwrap();
    let order = challenge.density_order();
    let relaxation = Relaxation::new(&order);
    // 2/3 of 10 = 6.66..
    assert_eq!(relaxation.upper_bound(0, 0, 0, 2), 6);
}

#[test]
fn test_branch_and_bound_idempotent() {
    let challenge = Challenge::from_pairs(
        23,
        &[(12, 4), (10, 6), (8, 5), (11, 7), (14, 3), (7, 1), (9, 6)],
    )
    .unwrap();
    let order = challenge.density_order();
    assert_eq!(
        solve(challenge.capacity, &order, None),
        solve(challenge.capacity, &order, None)
    );
}
