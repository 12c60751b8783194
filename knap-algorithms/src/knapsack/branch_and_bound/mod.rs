mod bound;
mod params;
pub use bound::Relaxation;
pub use params::Params;

use super::greedy;
use anyhow::Result;
use knap_challenges::knapsack::*;
use knap_structs::core::SearchStats;
use log::{debug, trace};
use logging_timer::time;
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    Root,
    Include,
    Exclude,
}

/// A search node. `level` is the density position of the next undecided item. The node's
/// taken set is not stored: it is the decision path from the root, rebuilt as nodes are popped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub level: usize,
    pub value: u64,
    pub weight: u64,
    pub branch: Branch,
}

impl Node {
    pub fn root() -> Self {
        Self {
            level: 0,
            value: 0,
            weight: 0,
            branch: Branch::Root,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
    Active,
    Pruned,
    Leaf,
}

/// Every node with all items decided is a leaf and gets compared with the incumbent. Other
/// nodes are pruned when their bound does not exceed the best value, ties included.
pub fn classify(node: &Node, bound: u64, best_value: u64, num_items: usize) -> NodeStatus {
    if node.level == num_items {
        NodeStatus::Leaf
    } else if bound <= best_value {
        NodeStatus::Pruned
    } else {
        NodeStatus::Active
    }
}

/// Depth-first branch and bound. The include child is explored before the exclude child, and
/// a leaf only replaces the incumbent when strictly better, so among equal-value optima the
/// first one reached in that order is reported.
pub fn solve(
    capacity: u64,
    order: &DensityOrder,
    incumbent: Option<SolverOutput>,
) -> (SolverOutput, SearchStats) {
    let num_items = order.len();
    let relaxation = Relaxation::new(order);
    let mut best = incumbent.unwrap_or_default();
    let mut stats = SearchStats::default();

    let mut path: Vec<bool> = Vec::with_capacity(num_items);
    let mut stack: Vec<Node> = Vec::with_capacity(num_items + 1);
    stack.push(Node::root());

    while let Some(node) = stack.pop() {
        if node.level == 0 {
            path.clear();
        } else {
            path.truncate(node.level - 1);
            path.push(node.branch == Branch::Include);
        }

        let bound = relaxation.upper_bound(node.level, node.value, node.weight, capacity);
        match classify(&node, bound, best.value, num_items) {
            NodeStatus::Pruned => stats.pruned += 1,
            NodeStatus::Leaf => {
                stats.leaves += 1;
                if node.value > best.value {
                    stats.improvements += 1;
                    trace!("New incumbent: value {} (was {})", node.value, best.value);
                    best = SolverOutput {
                        value: node.value,
                        taken: path
                            .iter()
                            .enumerate()
                            .filter_map(|(i, &included)| if included { Some(i) } else { None })
                            .collect(),
                    };
                }
            }
            NodeStatus::Active => {
                stats.expanded += 1;
                let item = order.get(node.level);
                stack.push(Node {
                    level: node.level + 1,
                    value: node.value,
                    weight: node.weight,
                    branch: Branch::Exclude,
                });
                if let Some(weight) = node
                    .weight
                    .checked_add(item.weight())
                    .filter(|&w| w <= capacity)
                {
                    stack.push(Node {
                        level: node.level + 1,
                        value: node.value.saturating_add(item.value()),
                        weight,
                        branch: Branch::Include,
                    });
                }
            }
        }
    }

    (best, stats)
}

#[time]
pub fn solve_challenge(
    challenge: &Challenge,
    order: &DensityOrder,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<(SolverOutput, SearchStats)> {
    let params = Params::initialize(hyperparameters);
    let incumbent = if params.warm_start {
        let warm = greedy::solve(challenge.capacity, order);
        debug!("Warm start from greedy baseline: value {}", warm.value);
        Some(warm)
    } else {
        None
    };

    let (output, stats) = solve(challenge.capacity, order, incumbent);
    debug!(
        "Search finished: {} expanded, {} pruned, {} leaves, {} improvements",
        stats.expanded, stats.pruned, stats.leaves, stats.improvements
    );
    Ok((output, stats))
}
