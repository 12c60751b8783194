use crate::{config::SolverKind, serializable_struct};
use knap_challenges::knapsack::Solution;
use serde::{Deserialize, Serialize};

serializable_struct! {
    SearchStats {
        expanded: u64,
        pruned: u64,
        leaves: u64,
        improvements: u64,
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self {
            expanded: 0,
            pruned: 0,
            leaves: 0,
            improvements: 0,
        }
    }
}

serializable_struct! {
    SolverReport {
        solver: SolverKind,
        total_value: u64,
        is_optimal: bool,
        num_taken: usize,
        elapsed_ms: f64,
        search_stats: Option<SearchStats>,
    }
}

serializable_struct! {
    RunReport {
        num_items: usize,
        capacity: u64,
        solution: Solution,
        solvers: Vec<SolverReport>,
    }
}

impl RunReport {
    pub fn submission(&self) -> String {
        self.solution.to_submission(self.num_items)
    }
}
