pub mod branch_and_bound;
pub mod dynamic;
pub mod greedy;

use anyhow::Result;
use knap_challenges::knapsack::{Challenge, DensityOrder, SolverOutput};
use knap_structs::{config::SolverKind, core::SearchStats};
use serde_json::{Map, Value};

/// Runs one solver. Returned positions index into `order`.
pub fn solve_challenge(
    kind: SolverKind,
    challenge: &Challenge,
    order: &DensityOrder,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<(SolverOutput, Option<SearchStats>)> {
    match kind {
        SolverKind::Greedy => Ok((
            greedy::solve_challenge(challenge, order, hyperparameters)?,
            None,
        )),
        SolverKind::Dynamic => Ok((
            dynamic::solve_challenge(challenge, order, hyperparameters)?,
            None,
        )),
        SolverKind::BranchAndBound => {
            let (output, stats) =
                branch_and_bound::solve_challenge(challenge, order, hyperparameters)?;
            Ok((output, Some(stats)))
        }
    }
}
