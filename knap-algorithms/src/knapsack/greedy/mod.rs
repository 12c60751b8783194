use anyhow::Result;
use knap_challenges::knapsack::*;
use logging_timer::time;
use serde_json::{Map, Value};

/// Walks the density order and takes each item whole while it fits. Stops at the first item
/// that does not fit, so the result is only a lower bound.
pub fn solve(capacity: u64, order: &DensityOrder) -> SolverOutput {
    let mut residual = capacity;
    let mut output = SolverOutput::empty();
    for (position, item) in order.iter().enumerate() {
        if item.weight() > residual {
            break;
        }
        residual -= item.weight();
        output.value = output.value.saturating_add(item.value());
        output.taken.push(position);
    }
    output
}

#[time]
pub fn solve_challenge(
    challenge: &Challenge,
    order: &DensityOrder,
    _hyperparameters: &Option<Map<String, Value>>,
) -> Result<SolverOutput> {
    Ok(solve(challenge.capacity, order))
}
