use anyhow::{anyhow, Result};
use knap_challenges::knapsack::*;
use log::debug;
use logging_timer::time;
use serde_json::{Map, Value};

/// Exact solver over a `(N + 1) x (C + 1)` value table, where cell `[i][w]` is the best value
/// reachable with the first `i` items of `order` and budget `w`.
pub fn solve(capacity: u64, order: &DensityOrder) -> Result<SolverOutput> {
    let num_items = order.len();
    if num_items == 0 || capacity == 0 {
        return Ok(SolverOutput::empty());
    }

    let max_weight = usize::try_from(capacity)
        .map_err(|_| anyhow!("Capacity ({}) is too large for the DP table", capacity))?;
    let width = max_weight
        .checked_add(1)
        .ok_or_else(|| anyhow!("Capacity ({}) is too large for the DP table", capacity))?;
    let cells = (num_items + 1).checked_mul(width).ok_or_else(|| {
        anyhow!(
            "DP table too large: {} items x {} capacity",
            num_items,
            capacity
        )
    })?;
    debug!("DP table: {} rows x {} columns", num_items + 1, width);

    // Row 0 (no items) stays all zero
    let mut table = vec![0u64; cells];
    for i in 1..=num_items {
        let item = order.get(i - 1);
        let (done, rest) = table.split_at_mut(i * width);
        let prev = &done[(i - 1) * width..];
        let row = &mut rest[..width];
        for w in 0..width {
            row[w] = if item.weight() > w as u64 {
                prev[w]
            } else {
                prev[w].max(prev[w - item.weight() as usize].saturating_add(item.value()))
            };
        }
    }

    let value = table[num_items * width + max_weight];
    let mut taken = Vec::new();
    let mut w = max_weight;
    for i in (1..=num_items).rev() {
        if table[i * width + w] != table[(i - 1) * width + w] {
            taken.push(i - 1);
            w -= order.get(i - 1).weight() as usize;
        }
    }
    drop(table);
    taken.reverse();

    Ok(SolverOutput { value, taken })
}

#[time]
pub fn solve_challenge(
    challenge: &Challenge,
    order: &DensityOrder,
    _hyperparameters: &Option<Map<String, Value>>,
) -> Result<SolverOutput> {
    solve(challenge.capacity, order)
}
