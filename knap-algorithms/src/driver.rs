use crate::knapsack;
use anyhow::{anyhow, Result};
use knap_challenges::knapsack::{Challenge, DensityOrder, Solution};
use knap_structs::{
    config::{RunSettings, SolverKind},
    core::{RunReport, SolverReport},
};
use log::{debug, info};
use serde_json::{Map, Value};
use std::time::Instant;

/// Runs `kind` and converts its density positions back to sorted original indices.
pub fn apply_solver(
    kind: SolverKind,
    challenge: &Challenge,
    order: &DensityOrder,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<(Solution, SolverReport)> {
    info!("{}", kind);
    info!("{}", "-".repeat(kind.name().len()));

    let start = Instant::now();
    let (output, search_stats) = knapsack::solve_challenge(kind, challenge, order, hyperparameters)?;
    let elapsed = start.elapsed();

    let solution = Solution {
        total_value: output.value,
        is_optimal: kind.is_exact(),
        taken: order.to_original(&output.taken),
    };
    info!(" -> Elapsed time: {:.2} sec", elapsed.as_secs_f64());
    info!(
        "{} {} {:?}",
        solution.total_value, solution.is_optimal as u8, solution.taken
    );

    let report = SolverReport {
        solver: kind,
        total_value: solution.total_value,
        is_optimal: solution.is_optimal,
        num_taken: solution.taken.len(),
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        search_stats,
    };
    Ok((solution, report))
}

/// Highest value wins, then fewest taken items. Remaining ties keep the earliest result.
pub fn select_best(results: &[Solution]) -> Option<&Solution> {
    results.iter().fold(None, |best: Option<&Solution>, candidate| match best {
        Some(b)
            if candidate.total_value < b.total_value
                || (candidate.total_value == b.total_value
                    && candidate.taken.len() >= b.taken.len()) =>
        {
            Some(b)
        }
        _ => Some(candidate),
    })
}

pub fn solve_dataset(challenge: &Challenge, settings: &RunSettings) -> Result<RunReport> {
    if settings.solvers.is_empty() {
        return Err(anyhow!("No solvers configured"));
    }
    info!(
        "Problem size (items_count ({}) * capacity ({})): {} million",
        challenge.num_items,
        challenge.capacity,
        challenge.size() / 1_000_000
    );

    let order = challenge.density_order();
    if log::log_enabled!(log::Level::Debug) {
        debug!("Items");
        for (n, item) in challenge.items.iter().enumerate() {
            debug!("{}. {:?}", n, item);
        }
        debug!("Density-sorted items");
        for (n, item) in order.iter().enumerate() {
            debug!("{}. {:?}", n, item);
        }
    }

    let mut solutions = Vec::with_capacity(settings.solvers.len());
    let mut reports = Vec::with_capacity(settings.solvers.len());
    for &kind in &settings.solvers {
        let (solution, report) =
            apply_solver(kind, challenge, &order, &settings.hyperparameters)?;
        solutions.push(solution);
        reports.push(report);
    }

    let solution = select_best(&solutions)
        .cloned()
        .ok_or_else(|| anyhow!("No solver produced a result"))?;
    Ok(RunReport {
        num_items: challenge.num_items,
        capacity: challenge.capacity,
        solution,
        solvers: reports,
    })
}
