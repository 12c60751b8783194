use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    Greedy,
    Dynamic,
    BranchAndBound,
}

impl SolverKind {
    pub const ALL: [SolverKind; 3] = [
        SolverKind::Greedy,
        SolverKind::BranchAndBound,
        SolverKind::Dynamic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SolverKind::Greedy => "greedy",
            SolverKind::Dynamic => "dynamic",
            SolverKind::BranchAndBound => "branch_and_bound",
        }
    }

    /// Only the greedy baseline is inexact.
    pub fn is_exact(&self) -> bool {
        !matches!(self, SolverKind::Greedy)
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolverKind::ALL
            .iter()
            .find(|k| k.name() == s)
            .copied()
            .ok_or_else(|| {
                format!(
                    "Unknown solver '{}'. Expecting one of: greedy, dynamic, branch_and_bound",
                    s
                )
            })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunSettings {
    /// Solvers to run, in order. Results are compared in this order.
    pub solvers: Vec<SolverKind>,
    pub hyperparameters: Option<Map<String, Value>>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            solvers: SolverKind::ALL.to_vec(),
            hyperparameters: None,
        }
    }
}

impl FromStr for RunSettings {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        knap_utils::dejsonify::<RunSettings>(s)
    }
}
