use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Raw result of a solver. `taken` holds positions in the density order the solver was given,
/// not original item indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverOutput {
    pub value: u64,
    pub taken: Vec<usize>,
}

impl SolverOutput {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub total_value: u64,
    pub is_optimal: bool,
    /// Original item indices, ascending.
    pub taken: Vec<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self {
            total_value: 0,
            is_optimal: false,
            taken: Vec::new(),
        }
    }

    /// Two lines: `<total_value> <is_optimal>` then one 0/1 flag per original item.
    pub fn to_submission(&self, num_items: usize) -> String {
        let mut flags = vec!["0"; num_items];
        for &i in &self.taken {
            if i < num_items {
                flags[i] = "1";
            }
        }
        format!(
            "{} {}\n{}",
            self.total_value,
            self.is_optimal as u8,
            flags.join(" ")
        )
    }

    pub fn from_submission(submission: &str, num_items: usize) -> Result<Self> {
        let mut lines = submission.lines();
        let header: Vec<&str> = lines
            .next()
            .ok_or_else(|| anyhow!("Submission is empty"))?
            .split_whitespace()
            .collect();
        if header.len() != 2 {
            return Err(anyhow!(
                "Submission header must be '<total_value> <is_optimal>', got {} tokens",
                header.len()
            ));
        }
        let total_value = header[0]
            .parse::<u64>()
            .map_err(|_| anyhow!("Total value '{}' is not an integer", header[0]))?;
        let is_optimal = match header[1] {
            "0" => false,
            "1" => true,
            other => return Err(anyhow!("Optimality flag must be 0 or 1, got '{}'", other)),
        };

        let flags: Vec<&str> = lines.next().unwrap_or("").split_whitespace().collect();
        if flags.len() != num_items {
            return Err(anyhow!(
                "Expecting {} taken flags, but found {}",
                num_items,
                flags.len()
            ));
        }
        let mut taken = Vec::new();
        for (i, flag) in flags.iter().enumerate() {
            match *flag {
                "0" => {}
                "1" => taken.push(i),
                other => return Err(anyhow!("Flag {} must be 0 or 1, got '{}'", i, other)),
            }
        }

        Ok(Self {
            total_value,
            is_optimal,
            taken,
        })
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}
