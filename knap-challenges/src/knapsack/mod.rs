mod error;
mod item;
mod solution;
pub use error::ChallengeError;
pub use item::{make_item, order_by_density, DensityOrder, Item};
pub use solution::{Solution, SolverOutput};

use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

/// Parameters of the seeded instance generator. `budget` is the capacity as a percentage of
/// the total weight.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub num_items: usize,
    pub budget: u32,
}

#[derive(Serialize, Debug, Clone)]
pub struct Challenge {
    pub num_items: usize,
    pub capacity: u64,
    pub items: Vec<Item>,
}

impl Challenge {
    pub fn new(capacity: u64, items: Vec<Item>) -> Result<Self, ChallengeError> {
        let mut total_value: u64 = 0;
        let mut total_weight: u64 = 0;
        for (position, item) in items.iter().enumerate() {
            if item.index() != position {
                return Err(ChallengeError::MisplacedItem {
                    position,
                    index: item.index(),
                });
            }
            total_value = total_value
                .checked_add(item.value())
                .ok_or(ChallengeError::Overflow)?;
            total_weight = total_weight
                .checked_add(item.weight())
                .ok_or(ChallengeError::Overflow)?;
        }
        Ok(Self {
            num_items: items.len(),
            capacity,
            items,
        })
    }

    pub fn from_pairs(capacity: u64, pairs: &[(i64, i64)]) -> Result<Self, ChallengeError> {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(i, &(value, weight))| Item::new(i, value, weight))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(capacity, items)
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());

        // Weights in [1, 50], values in [1, 100]
        let pairs: Vec<(i64, i64)> = (0..track.num_items)
            .map(|_| {
                let weight = rng.gen_range(1..=50i64);
                let value = rng.gen_range(1..=100i64);
                (value, weight)
            })
            .collect();

        let total_weight: u64 = pairs.iter().map(|&(_, w)| w as u64).sum();
        let capacity = total_weight * track.budget as u64 / 100;

        Ok(Self::from_pairs(capacity, &pairs)?)
    }

    pub fn density_order(&self) -> DensityOrder<'_> {
        DensityOrder::new(&self.items)
    }

    /// Problem size as used by the DP solver: items_count * capacity.
    pub fn size(&self) -> u128 {
        self.num_items as u128 * self.capacity as u128
    }

    pub fn evaluate_total_value(&self, taken: &[usize]) -> Result<u64> {
        let selected_items: HashSet<usize> = taken.iter().cloned().collect();
        if selected_items.len() != taken.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let mut total_weight = 0u64;
        let mut total_value = 0u64;
        for &i in taken {
            let item = self
                .items
                .get(i)
                .ok_or_else(|| anyhow!("Item ({}) is out of bounds", i))?;
            total_weight += item.weight();
            total_value += item.value();
        }

        if total_weight > self.capacity {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }
        Ok(total_value)
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<u64> {
        let total_value = self.evaluate_total_value(&solution.taken)?;
        if total_value != solution.total_value {
            return Err(anyhow!(
                "Reported total value ({}) does not match the taken items ({})",
                solution.total_value,
                total_value
            ));
        }
        Ok(total_value)
    }
}

fn parse_line(line_nbr: usize, line: &str) -> Result<(i64, i64), ChallengeError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ChallengeError::WrongTokenCount {
            line: line_nbr,
            expected: 2,
            found: tokens.len(),
        });
    }
    let parse = |token: &str| {
        token.parse::<i64>().map_err(|_| ChallengeError::InvalidToken {
            line: line_nbr,
            token: token.to_string(),
        })
    };
    Ok((parse(tokens[0])?, parse(tokens[1])?))
}

/// Parses `<items_count> <capacity>` followed by `items_count` lines of `<value> <weight>`.
/// Anything after the declared items is ignored.
pub fn parse_challenge(input: &str) -> Result<Challenge, ChallengeError> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .filter(|l| !l.trim().is_empty())
        .ok_or(ChallengeError::MissingHeader)?;
    let (items_count, capacity) = parse_line(0, header)?;
    if items_count < 0 {
        return Err(ChallengeError::InvalidToken {
            line: 0,
            token: items_count.to_string(),
        });
    }
    if capacity < 0 {
        return Err(ChallengeError::InvalidCapacity { capacity });
    }

    let items_count = items_count as usize;
    let mut items = Vec::new();
    for i in 0..items_count {
        let line = lines.next().ok_or(ChallengeError::MissingItems {
            expected: items_count,
            found: i,
        })?;
        let (value, weight) = parse_line(i + 1, line)?;
        items.push(make_item(i, value, weight)?);
    }
    Challenge::new(capacity as u64, items)
}

impl FromStr for Challenge {
    type Err = ChallengeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_challenge(s)
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.num_items, self.capacity)?;
        for item in &self.items {
            write!(f, "\n{} {}", item.value(), item.weight())?;
        }
        Ok(())
    }
}
