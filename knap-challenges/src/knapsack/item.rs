use super::error::ChallengeError;
use serde::Serialize;
use std::cmp::Ordering;

/// A knapsack item. `index` is the item's position in the original input and never changes,
/// whatever order the solvers traverse the items in.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Item {
    index: usize,
    value: u64,
    weight: u64,
    density: f64,
}

impl Item {
    pub fn new(index: usize, value: i64, weight: i64) -> Result<Self, ChallengeError> {
        if weight <= 0 || value < 0 {
            return Err(ChallengeError::InvalidItem {
                index,
                value,
                weight,
            });
        }
        let value = value as u64;
        let weight = weight as u64;
        Ok(Self {
            index,
            value,
            weight,
            density: value as f64 / weight as f64,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// value / weight. Only used for ordering and display, never for scoring.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Compares densities exactly by cross multiplication.
    pub fn cmp_density(&self, other: &Item) -> Ordering {
        let lhs = self.value as u128 * other.weight as u128;
        let rhs = other.value as u128 * self.weight as u128;
        lhs.cmp(&rhs)
    }
}

pub fn make_item(index: usize, value: i64, weight: i64) -> Result<Item, ChallengeError> {
    Item::new(index, value, weight)
}

/// Positions into `items`, sorted by density descending. Equal densities keep their relative
/// order, so the permutation only depends on the input.
pub fn order_by_density(items: &[Item]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].cmp_density(&items[a]));
    order
}

/// A density-descending view over an item arena. Solvers work with positions in this view and
/// `to_original` maps them back to item indices.
///
/// Building one from `Challenge::density_order` guarantees that value and weight sums fit in
/// a `u64`. Views over arbitrary item slices carry no such guarantee and the solvers saturate.
#[derive(Debug, Clone)]
pub struct DensityOrder<'a> {
    items: &'a [Item],
    order: Vec<usize>,
}

impl<'a> DensityOrder<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        Self {
            items,
            order: order_by_density(items),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, position: usize) -> &'a Item {
        let items = self.items;
        &items[self.order[position]]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Item> + '_ {
        let items = self.items;
        self.order.iter().map(move |&i| &items[i])
    }

    pub fn permutation(&self) -> &[usize] {
        &self.order
    }

    pub fn to_original(&self, positions: &[usize]) -> Vec<usize> {
        let mut indices: Vec<usize> = positions.iter().map(|&p| self.get(p).index()).collect();
        indices.sort_unstable();
        indices
    }
}
