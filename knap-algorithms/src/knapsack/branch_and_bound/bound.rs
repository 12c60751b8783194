use knap_challenges::knapsack::DensityOrder;

/// Fractional relaxation of the items remaining after a given level, answered in O(log N)
/// from prefix sums over the density order. Sums saturate at `u64::MAX`; they only stay
/// exact for orders built from a validated `Challenge`.
pub struct Relaxation {
    weights: Vec<u64>,
    values: Vec<u64>,
    prefix_weights: Vec<u64>,
    prefix_values: Vec<u64>,
}

impl Relaxation {
    pub fn new(order: &DensityOrder) -> Self {
        let weights: Vec<u64> = order.iter().map(|item| item.weight()).collect();
        let values: Vec<u64> = order.iter().map(|item| item.value()).collect();
        let mut prefix_weights = Vec::with_capacity(weights.len() + 1);
        let mut prefix_values = Vec::with_capacity(values.len() + 1);
        prefix_weights.push(0);
        prefix_values.push(0);
        for i in 0..weights.len() {
            prefix_weights.push(u64::saturating_add(prefix_weights[i], weights[i]));
            prefix_values.push(u64::saturating_add(prefix_values[i], values[i]));
        }
        Self {
            weights,
            values,
            prefix_weights,
            prefix_values,
        }
    }

    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Upper bound on the value of any completion of a node at `level` holding `value` and
    /// `weight`. Items from `level` on are taken whole while they fit and the first one that
    /// does not fit is taken fractionally. The fraction is floored, which stays admissible
    /// because every feasible value is an integer.
    ///
    /// Requires `weight <= capacity`.
    pub fn upper_bound(&self, level: usize, value: u64, weight: u64, capacity: u64) -> u64 {
        let residual = capacity - weight;
        let base = self.prefix_weights[level];
        // Last prefix end `j` such that items level..j all fit
        let j = level
            + self.prefix_weights[level..].partition_point(|&pw| pw - base <= residual)
            - 1;
        let mut bound = value.saturating_add(self.prefix_values[j] - self.prefix_values[level]);
        if j < self.num_items() {
            let remaining = (residual - (self.prefix_weights[j] - base)) as u128;
            let fraction = remaining * self.values[j] as u128 / self.weights[j] as u128;
            bound = bound.saturating_add(fraction as u64);
        }
        bound
    }
}
