pub mod driver;
pub mod knapsack;
