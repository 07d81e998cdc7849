pub mod balance_calculator;
pub mod settlement_planner;

pub use balance_calculator::{BalanceCalculator, ValidationMode};
pub use settlement_planner::SettlementPlanner;
