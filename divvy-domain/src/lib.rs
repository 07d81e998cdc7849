#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::LedgerError;
pub use model::{Expense, MemberBalances, MemberId, Money, Transfer, SETTLE_EPSILON};
pub use services::{BalanceCalculator, SettlementPlanner, ValidationMode};
