#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod settlement_service;

pub use error::SettlementBuildError;
pub use model::{Group, PersonBalance, SettlementReport};
pub use ports::{ExpenseProvider, GroupProvider, MemberDirectory, ProviderError};
pub use settlement_service::SettlementService;
