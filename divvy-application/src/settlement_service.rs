use divvy_domain::{
    BalanceCalculator, Expense, MemberId, SettlementPlanner, ValidationMode,
};

use crate::{
    error::SettlementBuildError,
    model::{PersonBalance, SettlementReport},
    ports::{ExpenseProvider, GroupProvider},
};

/// Orchestrates one settlement: fetch the snapshot through the ports, run
/// the balance calculator, then the planner.
///
/// Holds no state of its own beyond the configured validation mode; every
/// call works on a fresh snapshot.
#[derive(Clone, Copy)]
pub struct SettlementService<'a> {
    groups: &'a dyn GroupProvider,
    expenses: &'a dyn ExpenseProvider,
    calculator: BalanceCalculator,
}

impl<'a> SettlementService<'a> {
    pub fn new(groups: &'a dyn GroupProvider, expenses: &'a dyn ExpenseProvider) -> Self {
        Self::with_validation(groups, expenses, ValidationMode::Lenient)
    }

    pub fn with_validation(
        groups: &'a dyn GroupProvider,
        expenses: &'a dyn ExpenseProvider,
        mode: ValidationMode,
    ) -> Self {
        Self {
            groups,
            expenses,
            calculator: BalanceCalculator::with_mode(mode),
        }
    }

    /// Fetches the group's roster and expense history and settles them.
    pub fn build_settlement(
        &self,
        group_id: &str,
    ) -> Result<SettlementReport, SettlementBuildError> {
        let group = self.groups.group(group_id)?;
        let expenses = self.expenses.expenses(group_id)?;
        self.settle(&expenses, group.members())
    }

    /// The pure two-step pipeline for callers that already hold a snapshot.
    ///
    /// Balance rows come back in member-id order; transfers in the planner's
    /// deterministic greedy order.
    pub fn settle(
        &self,
        expenses: &[Expense],
        members: &[MemberId],
    ) -> Result<SettlementReport, SettlementBuildError> {
        let balances = self.calculator.compute_balances(expenses, members)?;
        let transfers = SettlementPlanner.plan_settlement(&balances)?;

        let balances = balances
            .into_iter()
            .map(|(id, balance)| PersonBalance { id, balance })
            .collect();

        Ok(SettlementReport {
            balances,
            transfers,
        })
    }
}
