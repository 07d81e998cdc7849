use fxhash::FxHashSet;

use crate::{
    error::LedgerError,
    model::{Expense, MemberBalances, MemberId, Money, SETTLE_EPSILON},
};

/// How strictly expenses are checked before accumulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Accept expenses whose splits drift from the total; the drift shows
    /// up as a small residual in the final balances.
    #[default]
    Lenient,
    /// Reject an expense whose splits do not sum to its total within epsilon.
    Strict,
}

/// Reduces a list of expenses into one signed net balance per member.
#[derive(Clone, Copy, Debug, Default)]
pub struct BalanceCalculator {
    mode: ValidationMode,
}

impl BalanceCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            mode: ValidationMode::Strict,
        }
    }

    pub fn with_mode(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// Computes each member's net position over the expense list.
    ///
    /// Every roster member starts at zero; each expense credits its payer
    /// with the total and debits each split member by their share. Addition
    /// is commutative, so expense order never affects the result.
    ///
    /// Fails without a partial result when an expense references a member
    /// outside the roster, carries a negative amount, or (strict mode) has
    /// splits that do not sum to its total.
    pub fn compute_balances(
        &self,
        expenses: &[Expense],
        members: &[MemberId],
    ) -> Result<MemberBalances, LedgerError> {
        let roster: FxHashSet<&MemberId> = members.iter().collect();
        let mut balances: MemberBalances = members
            .iter()
            .map(|member| (member.clone(), Money::ZERO))
            .collect();

        for expense in expenses {
            self.validate(expense, &roster)?;

            let payer_balance = balances
                .get_mut(&expense.paid_by)
                .ok_or_else(|| LedgerError::InvalidRosterReference {
                    member: expense.paid_by.clone(),
                })?;
            *payer_balance += expense.total_amount;

            for (member, share) in &expense.splits {
                let balance =
                    balances
                        .get_mut(member)
                        .ok_or_else(|| LedgerError::InvalidRosterReference {
                            member: member.clone(),
                        })?;
                *balance -= *share;
            }
        }

        tracing::debug!(
            member_count = members.len(),
            expense_count = expenses.len(),
            "balance computation finished"
        );

        Ok(balances)
    }

    fn validate(
        &self,
        expense: &Expense,
        roster: &FxHashSet<&MemberId>,
    ) -> Result<(), LedgerError> {
        if !roster.contains(&expense.paid_by) {
            tracing::error!(
                member = %expense.paid_by,
                "expense payer is outside the roster"
            );
            return Err(LedgerError::InvalidRosterReference {
                member: expense.paid_by.clone(),
            });
        }

        if expense.total_amount < Money::ZERO {
            return Err(LedgerError::NegativeAmount {
                member: expense.paid_by.clone(),
                amount: expense.total_amount,
            });
        }

        for (member, share) in &expense.splits {
            if !roster.contains(member) {
                tracing::error!(
                    member = %member,
                    "expense split references a member outside the roster"
                );
                return Err(LedgerError::InvalidRosterReference {
                    member: member.clone(),
                });
            }
            if *share < Money::ZERO {
                return Err(LedgerError::NegativeAmount {
                    member: member.clone(),
                    amount: *share,
                });
            }
        }

        if self.mode == ValidationMode::Strict {
            let split_total = expense.split_total();
            if (split_total - expense.total_amount).abs() > SETTLE_EPSILON {
                tracing::error!(
                    total_amount = %expense.total_amount,
                    split_total = %split_total,
                    "expense splits do not sum to the total"
                );
                return Err(LedgerError::UnbalancedExpense {
                    total_amount: expense.total_amount,
                    split_total,
                });
            }
        }

        Ok(())
    }
}
