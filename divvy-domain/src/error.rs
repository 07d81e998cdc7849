use thiserror::Error;

use crate::model::{MemberId, Money};

/// Validation and precondition failures of the settlement engine.
///
/// All of these are local, synchronous failures surfaced to the immediate
/// caller; nothing is retried and no partial balance map or transfer list
/// is returned alongside them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// An expense names a payer or split member outside the supplied roster.
    #[error("expense references member {member} not present in the roster")]
    InvalidRosterReference { member: MemberId },

    /// A negative total or split share; rejected before any arithmetic.
    #[error("negative amount {amount} for member {member}")]
    NegativeAmount { member: MemberId, amount: Money },

    /// Strict mode only: the declared shares do not sum to the total.
    #[error("expense splits sum to {split_total} but the total is {total_amount}")]
    UnbalancedExpense {
        total_amount: Money,
        split_total: Money,
    },

    /// Balances entering the planner do not sum to zero within epsilon.
    /// Indicates hand-built input that bypassed the balance calculator.
    #[error("balances sum to {residual} instead of zero")]
    PreconditionViolation { residual: Money },
}
