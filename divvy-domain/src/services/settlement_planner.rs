use crate::{
    error::LedgerError,
    model::{MemberBalances, MemberId, Money, Transfer, SETTLE_EPSILON},
};

/// Builds the minimal transfer list that settles a balance map.
///
/// Greedy minimum-cash-flow matching: largest creditor against largest
/// debtor until one side is exhausted. Optimal for the common case of few
/// offsetting balance clusters; a heuristic in general.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Emits point-to-point transfers that drive every balance to within
    /// epsilon of zero.
    ///
    /// The input must sum to zero within epsilon (the balance calculator
    /// guarantees this); otherwise `PreconditionViolation` is returned and
    /// no transfer list is produced. Members already within epsilon of zero
    /// take part in no transfer.
    pub fn plan_settlement(&self, balances: &MemberBalances) -> Result<Vec<Transfer>, LedgerError> {
        let residual: Money = balances.values().sum();
        if residual.abs() > SETTLE_EPSILON {
            tracing::error!(
                residual = %residual,
                member_count = balances.len(),
                "balance map does not sum to zero; refusing to plan"
            );
            return Err(LedgerError::PreconditionViolation { residual });
        }

        // Working copies; the input map is never mutated. BTreeMap iteration
        // is id-ordered and the sorts are stable, so equal balances keep a
        // deterministic relative order.
        let mut creditors: Vec<(&MemberId, Money)> = balances
            .iter()
            .filter(|(_, balance)| **balance > SETTLE_EPSILON)
            .map(|(member, balance)| (member, *balance))
            .collect();
        let mut debtors: Vec<(&MemberId, Money)> = balances
            .iter()
            .filter(|(_, balance)| **balance < -SETTLE_EPSILON)
            .map(|(member, balance)| (member, *balance))
            .collect();

        creditors.sort_by(|lhs, rhs| rhs.1.cmp(&lhs.1));
        debtors.sort_by(|lhs, rhs| lhs.1.cmp(&rhs.1));

        let mut transfers = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < debtors.len() && j < creditors.len() {
            let debt = debtors[i].1.abs();
            let credit = creditors[j].1;
            let amount = debt.min(credit);

            if amount > SETTLE_EPSILON {
                transfers.push(Transfer {
                    from: debtors[i].0.clone(),
                    to: creditors[j].0.clone(),
                    amount,
                });
            }

            debtors[i].1 += amount;
            creditors[j].1 -= amount;

            if debtors[i].1.abs() < SETTLE_EPSILON {
                i += 1;
            }
            if creditors[j].1 < SETTLE_EPSILON {
                j += 1;
            }
        }

        tracing::debug!(
            creditor_count = creditors.len(),
            debtor_count = debtors.len(),
            transfer_count = transfers.len(),
            "settlement plan constructed"
        );

        Ok(transfers)
    }
}
