use std::borrow::Cow;

use divvy_application::{MemberDirectory, PersonBalance, SettlementReport};
use divvy_domain::{MemberId, Money, Transfer};

/// Renders a settlement report as human-readable lines.
///
/// Formatting, currency symbol and naming are entirely a presentation
/// concern; the engine never sees them.
pub struct SettlementPresenter {
    currency_symbol: String,
}

/// Balance rows and transfer rows, ready for display.
#[derive(Debug, PartialEq, Eq)]
pub struct SettlementView {
    pub balance_lines: Vec<String>,
    pub transfer_lines: Vec<String>,
}

impl Default for SettlementPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SettlementPresenter {
    pub fn new() -> Self {
        Self::with_currency("$")
    }

    pub fn with_currency(symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: symbol.into(),
        }
    }

    pub fn render(&self, report: &SettlementReport) -> SettlementView {
        let empty_directory = EmptyMemberDirectory;
        self.render_with_members(report, &empty_directory)
    }

    pub fn render_with_members(
        &self,
        report: &SettlementReport,
        member_directory: &dyn MemberDirectory,
    ) -> SettlementView {
        let balance_lines = self.build_balance_lines(&report.balances, member_directory);

        let mut transfers = report.transfers.clone();
        sort_transfers(&mut transfers);
        let transfer_lines = transfers
            .iter()
            .map(|transfer| self.build_transfer_line(transfer, member_directory))
            .collect();

        SettlementView {
            balance_lines,
            transfer_lines,
        }
    }

    fn build_balance_lines(
        &self,
        balances: &[PersonBalance],
        member_directory: &dyn MemberDirectory,
    ) -> Vec<String> {
        balances
            .iter()
            .map(|person| {
                let sign = if person.balance >= Money::ZERO { "+" } else { "-" };
                format!(
                    "{}  {sign}{}{}",
                    format_member_label(&person.id, member_directory),
                    self.currency_symbol,
                    format_amount(person.balance.abs()),
                )
            })
            .collect()
    }

    fn build_transfer_line(
        &self,
        transfer: &Transfer,
        member_directory: &dyn MemberDirectory,
    ) -> String {
        format!(
            "{} owes {} {}{}",
            format_member_label(&transfer.from, member_directory),
            format_member_label(&transfer.to, member_directory),
            self.currency_symbol,
            format_amount(transfer.amount),
        )
    }
}

struct EmptyMemberDirectory;

impl MemberDirectory for EmptyMemberDirectory {
    fn display_name(&self, _member_id: &MemberId) -> Option<&str> {
        None
    }
}

fn format_member_label<'a>(
    member_id: &'a MemberId,
    member_directory: &'a dyn MemberDirectory,
) -> Cow<'a, str> {
    match member_directory.display_name(member_id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Borrowed(member_id.as_str()),
    }
}

fn format_amount(amount: Money) -> String {
    format!("{:.2}", amount.as_decimal())
}

fn sort_transfers(transfers: &mut [Transfer]) {
    transfers.sort_by(|lhs, rhs| {
        let from_cmp = lhs.from.cmp(&rhs.from);
        if from_cmp != std::cmp::Ordering::Equal {
            return from_cmp;
        }
        let to_cmp = lhs.to.cmp(&rhs.to);
        if to_cmp != std::cmp::Ordering::Equal {
            return to_cmp;
        }
        lhs.amount.cmp(&rhs.amount)
    })
}
