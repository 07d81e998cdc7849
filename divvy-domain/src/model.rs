use std::{
    collections::BTreeMap,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use rust_decimal::{Decimal, RoundingStrategy};

/// Opaque identifier naming one participant of a group.
///
/// Ordered so that balance maps and tie-breaks iterate deterministically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Fixed-point monetary amount in the group's implicit single currency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

/// One cent, the threshold for all settlement comparisons. Absorbs drift
/// from float-formatted external input; internal arithmetic is exact.
pub const SETTLE_EPSILON: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(units: i64, scale: u32) -> Self {
        Self(Decimal::new(units, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Integer cents, half-up rounded beyond two decimal places.
    pub fn to_cents(self) -> i64 {
        let mut cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(2);
        cents.mantissa() as i64
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// -1, 0 or 1 by sign.
    pub fn signum(self) -> i64 {
        if self.0.is_zero() {
            0
        } else if self.0.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|money| money.0).sum())
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        Self(iter.map(|money| money.0).sum())
    }
}

/// Net position per member: positive = the group owes this member,
/// negative = this member owes the group. BTreeMap keyed by MemberId so
/// iteration order is stable across runs.
pub type MemberBalances = BTreeMap<MemberId, Money>;

/// One shared expense: fronted by `paid_by`, divided into per-member shares.
///
/// Members absent from `splits` owe nothing for this expense. The producer
/// is responsible for splits summing to the total; strict validation can be
/// requested from the balance calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub paid_by: MemberId,
    pub total_amount: Money,
    pub splits: BTreeMap<MemberId, Money>,
    pub description: Option<String>,
}

impl Expense {
    pub fn new(
        paid_by: MemberId,
        total_amount: Money,
        splits: impl IntoIterator<Item = (MemberId, Money)>,
    ) -> Self {
        Self {
            paid_by,
            total_amount,
            splits: splits.into_iter().collect(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Divides `total_amount` equally among `participants`, handing leftover
    /// cents one at a time to the front so the shares sum exactly to the
    /// total. Leftovers carry the sign of the total, so this holds for
    /// negative totals too (which validation rejects later regardless).
    /// No participants means no shares.
    pub fn split_evenly(
        paid_by: MemberId,
        total_amount: Money,
        participants: &[MemberId],
    ) -> Self {
        let mut splits = BTreeMap::new();

        if !participants.is_empty() {
            let count = participants.len() as i64;
            let total_cents = total_amount.to_cents();
            let base = total_cents / count;
            let leftover = total_cents % count;
            let remainder = leftover.unsigned_abs() as usize;

            for (idx, member) in participants.iter().enumerate() {
                let mut share = base;
                if idx < remainder {
                    share += leftover.signum();
                }
                splits.insert(member.clone(), Money::from_cents(share));
            }
        }

        Self {
            paid_by,
            total_amount,
            splits,
            description: None,
        }
    }

    /// Sum of the declared shares, as given; not re-derived from the total.
    pub fn split_total(&self) -> Money {
        self.splits.values().sum()
    }
}

/// One settlement instruction: `from` pays `to` exactly `amount`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}
