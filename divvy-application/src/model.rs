use divvy_domain::{MemberId, Money, Transfer};

/// A group roster as returned by the roster provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub name: String,
    members: Vec<MemberId>,
}

impl Group {
    /// Builds a group, de-duplicating the roster while preserving first
    /// appearance order.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        members: impl IntoIterator<Item = MemberId>,
    ) -> Self {
        let mut deduped: Vec<MemberId> = Vec::new();
        for member in members {
            if !deduped.contains(&member) {
                deduped.push(member);
            }
        }
        Self {
            id: id.into(),
            name: name.into(),
            members: deduped,
        }
    }

    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    pub fn contains(&self, member: &MemberId) -> bool {
        self.members.contains(member)
    }
}

/// One ordered balance row of a settlement report.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonBalance {
    pub id: MemberId,
    pub balance: Money,
}

/// The full outcome of settling one group: every member's net position and
/// the transfers that clear them.
#[derive(Clone, Debug, PartialEq)]
pub struct SettlementReport {
    pub balances: Vec<PersonBalance>,
    pub transfers: Vec<Transfer>,
}
