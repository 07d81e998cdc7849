use std::collections::HashMap;

use divvy_domain::{Expense, MemberId};
use thiserror::Error;

use crate::model::Group;

/// Failure of a backing roster or expense store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("group {0} not found")]
    GroupNotFound(String),
    #[error("backing store unavailable: {0}")]
    Unavailable(String),
}

/// Resolves a group identifier to its roster.
pub trait GroupProvider: Send + Sync {
    fn group(&self, group_id: &str) -> Result<Group, ProviderError>;
}

/// Returns the expense history of a group. No ordering is guaranteed; the
/// engine does not depend on order for correctness.
pub trait ExpenseProvider: Send + Sync {
    fn expenses(&self, group_id: &str) -> Result<Vec<Expense>, ProviderError>;
}

/// Maps member ids to display names for presentation.
pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member_id: &MemberId) -> Option<&str>;
}

impl MemberDirectory for HashMap<MemberId, String> {
    fn display_name(&self, member_id: &MemberId) -> Option<&str> {
        self.get(member_id).map(String::as_str)
    }
}
