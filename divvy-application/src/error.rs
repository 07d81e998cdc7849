use divvy_domain::LedgerError;
use thiserror::Error;

use crate::ports::ProviderError;

/// Everything that can stop a settlement report from being built.
///
/// Either the backing providers failed to supply the snapshot, or the
/// snapshot failed domain validation. In both cases no partial report is
/// returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettlementBuildError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
