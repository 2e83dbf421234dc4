//! Payment cycle repository port.
//!
//! Cycle writes touch two tables: the cycle row itself and the `paid` flag of
//! every log it references. Implementations must apply both changes as one
//! unit so a failure cannot leave logs flagged for a cycle that was never
//! stored (or the reverse).

use async_trait::async_trait;

use crate::domain::foundation::{CycleId, DomainError};
use crate::domain::{Cycle, CycleFields, CycleWithClient};

/// Repository port for cycle rows.
#[async_trait]
pub trait CycleRepository: Send + Sync {
    /// List every cycle with its client name, newest date first.
    async fn list_with_client(&self) -> Result<Vec<CycleWithClient>, DomainError>;

    /// Insert a cycle and set `paid = true` on every log it references.
    async fn create_and_mark_paid(&self, fields: &CycleFields) -> Result<Cycle, DomainError>;

    /// Whether a cycle with the given id is stored.
    async fn exists(&self, id: CycleId) -> Result<bool, DomainError>;

    /// Replace every writable column of a cycle.
    ///
    /// Paid flags are not touched, even when `log_ids` changes.
    async fn update(
        &self,
        id: CycleId,
        fields: &CycleFields,
    ) -> Result<Option<Cycle>, DomainError>;

    /// Set `paid = false` on the cycle's logs, then delete the cycle.
    ///
    /// Returns `false` when the cycle did not exist, in which case nothing
    /// changes.
    async fn delete_and_unmark_paid(&self, id: CycleId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CycleRepository) {}
    }
}
