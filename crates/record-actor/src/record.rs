//! # Record Trait
//!
//! The [`Record`] trait is the contract a wire record must satisfy to be stored by a
//! [`RecordActor`](crate::RecordActor). Records carry their own business identifiers, which
//! are not required to be unique or even present, so the actor keys its store by a
//! [`RowId`] it assigns itself.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Store-assigned identifier of a record inside one actor.
///
/// Row ids grow monotonically, so ordering by `RowId` is insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u32);

impl From<u32> for RowId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row_{}", self.0)
    }
}

/// Trait that any record must implement to be managed by a `RecordActor`.
///
/// [`Record::on_insert`] runs before the record enters the store. Returning an error
/// rejects the record and leaves the store untouched. It defaults to `Ok(())`.
#[async_trait]
pub trait Record: Clone + Send + Sync + Debug + 'static {
    /// The error type for this record. Boxed into
    /// [`FrameworkError::Rejected`](crate::FrameworkError::Rejected) when validation fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called before the record is inserted.
    async fn on_insert(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
