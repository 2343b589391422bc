//! The `KudosRepository` trait: the storage seam under
//! [`KudosStore`](crate::store::KudosStore).
//!
//! Backends (e.g. `kudos-store-memory`) implement this; the store layers
//! validation, id generation and timestamps on top. A persistent backend
//! would slot in here without changing the store's contract.

use crate::kudos::{KudosId, KudosMessage};

pub trait KudosRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert `record` as the newest entry.
  fn append(&mut self, record: KudosMessage) -> Result<(), Self::Error>;

  /// Apply `mutator` to the record with `id` and return the updated copy.
  /// Returns `None`, leaving the repository untouched, if no record matches.
  fn update<F>(
    &mut self,
    id: &KudosId,
    mutator: F,
  ) -> Result<Option<KudosMessage>, Self::Error>
  where
    F: FnOnce(&mut KudosMessage);

  /// Every record, newest first.
  fn list_all(&self) -> Result<Vec<KudosMessage>, Self::Error>;
}
