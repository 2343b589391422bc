//! [`MemoryRepository`]: the in-memory implementation of
//! [`KudosRepository`].

use std::collections::VecDeque;

use kudos_core::{
  kudos::{KudosId, KudosMessage},
  repository::KudosRepository,
};

use crate::{Error, Result};

/// Kudos held newest-first in a deque, so sends are O(1) and lookups are a
/// linear scan.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
  records: VecDeque<KudosMessage>,
}

impl MemoryRepository {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

impl KudosRepository for MemoryRepository {
  type Error = Error;

  fn append(&mut self, record: KudosMessage) -> Result<()> {
    if self.records.iter().any(|k| k.id == record.id) {
      return Err(Error::DuplicateId(record.id));
    }
    self.records.push_front(record);
    Ok(())
  }

  fn update<F>(&mut self, id: &KudosId, mutator: F) -> Result<Option<KudosMessage>>
  where
    F: FnOnce(&mut KudosMessage),
  {
    Ok(self.records.iter_mut().find(|k| &k.id == id).map(|k| {
      mutator(k);
      k.clone()
    }))
  }

  fn list_all(&self) -> Result<Vec<KudosMessage>> {
    Ok(self.records.iter().cloned().collect())
  }
}
