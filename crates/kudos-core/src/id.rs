//! Kudos id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::kudos::KudosId;

/// Source of fresh kudos ids. Implementations must never repeat an id.
pub trait IdGenerator: Send + Sync {
  fn new_id(&self) -> KudosId;
}

/// Random ids of the form `k-<uuid v4>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
  fn new_id(&self) -> KudosId { KudosId::new(format!("k-{}", Uuid::new_v4())) }
}

/// Monotonic ids `k-1`, `k-2`, … Safe to share between threads.
#[derive(Debug)]
pub struct SequentialIds {
  next: AtomicU64,
}

impl SequentialIds {
  pub fn new() -> Self { Self::starting_at(1) }

  pub fn starting_at(first: u64) -> Self {
    Self {
      next: AtomicU64::new(first),
    }
  }
}

impl Default for SequentialIds {
  fn default() -> Self { Self::new() }
}

impl IdGenerator for SequentialIds {
  fn new_id(&self) -> KudosId {
    let n = self.next.fetch_add(1, Ordering::Relaxed);
    KudosId::new(format!("k-{n}"))
  }
}

#[cfg(test)]
mod tests {
  use std::{collections::HashSet, sync::Arc, thread};

  use super::*;

  #[test]
  fn sequential_ids_count_up() {
    let ids = SequentialIds::new();
    assert_eq!(ids.new_id().as_str(), "k-1");
    assert_eq!(ids.new_id().as_str(), "k-2");
  }

  #[test]
  fn sequential_ids_do_not_collide_across_threads() {
    let ids = Arc::new(SequentialIds::new());
    let handles: Vec<_> = (0..4)
      .map(|_| {
        let ids = Arc::clone(&ids);
        thread::spawn(move || (0..250).map(|_| ids.new_id()).collect::<Vec<_>>())
      })
      .collect();

    let mut seen = HashSet::new();
    for h in handles {
      for id in h.join().unwrap() {
        assert!(seen.insert(id), "duplicate id generated");
      }
    }
    assert_eq!(seen.len(), 1000);
  }

  #[test]
  fn uuid_ids_are_prefixed_and_distinct() {
    let a = UuidIds.new_id();
    let b = UuidIds.new_id();
    assert!(a.as_str().starts_with("k-"));
    assert_ne!(a, b);
  }
}
