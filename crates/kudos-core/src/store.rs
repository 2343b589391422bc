//! [`KudosStore`]: the only way to create or moderate kudos.
//!
//! Callers never touch records directly: submissions go through
//! [`KudosStore::send`], which validates before anything is written, and
//! moderation goes through [`KudosStore::toggle_visibility`]. The store
//! performs no authorization; callers must gate moderation themselves.

use std::sync::Arc;

use crate::{
  Error, Result, ValidationError,
  clock::{Clock, SystemClock},
  directory::UserId,
  id::{IdGenerator, UuidIds},
  kudos::{KudosId, KudosMessage, validate_message},
  repository::KudosRepository,
};

pub struct KudosStore<R> {
  repo:  R,
  clock: Arc<dyn Clock>,
  ids:   Arc<dyn IdGenerator>,
}

impl<R: KudosRepository> KudosStore<R> {
  /// A store over `repo` using the wall clock and random ids.
  pub fn new(repo: R) -> Self {
    Self {
      repo,
      clock: Arc::new(SystemClock),
      ids: Arc::new(UuidIds),
    }
  }

  pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
    self.ids = ids;
    self
  }

  /// Load pre-existing records, given newest first. Intended for startup
  /// fixtures; records are stored as-is without validation.
  pub fn seed(&mut self, records: impl IntoIterator<Item = KudosMessage>) -> Result<()> {
    let records: Vec<_> = records.into_iter().collect();
    for record in records.into_iter().rev() {
      self.repo.append(record).map_err(repo_err)?;
    }
    Ok(())
  }

  // ── Writes ────────────────────────────────────────────────────────────

  /// Validate and record a new kudos, returning it. The record is visible
  /// immediately and becomes the head of the feed.
  ///
  /// Nothing is written if validation fails.
  pub fn send(
    &mut self,
    sender_id: UserId,
    receiver_id: UserId,
    message: &str,
  ) -> Result<KudosMessage> {
    if receiver_id.is_blank() {
      return Err(ValidationError::MissingRecipient.into());
    }
    let message = validate_message(message)?.to_owned();

    let record = KudosMessage {
      id: self.ids.new_id(),
      sender_id,
      receiver_id,
      message,
      is_visible: true,
      created_at: self.clock.now(),
      moderated_at: None,
    };
    self.repo.append(record.clone()).map_err(repo_err)?;
    Ok(record)
  }

  /// Flip the visibility of `id` and stamp the moderation time.
  ///
  /// Two calls restore the original visibility, but each call overwrites
  /// `moderated_at`.
  pub fn toggle_visibility(&mut self, id: &KudosId) -> Result<KudosMessage> {
    let now = self.clock.now();
    self
      .repo
      .update(id, |k| {
        k.is_visible = !k.is_visible;
        k.moderated_at = Some(now);
      })
      .map_err(repo_err)?
      .ok_or_else(|| Error::KudosNotFound(id.clone()))
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every record regardless of visibility, newest first.
  pub fn list_all(&self) -> Result<Vec<KudosMessage>> {
    self.repo.list_all().map_err(repo_err)
  }

  /// Records shown on the public feed, newest first.
  pub fn list_visible(&self) -> Result<Vec<KudosMessage>> {
    let mut all = self.list_all()?;
    all.retain(|k| k.is_visible);
    Ok(all)
  }
}

fn repo_err<E>(e: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  Error::Repository(Box::new(e))
}
