//! Error types for `kudos-core`.

use thiserror::Error;

use crate::kudos::KudosId;

/// Why a submission was rejected by [`crate::store::KudosStore::send`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("a recipient must be selected")]
  MissingRecipient,

  #[error("message must not be empty")]
  EmptyMessage,

  #[error("message is {chars} characters long; the limit is {max}")]
  MessageTooLong { chars: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid kudos: {0}")]
  Validation(#[from] ValidationError),

  #[error("kudos not found: {0}")]
  KudosNotFound(KudosId),

  #[error("repository error: {0}")]
  Repository(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
