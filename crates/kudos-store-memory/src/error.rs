//! Error type for `kudos-store-memory`.

use kudos_core::kudos::KudosId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// An id generator handed out an id that is already stored.
  #[error("kudos id already in use: {0}")]
  DuplicateId(KudosId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
