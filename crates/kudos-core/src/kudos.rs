//! Kudos messages, the records held by the store.
//!
//! A message is created once by a send and afterwards only its visibility
//! flag and moderation stamp ever change. Hidden messages are never purged.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ValidationError, directory::UserId};

/// Upper bound on a message, counted in characters after trimming.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Length above which presentation layers should warn the author.
pub const MESSAGE_WARN_CHARS: usize = 450;

// ─── Identity ────────────────────────────────────────────────────────────────

/// Unique kudos identifier. Generated by an
/// [`IdGenerator`](crate::id::IdGenerator) at send time.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct KudosId(String);

impl KudosId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for KudosId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for KudosId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl From<String> for KudosId {
  fn from(s: String) -> Self { Self(s) }
}

// ─── Visibility ──────────────────────────────────────────────────────────────

/// Public display state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
  Public,
  Hidden,
}

impl fmt::Display for Visibility {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Public => "Public",
      Self::Hidden => "Hidden",
    })
  }
}

// ─── KudosMessage ────────────────────────────────────────────────────────────

/// A short public message of appreciation from one user to another.
///
/// `sender_id` and `receiver_id` are weak references into the
/// [`Directory`](crate::directory::Directory); they may dangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KudosMessage {
  pub id:           KudosId,
  pub sender_id:    UserId,
  pub receiver_id:  UserId,
  pub message:      String,
  pub is_visible:   bool,
  /// Set at creation; never changes.
  pub created_at:   DateTime<Utc>,
  /// Overwritten on every visibility toggle, in either direction.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub moderated_at: Option<DateTime<Utc>>,
}

impl KudosMessage {
  pub fn status(&self) -> Visibility {
    if self.is_visible {
      Visibility::Public
    } else {
      Visibility::Hidden
    }
  }
}

/// Check `message` against the length rules and return its trimmed form.
pub fn validate_message(message: &str) -> Result<&str, ValidationError> {
  let trimmed = message.trim();
  if trimmed.is_empty() {
    return Err(ValidationError::EmptyMessage);
  }
  let chars = trimmed.chars().count();
  if chars > MAX_MESSAGE_CHARS {
    return Err(ValidationError::MessageTooLong {
      chars,
      max: MAX_MESSAGE_CHARS,
    });
  }
  Ok(trimmed)
}
