//! The directory: a fixed roster of people who can send and receive kudos.
//!
//! The roster is loaded once at startup and never mutated. Every other part
//! of the system consults it only to turn ids into display names; it is not a
//! validation source.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name returned for ids that are not in the roster.
pub const UNKNOWN_USER_NAME: &str = "Unknown";

// ─── Identity ────────────────────────────────────────────────────────────────

/// Opaque user identifier, stable for the lifetime of the process.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  pub fn as_str(&self) -> &str { &self.0 }

  /// `true` when no user was selected (e.g. a blank form field).
  pub fn is_blank(&self) -> bool { self.0.trim().is_empty() }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for UserId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl From<String> for UserId {
  fn from(s: String) -> Self { Self(s) }
}

// ─── User ────────────────────────────────────────────────────────────────────

/// A member of the roster. `role` is display-only and never used for access
/// decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:   UserId,
  pub name: String,
  pub role: String,
}

impl User {
  pub fn new(
    id: impl Into<UserId>,
    name: impl Into<String>,
    role: impl Into<String>,
  ) -> Self {
    Self {
      id:   id.into(),
      name: name.into(),
      role: role.into(),
    }
  }
}

// ─── Directory ───────────────────────────────────────────────────────────────

/// Immutable, ordered roster of users.
#[derive(Debug, Clone, Default)]
pub struct Directory {
  users: Vec<User>,
}

impl Directory {
  pub fn new(users: Vec<User>) -> Self { Self { users } }

  /// All users in roster order.
  pub fn users(&self) -> &[User] { &self.users }

  pub fn get(&self, id: &UserId) -> Option<&User> {
    self.users.iter().find(|u| &u.id == id)
  }

  /// Resolve `id` to a display name, falling back to [`UNKNOWN_USER_NAME`].
  pub fn lookup_name(&self, id: &UserId) -> &str {
    self.get(id).map_or(UNKNOWN_USER_NAME, |u| u.name.as_str())
  }

  /// Everyone `sender` could address, in roster order.
  ///
  /// This only shapes recipient pickers; sending kudos to oneself is not
  /// rejected by the store.
  pub fn recipients_for<'a>(
    &'a self,
    sender: &'a UserId,
  ) -> impl Iterator<Item = &'a User> + 'a {
    self.users.iter().filter(move |u| &u.id != sender)
  }
}
