//! Startup data: the demo roster and the two opening kudos.

use chrono::{DateTime, Duration, Utc};

use crate::{
  directory::{Directory, User, UserId},
  kudos::KudosMessage,
};

/// The user who sends kudos when a client does not name a sender.
pub const DEFAULT_ACTING_USER: &str = "u1";

pub fn users() -> Vec<User> {
  vec![
    User::new("u1", "Sarah Chen", "Engineer"),
    User::new("u2", "James Wilson", "Designer"),
    User::new("u3", "Alex Rivera", "Manager"),
    User::new("u4", "Jordan Smith", "Admin"),
  ]
}

pub fn directory() -> Directory { Directory::new(users()) }

pub fn default_acting_user() -> UserId { UserId::from(DEFAULT_ACTING_USER) }

/// Seed kudos relative to `now`, in store order (as passed to
/// [`KudosStore::seed`](crate::store::KudosStore::seed)).
pub fn kudos(now: DateTime<Utc>) -> Vec<KudosMessage> {
  vec![
    KudosMessage {
      id:           "k1".into(),
      sender_id:    "u1".into(),
      receiver_id:  "u2".into(),
      message:      "Great work on the UI redesign, James! The tokens look \
                     amazing."
        .into(),
      is_visible:   true,
      created_at:   now - Duration::seconds(1000),
      moderated_at: None,
    },
    KudosMessage {
      id:           "k2".into(),
      sender_id:    "u3".into(),
      receiver_id:  "u1".into(),
      message:      "Sarah, thanks for staying late to fix that critical bug."
        .into(),
      is_visible:   true,
      created_at:   now - Duration::seconds(500),
      moderated_at: None,
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_kudos_reference_roster_users() {
    let dir = directory();
    for k in kudos(Utc::now()) {
      assert!(dir.get(&k.sender_id).is_some());
      assert!(dir.get(&k.receiver_id).is_some());
      assert_ne!(k.sender_id, k.receiver_id);
    }
  }

  #[test]
  fn acting_user_is_in_roster() {
    assert_eq!(directory().lookup_name(&default_acting_user()), "Sarah Chen");
  }
}
