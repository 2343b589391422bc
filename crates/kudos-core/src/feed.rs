//! Display-ready kudos with sender and receiver names resolved.

use serde::{Deserialize, Serialize};

use crate::{directory::Directory, kudos::KudosMessage};

/// Shown in place of the feed when nothing is visible.
pub const FEED_EMPTY_TEXT: &str = "No kudos yet. Be the first!";

/// A kudos record paired with the names it should be rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
  #[serde(flatten)]
  pub kudos:         KudosMessage,
  pub sender_name:   String,
  pub receiver_name: String,
}

impl FeedEntry {
  /// Resolve names through `directory`; unknown ids become "Unknown".
  pub fn resolve(directory: &Directory, kudos: KudosMessage) -> Self {
    Self {
      sender_name: directory.lookup_name(&kudos.sender_id).to_owned(),
      receiver_name: directory.lookup_name(&kudos.receiver_id).to_owned(),
      kudos,
    }
  }

  pub fn resolve_all(
    directory: &Directory,
    kudos: impl IntoIterator<Item = KudosMessage>,
  ) -> Vec<Self> {
    kudos
      .into_iter()
      .map(|k| Self::resolve(directory, k))
      .collect()
  }

  /// Avatar letter for the card.
  pub fn receiver_initial(&self) -> Option<char> {
    self.receiver_name.chars().next()
  }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::directory::User;

  fn kudos(sender: &str, receiver: &str) -> KudosMessage {
    KudosMessage {
      id:           "k1".into(),
      sender_id:    sender.into(),
      receiver_id:  receiver.into(),
      message:      "Thanks!".into(),
      is_visible:   true,
      created_at:   Utc::now(),
      moderated_at: None,
    }
  }

  #[test]
  fn resolves_names_with_fallback() {
    let dir = Directory::new(vec![User::new("u1", "Sarah Chen", "Engineer")]);
    let entry = FeedEntry::resolve(&dir, kudos("u1", "gone"));
    assert_eq!(entry.sender_name, "Sarah Chen");
    assert_eq!(entry.receiver_name, "Unknown");
    assert_eq!(entry.receiver_initial(), Some('U'));
  }

  #[test]
  fn serialises_flat() {
    let dir = Directory::new(vec![User::new("u2", "James Wilson", "Designer")]);
    let entry = FeedEntry::resolve(&dir, kudos("u1", "u2"));
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], "k1");
    assert_eq!(json["receiver_name"], "James Wilson");

    let back: FeedEntry = serde_json::from_value(json).unwrap();
    assert_eq!(back, entry);
  }
}
