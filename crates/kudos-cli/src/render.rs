//! Plain-text rendering of feed cards, the moderation table and the message
//! counter.

use std::fmt::Write as _;

use kudos_core::{
  directory::User,
  feed::{FEED_EMPTY_TEXT, FeedEntry},
  kudos::{MAX_MESSAGE_CHARS, MESSAGE_WARN_CHARS},
};

/// Width of the message column in the moderation table.
const MESSAGE_COLUMN: usize = 48;

// ─── Feed ─────────────────────────────────────────────────────────────────────

/// One card of the public feed.
pub fn feed_card(entry: &FeedEntry) -> String {
  let initial = entry.receiver_initial().unwrap_or('?');
  format!(
    "[{initial}] {} gave kudos to {}\n    {}\n    \"{}\"\n",
    entry.sender_name,
    entry.receiver_name,
    entry.kudos.created_at.format("%Y-%m-%d"),
    entry.kudos.message,
  )
}

pub fn feed(entries: &[FeedEntry]) -> String {
  if entries.is_empty() {
    return format!("{FEED_EMPTY_TEXT}\n");
  }
  entries
    .iter()
    .map(feed_card)
    .collect::<Vec<_>>()
    .join("\n")
}

// ─── Moderation ───────────────────────────────────────────────────────────────

/// One row of the moderation table: id, from → to, status, message.
pub fn moderation_row(entry: &FeedEntry) -> String {
  format!(
    "{:<12} {} → {:<24} {:<8} {}",
    entry.kudos.id.as_str(),
    entry.sender_name,
    entry.receiver_name,
    entry.kudos.status().to_string(),
    truncate(&entry.kudos.message, MESSAGE_COLUMN),
  )
}

pub fn moderation_table(entries: &[FeedEntry]) -> String {
  let mut out = String::new();
  for entry in entries {
    let _ = writeln!(out, "{}", moderation_row(entry));
  }
  out
}

/// Cut `s` to at most `max` characters, marking the cut with an ellipsis.
fn truncate(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    return s.to_owned();
  }
  let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
  cut.push('…');
  cut
}

// ─── Users ────────────────────────────────────────────────────────────────────

pub fn users(users: &[User]) -> String {
  let mut out = String::new();
  for u in users {
    let _ = writeln!(out, "{:<6} {:<20} {}", u.id.as_str(), u.name, u.role);
  }
  out
}

// ─── Counter ──────────────────────────────────────────────────────────────────

/// `"<chars>/500"` and whether the author is close to the limit.
pub fn char_counter(message: &str) -> (String, bool) {
  let chars = message.chars().count();
  (
    format!("{chars}/{MAX_MESSAGE_CHARS}"),
    chars > MESSAGE_WARN_CHARS,
  )
}
