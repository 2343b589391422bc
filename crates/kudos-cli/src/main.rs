//! `kudos`: command-line client for the kudos feed.
//!
//! # Usage
//!
//! ```
//! kudos feed
//! kudos send --to u2 "Thanks for the review!"
//! kudos --moderator-token secret moderation
//! kudos --moderator-token secret toggle k1
//! ```

mod client;
mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig, SendRequest};
use kudos_core::{
  ValidationError,
  directory::UserId,
  kudos::{KudosId, validate_message},
};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "kudos", about = "Send and moderate kudos")]
struct Args {
  /// Path to a TOML config file (url, user, moderator_token).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the kudos server (default: http://localhost:8080).
  #[arg(long, env = "KUDOS_URL")]
  url: Option<String>,

  /// Token presented to the moderation endpoints.
  #[arg(long, env = "KUDOS_MODERATOR_TOKEN")]
  moderator_token: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Show the public feed.
  Feed,
  /// Send kudos to a colleague.
  Send {
    /// Recipient user id.
    #[arg(long)]
    to: String,
    /// Sender user id; defaults to the config file's `user`, then the
    /// server's acting user.
    #[arg(long)]
    from: Option<String>,
    /// The message; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    message: Vec<String>,
  },
  /// List every kudos, hidden ones included.
  Moderation,
  /// Hide a visible kudos or restore a hidden one.
  Toggle {
    id: String,
  },
  /// List the roster.
  Users {
    /// Only show people this user can send kudos to.
    #[arg(long, value_name = "ID")]
    recipients_for: Option<String>,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:             String,
  #[serde(default)]
  user:            String,
  #[serde(default)]
  moderator_token: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url:        args
      .url
      .or_else(|| non_empty(&file_cfg.url))
      .unwrap_or_else(|| "http://localhost:8080".to_string()),
    moderator_token: args
      .moderator_token
      .or_else(|| non_empty(&file_cfg.moderator_token)),
  };
  let client = ApiClient::new(api_config)?;

  match args.command {
    Command::Feed => {
      print!("{}", render::feed(&client.feed().await?));
    }
    Command::Send { to, from, message } => {
      let message = message.join(" ");
      let request = build_send(to, from.or_else(|| non_empty(&file_cfg.user)), message)?;
      let sent = client.send(&request).await?;
      println!("Kudos sent successfully!\n");
      print!("{}", render::feed_card(&sent));
    }
    Command::Moderation => {
      print!("{}", render::moderation_table(&client.moderation_list().await?));
    }
    Command::Toggle { id } => {
      let entry = client.toggle(&KudosId::new(id)).await?;
      println!("{} is now {}", entry.kudos.id, entry.kudos.status());
    }
    Command::Users { recipients_for } => {
      let users = match recipients_for {
        Some(id) => client.recipients(&UserId::new(id)).await?,
        None => client.list_users().await?,
      };
      print!("{}", render::users(&users));
    }
  }

  Ok(())
}

fn non_empty(s: &str) -> Option<String> {
  (!s.is_empty()).then(|| s.to_owned())
}

/// Apply the store's rules locally so an invalid request is never sent.
fn build_send(to: String, from: Option<String>, message: String) -> Result<SendRequest> {
  let receiver_id = UserId::new(to);
  if receiver_id.is_blank() {
    bail!(ValidationError::MissingRecipient);
  }

  let (counter, near_limit) = render::char_counter(message.trim());
  if near_limit {
    tracing::warn!("message length {counter}");
  }
  let message = validate_message(&message)?.to_owned();

  Ok(SendRequest {
    sender_id: from.map(UserId::new),
    receiver_id,
    message,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn build_send_trims_and_keeps_sender() {
    let req = build_send("u2".into(), Some("u3".into()), "  hi there ".into()).unwrap();
    assert_eq!(req.receiver_id.as_str(), "u2");
    assert_eq!(req.sender_id.unwrap().as_str(), "u3");
    assert_eq!(req.message, "hi there");
  }

  #[test]
  fn build_send_rejects_blank_recipient() {
    let err = build_send(" ".into(), None, "hello".into()).unwrap_err();
    assert!(err.to_string().contains("recipient"));
  }

  #[test]
  fn build_send_rejects_bad_messages() {
    assert!(build_send("u2".into(), None, "   ".into()).is_err());
    assert!(build_send("u2".into(), None, "a".repeat(501)).is_err());
  }

  #[test]
  fn args_parse_send() {
    let args = Args::try_parse_from(["kudos", "send", "--to", "u2", "great", "job"]).unwrap();
    match args.command {
      Command::Send { to, from, message } => {
        assert_eq!(to, "u2");
        assert!(from.is_none());
        assert_eq!(message.join(" "), "great job");
      }
      other => panic!("unexpected command {other:?}"),
    }
  }
}
