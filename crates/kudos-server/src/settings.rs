//! Server configuration: defaults, then `config.toml`, then `KUDOS_*`
//! environment variables.

use std::path::Path;

use anyhow::Context as _;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use kudos_core::{directory::User, fixtures::DEFAULT_ACTING_USER};
use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  /// Sender for submissions that do not name one.
  pub acting_user:     String,
  /// Load the demo kudos at startup.
  pub seed:            bool,
  /// When set, moderation requests must present this token.
  pub moderator_token: Option<String>,
  /// Roster override; empty means the built-in demo roster.
  #[serde(default)]
  pub users:           Vec<User>,
}

impl ServerConfig {
  /// Read `path` (optional) and the environment on top of the defaults.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    defaults()?
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("KUDOS"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  /// Parse a TOML document on top of the defaults, ignoring the environment.
  pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
    defaults()?
      .add_source(File::from_str(raw, FileFormat::Toml))
      .build()
      .context("failed to parse config")?
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
  Ok(
    Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("acting_user", DEFAULT_ACTING_USER)?
      .set_default("seed", true)?,
  )
}
