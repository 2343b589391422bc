//! kudos-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), builds the
//! in-memory store, and serves the JSON API under `/api`.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use axum::Router;
use chrono::Utc;
use clap::Parser;
use kudos_api::{
  AppState,
  moderation::{HeaderGate, ModerationGate, OpenGate},
};
use kudos_core::{
  directory::{Directory, UserId},
  fixtures,
  store::KudosStore,
};
use kudos_store_memory::MemoryRepository;
use settings::ServerConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Kudos feed server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Start with an empty feed even if `seed = true`.
  #[arg(long)]
  no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let cfg = ServerConfig::load(&cli.config)?;

  let directory = if cfg.users.is_empty() {
    fixtures::directory()
  } else {
    Directory::new(cfg.users.clone())
  };

  let acting_user = UserId::new(cfg.acting_user.clone());
  if directory.get(&acting_user).is_none() {
    tracing::warn!(%acting_user, "acting user is not in the directory");
  }

  let mut store = KudosStore::new(MemoryRepository::new());
  if cfg.seed && !cli.no_seed {
    store
      .seed(fixtures::kudos(Utc::now()))
      .context("failed to seed kudos")?;
  }

  let gate: Arc<dyn ModerationGate> = match &cfg.moderator_token {
    Some(token) => Arc::new(HeaderGate::new(token.clone())),
    None => {
      tracing::warn!("no moderator_token configured; moderation is open");
      Arc::new(OpenGate)
    }
  };

  let state = AppState::new(store, directory)
    .with_acting_user(acting_user)
    .with_gate(gate);

  let app = Router::new()
    .nest("/api", kudos_api::api_router(state))
    .layer(TraceLayer::new_for_http());

  let address = cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
