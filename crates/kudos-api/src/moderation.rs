//! Handlers for `/moderation` endpoints and the gate in front of them.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/moderation/kudos` | Every kudos, hidden ones included |
//! | `POST` | `/moderation/kudos/{id}/toggle` | Hide or restore; 404 if unknown |
//!
//! The store performs no authorization of its own. Whether a request may
//! moderate is decided here by the configured [`ModerationGate`].

use axum::{
  Json,
  extract::{Path, State},
  http::HeaderMap,
};
use kudos_core::{
  feed::FeedEntry,
  kudos::KudosId,
  repository::KudosRepository,
};

use crate::{AppState, error::ApiError};

/// Header carrying the moderator token checked by [`HeaderGate`].
pub const MODERATOR_HEADER: &str = "x-kudos-moderator";

// ─── Gate ─────────────────────────────────────────────────────────────────────

/// Decides whether a request may use the moderation endpoints.
pub trait ModerationGate: Send + Sync {
  fn check(&self, headers: &HeaderMap) -> Result<(), ApiError>;
}

/// Admits every request, like switching to the admin tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl ModerationGate for OpenGate {
  fn check(&self, _headers: &HeaderMap) -> Result<(), ApiError> { Ok(()) }
}

/// Admits requests whose [`MODERATOR_HEADER`] equals a shared token.
#[derive(Debug, Clone)]
pub struct HeaderGate {
  token: String,
}

impl HeaderGate {
  pub fn new(token: impl Into<String>) -> Self {
    Self {
      token: token.into(),
    }
  }
}

impl ModerationGate for HeaderGate {
  fn check(&self, headers: &HeaderMap) -> Result<(), ApiError> {
    match headers.get(MODERATOR_HEADER).and_then(|v| v.to_str().ok()) {
      Some(given) if given == self.token => Ok(()),
      Some(_) => Err(ApiError::Forbidden("moderator token rejected".into())),
      None => Err(ApiError::Forbidden(format!("{MODERATOR_HEADER} header required"))),
    }
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /moderation/kudos`
pub async fn list<R>(
  State(state): State<AppState<R>>,
  headers: HeaderMap,
) -> Result<Json<Vec<FeedEntry>>, ApiError>
where
  R: KudosRepository + 'static,
{
  state.gate.check(&headers)?;
  let all = state.store.read().await.list_all()?;
  Ok(Json(FeedEntry::resolve_all(&state.directory, all)))
}

// ─── Toggle ───────────────────────────────────────────────────────────────────

/// `POST /moderation/kudos/{id}/toggle`
pub async fn toggle<R>(
  State(state): State<AppState<R>>,
  Path(id): Path<KudosId>,
  headers: HeaderMap,
) -> Result<Json<FeedEntry>, ApiError>
where
  R: KudosRepository + 'static,
{
  state.gate.check(&headers)?;
  let toggled = state.store.write().await.toggle_visibility(&id)?;

  tracing::info!(
    kudos_id = %toggled.id,
    status = %toggled.status(),
    "kudos moderated"
  );
  Ok(Json(FeedEntry::resolve(&state.directory, toggled)))
}
