//! Handlers for the public feed.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/kudos` | Visible kudos, newest first |
//! | `POST` | `/kudos` | Body: [`SendBody`]; returns 201 + the new [`FeedEntry`] |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use kudos_core::{
  directory::UserId,
  feed::FeedEntry,
  repository::KudosRepository,
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

// ─── Feed ─────────────────────────────────────────────────────────────────────

/// `GET /kudos`
pub async fn feed<R>(
  State(state): State<AppState<R>>,
) -> Result<Json<Vec<FeedEntry>>, ApiError>
where
  R: KudosRepository + 'static,
{
  let visible = state.store.read().await.list_visible()?;
  Ok(Json(FeedEntry::resolve_all(&state.directory, visible)))
}

// ─── Send ─────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /kudos`.
///
/// Missing fields are passed through as blanks so the store reports the
/// specific rule that was broken.
#[derive(Debug, Deserialize)]
pub struct SendBody {
  /// Defaults to the server's acting user.
  pub sender_id:   Option<UserId>,
  #[serde(default)]
  pub receiver_id: UserId,
  #[serde(default)]
  pub message:     String,
}

/// `POST /kudos`
pub async fn send<R>(
  State(state): State<AppState<R>>,
  Json(body): Json<SendBody>,
) -> Result<impl IntoResponse, ApiError>
where
  R: KudosRepository + 'static,
{
  let sender = body.sender_id.unwrap_or_else(|| state.acting_user.clone());
  let sent = state
    .store
    .write()
    .await
    .send(sender, body.receiver_id, &body.message)
    .inspect_err(|e| tracing::debug!(error = %e, "kudos rejected"))?;

  tracing::info!(
    kudos_id = %sent.id,
    sender = %sent.sender_id,
    receiver = %sent.receiver_id,
    "kudos sent"
  );
  Ok((
    StatusCode::CREATED,
    Json(FeedEntry::resolve(&state.directory, sent)),
  ))
}
