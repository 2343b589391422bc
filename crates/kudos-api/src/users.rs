//! Handlers for `/users` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/users` | Full roster in directory order |
//! | `GET`  | `/users/{id}/recipients` | Roster without `id` |

use axum::{
  Json,
  extract::{Path, State},
};
use kudos_core::{
  directory::{User, UserId},
  repository::KudosRepository,
};

use crate::AppState;

/// `GET /users`
pub async fn list<R>(State(state): State<AppState<R>>) -> Json<Vec<User>>
where
  R: KudosRepository + 'static,
{
  Json(state.directory.users().to_vec())
}

/// `GET /users/{id}/recipients`
pub async fn recipients<R>(
  State(state): State<AppState<R>>,
  Path(id): Path<UserId>,
) -> Json<Vec<User>>
where
  R: KudosRepository + 'static,
{
  Json(state.directory.recipients_for(&id).cloned().collect())
}
