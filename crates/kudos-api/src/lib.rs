//! JSON REST API for the kudos feed.
//!
//! Exposes an axum [`Router`] backed by a [`KudosStore`] over any
//! [`KudosRepository`]. TLS and transport concerns are the caller's
//! responsibility; moderation access is delegated to a
//! [`ModerationGate`](moderation::ModerationGate).
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", kudos_api::api_router(state))
//! ```

pub mod error;
pub mod kudos;
pub mod moderation;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use kudos_core::{
  directory::{Directory, UserId},
  repository::KudosRepository,
  store::KudosStore,
};
use tokio::sync::RwLock;

pub use error::ApiError;
use moderation::{ModerationGate, OpenGate};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
///
/// The store sits behind a single read/write lock: sends and toggles are
/// serialised, so concurrent sends never lose a record.
pub struct AppState<R> {
  pub store:       Arc<RwLock<KudosStore<R>>>,
  pub directory:   Arc<Directory>,
  /// Sender used when a `POST /kudos` body names none.
  pub acting_user: UserId,
  pub gate:        Arc<dyn ModerationGate>,
}

impl<R> Clone for AppState<R> {
  fn clone(&self) -> Self {
    Self {
      store:       Arc::clone(&self.store),
      directory:   Arc::clone(&self.directory),
      acting_user: self.acting_user.clone(),
      gate:        Arc::clone(&self.gate),
    }
  }
}

impl<R: KudosRepository> AppState<R> {
  /// State with an open moderation gate and no default sender.
  pub fn new(store: KudosStore<R>, directory: Directory) -> Self {
    Self {
      store:       Arc::new(RwLock::new(store)),
      directory:   Arc::new(directory),
      acting_user: UserId::default(),
      gate:        Arc::new(OpenGate),
    }
  }

  pub fn with_acting_user(mut self, user: UserId) -> Self {
    self.acting_user = user;
    self
  }

  pub fn with_gate(mut self, gate: Arc<dyn ModerationGate>) -> Self {
    self.gate = gate;
    self
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
pub fn api_router<R>(state: AppState<R>) -> Router<()>
where
  R: KudosRepository + 'static,
{
  Router::new()
    // Directory
    .route("/users", get(users::list::<R>))
    .route("/users/{id}/recipients", get(users::recipients::<R>))
    // Public feed
    .route("/kudos", get(kudos::feed::<R>).post(kudos::send::<R>))
    // Moderation
    .route("/moderation/kudos", get(moderation::list::<R>))
    .route("/moderation/kudos/{id}/toggle", post(moderation::toggle::<R>))
    .with_state(state)
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use chrono::Utc;
  use kudos_core::{feed::FeedEntry, fixtures, id::SequentialIds};
  use kudos_store_memory::MemoryRepository;
  use serde_json::Value;
  use tower::ServiceExt as _;

  use super::*;
  use crate::moderation::{HeaderGate, MODERATOR_HEADER};

  fn make_state() -> AppState<MemoryRepository> {
    let mut store = KudosStore::new(MemoryRepository::new())
      .with_ids(Arc::new(SequentialIds::new()));
    store.seed(fixtures::kudos(Utc::now())).unwrap();
    AppState::new(store, fixtures::directory())
      .with_acting_user(fixtures::default_acting_user())
  }

  async fn oneshot(
    state:   AppState<MemoryRepository>,
    method:  &str,
    uri:     &str,
    headers: Vec<(&str, &str)>,
    body:    Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (k, v) in headers {
      builder = builder.header(k, v);
    }
    let req = match body {
      Some(json) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };
    let resp = api_router(state).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let json = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
  }

  fn ids(json: &Value) -> Vec<String> {
    json
      .as_array()
      .unwrap()
      .iter()
      .map(|e| e["id"].as_str().unwrap().to_owned())
      .collect()
  }

  // ── Users ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn users_lists_roster() {
    let (status, json) = oneshot(make_state(), "GET", "/users", vec![], None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 4);
    assert_eq!(json[0]["name"], "Sarah Chen");
  }

  #[tokio::test]
  async fn recipients_exclude_the_sender() {
    let (status, json) =
      oneshot(make_state(), "GET", "/users/u1/recipients", vec![], None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = json
      .as_array()
      .unwrap()
      .iter()
      .map(|u| u["id"].as_str().unwrap())
      .collect();
    assert_eq!(ids, ["u2", "u3", "u4"]);
  }

  // ── Feed ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn feed_returns_seeded_kudos_with_names() {
    let (status, json) = oneshot(make_state(), "GET", "/kudos", vec![], None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), ["k1", "k2"]);
    assert_eq!(json[0]["sender_name"], "Sarah Chen");
    assert_eq!(json[0]["receiver_name"], "James Wilson");
  }

  #[tokio::test]
  async fn send_defaults_sender_and_heads_feed() {
    let state = make_state();
    let (status, json) = oneshot(
      state.clone(),
      "POST",
      "/kudos",
      vec![],
      Some(serde_json::json!({ "receiver_id": "u2", "message": "Nice work" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let sent: FeedEntry = serde_json::from_value(json).unwrap();
    assert_eq!(sent.kudos.sender_id.as_str(), "u1");
    assert_eq!(sent.receiver_name, "James Wilson");
    assert!(sent.kudos.is_visible);

    let (_, feed) = oneshot(state, "GET", "/kudos", vec![], None).await;
    assert_eq!(ids(&feed), ["k-1", "k1", "k2"]);
  }

  #[tokio::test]
  async fn send_without_recipient_is_422() {
    let state = make_state();
    let (status, json) = oneshot(
      state.clone(),
      "POST",
      "/kudos",
      vec![],
      Some(serde_json::json!({ "message": "hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("recipient"));

    let (_, feed) = oneshot(state, "GET", "/kudos", vec![], None).await;
    assert_eq!(feed.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn send_overlong_message_is_422() {
    let (status, _) = oneshot(
      make_state(),
      "POST",
      "/kudos",
      vec![],
      Some(serde_json::json!({ "receiver_id": "u2", "message": "a".repeat(501) })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  }

  // ── Moderation ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn toggle_hides_from_feed_but_not_moderation() {
    let state = make_state();
    let (status, json) = oneshot(
      state.clone(),
      "POST",
      "/moderation/kudos/k1/toggle",
      vec![],
      None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_visible"], false);
    assert!(json["moderated_at"].is_string());

    let (_, feed) = oneshot(state.clone(), "GET", "/kudos", vec![], None).await;
    assert_eq!(ids(&feed), ["k2"]);

    let (_, all) = oneshot(state, "GET", "/moderation/kudos", vec![], None).await;
    assert_eq!(ids(&all), ["k1", "k2"]);
  }

  #[tokio::test]
  async fn toggle_unknown_is_404() {
    let (status, json) = oneshot(
      make_state(),
      "POST",
      "/moderation/kudos/missing/toggle",
      vec![],
      None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("missing"));
  }

  #[tokio::test]
  async fn header_gate_blocks_without_token() {
    let state = make_state().with_gate(Arc::new(HeaderGate::new("s3cret")));

    let (status, _) =
      oneshot(state.clone(), "GET", "/moderation/kudos", vec![], None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = oneshot(
      state.clone(),
      "POST",
      "/moderation/kudos/k1/toggle",
      vec![(MODERATOR_HEADER, "wrong")],
      None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = oneshot(
      state,
      "POST",
      "/moderation/kudos/k1/toggle",
      vec![(MODERATOR_HEADER, "s3cret")],
      None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
  }

  #[tokio::test]
  async fn header_gate_leaves_public_feed_open() {
    let state = make_state().with_gate(Arc::new(HeaderGate::new("s3cret")));
    let (status, _) = oneshot(state, "GET", "/kudos", vec![], None).await;
    assert_eq!(status, StatusCode::OK);
  }
}
