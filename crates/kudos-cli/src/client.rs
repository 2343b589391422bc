//! Async HTTP client wrapping the kudos JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use kudos_core::{
  directory::{User, UserId},
  feed::FeedEntry,
  kudos::KudosId,
};
use reqwest::{Client, Response};
use serde::Serialize;

/// Header the server checks before allowing moderation.
const MODERATOR_HEADER: &str = "x-kudos-moderator";

/// Connection settings for the kudos API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url:        String,
  pub moderator_token: Option<String>,
}

/// Body of `POST /api/kudos`.
#[derive(Debug, Serialize)]
pub struct SendRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sender_id:   Option<UserId>,
  pub receiver_id: UserId,
  pub message:     String,
}

/// Async HTTP client for the kudos JSON REST API.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  fn moderator(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match &self.config.moderator_token {
      Some(token) => req.header(MODERATOR_HEADER, token),
      None => req,
    }
  }

  // ── Directory ─────────────────────────────────────────────────────────────

  /// `GET /api/users`
  pub async fn list_users(&self) -> Result<Vec<User>> {
    let resp = self
      .client
      .get(self.url("/users"))
      .send()
      .await
      .context("GET /users failed")?;
    ensure_success(resp, "GET /users")
      .await?
      .json()
      .await
      .context("deserialising users")
  }

  /// `GET /api/users/{id}/recipients`
  pub async fn recipients(&self, sender: &UserId) -> Result<Vec<User>> {
    let path = format!("/users/{sender}/recipients");
    let resp = self
      .client
      .get(self.url(&path))
      .send()
      .await
      .with_context(|| format!("GET {path} failed"))?;
    ensure_success(resp, &format!("GET {path}"))
      .await?
      .json()
      .await
      .context("deserialising recipients")
  }

  // ── Feed ──────────────────────────────────────────────────────────────────

  /// `GET /api/kudos`
  pub async fn feed(&self) -> Result<Vec<FeedEntry>> {
    let resp = self
      .client
      .get(self.url("/kudos"))
      .send()
      .await
      .context("GET /kudos failed")?;
    ensure_success(resp, "GET /kudos")
      .await?
      .json()
      .await
      .context("deserialising feed")
  }

  /// `POST /api/kudos`
  pub async fn send(&self, body: &SendRequest) -> Result<FeedEntry> {
    tracing::debug!(receiver = %body.receiver_id, "sending kudos");
    let resp = self
      .client
      .post(self.url("/kudos"))
      .json(body)
      .send()
      .await
      .context("POST /kudos failed")?;
    ensure_success(resp, "POST /kudos")
      .await?
      .json()
      .await
      .context("deserialising sent kudos")
  }

  // ── Moderation ────────────────────────────────────────────────────────────

  /// `GET /api/moderation/kudos`
  pub async fn moderation_list(&self) -> Result<Vec<FeedEntry>> {
    let resp = self
      .moderator(self.client.get(self.url("/moderation/kudos")))
      .send()
      .await
      .context("GET /moderation/kudos failed")?;
    ensure_success(resp, "GET /moderation/kudos")
      .await?
      .json()
      .await
      .context("deserialising moderation list")
  }

  /// `POST /api/moderation/kudos/{id}/toggle`
  pub async fn toggle(&self, id: &KudosId) -> Result<FeedEntry> {
    let path = format!("/moderation/kudos/{id}/toggle");
    tracing::debug!(kudos_id = %id, "toggling visibility");
    let resp = self
      .moderator(self.client.post(self.url(&path)))
      .send()
      .await
      .with_context(|| format!("POST {path} failed"))?;
    ensure_success(resp, &format!("POST {path}"))
      .await?
      .json()
      .await
      .context("deserialising moderated kudos")
  }
}

/// Turn a non-2xx response into an error carrying the server's message.
async fn ensure_success(resp: Response, what: &str) -> Result<Response> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  let detail = resp
    .json::<serde_json::Value>()
    .await
    .ok()
    .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
    .unwrap_or_else(|| status.to_string());
  Err(anyhow!("{what} → {status}: {detail}"))
}
