//! Ledger backend: the external balance authority.
//!
//! Three calls cover the whole surface: `init_user` (auth/registration,
//! returns the authoritative balance), `finish_game` (per-round settlement,
//! returns the new balance or nothing), and the `game_settings` read. The
//! HTTP implementation targets the hosted Postgres RPC endpoints; the trait
//! exists so sessions can run against an in-memory ledger in tests.

use crate::{LedgerError, Result};
use chiprush_types::{GameSettings, SettlementRecord, UserIdentity};
use serde_json::{json, Value};
use url::Url;

/// The external ledger contract.
///
/// Async methods resolve on the caller's runtime; implementations must not
/// retry internally; the session's failure policy is to keep its optimistic
/// state, not to block play.
#[allow(async_fn_in_trait)]
pub trait LedgerBackend {
    /// Register or refresh a user; returns the authoritative balance.
    async fn init_user(&self, user: &UserIdentity) -> Result<u64>;

    /// Report a settled round; returns the new balance when the ledger
    /// provides one.
    async fn finish_game(&self, user_id: i64, record: &SettlementRecord) -> Result<Option<u64>>;

    /// Read the per-game settings rows.
    async fn fetch_settings(&self) -> Result<Vec<GameSettings>>;
}

/// HTTP implementation against the hosted RPC endpoints.
///
/// `base` must be the project origin (e.g. `https://xyz.supabase.co/`); the
/// REST paths are joined onto it.
#[derive(Clone, Debug)]
pub struct SupabaseLedger {
    http: reqwest::Client,
    base: Url,
    api_key: String,
}

impl SupabaseLedger {
    pub fn new(base: &str, api_key: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: Url::parse(base)?,
            api_key: api_key.to_string(),
        })
    }

    async fn post_rpc(&self, name: &str, body: &Value) -> Result<Value> {
        let url = self.base.join(&format!("rest/v1/rpc/{name}"))?;
        let response = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::FailedWithBody { status, body });
        }
        Ok(response.json().await?)
    }

    fn balance_from(value: &Value) -> Option<u64> {
        value.as_f64().map(|b| b.max(0.0).round() as u64)
    }
}

impl LedgerBackend for SupabaseLedger {
    async fn init_user(&self, user: &UserIdentity) -> Result<u64> {
        let body = json!({
            "p_telegram_id": user.id,
            "p_username": user.username,
            "p_first_name": user.first_name,
            "p_photo_url": user.photo_url,
        });
        let value = self.post_rpc("init_user", &body).await?;
        value
            .get("balance")
            .and_then(Self::balance_from)
            .ok_or_else(|| LedgerError::UnexpectedResponse(value.to_string()))
    }

    async fn finish_game(&self, user_id: i64, record: &SettlementRecord) -> Result<Option<u64>> {
        let body = json!({
            "p_telegram_id": user_id,
            "p_game": record.game.ledger_label(),
            "p_bet": record.bet,
            "p_win": record.win,
            "p_coefficient": record.coefficient,
        });
        let value = self.post_rpc("finish_game", &body).await?;
        // The RPC returns the new balance as a bare number, or null.
        Ok(Self::balance_from(&value))
    }

    async fn fetch_settings(&self) -> Result<Vec<GameSettings>> {
        let url = self.base.join("rest/v1/game_settings?select=*")?;
        let response = self
            .http
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::FailedWithBody { status, body });
        }
        // Rows for unknown games (or with malformed columns) are skipped so
        // one bad row cannot take down the whole table.
        let raw: Vec<Value> = response.json().await?;
        let mut rows = Vec::with_capacity(raw.len());
        for value in raw {
            match serde_json::from_value::<GameSettings>(value.clone()) {
                Ok(row) => rows.push(row),
                Err(err) => {
                    tracing::warn!(%err, row = %value, "skipping unparseable settings row");
                }
            }
        }
        Ok(rows)
    }
}
