use crate::GameId;
use serde::{Deserialize, Serialize};

/// The per-round report sent to the external balance ledger.
///
/// Emitted exactly once per completed round, including losses (`win == 0`),
/// and never for a round that was armed but not resolved.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SettlementRecord {
    pub game: GameId,
    pub bet: u64,
    pub win: u64,
    pub coefficient: f64,
}

impl SettlementRecord {
    /// The locally predicted balance after this round, applied while the
    /// ledger call is in flight (and kept if it fails).
    pub fn predicted_balance(&self, previous: u64) -> u64 {
        previous.saturating_sub(self.bet).saturating_add(self.win)
    }
}

/// Identity forwarded to the ledger's `init_user` call.
///
/// Guests get a synthetic id so play can continue without platform auth.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserIdentity {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub photo_url: String,
}

impl UserIdentity {
    pub fn new(id: i64, username: &str, first_name: &str, photo_url: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
            first_name: first_name.to_string(),
            photo_url: photo_url.to_string(),
        }
    }

    /// A guest profile for sessions without platform user data.
    pub fn guest(id: i64) -> Self {
        Self::new(id, "guest", "Guest Player", "")
    }
}
