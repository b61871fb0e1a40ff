//! Player session: the client-side view of one user's play.
//!
//! The session's balance is a prediction of the ledger value, overwritten by
//! whatever the ledger returns at settlement (reconciliation, not merge).
//! Every degraded path (unreachable ledger at startup, failed settlement,
//! failed settings fetch) falls back to local state with a warning so play
//! is never blocked.

use crate::ledger::LedgerBackend;
use chiprush_engine::{BoosterError, BoosterSlot, GameRegistry, GameRound};
use chiprush_types::{Booster, GameId, SettlementRecord, UserIdentity, STARTING_BALANCE};

/// One user's session over a ledger backend.
pub struct PlayerSession<L> {
    user: UserIdentity,
    ledger: L,
    balance: u64,
    booster: BoosterSlot,
    registry: GameRegistry,
}

impl<L: LedgerBackend> PlayerSession<L> {
    /// Initialize against the ledger. If `init_user` fails, play continues
    /// from the local starting balance.
    pub async fn connect(ledger: L, user: UserIdentity) -> Self {
        let balance = match ledger.init_user(&user).await {
            Ok(balance) => balance,
            Err(err) => {
                tracing::warn!(%err, "init_user failed; assigning local starting balance");
                STARTING_BALANCE
            }
        };
        let mut session = Self {
            user,
            ledger,
            balance,
            booster: BoosterSlot::default(),
            registry: GameRegistry::new(),
        };
        session.load_settings().await;
        session
    }

    /// Fetch the settings rows into the registry; defaults cover any gap.
    pub async fn load_settings(&mut self) {
        match self.ledger.fetch_settings().await {
            Ok(rows) => {
                let accepted = self.registry.load_settings(rows);
                tracing::debug!(accepted, "game settings loaded");
            }
            Err(err) => {
                tracing::warn!(%err, "settings fetch failed; using defaults");
            }
        }
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    /// The displayed balance (a prediction until the ledger confirms).
    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    /// A fresh round driver for `game` with the session's settings.
    pub fn round(&self, game: GameId) -> GameRound {
        GameRound::new(self.registry.settings_for(game))
    }

    /// Arm a booster for the next settled round.
    pub fn activate_booster(&mut self, booster: Booster) -> Result<(), BoosterError> {
        self.booster.activate(booster)
    }

    pub fn active_booster(&self) -> Option<&Booster> {
        self.booster.active()
    }

    /// Report a settled round to the ledger.
    ///
    /// Applies the active booster, moves the balance to the optimistic
    /// prediction, then reconciles from the ledger's response. On failure the
    /// prediction stands and no error reaches the caller. Returns the
    /// displayed balance.
    pub async fn report(&mut self, mut record: SettlementRecord) -> u64 {
        self.booster.apply(&mut record);
        self.balance = record.predicted_balance(self.balance);
        match self.ledger.finish_game(self.user.id, &record).await {
            Ok(Some(server_balance)) => {
                self.balance = server_balance;
            }
            Ok(None) => {
                tracing::debug!("ledger returned no balance; keeping prediction");
            }
            Err(err) => {
                tracing::warn!(%err, "settlement failed; keeping predicted balance");
            }
        }
        self.balance
    }
}
