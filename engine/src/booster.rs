//! Booster application at settlement time.
//!
//! A booster modifies the settlement record after the outcome is computed and
//! before the report goes out: win multipliers scale a winning round's payout,
//! insurance refunds part of the stake on a loss. At most one booster is
//! active; when it is cleared is a policy parameter (see
//! [`ConsumePolicy`](chiprush_types::ConsumePolicy)).

use chiprush_types::{Booster, BoosterEffect, ConsumePolicy, SettlementRecord};
use std::fmt;

/// Errors from booster slot operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoosterError {
    /// A booster is already active; it must be consumed first.
    AlreadyActive { id: &'static str },
}

impl fmt::Display for BoosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyActive { id } => write!(f, "booster already active: {id}"),
        }
    }
}

impl std::error::Error for BoosterError {}

/// The account's single booster slot.
#[derive(Clone, Debug, Default)]
pub struct BoosterSlot {
    active: Option<Booster>,
    policy: ConsumePolicy,
}

impl BoosterSlot {
    pub fn new(policy: ConsumePolicy) -> Self {
        Self {
            active: None,
            policy,
        }
    }

    pub fn active(&self) -> Option<&Booster> {
        self.active.as_ref()
    }

    /// Arm a booster for the next round.
    pub fn activate(&mut self, booster: Booster) -> Result<(), BoosterError> {
        if let Some(current) = &self.active {
            return Err(BoosterError::AlreadyActive { id: current.id });
        }
        self.active = Some(booster);
        Ok(())
    }

    /// Apply the active booster to a settlement record. Returns the consumed
    /// booster, if any was cleared by the configured policy.
    pub fn apply(&mut self, record: &mut SettlementRecord) -> Option<Booster> {
        let booster = self.active?;
        let applied = match booster.effect {
            BoosterEffect::WinMultiplier(factor) if record.win > 0 => {
                record.win = (record.win as f64 * factor).round() as u64;
                record.coefficient *= factor;
                true
            }
            BoosterEffect::LossInsurance(fraction) if record.win == 0 => {
                record.win = (record.bet as f64 * fraction).round() as u64;
                record.coefficient = fraction;
                true
            }
            _ => false,
        };
        if applied {
            tracing::debug!(id = booster.id, win = record.win, "booster applied");
        }
        let consume = match self.policy {
            ConsumePolicy::Always => true,
            ConsumePolicy::OnEffect => applied,
        };
        if consume {
            self.active.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chiprush_types::GameId;

    fn win_record() -> SettlementRecord {
        SettlementRecord {
            game: GameId::Dice,
            bet: 100,
            win: 196,
            coefficient: 1.96,
        }
    }

    fn loss_record() -> SettlementRecord {
        SettlementRecord {
            game: GameId::Dice,
            bet: 100,
            win: 0,
            coefficient: 0.0,
        }
    }

    fn booster(id: &str) -> Booster {
        Booster::by_id(id).expect("catalog booster")
    }

    #[test]
    fn test_win_multiplier_scales_payout() {
        let mut slot = BoosterSlot::default();
        slot.activate(booster("x3_win")).unwrap();

        let mut record = win_record();
        let consumed = slot.apply(&mut record);
        assert_eq!(record.win, 588);
        assert!((record.coefficient - 5.88).abs() < 1e-9);
        assert_eq!(consumed.map(|b| b.id), Some("x3_win"));
        assert!(slot.active().is_none());
    }

    #[test]
    fn test_win_booster_consumed_on_loss_by_default() {
        // The shipped policy: the slot empties even when the effect never
        // fired.
        let mut slot = BoosterSlot::default();
        slot.activate(booster("x2_win")).unwrap();

        let mut record = loss_record();
        let consumed = slot.apply(&mut record);
        assert_eq!(record.win, 0);
        assert!(consumed.is_some());
        assert!(slot.active().is_none());
    }

    #[test]
    fn test_on_effect_policy_keeps_unused_booster() {
        let mut slot = BoosterSlot::new(ConsumePolicy::OnEffect);
        slot.activate(booster("x2_win")).unwrap();

        let mut record = loss_record();
        assert!(slot.apply(&mut record).is_none());
        assert!(slot.active().is_some(), "unused booster must persist");

        let mut record = win_record();
        assert!(slot.apply(&mut record).is_some());
        assert_eq!(record.win, 392);
        assert!(slot.active().is_none());
    }

    #[test]
    fn test_insurance_refunds_fraction_on_loss() {
        let mut slot = BoosterSlot::default();
        slot.activate(booster("insurance_50")).unwrap();

        let mut record = loss_record();
        slot.apply(&mut record);
        assert_eq!(record.win, 50);
        assert!((record.coefficient - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_full_insurance_returns_stake() {
        let mut slot = BoosterSlot::default();
        slot.activate(booster("insurance_100")).unwrap();

        let mut record = loss_record();
        slot.apply(&mut record);
        assert_eq!(record.win, 100);
    }

    #[test]
    fn test_insurance_leaves_wins_alone() {
        let mut slot = BoosterSlot::default();
        slot.activate(booster("insurance_50")).unwrap();

        let mut record = win_record();
        let consumed = slot.apply(&mut record);
        assert_eq!(record.win, 196);
        // Always policy: consumed even without effect.
        assert!(consumed.is_some());
    }

    #[test]
    fn test_second_activation_rejected() {
        let mut slot = BoosterSlot::default();
        slot.activate(booster("x2_win")).unwrap();
        assert_eq!(
            slot.activate(booster("x5_win")),
            Err(BoosterError::AlreadyActive { id: "x2_win" })
        );
    }

    #[test]
    fn test_empty_slot_is_a_no_op() {
        let mut slot = BoosterSlot::default();
        let mut record = win_record();
        assert!(slot.apply(&mut record).is_none());
        assert_eq!(record, win_record());
    }
}
