use serde::Serialize;

/// What a booster does to the round it is applied to.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub enum BoosterEffect {
    /// Scale the win amount (and coefficient) by this factor on a win.
    WinMultiplier(f64),
    /// Refund this fraction of the bet on a loss.
    LossInsurance(f64),
}

/// A consumable account-scoped modifier. At most one is active at a time.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct Booster {
    pub id: &'static str,
    pub label: &'static str,
    /// Shop price in chips.
    pub cost: u64,
    pub effect: BoosterEffect,
}

impl Booster {
    const fn new(id: &'static str, label: &'static str, cost: u64, effect: BoosterEffect) -> Self {
        Self {
            id,
            label,
            cost,
            effect,
        }
    }

    /// The shop catalog.
    pub const CATALOG: [Booster; 5] = [
        Booster::new("x2_win", "Double Win", 500, BoosterEffect::WinMultiplier(2.0)),
        Booster::new("x3_win", "Triple Win", 1_500, BoosterEffect::WinMultiplier(3.0)),
        Booster::new("x5_win", "Super x5", 5_000, BoosterEffect::WinMultiplier(5.0)),
        Booster::new(
            "insurance_50",
            "Insurance 50%",
            200,
            BoosterEffect::LossInsurance(0.5),
        ),
        Booster::new(
            "insurance_100",
            "Insurance 100%",
            1_000,
            BoosterEffect::LossInsurance(1.0),
        ),
    ];

    /// Look up a catalog booster by id.
    pub fn by_id(id: &str) -> Option<Booster> {
        Self::CATALOG.iter().copied().find(|b| b.id == id)
    }
}

/// When an active booster is cleared.
///
/// The source left this undecided (a win booster arguably should survive a
/// loss round); it is a policy parameter here rather than a baked-in choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsumePolicy {
    /// Cleared after the first round it was active for, win or lose.
    #[default]
    Always,
    /// Cleared only once its effect actually applied.
    OnEffect,
}
