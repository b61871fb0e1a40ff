//! Test helpers: a scripted random source for exact-outcome assertions.

use crate::rng::RandomSource;
use std::collections::VecDeque;

/// Replays queued draws in order.
///
/// Unit draws and integer draws are separate queues because the games consume
/// them through different calls. An exhausted queue falls back to a midpoint
/// value (0.5) or zero so bounded fix-up loops in the generators stay finite.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    units: VecDeque<f64>,
    ints: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue of `[0, 1)` draws, consumed by `next_unit`/`chance`.
    pub fn with_units(units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            units: units.into_iter().collect(),
            ints: VecDeque::new(),
        }
    }

    pub fn push_unit(&mut self, value: f64) -> &mut Self {
        self.units.push_back(value);
        self
    }

    /// Queue an integer draw; it is reduced modulo the requested bound.
    pub fn push_int(&mut self, value: u32) -> &mut Self {
        self.ints.push_back(value);
        self
    }

    pub fn push_ints(&mut self, values: impl IntoIterator<Item = u32>) -> &mut Self {
        self.ints.extend(values);
        self
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.5)
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        self.ints.pop_front().map(|v| v % bound).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_order() {
        let mut rng = ScriptedRng::with_units([0.1, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        // exhausted: midpoint fallback
        assert_eq!(rng.next_unit(), 0.5);
    }

    #[test]
    fn test_int_modulo() {
        let mut rng = ScriptedRng::new();
        rng.push_int(40);
        assert_eq!(rng.next_below(37), 3);
        assert_eq!(rng.next_below(37), 0);
    }
}
