//! Stateless, replayable pseudo-randomness for mixed-frequency actions.
use crate::Probability;
use crate::gameplay::GameState;
use sha2::Digest;
use sha2::Sha256;

/// Derives uniform rolls in `[0, 1)` from the identity of a decision
/// point (game, round, bet index, acting seat). The same snapshot always
/// rolls the same numbers; nothing is shared between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mixer {
    key: String,
}

impl Mixer {
    pub fn new(game_id: &str, round: i64, bet_index: i64, seat: crate::Seat) -> Self {
        Self {
            key: format!("{}-{}-{}-{}", game_id, round, bet_index, seat),
        }
    }
    pub fn key(&self) -> &str {
        &self.key
    }
    /// Uniform roll for this decision. Distinct salts give independent
    /// rolls; the empty salt hashes the bare key.
    pub fn roll(&self, salt: &str) -> Probability {
        let mut hasher = Sha256::new();
        hasher.update(self.key.as_bytes());
        if !salt.is_empty() {
            hasher.update(b"-");
            hasher.update(salt.as_bytes());
        }
        let digest = hasher.finalize();
        let lead = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
        lead as Probability / (u32::MAX as Probability + 1.0)
    }
    /// Gate an action that should fire with probability `p`.
    pub fn chance(&self, salt: &str, p: Probability) -> bool {
        self.roll(salt) < p
    }
}

impl From<&GameState> for Mixer {
    fn from(state: &GameState) -> Self {
        Self::new(&state.game_id, state.round, state.bet_index, state.in_action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = Mixer::new("g", 3, 7, 1);
        let b = Mixer::new("g", 3, 7, 1);
        assert!(a.roll("") == b.roll(""));
        assert!(a.roll("open") == b.roll("open"));
    }

    #[test]
    fn key_layout() {
        assert!(Mixer::new("", 0, 0, 2).key() == "-0-0-2");
    }

    #[test]
    fn salts_decorrelate() {
        let mixer = Mixer::new("g", 3, 7, 1);
        assert!(mixer.roll("open") != mixer.roll("bluff"));
    }

    #[test]
    fn half_open_unit_interval() {
        for round in 0..2_000 {
            let roll = Mixer::new("g", round, 0, 0).roll("");
            assert!((0.0..1.0).contains(&roll));
        }
    }

    #[test]
    fn roughly_uniform() {
        let n = 4_000;
        let hits = (0..n)
            .filter(|i| Mixer::new("uniform", *i, 0, 0).chance("", 0.25))
            .count();
        let rate = hits as f64 / n as f64;
        assert!((0.20..0.30).contains(&rate));
    }

    #[test]
    fn extremes() {
        let mixer = Mixer::new("g", 1, 1, 1);
        assert!(!mixer.chance("x", 0.0));
        assert!(mixer.chance("x", 1.0));
    }
}
