pub mod conservative;
pub use conservative::*;

pub mod error;
pub use error::*;

pub mod exploit;
pub use exploit::*;

pub mod headsup;
pub use headsup::*;

pub mod knobs;
pub use knobs::*;

pub mod positional;
pub use positional::*;

pub mod ranges;
pub use ranges::*;

pub mod selector;
pub use selector::*;

pub mod tuning;
pub use tuning::*;

mod postflop;
mod preflop;
mod pushfold;

use crate::Chips;
use crate::betting::Action;
use crate::betting::finalize;
use crate::gameplay::GameState;
use crate::gameplay::Spot;

/// A betting policy. Implementors only describe what they would like to
/// wager; legality, logging and error recovery live in the provided methods.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Desired wager before the legality gate. May be any integer.
    fn intent(&self, spot: &Spot) -> anyhow::Result<Chips>;

    /// Sees every finalized decision.
    fn witness(&self, _: &Spot, _: Chips) {}

    /// Sees the final snapshot of a finished hand.
    fn on_hand_complete(&self, _: &GameState) {}

    /// Legal wager for this snapshot, or the reason none could be computed.
    fn decide(&self, state: &GameState) -> anyhow::Result<Chips> {
        let spot = Spot::try_from(state)?;
        if spot.stack <= 0 {
            return Ok(0);
        }
        let intent = self.intent(&spot)?;
        let bet = finalize(intent, spot.to_call, spot.minimum_raise(), spot.stack);
        log::debug!(
            "{} {} intent {} -> {}",
            self.name(),
            spot,
            intent,
            Action::classify(bet, spot.to_call, spot.stack)
        );
        self.witness(&spot, bet);
        Ok(bet)
    }

    /// Legal wager for this snapshot. Never fails: anything that goes wrong
    /// while deciding becomes a fold (or a check when nothing is owed).
    fn decide_bet(&self, state: &GameState) -> Chips {
        match self.decide(state) {
            Ok(bet) => bet,
            Err(e) => {
                log::warn!("{} folding after error: {}", self.name(), e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::opponents::OpponentModel;
    use serde_json::json;
    use std::sync::Arc;

    fn every() -> Vec<Box<dyn Strategy>> {
        let selector = Selector::new(Arc::new(OpponentModel::default()));
        Kind::ALL
            .iter()
            .map(|k| selector.build(k.name(), &Overrides::new()).unwrap())
            .collect()
    }

    #[test]
    fn checked_to_aces_raise() {
        let state = serde_json::from_value::<GameState>(json!({
            "players": [
                {"name": "btn", "stack": 1000, "bet": 20},
                {"name": "sb", "stack": 1000, "bet": 20},
                {"name": "me", "stack": 1000, "bet": 20,
                 "hole_cards": [{"rank": "A", "suit": "s"}, {"rank": "A", "suit": "h"}]},
            ],
            "in_action": 2,
            "dealer": 0,
            "small_blind": 10,
            "big_blind": 20,
            "current_buy_in": 20,
            "minimum_raise": 20,
            "pot": 60,
        }))
        .unwrap();
        for strategy in every() {
            assert!(strategy.decide_bet(&state) >= 20, "{}", strategy.name());
        }
    }

    #[test]
    fn busted_stack_checks() {
        let state = serde_json::from_value::<GameState>(json!({
            "players": [
                {"name": "a", "stack": 1000, "bet": 40},
                {"name": "me", "stack": 0, "bet": 20,
                 "hole_cards": [{"rank": "K", "suit": "s"}, {"rank": "K", "suit": "h"}]},
            ],
            "in_action": 1,
            "small_blind": 10,
            "current_buy_in": 40,
            "minimum_raise": 20,
            "pot": 60,
        }))
        .unwrap();
        for strategy in every() {
            assert!(strategy.decide_bet(&state) == 0);
        }
    }

    #[test]
    fn broken_snapshots_fold() {
        let state = serde_json::from_value::<GameState>(json!({
            "players": [{"name": "a", "stack": 1000}],
            "in_action": 4,
        }))
        .unwrap();
        for strategy in every() {
            assert!(strategy.decide(&state).is_err());
            assert!(strategy.decide_bet(&state) == 0);
        }
        let empty = GameState::default();
        for strategy in every() {
            assert!(strategy.decide_bet(&empty) == 0);
        }
    }

    #[test]
    fn random_tables_get_legal_bets() {
        let strategies = every();
        for _ in 0..500 {
            let state = GameState::random();
            let spot = Spot::try_from(&state).unwrap();
            for strategy in strategies.iter() {
                let bet = strategy.decide_bet(&state);
                assert!(bet >= 0);
                assert!(bet <= spot.stack.max(0));
                assert!(bet == finalize(bet, spot.to_call, spot.minimum_raise(), spot.stack));
            }
        }
    }

    #[test]
    fn random_busted_stacks_never_bet() {
        let strategies = every();
        for _ in 0..300 {
            let mut state = GameState::random();
            let seat = state.in_action;
            state.players[seat].stack = 0;
            for strategy in strategies.iter() {
                assert!(strategy.decide_bet(&state) == 0, "{}", strategy.name());
            }
        }
    }

    #[test]
    fn enormous_numbers_stay_legal() {
        let huge = json!(6e18);
        let state = serde_json::from_value::<GameState>(json!({
            "players": [
                {"name": "a", "stack": huge, "bet": huge},
                {"name": "b", "stack": "9223372036854775807", "bet": 0},
                {"name": "me", "stack": huge, "bet": 0,
                 "hole_cards": [{"rank": "A", "suit": "s"}, {"rank": "A", "suit": "h"}]},
            ],
            "in_action": 2,
            "small_blind": huge,
            "big_blind": huge,
            "current_buy_in": huge,
            "minimum_raise": huge,
            "pot": huge,
            "community_cards": [
                {"rank": "K", "suit": "d"}, {"rank": "7", "suit": "c"}, {"rank": "2", "suit": "h"}
            ],
        }))
        .unwrap();
        let preflop = GameState {
            community_cards: Vec::new(),
            ..state.clone()
        };
        for state in [state, preflop] {
            let spot = Spot::try_from(&state).unwrap();
            assert!(spot.stack == crate::CHIP_CEILING);
            for strategy in every() {
                let bet = strategy.decide_bet(&state);
                assert!(bet >= 0);
                assert!(bet <= spot.stack);
                assert!(bet == finalize(bet, spot.to_call, spot.minimum_raise(), spot.stack));
            }
        }
    }

    #[test]
    fn random_tables_are_deterministic() {
        for _ in 0..200 {
            let state = GameState::random();
            let once = every().iter().map(|s| s.decide_bet(&state)).collect::<Vec<_>>();
            let twice = every().iter().map(|s| s.decide_bet(&state)).collect::<Vec<_>>();
            assert!(once == twice);
        }
    }
}
