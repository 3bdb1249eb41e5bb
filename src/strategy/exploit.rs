use super::Strategy;
use super::positional::Positional;
use super::tuning::Tuning;
use crate::Chips;
use crate::Probability;
use crate::gameplay::GameState;
use crate::gameplay::Spot;
use crate::opponents::OpponentModel;
use crate::opponents::Read;
use std::sync::Arc;

/// Pot-fraction play whose bluffing and calling frequencies lean on what
/// the shared opponent model has seen of the players still in the pot.
#[derive(Debug, Clone)]
pub struct Exploit {
    tuning: Tuning,
    model: Arc<OpponentModel>,
}

impl Exploit {
    pub fn new(tuning: Tuning, model: Arc<OpponentModel>) -> Self {
        Self { tuning, model }
    }
    pub fn model(&self) -> &Arc<OpponentModel> {
        &self.model
    }

    /// Bluff folders, stop bluffing stations, and peel less against aggression.
    pub fn adjust(&self, read: &Read) -> Tuning {
        let mut tuning = self.tuning.clone();
        let p = &mut tuning.pot;
        if folds(read) {
            p.xr_bluff = bump(p.xr_bluff, 0.10);
            p.dry_bluff = bump(p.dry_bluff, 0.12);
            p.wet_bluff = bump(p.wet_bluff, 0.12);
            for knobs in tuning.crowd.iter_mut() {
                knobs.stab = bump(knobs.stab, 0.12);
                knobs.three_bet_bluff = bump(knobs.three_bet_bluff, 0.10);
            }
        }
        let p = &mut tuning.pot;
        if stations(read) {
            p.dry_bluff *= 0.5;
            p.wet_bluff *= 0.5;
            p.thin_value = bump(p.thin_value, 0.15);
            p.float = bump(p.float, 0.15);
        }
        if aggressive(read) {
            p.float = bump(p.float, -0.12);
            for knobs in tuning.crowd.iter_mut() {
                knobs.call_cap *= 0.8;
            }
        }
        tuning
    }

    /// A huge bet from an aggressive field into a hand with nothing to show.
    pub fn overfold(&self, tuning: &Tuning, read: &Read, spot: &Spot) -> bool {
        if !tuning.pot.tighten_vs_huge || spot.street.is_preflop() || spot.to_call <= 0 {
            return false;
        }
        let before = (spot.pot() - spot.to_call).max(1) as f64;
        let huge = spot.to_call as f64 > tuning.pot.huge_bet * before;
        let hs = spot.strength(tuning.crowd.pick(spot.n_in_pot).kicker);
        huge && read.af > 1.5 && !hs.is_made() && !hs.strong_draw && hs.blocker.is_none()
    }
}

fn folds(read: &Read) -> bool {
    read.fold_to_raise > 0.5
}
fn stations(read: &Read) -> bool {
    read.vpip > 0.35 && read.af < 1.0
}
fn aggressive(read: &Read) -> bool {
    read.af > 2.0
}
fn bump(p: Probability, by: Probability) -> Probability {
    (p + by).clamp(0.0, 1.0)
}

impl Strategy for Exploit {
    fn name(&self) -> &'static str {
        "exploit"
    }
    fn intent(&self, spot: &Spot) -> anyhow::Result<Chips> {
        let read = self.model.read(spot);
        let tuning = self.adjust(&read);
        if self.overfold(&tuning, &read, spot) {
            log::debug!("overfolding {} into af {:.2}", spot.to_call, read.af);
            return Ok(0);
        }
        Ok(Positional::play(&tuning, spot))
    }
    fn witness(&self, spot: &Spot, bet: Chips) {
        self.model.witness(spot, bet);
    }
    fn on_hand_complete(&self, state: &GameState) {
        self.model.observe_hand(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read(vpip: Probability, af: Probability, fold_to_raise: Probability) -> Read {
        Read {
            vpip,
            pfr: 0.1,
            af,
            fold_to_raise,
            known: 1,
        }
    }

    fn exploit() -> Exploit {
        Exploit::new(Tuning::exploit(), Arc::new(OpponentModel::default()))
    }

    #[test]
    fn priors_change_nothing() {
        let e = exploit();
        assert!(e.adjust(&Read::default()) == Tuning::exploit());
    }

    #[test]
    fn folders_get_bluffed() {
        let e = exploit();
        let t = e.adjust(&read(0.25, 1.2, 0.7));
        assert!(t.pot.dry_bluff > Tuning::exploit().pot.dry_bluff);
        assert!(t.pot.xr_bluff > Tuning::exploit().pot.xr_bluff);
    }

    #[test]
    fn stations_do_not() {
        let e = exploit();
        let t = e.adjust(&read(0.5, 0.6, 0.2));
        assert!(t.pot.dry_bluff < Tuning::exploit().pot.dry_bluff);
        assert!(t.pot.thin_value > Tuning::exploit().pot.thin_value);
    }

    #[test]
    fn frequencies_stay_in_range() {
        let e = exploit();
        let t = e.adjust(&read(0.9, 0.1, 1.0));
        for p in [t.pot.xr_bluff, t.pot.dry_bluff, t.pot.wet_bluff, t.pot.float, t.pot.thin_value] {
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn overfolds_air_to_huge_aggressive_bets() {
        let state = serde_json::from_value::<GameState>(json!({
            "players": [
                {"name": "maniac", "stack": 2000, "bet": 300},
                {"name": "me", "stack": 1000, "bet": 0,
                 "hole_cards": [{"rank": "4", "suit": "s"}, {"rank": "3", "suit": "d"}]},
            ],
            "in_action": 1,
            "small_blind": 10,
            "big_blind": 20,
            "current_buy_in": 300,
            "minimum_raise": 300,
            "pot": 400,
            "community_cards": [
                {"rank": "K", "suit": "h"}, {"rank": "T", "suit": "c"}, {"rank": "8", "suit": "h"}
            ],
        }))
        .unwrap();
        let e = exploit();
        let spot = Spot::try_from(&state).unwrap();
        let t = e.tuning.clone();
        assert!(e.overfold(&t, &read(0.3, 2.5, 0.3), &spot));
        assert!(!e.overfold(&t, &read(0.3, 1.0, 0.3), &spot));
        assert!(e.decide_bet(&state) == 0);
    }
}
