use super::stats::Sample;
use super::villain::Villain;
use crate::Chips;
use crate::Seat;
use crate::cards::Street;
use crate::gameplay::GameState;
use crate::gameplay::Player;
use crate::gameplay::Spot;
use crate::gameplay::Status;
use std::collections::HashMap;

/// How an opponent put chips in on one street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Called,
    Raised,
}

#[derive(Debug, Default, Clone)]
struct Flags {
    vpip: bool,
    pfr: bool,
    streets: [Option<Move>; 4],
}

/// Per-hand evidence gathered from the snapshots we are asked to act on.
/// Everything here is inferred from bets alone, so it is approximate.
#[derive(Debug, Default, Clone)]
pub struct Tracker {
    hand: Option<String>,
    flags: HashMap<Villain, Flags>,
    we_raised: bool,
}

impl Tracker {
    pub fn hand(&self) -> Option<&str> {
        self.hand.as_deref()
    }
    pub fn we_raised(&self) -> bool {
        self.we_raised
    }
    pub fn reset(&mut self) {
        self.hand = None;
        self.flags.clear();
        self.we_raised = false;
    }
    /// Start over when the snapshot belongs to a different hand.
    pub fn sync(&mut self, state: &GameState) {
        let id = state.hand_id();
        if self.hand.as_deref() != Some(id.as_str()) {
            self.reset();
            self.hand = Some(id);
        }
    }

    /// Record what the table shows at one of our decisions, plus our own bet.
    pub fn witness(&mut self, spot: &Spot, bet: Chips) {
        let state = spot.state;
        self.sync(state);
        let street = spot.street;
        let preflop = street == Street::Pref;
        let baseline = if preflop { spot.bb } else { 0 };
        for (seat, player) in state.opponents().filter(|(_, p)| p.is_alive()) {
            let flags = self.flags.entry(Villain::from(player)).or_default();
            if preflop && player.bet > posted(state, seat, spot.bb) {
                flags.vpip = true;
            }
        }
        let matched = state
            .opponents()
            .filter(|(_, p)| p.is_active())
            .filter(|(_, p)| state.current_buy_in > baseline && p.bet == state.current_buy_in)
            .map(|(_, p)| Villain::from(p))
            .collect::<Vec<Villain>>();
        match matched.as_slice() {
            [] => {}
            [raiser] => {
                let flags = self.flags.entry(raiser.clone()).or_default();
                flags.streets[street as usize] = Some(Move::Raised);
                flags.pfr |= preflop;
            }
            callers => {
                for villain in callers {
                    let flags = self.flags.entry(villain.clone()).or_default();
                    if flags.streets[street as usize] != Some(Move::Raised) {
                        flags.streets[street as usize] = Some(Move::Called);
                    }
                }
            }
        }
        if bet > spot.to_call {
            self.we_raised = true;
        }
    }

    /// Summarize the hand for one opponent as it ended.
    pub fn sample(&self, player: &Player) -> Sample {
        let flags = self.flags.get(&Villain::from(player)).cloned().unwrap_or_default();
        let count = |m: Move| flags.streets.iter().filter(|s| **s == Some(m)).count();
        let raises = count(Move::Raised);
        let calls = count(Move::Called);
        Sample {
            vpip: flags.vpip,
            pfr: flags.pfr,
            af: match raises + calls {
                0 => None,
                _ => Some(raises as f64 / calls.max(1) as f64),
            },
            fold_to_raise: match self.we_raised {
                true => Some(player.status == Status::Folded),
                false => None,
            },
        }
    }
}

/// Forced blind a seat posted preflop.
fn posted(state: &GameState, seat: Seat, bb: Chips) -> Chips {
    let (small, big) = state.blind_seats();
    match seat {
        s if s == big => bb,
        s if s == small => state.small_blind,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(value: serde_json::Value) -> GameState {
        serde_json::from_value(value).unwrap()
    }

    fn preflop_raise() -> GameState {
        state(json!({
            "players": [
                {"name": "btn", "stack": 1000, "bet": 0},
                {"name": "sb", "stack": 990, "bet": 10},
                {"name": "bb", "stack": 980, "bet": 20},
                {"name": "utg", "stack": 940, "bet": 60},
                {"name": "me", "stack": 1000, "bet": 0},
            ],
            "in_action": 4,
            "dealer": 0,
            "small_blind": 10,
            "big_blind": 20,
            "current_buy_in": 60,
            "minimum_raise": 40,
            "game_id": "g",
            "round": 1,
        }))
    }

    #[test]
    fn lone_raiser_gets_vpip_and_pfr() {
        let s = preflop_raise();
        let spot = Spot::try_from(&s).unwrap();
        let mut tracker = Tracker::default();
        tracker.witness(&spot, 0);
        let utg = tracker.sample(&s.players[3]);
        assert!(utg.vpip);
        assert!(utg.pfr);
        assert!(utg.af == Some(1.0));
        let bb = tracker.sample(&s.players[2]);
        assert!(!bb.vpip);
        assert!(!bb.pfr);
        assert!(bb.af.is_none());
        assert!(bb.fold_to_raise.is_none());
    }

    #[test]
    fn our_raise_enables_fold_to_raise() {
        let s = preflop_raise();
        let spot = Spot::try_from(&s).unwrap();
        let mut tracker = Tracker::default();
        tracker.witness(&spot, 180);
        assert!(tracker.we_raised());
        let mut folded = s.players[3].clone();
        folded.status = Status::Folded;
        assert!(tracker.sample(&folded).fold_to_raise == Some(true));
        assert!(tracker.sample(&s.players[3]).fold_to_raise == Some(false));
    }

    #[test]
    fn new_hand_resets() {
        let s = preflop_raise();
        let spot = Spot::try_from(&s).unwrap();
        let mut tracker = Tracker::default();
        tracker.witness(&spot, 180);
        let mut next = s.clone();
        next.round = 2;
        tracker.sync(&next);
        assert!(!tracker.we_raised());
        assert!(tracker.hand() == Some("g:2"));
        assert!(!tracker.sample(&s.players[3]).vpip);
    }

    #[test]
    fn heads_up_blinds() {
        let s = state(json!({"players": [{"stack": 1}, {"stack": 1}], "dealer": 1, "small_blind": 5}));
        assert!(posted(&s, 1, 10) == 5);
        assert!(posted(&s, 0, 10) == 10);
    }
}
