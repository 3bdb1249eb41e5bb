use super::knobs::Knobs;
use super::tuning::Tuning;
use crate::Chips;
use crate::cards::BucketSet;
use crate::gameplay::Spot;

/// Hands that jam over a raise at any push/fold depth.
const PREMIUM: BucketSet = BucketSet::of(&[1, 2]);

/// Short-stack preflop: all in or fold, checking or completing for a blind.
pub fn jam(tuning: &Tuning, knobs: &Knobs, spot: &Spot) -> Chips {
    let table = tuning.ranges.jam.pick(spot.n_in_pot);
    let admitted = table.at(spot.position).admits(spot.bucket, knobs, &spot.mixer, "jam");
    shove_or_fold(gate(admitted, knobs, spot), spot)
}

/// Two-handed push/fold, widening once stacks get short.
pub fn duel(tuning: &Tuning, knobs: &Knobs, spot: &Spot) -> Chips {
    let d = &tuning.duel;
    let rule = match spot.effective_bb <= d.short_bb {
        true => &d.jam_short,
        false => &d.jam,
    };
    let admitted = rule.admits(spot.bucket, knobs, &spot.mixer, "jam");
    shove_or_fold(gate(admitted, knobs, spot), spot)
}

/// Over a raise, anything below premium only jams when shallow enough.
fn gate(admitted: bool, knobs: &Knobs, spot: &Spot) -> bool {
    match spot.facing_raise() && !PREMIUM.contains(spot.bucket) {
        true => admitted && spot.effective_bb <= knobs.jam_facing_raise,
        false => admitted,
    }
}

fn shove_or_fold(jam: bool, spot: &Spot) -> Chips {
    match jam {
        true => spot.stack,
        false if spot.to_call <= spot.bb => spot.call(),
        false => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::GameState;
    use serde_json::json;

    fn short(hole: serde_json::Value, my_bet: i64, top: i64, stack: i64) -> GameState {
        serde_json::from_value(json!({
            "players": [
                {"name": "btn", "stack": 2000, "bet": 0},
                {"name": "sb", "stack": 2000, "bet": 10},
                {"name": "bb", "stack": 2000, "bet": top},
                {"name": "me", "stack": stack, "bet": my_bet, "hole_cards": hole},
            ],
            "in_action": 3,
            "dealer": 0,
            "small_blind": 10,
            "big_blind": 20,
            "current_buy_in": top,
            "minimum_raise": 20,
            "pot": 10 + top,
            "game_id": "short",
        }))
        .unwrap()
    }

    fn aces() -> serde_json::Value {
        json!([{"rank": "A", "suit": "s"}, {"rank": "A", "suit": "h"}])
    }

    fn trash() -> serde_json::Value {
        json!([{"rank": "7", "suit": "c"}, {"rank": "2", "suit": "d"}])
    }

    #[test]
    fn premium_shoves_everything() {
        let state = short(aces(), 0, 20, 160);
        let spot = Spot::try_from(&state).unwrap();
        let tuning = Tuning::adaptive();
        assert!(spot.effective_bb == 8);
        assert!(jam(&tuning, tuning.crowd.pick(spot.n_in_pot), &spot) == 160);
    }

    #[test]
    fn trash_folds_but_checks_free() {
        let tuning = Tuning::adaptive();
        let facing = short(trash(), 0, 100, 160);
        let spot = Spot::try_from(&facing).unwrap();
        assert!(jam(&tuning, tuning.crowd.pick(spot.n_in_pot), &spot) == 0);
        let free = short(trash(), 20, 20, 160);
        let spot = Spot::try_from(&free).unwrap();
        assert!(spot.to_call == 0);
        assert!(jam(&tuning, tuning.crowd.pick(spot.n_in_pot), &spot) == 0);
    }

    #[test]
    fn raise_gate_spares_premiums() {
        let tuning = Tuning::adaptive();
        let state = short(aces(), 0, 100, 400);
        let spot = Spot::try_from(&state).unwrap();
        assert!(spot.facing_raise());
        assert!(jam(&tuning, tuning.crowd.pick(spot.n_in_pot), &spot) == 400);
    }

    #[test]
    fn duel_widens_when_short() {
        let tuning = Tuning::heads_up();
        let broadway = json!([{"rank": "K", "suit": "s"}, {"rank": "Q", "suit": "h"}]);
        let deep = short(broadway.clone(), 0, 20, 280);
        let shallow = short(broadway, 0, 20, 200);
        let d = Spot::try_from(&deep).unwrap();
        let s = Spot::try_from(&shallow).unwrap();
        assert!(d.effective_bb == 14);
        assert!(s.effective_bb == 10);
        assert!(duel(&tuning, &tuning.duel.close, &d) == 20);
        assert!(duel(&tuning, &tuning.duel.close, &s) == 200);
    }
}
