use super::Strategy;
use crate::Chips;
use crate::gameplay::Spot;

/// Safe baseline: min-raise pocket pairs, call with two high cards or a
/// pair on the board, fold the rest unless the call is about 2% of our stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct Conservative;

impl Strategy for Conservative {
    fn name(&self) -> &'static str {
        "basic"
    }
    fn intent(&self, spot: &Spot) -> anyhow::Result<Chips> {
        let cheap = (spot.stack / 50).max(1);
        let pair = spot.hole.is_some_and(|h| h.is_pair());
        let decent = spot
            .hole
            .is_some_and(|h| h.both_high(12) || h.pairs_board(&spot.board));
        if pair {
            return Ok(match spot.to_call.saturating_add(spot.minimum_raise().max(0)) {
                0 => spot.stack.min(10),
                bet => bet,
            });
        }
        if decent {
            if spot.to_call > spot.stack {
                return Ok(0);
            }
            let bump = spot.minimum_raise().min(spot.stack / 100).max(0);
            return Ok(match spot.to_call <= cheap {
                true => spot.to_call.saturating_add(bump),
                false => spot.to_call,
            });
        }
        Ok(match spot.to_call <= cheap {
            true => spot.to_call,
            false => 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::GameState;
    use serde_json::json;

    fn state(hole: serde_json::Value, to_call: i64, stack: i64, pot: i64) -> GameState {
        serde_json::from_value(json!({
            "players": [
                {"name": "villain", "stack": 2000, "bet": to_call},
                {"name": "me", "stack": stack, "bet": 0, "hole_cards": hole},
            ],
            "in_action": 1,
            "small_blind": 10,
            "current_buy_in": to_call,
            "minimum_raise": 20,
            "pot": pot,
        }))
        .unwrap()
    }

    #[test]
    fn trash_folds_to_a_big_raise() {
        let hole = json!([{"rank": "7", "suit": "clubs"}, {"rank": "2", "suit": "diamonds"}]);
        assert!(Conservative.decide_bet(&state(hole, 500, 1000, 550)) == 0);
    }

    #[test]
    fn pairs_min_raise() {
        let hole = json!([{"rank": "5", "suit": "clubs"}, {"rank": "5", "suit": "diamonds"}]);
        assert!(Conservative.decide_bet(&state(hole, 40, 1000, 60)) == 60);
    }

    #[test]
    fn high_cards_call() {
        let hole = json!([{"rank": "K", "suit": "clubs"}, {"rank": "Q", "suit": "diamonds"}]);
        assert!(Conservative.decide_bet(&state(hole, 100, 1000, 150)) == 100);
    }

    #[test]
    fn cheap_calls_with_anything() {
        let hole = json!([{"rank": "7", "suit": "clubs"}, {"rank": "2", "suit": "diamonds"}]);
        assert!(Conservative.decide_bet(&state(hole, 20, 1000, 30)) == 20);
    }

    #[test]
    fn missing_cards_still_decide() {
        assert!(Conservative.decide_bet(&state(json!([]), 100, 1000, 150)) == 0);
        assert!(Conservative.decide_bet(&state(json!([]), 0, 1000, 150)) == 0);
    }
}
