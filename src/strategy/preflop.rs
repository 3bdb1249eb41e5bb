use super::knobs::Knobs;
use super::tuning::Tuning;
use crate::Chips;
use crate::DEEP_BB;
use crate::betting::raise_to_total;
use crate::gameplay::Position;
use crate::gameplay::Spot;

/// Range-table preflop play above push/fold depth.
pub fn decide(tuning: &Tuning, knobs: &Knobs, spot: &Spot) -> Chips {
    match spot.facing_raise() {
        true => facing_raise(tuning, knobs, spot, spot.position),
        false => unopened(tuning, knobs, spot),
    }
}

/// Open, isolate limpers, or complete from the big blind.
pub fn unopened(tuning: &Tuning, knobs: &Knobs, spot: &Spot) -> Chips {
    let ranges = &tuning.ranges;
    let open = ranges.open.pick(spot.n_in_pot).at(spot.position);
    if open.admits(spot.bucket, knobs, &spot.mixer, "open") {
        return raise_to_total(
            spot.current_buy_in(),
            spot.to_call,
            spot.minimum_raise(),
            open_size(tuning, spot),
            spot.stack,
        );
    }
    if spot.position == Position::BigBlind && ranges.defend.admits(spot.bucket, knobs, &spot.mixer, "defend") {
        return spot.call();
    }
    0
}

/// Total to raise to when first in: larger over limpers and with deep pocket pairs.
fn open_size(tuning: &Tuning, spot: &Spot) -> Chips {
    let p = &tuning.preflop;
    let ip = spot.position.in_position();
    let bbs = match spot.limpers {
        0 if ip => p.open_ip,
        0 => p.open_oop,
        n if ip => p.iso_ip + p.iso_per_limper * n as f64,
        n => p.iso_oop + p.iso_per_limper * n as f64,
    };
    let bonus = match spot.hole.is_some_and(|h| h.is_pair()) && spot.effective_bb > DEEP_BB {
        true => p.pair_bonus,
        false => 0.0,
    };
    ((bbs + bonus) * spot.bb as f64).round() as Chips
}

/// Value 3-bet, bluff 3-bet, cold call, or peel when cheap.
pub fn facing_raise(tuning: &Tuning, knobs: &Knobs, spot: &Spot, position: Position) -> Chips {
    let p = &tuning.preflop;
    let ranges = &tuning.ranges;
    let factor = match position.in_position() {
        true => p.three_bet_ip,
        false => p.three_bet_oop,
    };
    let reraise = || {
        raise_to_total(
            spot.current_buy_in(),
            spot.to_call,
            spot.minimum_raise(),
            (factor * spot.bb.max(spot.current_buy_in()) as f64).round() as Chips,
            spot.stack,
        )
    };
    if ranges.value_3bet.at(position).admits(spot.bucket, knobs, &spot.mixer, "value-3bet") {
        return reraise();
    }
    if spot.effective_bb > p.bluff_depth
        && ranges.bluff_3bet.at(position).admits(spot.bucket, knobs, &spot.mixer, "bluff-3bet")
    {
        return reraise();
    }
    if spot.to_call <= spot.stack
        && ranges.cold_call.at(position).admits(spot.bucket, knobs, &spot.mixer, "cold-call")
    {
        return spot.call();
    }
    peel(knobs, spot)
}

/// Call anyway when the price is a sliver of the stack.
pub fn peel(knobs: &Knobs, spot: &Spot) -> Chips {
    let cheap = (spot.stack / knobs.cheap_div.max(1)).min(spot.bb.max(1));
    match spot.to_call <= cheap {
        true => spot.call(),
        false => 0,
    }
}
