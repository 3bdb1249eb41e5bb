use super::knobs::Knobs;
use super::tuning::Size;
use super::tuning::Tuning;
use crate::Chips;
use crate::betting::bet_for_multiple;
use crate::betting::legal_raise;
use crate::betting::promote_raise;
use crate::betting::raise_to_total;
use crate::betting::size_from_pot;
use crate::gameplay::Spot;

/// Postflop play with bets counted in big blinds.
pub fn blinds(tuning: &Tuning, knobs: &Knobs, spot: &Spot) -> Chips {
    let b = &tuning.blinds;
    let hs = spot.strength(knobs.kicker);
    let tex = &spot.texture;
    let bet = |size: &Size| {
        bet_for_multiple(
            spot.bb,
            size.at(knobs.aggression),
            spot.minimum_raise(),
            spot.stack,
        )
    };

    if spot.to_call == 0 {
        if hs.is_value() {
            return bet(if tex.wet { &b.big } else { &b.mid });
        }
        if hs.strong_draw {
            let auto = b.draw_auto && spot.n_in_pot <= 2;
            return match auto || spot.mixer.chance("draw-bet", knobs.draw_bet) {
                true => bet(if tex.dry { &b.small } else { &b.mid }),
                false => 0,
            };
        }
        if tex.dry && spot.n_in_pot <= 2 && spot.mixer.chance("stab", knobs.stab) {
            return bet(&b.small);
        }
        return 0;
    }

    let raise = |bbs: f64| {
        raise_to_total(
            spot.current_buy_in(),
            spot.to_call,
            spot.minimum_raise(),
            spot.current_buy_in().saturating_add((bbs * spot.bb as f64).round() as Chips),
            spot.stack,
        )
    };
    if hs.two_pair_plus || hs.overpair || (hs.top_pair_for_value && !tex.wet) {
        let r = raise(if tex.dry { b.value_raise_dry } else { b.value_raise_wet });
        let strong = hs.two_pair_plus || hs.overpair;
        return match r > spot.to_call && (strong || spot.n_in_pot <= b.max_crowd) {
            true => r,
            false => spot.call(),
        };
    }
    if hs.strong_draw {
        let semi = (spot.n_in_pot <= b.semi_bluff_crowd
            && spot.effective_bb > b.semi_bluff_depth
            && spot.mixer.chance("semi-bluff", knobs.draw_raise))
            || (tex.dry && spot.mixer.chance("dry-semi-bluff", knobs.draw_raise * b.dry_semi_bluff));
        if semi {
            let r = raise(b.semi_bluff_bb);
            if r > spot.to_call {
                return r;
            }
        }
        let cap = ((spot.stack as f64 * knobs.call_cap) as Chips).max(spot.bb.saturating_mul(2));
        return match spot.to_call <= cap {
            true => spot.call(),
            false => 0,
        };
    }
    if hs.is_marginal() {
        let cap = ((spot.stack as f64 * knobs.marginal_cap) as Chips).max(spot.bb);
        return match spot.to_call <= cap && !tex.wet && spot.n_in_pot <= b.max_crowd {
            true => spot.call(),
            false => 0,
        };
    }
    let cheap = (spot.bb / 2).max(1);
    match tex.dry && spot.to_call <= cheap && spot.n_in_pot <= 2 {
        true => spot.call(),
        false => 0,
    }
}

/// Postflop play with bets sized as fractions of the pot.
pub fn pot(tuning: &Tuning, knobs: &Knobs, spot: &Spot) -> Chips {
    let p = &tuning.pot;
    let hs = spot.strength(knobs.kicker);
    let tex = &spot.texture;
    let blocker = hs.blocker.is_some();
    let passive = p.punish_passives && passive_table(spot);
    let sized = |fraction: f64| size_from_pot(spot.pot(), fraction, spot.stack, p.max_overbet);

    if spot.to_call == 0 {
        let lead = |fraction: f64| {
            legal_raise(0, spot.minimum_raise().max(1), spot.stack, 0, Some(sized(fraction)))
        };
        if hs.is_value() {
            return lead(match spot.spr > 4.0 || tex.dry {
                true => p.value_frac,
                false => p.value_frac_low_spr,
            });
        }
        if hs.strong_draw {
            return lead(if tex.dry { p.cbet_small } else { p.value_frac });
        }
        if passive && hs.is_marginal() && spot.mixer.chance("thin-value", p.thin_value) {
            return lead(p.cbet_small);
        }
        let damp = match p.dampen_multiway && spot.multiway() {
            true => p.multiway_dampen,
            false => 1.0,
        };
        let bonus = if blocker { p.blocker_bonus } else { 0.0 };
        let bluff = damp * if tex.dry { p.dry_bluff } else { p.wet_bluff } + bonus;
        if spot.mixer.chance("stab", bluff) {
            return lead(if tex.dry { p.cbet_small } else { p.value_frac });
        }
        return 0;
    }

    let raise = |target: Chips| promote_raise(spot.to_call, spot.minimum_raise(), spot.stack, target);
    let value = hs.is_value();
    if value && spot.mixer.chance("value-raise", p.value_raise_freq) {
        let r = raise(sized(p.value_frac));
        if r > spot.to_call {
            return r;
        }
    }
    if blocker && !value && spot.mixer.chance("check-raise", p.xr_bluff) {
        let r = raise(sized(if tex.dry { p.cbet_small } else { p.value_frac }));
        if r > spot.to_call {
            return r;
        }
    }
    if (hs.two_pair_plus || hs.overpair)
        && tex.is_polar()
        && spot.spr <= 3.0
        && spot.mixer.chance("overbet", p.overbet_freq)
    {
        let r = raise(sized(p.polar_overbet));
        if r > spot.to_call {
            return r;
        }
    }
    if value {
        return spot.call();
    }
    let cheap = ((spot.stack as f64 * p.cheap_call_stack) as Chips)
        .min(p.cheap_call_cap)
        .max(1);
    if spot.price() <= p.pot_odds || spot.to_call <= cheap {
        let peel = hs.is_made()
            || hs.strong_draw
            || spot.to_call <= cheap
            || spot.mixer.chance("float", p.float);
        return match peel {
            true => spot.call(),
            false => 0,
        };
    }
    match !p.tighten_vs_huge && (blocker || hs.is_marginal()) {
        true => spot.call(),
        false => 0,
    }
}

/// Small pots and small bets: the table is calling, not raising.
pub fn passive_table(spot: &Spot) -> bool {
    let sb = spot.small_blind().max(1);
    spot.current_buy_in() <= sb.saturating_mul(4).max(24)
        && (spot.multiway() || spot.pot() <= sb.saturating_mul(20))
}
