use super::error::ConfigError;
use super::knobs::Crowd;
use super::knobs::Knob;
use super::knobs::Knobs;
use super::knobs::Overrides;
use super::ranges::Mix;
use super::ranges::Ranges;
use super::ranges::Rule;
use crate::Chips;
use crate::HU_PUSH_FOLD_BB;
use crate::PUSH_FOLD_BB;
use crate::Probability;
use crate::cards::BucketSet;

/// A bet in big blinds that grows with the crowd's aggression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub base: f64,
    pub slope: f64,
}

impl Size {
    pub const fn fixed(base: f64) -> Self {
        Self { base, slope: 0.0 }
    }
    pub fn at(&self, aggression: f64) -> f64 {
        self.base + self.slope * aggression
    }
}

/// Preflop sizes, in big blinds unless noted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preflop {
    pub open_ip: f64,
    pub open_oop: f64,
    pub iso_ip: f64,
    pub iso_oop: f64,
    pub iso_per_limper: f64,
    /// Added to a pocket-pair open when deep.
    pub pair_bonus: f64,
    /// Multiples of the bet we face.
    pub three_bet_ip: f64,
    pub three_bet_oop: f64,
    /// Bluff 3-bets need more than this many effective big blinds.
    pub bluff_depth: Chips,
    pub push_fold_bb: Chips,
}

/// Postflop play sized in big blinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blinds {
    pub small: Size,
    pub mid: Size,
    pub big: Size,
    pub value_raise_dry: f64,
    pub value_raise_wet: f64,
    pub semi_bluff_bb: f64,
    pub semi_bluff_depth: Chips,
    /// Share of `draw_raise` used to semi-bluff on dry boards.
    pub dry_semi_bluff: Probability,
    /// Largest pot in which top pair raises and marginal pairs peel.
    pub max_crowd: usize,
    /// Largest pot in which draws semi-bluff on depth.
    pub semi_bluff_crowd: usize,
    /// Draws always bet heads-up instead of mixing.
    pub draw_auto: bool,
}

/// Postflop play sized as fractions of the pot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pot {
    /// Call when the price is at most this share of the pot after calling.
    pub pot_odds: Probability,
    pub cheap_call_stack: Probability,
    pub cheap_call_cap: Chips,
    pub xr_bluff: Probability,
    pub thin_value: Probability,
    pub dry_bluff: Probability,
    pub wet_bluff: Probability,
    pub blocker_bonus: Probability,
    pub polar_overbet: f64,
    pub value_frac: f64,
    pub value_frac_low_spr: f64,
    pub cbet_small: f64,
    /// Ceiling on any bet as a share of the stack.
    pub max_overbet: f64,
    pub value_raise_freq: Probability,
    pub overbet_freq: Probability,
    pub multiway_dampen: Probability,
    /// Peel frequency without a hand when the price is right.
    pub float: Probability,
    /// Bets above this share of the pot before them count as huge.
    pub huge_bet: f64,
    pub punish_passives: bool,
    pub tighten_vs_huge: bool,
    pub dampen_multiway: bool,
}

/// Two-handed play: chip-ahead `press` and chip-behind `close` postures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Duel {
    pub press: Knobs,
    pub close: Knobs,
    /// Stack ratio over the opponent that switches to `press`.
    pub press_lead: f64,
    pub push_fold_bb: Chips,
    pub jam: Rule,
    /// Jam range once at or below `short_bb`.
    pub jam_short: Rule,
    pub short_bb: Chips,
    pub open_bb: f64,
    /// Button raises every hand above this depth.
    pub raise_all_bb: Chips,
    /// Button raises these when closing shallow, limps the rest.
    pub close_open: Rule,
    pub iso: Rule,
    pub iso_bb: f64,
    pub reraise: Rule,
    /// Multiples of the bet we face when re-raising a small or large open.
    pub reraise_small: f64,
    pub reraise_big: f64,
    pub squeeze: Rule,
    pub squeeze_bb: f64,
    pub squeeze_depth: Chips,
}

/// Every tunable parameter of the positional strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub crowd: Crowd<Knobs>,
    pub ranges: Ranges,
    pub preflop: Preflop,
    pub blinds: Blinds,
    pub pot: Pot,
    /// Size postflop in pot fractions instead of big blinds.
    pub pot_sizing: bool,
    pub duel: Duel,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::adaptive()
    }
}

const PRESS: Knobs = Knobs {
    aggression: 1.08,
    open_loose: 0.92,
    three_bet_bluff: 0.28,
    bb_defend: 7,
    cheap_div: 48,
    kicker: 9,
    stab: 0.72,
    draw_bet: 0.68,
    draw_raise: 0.42,
    call_cap: 0.16,
    marginal_cap: 0.07,
    jam_facing_raise: 11,
};

const CLOSE: Knobs = Knobs {
    aggression: 0.96,
    open_loose: 0.55,
    three_bet_bluff: 0.18,
    bb_defend: 7,
    cheap_div: 52,
    kicker: 10,
    stab: 0.60,
    draw_bet: 0.52,
    draw_raise: 0.0,
    call_cap: 0.12,
    marginal_cap: 0.06,
    jam_facing_raise: 10,
};

/// Knob names that take no crowd prefix.
const SCALARS: [&str; 52] = [
    "open_ip",
    "open_oop",
    "iso_ip",
    "iso_oop",
    "iso_per_limper",
    "pair_bonus",
    "three_bet_ip",
    "three_bet_oop",
    "bluff_depth",
    "push_fold_bb",
    "small_bet",
    "mid_bet",
    "big_bet",
    "value_raise_dry",
    "value_raise_wet",
    "semi_bluff_bb",
    "semi_bluff_depth",
    "dry_semi_bluff",
    "max_crowd",
    "semi_bluff_crowd",
    "draw_auto",
    "pot_sizing",
    "pot_odds",
    "cheap_call_stack",
    "cheap_call_cap",
    "xr_bluff",
    "thin_value",
    "dry_bluff",
    "wet_bluff",
    "blocker_bonus",
    "polar_overbet",
    "value_frac",
    "value_frac_low_spr",
    "cbet_small",
    "max_overbet",
    "value_raise_freq",
    "overbet_freq",
    "multiway_dampen",
    "float",
    "huge_bet",
    "punish_passives",
    "tighten_vs_huge",
    "dampen_multiway",
    "press_lead",
    "hu_push_fold_bb",
    "hu_short_bb",
    "hu_open_bb",
    "hu_raise_all_bb",
    "hu_iso_bb",
    "hu_reraise_small",
    "hu_reraise_big",
    "hu_squeeze_bb",
];

/// Knob groups selected with a `group.` prefix.
const GROUPS: [&str; 5] = ["heads_up", "three_way", "multiway", "press", "close"];

/// Long-form names accepted for the pot-fraction parameters.
fn canonical(key: &str) -> &str {
    match key {
        "pot_odds_call_threshold" => "pot_odds",
        "cheap_call_stack_pct" => "cheap_call_stack",
        "cheap_call_abs_cap" => "cheap_call_cap",
        "xr_bluff_freq" => "xr_bluff",
        "thin_value_freq" => "thin_value",
        "dry_bluff_freq" => "dry_bluff",
        "wet_bluff_freq" => "wet_bluff",
        "polar_overbet_frac" => "polar_overbet",
        "value_raise_frac" => "value_frac",
        "cbet_small_frac" => "cbet_small",
        "max_stack_overbet_frac" => "max_overbet",
        "preflop_open_min_mult_ip" => "open_ip",
        "preflop_open_min_mult_oop" => "open_oop",
        "preflop_pair_raise_extra" => "pair_bonus",
        "preflop_3bet_factor_ip" => "three_bet_ip",
        "preflop_3bet_factor_oop" => "three_bet_oop",
        "tighten_vs_huge_sizing" => "tighten_vs_huge",
        "bluff_dampen_multiway" => "dampen_multiway",
        other => other,
    }
}

impl Tuning {
    /// Six-handed baseline with fixed big-blind sizes.
    pub fn advanced() -> Self {
        let knobs = Knobs {
            aggression: 0.0,
            open_loose: 0.0,
            three_bet_bluff: 1.0,
            bb_defend: 0,
            cheap_div: 50,
            kicker: 10,
            stab: 1.0,
            draw_bet: 1.0,
            draw_raise: 0.45,
            call_cap: 0.10,
            marginal_cap: 0.05,
            jam_facing_raise: 8,
        };
        Self {
            crowd: Self::widening(knobs),
            ranges: Ranges::advanced(),
            preflop: Preflop {
                open_ip: 2.2,
                open_oop: 2.6,
                pair_bonus: 0.0,
                three_bet_ip: 3.0,
                three_bet_oop: 4.0,
                bluff_depth: 20,
                ..Self::preflop()
            },
            blinds: Blinds {
                small: Size::fixed(1.2),
                mid: Size::fixed(2.8),
                big: Size::fixed(4.0),
                value_raise_dry: 2.0,
                value_raise_wet: 2.5,
                semi_bluff_bb: 2.5,
                semi_bluff_depth: 25,
                dry_semi_bluff: 0.0,
                max_crowd: 10,
                semi_bluff_crowd: 10,
                draw_auto: true,
            },
            pot: Self::pot(),
            pot_sizing: false,
            duel: Self::duel(),
        }
    }

    /// Frequencies and sizes that scale with the number of players in the pot.
    pub fn adaptive() -> Self {
        Self {
            crowd: Crowd {
                heads_up: Knobs {
                    aggression: 1.0,
                    open_loose: 0.35,
                    three_bet_bluff: 0.35,
                    bb_defend: 7,
                    cheap_div: 45,
                    kicker: 10,
                    stab: 0.6,
                    draw_bet: 0.55,
                    draw_raise: 0.40,
                    call_cap: 0.125,
                    marginal_cap: 0.0625,
                    jam_facing_raise: 9,
                },
                three_way: Knobs {
                    aggression: 0.8,
                    open_loose: 0.28,
                    three_bet_bluff: 0.25,
                    bb_defend: 7,
                    cheap_div: 50,
                    kicker: 11,
                    stab: 0.6,
                    draw_bet: 0.45,
                    draw_raise: 0.28,
                    call_cap: 0.10,
                    marginal_cap: 0.06,
                    jam_facing_raise: 8,
                },
                multiway: Knobs {
                    aggression: 0.65,
                    open_loose: 0.20,
                    three_bet_bluff: 0.15,
                    bb_defend: 6,
                    cheap_div: 55,
                    kicker: 12,
                    stab: 0.6,
                    draw_bet: 0.35,
                    draw_raise: 0.18,
                    call_cap: 0.08,
                    marginal_cap: 0.05,
                    jam_facing_raise: 7,
                },
            },
            ranges: Ranges::adaptive(),
            preflop: Self::preflop(),
            blinds: Blinds {
                small: Size { base: 1.1, slope: 0.3 },
                mid: Size { base: 2.5, slope: 0.6 },
                big: Size { base: 3.6, slope: 0.6 },
                value_raise_dry: 2.3,
                value_raise_wet: 2.6,
                semi_bluff_bb: 2.3,
                semi_bluff_depth: 22,
                dry_semi_bluff: 0.6,
                max_crowd: 3,
                semi_bluff_crowd: 2,
                draw_auto: true,
            },
            pot: Self::pot(),
            pot_sizing: false,
            duel: Self::duel(),
        }
    }

    /// Same knobs for every crowd, except that each extra opponent asks one
    /// more rank of top-pair kicker.
    fn widening(knobs: Knobs) -> Crowd<Knobs> {
        Crowd {
            three_way: Knobs {
                kicker: knobs.kicker.saturating_add(1),
                ..knobs
            },
            multiway: Knobs {
                kicker: knobs.kicker.saturating_add(2),
                ..knobs
            },
            heads_up: knobs,
        }
    }

    /// Four-handed ranges with pot-fraction postflop sizing.
    pub fn apex() -> Self {
        let knobs = Knobs {
            cheap_div: 45,
            jam_facing_raise: 9,
            ..Self::advanced().crowd.heads_up
        };
        Self {
            crowd: Self::widening(knobs),
            ranges: Ranges::apex(),
            preflop: Preflop {
                open_ip: 2.2,
                open_oop: 2.5,
                three_bet_ip: 3.0,
                three_bet_oop: 4.0,
                bluff_depth: 20,
                ..Self::preflop()
            },
            pot_sizing: true,
            ..Self::advanced()
        }
    }

    /// Pot-fraction play that leans on the opponent model for its frequencies.
    pub fn exploit() -> Self {
        let apex = Self::apex();
        Self {
            pot: Pot {
                xr_bluff: 0.16,
                float: 0.60,
                ..apex.pot
            },
            ..apex
        }
    }

    /// Adaptive play with smaller two-handed sizes.
    pub fn heads_up() -> Self {
        let adaptive = Self::adaptive();
        Self {
            crowd: Crowd {
                heads_up: CLOSE,
                ..adaptive.crowd
            },
            blinds: Blinds {
                small: Size::fixed(1.0),
                mid: Size::fixed(2.3),
                big: Size::fixed(3.4),
                value_raise_dry: 2.2,
                value_raise_wet: 2.5,
                semi_bluff_bb: 2.3,
                semi_bluff_depth: 20,
                dry_semi_bluff: 0.0,
                max_crowd: 10,
                semi_bluff_crowd: 2,
                draw_auto: false,
            },
            ..adaptive
        }
    }

    fn preflop() -> Preflop {
        Preflop {
            open_ip: 2.1,
            open_oop: 2.4,
            iso_ip: 3.5,
            iso_oop: 4.0,
            iso_per_limper: 1.0,
            pair_bonus: 0.5,
            three_bet_ip: 2.8,
            three_bet_oop: 3.6,
            bluff_depth: 22,
            push_fold_bb: PUSH_FOLD_BB,
        }
    }

    fn pot() -> Pot {
        Pot {
            pot_odds: 0.27,
            cheap_call_stack: 0.02,
            cheap_call_cap: 60,
            xr_bluff: 0.20,
            thin_value: 0.58,
            dry_bluff: 0.38,
            wet_bluff: 0.22,
            blocker_bonus: 0.08,
            polar_overbet: 1.25,
            value_frac: 0.45,
            value_frac_low_spr: 0.60,
            cbet_small: 0.33,
            max_overbet: 1.0,
            value_raise_freq: 0.40,
            overbet_freq: 0.35,
            multiway_dampen: 0.6,
            float: 1.0,
            huge_bet: 0.9,
            punish_passives: true,
            tighten_vs_huge: true,
            dampen_multiway: true,
        }
    }

    fn duel() -> Duel {
        Duel {
            press: PRESS,
            close: CLOSE,
            press_lead: 1.25,
            push_fold_bb: HU_PUSH_FOLD_BB,
            jam: Rule::always(BucketSet::of(&[1, 2, 4, 5])),
            jam_short: Rule::always(BucketSet::upto(5)),
            short_bb: 12,
            open_bb: 2.0,
            raise_all_bb: 25,
            close_open: Rule::always(BucketSet::upto(4)),
            iso: Rule::always(BucketSet::upto(3)),
            iso_bb: 3.5,
            reraise: Rule::always(BucketSet::upto(2)),
            reraise_small: 3.2,
            reraise_big: 3.8,
            squeeze: Rule::NONE.or(BucketSet::of(&[3, 5, 6]), Mix::Bluff(1.0)),
            squeeze_bb: 6.0,
            squeeze_depth: 20,
        }
    }

    /// Every key `set` accepts.
    pub fn keys() -> Vec<String> {
        SCALARS
            .iter()
            .map(|k| k.to_string())
            .chain(Knobs::KEYS.iter().map(|k| k.to_string()))
            .chain(
                GROUPS
                    .iter()
                    .flat_map(|g| Knobs::KEYS.iter().map(move |k| format!("{}.{}", g, k))),
            )
            .collect()
    }

    pub fn apply(&mut self, overrides: &Overrides) -> Result<(), ConfigError> {
        overrides.iter().try_for_each(|(key, knob)| self.set(key, knob))
    }

    /// Override one parameter. A bare crowd knob sets all three crowd groups.
    pub fn set(&mut self, key: &str, knob: &Knob) -> Result<(), ConfigError> {
        let name = key.trim().to_ascii_lowercase();
        let name = canonical(&name);
        let found = match name.split_once('.') {
            Some(("press", field)) => self.duel.press.set(field, key, knob)?,
            Some(("close", field)) => self.duel.close.set(field, key, knob)?,
            Some((group, field)) => match self.crowd.group_mut(group) {
                Some(knobs) => knobs.set(field, key, knob)?,
                None => false,
            },
            None if Knobs::KEYS.iter().any(|k| *k == name) => {
                for knobs in self.crowd.iter_mut() {
                    knobs.set(name, key, knob)?;
                }
                true
            }
            None => self.set_scalar(name, key, knob)?,
        };
        match found {
            true => Ok(()),
            false => Err(ConfigError::UnknownKnob {
                key: key.to_string(),
                valid: Self::keys().join(", "),
            }),
        }
    }

    fn set_scalar(&mut self, name: &str, key: &str, knob: &Knob) -> Result<bool, ConfigError> {
        let (pf, b, p, d) = (&mut self.preflop, &mut self.blinds, &mut self.pot, &mut self.duel);
        match name {
            "open_ip" => pf.open_ip = knob.size(key)?,
            "open_oop" => pf.open_oop = knob.size(key)?,
            "iso_ip" => pf.iso_ip = knob.size(key)?,
            "iso_oop" => pf.iso_oop = knob.size(key)?,
            "iso_per_limper" => pf.iso_per_limper = knob.size(key)?,
            "pair_bonus" => pf.pair_bonus = knob.size(key)?,
            "three_bet_ip" => pf.three_bet_ip = knob.size(key)?,
            "three_bet_oop" => pf.three_bet_oop = knob.size(key)?,
            "bluff_depth" => pf.bluff_depth = knob.chips(key)?,
            "push_fold_bb" => pf.push_fold_bb = knob.chips(key)?,
            "small_bet" => b.small.base = knob.size(key)?,
            "mid_bet" => b.mid.base = knob.size(key)?,
            "big_bet" => b.big.base = knob.size(key)?,
            "value_raise_dry" => b.value_raise_dry = knob.size(key)?,
            "value_raise_wet" => b.value_raise_wet = knob.size(key)?,
            "semi_bluff_bb" => b.semi_bluff_bb = knob.size(key)?,
            "semi_bluff_depth" => b.semi_bluff_depth = knob.chips(key)?,
            "dry_semi_bluff" => b.dry_semi_bluff = knob.frequency(key)?,
            "max_crowd" => b.max_crowd = knob.chips(key)? as usize,
            "semi_bluff_crowd" => b.semi_bluff_crowd = knob.chips(key)? as usize,
            "draw_auto" => b.draw_auto = knob.flag(key)?,
            "pot_sizing" => self.pot_sizing = knob.flag(key)?,
            "pot_odds" => p.pot_odds = knob.frequency(key)?,
            "cheap_call_stack" => p.cheap_call_stack = knob.frequency(key)?,
            "cheap_call_cap" => p.cheap_call_cap = knob.chips(key)?,
            "xr_bluff" => p.xr_bluff = knob.frequency(key)?,
            "thin_value" => p.thin_value = knob.frequency(key)?,
            "dry_bluff" => p.dry_bluff = knob.frequency(key)?,
            "wet_bluff" => p.wet_bluff = knob.frequency(key)?,
            "blocker_bonus" => p.blocker_bonus = knob.frequency(key)?,
            "polar_overbet" => p.polar_overbet = knob.size(key)?,
            "value_frac" => p.value_frac = knob.size(key)?,
            "value_frac_low_spr" => p.value_frac_low_spr = knob.size(key)?,
            "cbet_small" => p.cbet_small = knob.size(key)?,
            "max_overbet" => p.max_overbet = knob.frequency(key)?,
            "value_raise_freq" => p.value_raise_freq = knob.frequency(key)?,
            "overbet_freq" => p.overbet_freq = knob.frequency(key)?,
            "multiway_dampen" => p.multiway_dampen = knob.frequency(key)?,
            "float" => p.float = knob.frequency(key)?,
            "huge_bet" => p.huge_bet = knob.size(key)?,
            "punish_passives" => p.punish_passives = knob.flag(key)?,
            "tighten_vs_huge" => p.tighten_vs_huge = knob.flag(key)?,
            "dampen_multiway" => p.dampen_multiway = knob.flag(key)?,
            "press_lead" => d.press_lead = knob.size(key)?,
            "hu_push_fold_bb" => d.push_fold_bb = knob.chips(key)?,
            "hu_short_bb" => d.short_bb = knob.chips(key)?,
            "hu_open_bb" => d.open_bb = knob.size(key)?,
            "hu_raise_all_bb" => d.raise_all_bb = knob.chips(key)?,
            "hu_iso_bb" => d.iso_bb = knob.size(key)?,
            "hu_reraise_small" => d.reraise_small = knob.size(key)?,
            "hu_reraise_big" => d.reraise_big = knob.size(key)?,
            "hu_squeeze_bb" => d.squeeze_bb = knob.size(key)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_where_they_should() {
        assert!(!Tuning::adaptive().pot_sizing);
        assert!(Tuning::apex().pot_sizing);
        assert!(Tuning::exploit().pot.float < 1.0);
        assert!(Tuning::heads_up().blinds.small.at(1.0) == 1.0);
        assert!(Tuning::adaptive().crowd.pick(5).kicker == 12);
        assert!(Tuning::default() == Tuning::adaptive());
    }

    #[test]
    fn crowded_pots_want_a_better_kicker() {
        for tuning in [Tuning::advanced(), Tuning::apex(), Tuning::exploit()] {
            assert!(tuning.crowd.pick(2).kicker == 10);
            assert!(tuning.crowd.pick(3).kicker == 11);
            assert!(tuning.crowd.pick(6).kicker == 12);
        }
    }

    #[test]
    fn bare_crowd_knob_sets_every_group() {
        let mut t = Tuning::adaptive();
        t.set("stab", &Knob::Number(0.1)).unwrap();
        assert!(t.crowd.heads_up.stab == 0.1);
        assert!(t.crowd.three_way.stab == 0.1);
        assert!(t.crowd.multiway.stab == 0.1);
        assert!(t.duel.press.stab == PRESS.stab);
    }

    #[test]
    fn prefixed_knob_sets_one_group() {
        let mut t = Tuning::adaptive();
        t.set("multiway.kicker", &Knob::Number(13.0)).unwrap();
        t.set("press.draw_raise", &Knob::Number(0.5)).unwrap();
        assert!(t.crowd.multiway.kicker == 13);
        assert!(t.crowd.heads_up.kicker == 10);
        assert!(t.duel.press.draw_raise == 0.5);
    }

    #[test]
    fn long_form_and_uppercase_names() {
        let mut t = Tuning::apex();
        t.set("POT_ODDS_CALL_THRESHOLD", &Knob::Number(0.3)).unwrap();
        t.set("punish_passives", &Knob::Flag(false)).unwrap();
        assert!(t.pot.pot_odds == 0.3);
        assert!(!t.pot.punish_passives);
    }

    #[test]
    fn unknown_keys_list_the_valid_ones() {
        let mut t = Tuning::adaptive();
        match t.set("bluffiness", &Knob::Number(0.3)) {
            Err(ConfigError::UnknownKnob { key, valid }) => {
                assert!(key == "bluffiness");
                assert!(valid.contains("pot_odds"));
                assert!(valid.contains("press.stab"));
            }
            _ => panic!("expected an unknown knob"),
        }
        assert!(matches!(
            t.set("sideways.stab", &Knob::Number(0.3)),
            Err(ConfigError::UnknownKnob { .. })
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut t = Tuning::adaptive();
        assert!(matches!(
            t.set("pot_odds", &Knob::Number(1.7)),
            Err(ConfigError::InvalidKnob { .. })
        ));
        assert!(matches!(
            t.set("open_ip", &Knob::Flag(true)),
            Err(ConfigError::InvalidKnob { .. })
        ));
    }

    #[test]
    fn every_listed_key_is_settable() {
        for key in Tuning::keys() {
            let mut t = Tuning::adaptive();
            let accepted = [Knob::Number(1.0), Knob::Number(2.0), Knob::Flag(true)]
                .iter()
                .any(|knob| t.set(&key, knob).is_ok());
            assert!(accepted, "{} rejected every value", key);
        }
    }

    #[test]
    fn apply_overrides_in_order() {
        let overrides: Overrides =
            serde_json::from_str(r#"{"dry_bluff": 0.5, "heads_up.open_loose": 0.9}"#).unwrap();
        let mut t = Tuning::apex();
        t.apply(&overrides).unwrap();
        assert!(t.pot.dry_bluff == 0.5);
        assert!(t.crowd.heads_up.open_loose == 0.9);
    }
}
