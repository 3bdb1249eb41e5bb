use super::error::ConfigError;
use crate::CHIP_CEILING;
use crate::Chips;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single configuration override as it arrives from JSON or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Knob {
    Flag(bool),
    Number(f64),
}

/// Knob name to value, applied over a preset at selection time.
pub type Overrides = BTreeMap<String, Knob>;

impl Knob {
    fn number(&self, key: &str) -> Result<f64, ConfigError> {
        match *self {
            Self::Number(n) if n.is_finite() => Ok(n),
            Self::Number(n) => Err(ConfigError::invalid(key, format!("{} is not finite", n))),
            Self::Flag(_) => Err(ConfigError::invalid(key, "expected a number, got a flag")),
        }
    }
    /// A probability in `[0, 1]`.
    pub fn frequency(&self, key: &str) -> Result<Probability, ConfigError> {
        match self.number(key)? {
            n if (0.0..=1.0).contains(&n) => Ok(n),
            n => Err(ConfigError::invalid(key, format!("frequency {} outside [0, 1]", n))),
        }
    }
    /// A non-negative multiplier or fraction.
    pub fn size(&self, key: &str) -> Result<f64, ConfigError> {
        match self.number(key)? {
            n if n >= 0.0 => Ok(n),
            n => Err(ConfigError::invalid(key, format!("negative size {}", n))),
        }
    }
    /// A non-negative whole amount (chips or big blinds).
    pub fn chips(&self, key: &str) -> Result<Chips, ConfigError> {
        self.size(key).map(|n| (n.round() as Chips).min(CHIP_CEILING))
    }
    /// At least one.
    pub fn positive(&self, key: &str) -> Result<Chips, ConfigError> {
        match self.chips(key)? {
            0 => Err(ConfigError::invalid(key, "must be at least 1")),
            n => Ok(n),
        }
    }
    /// A card rank, 2 through 14.
    pub fn rank(&self, key: &str) -> Result<u8, ConfigError> {
        match self.chips(key)? {
            n @ 2..=14 => Ok(n as u8),
            n => Err(ConfigError::invalid(key, format!("rank {} outside 2..=14", n))),
        }
    }
    /// A starting-hand bucket, 0 (none) through 8.
    pub fn bucket(&self, key: &str) -> Result<u8, ConfigError> {
        match self.chips(key)? {
            n @ 0..=8 => Ok(n as u8),
            n => Err(ConfigError::invalid(key, format!("bucket {} outside 0..=8", n))),
        }
    }
    pub fn flag(&self, key: &str) -> Result<bool, ConfigError> {
        match *self {
            Self::Flag(b) => Ok(b),
            Self::Number(n) if n == 0.0 => Ok(false),
            Self::Number(n) if n == 1.0 => Ok(true),
            Self::Number(n) => Err(ConfigError::invalid(key, format!("expected a flag, got {}", n))),
        }
    }
}

/// Parses `true`, `false`, `on`, `off` or any float.
impl TryFrom<&str> for Knob {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" => Ok(Self::Flag(true)),
            "false" | "off" | "no" => Ok(Self::Flag(false)),
            other => other
                .parse::<f64>()
                .map(Self::Number)
                .map_err(|_| anyhow::anyhow!("knob value '{}' is neither a flag nor a number", s)),
        }
    }
}

impl std::fmt::Display for Knob {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Frequencies and thresholds that change with how many players contest the pot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knobs {
    /// Scales big-blind bet sizes.
    pub aggression: f64,
    /// Frequency of the loose part of opening ranges.
    pub open_loose: Probability,
    pub three_bet_bluff: Probability,
    /// Worst bucket the big blind defends.
    pub bb_defend: u8,
    /// Preflop peel limit as a stack divisor.
    pub cheap_div: Chips,
    /// Lowest side card that keeps top pair a value hand.
    pub kicker: u8,
    pub stab: Probability,
    pub draw_bet: Probability,
    pub draw_raise: Probability,
    /// Largest draw call as a share of the stack.
    pub call_cap: Probability,
    /// Largest marginal-pair call as a share of the stack.
    pub marginal_cap: Probability,
    /// Deepest effective stack that still jams a non-premium over a raise.
    pub jam_facing_raise: Chips,
}

impl Knobs {
    pub const KEYS: [&'static str; 12] = [
        "aggression",
        "open_loose",
        "three_bet_bluff",
        "bb_defend",
        "cheap_div",
        "kicker",
        "stab",
        "draw_bet",
        "draw_raise",
        "call_cap",
        "marginal_cap",
        "jam_facing_raise",
    ];

    /// Set `field` from `knob`, reporting errors against the full `key`.
    /// `Ok(false)` means no such field.
    pub fn set(&mut self, field: &str, key: &str, knob: &Knob) -> Result<bool, ConfigError> {
        match field {
            "aggression" => self.aggression = knob.size(key)?,
            "open_loose" => self.open_loose = knob.frequency(key)?,
            "three_bet_bluff" => self.three_bet_bluff = knob.frequency(key)?,
            "bb_defend" => self.bb_defend = knob.bucket(key)?,
            "cheap_div" => self.cheap_div = knob.positive(key)?,
            "kicker" => self.kicker = knob.rank(key)?,
            "stab" => self.stab = knob.frequency(key)?,
            "draw_bet" => self.draw_bet = knob.frequency(key)?,
            "draw_raise" => self.draw_raise = knob.frequency(key)?,
            "call_cap" => self.call_cap = knob.frequency(key)?,
            "marginal_cap" => self.marginal_cap = knob.frequency(key)?,
            "jam_facing_raise" => self.jam_facing_raise = knob.chips(key)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// One value per crowd size: two, three, or four and more players in the pot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crowd<T> {
    pub heads_up: T,
    pub three_way: T,
    pub multiway: T,
}

impl<T> Crowd<T> {
    pub const GROUPS: [&'static str; 3] = ["heads_up", "three_way", "multiway"];

    pub fn pick(&self, n: usize) -> &T {
        match n {
            0..=2 => &self.heads_up,
            3 => &self.three_way,
            _ => &self.multiway,
        }
    }
    pub fn group_mut(&mut self, group: &str) -> Option<&mut T> {
        match group {
            "heads_up" => Some(&mut self.heads_up),
            "three_way" => Some(&mut self.three_way),
            "multiway" => Some(&mut self.multiway),
            _ => None,
        }
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        [&mut self.heads_up, &mut self.three_way, &mut self.multiway].into_iter()
    }
}

impl<T: Clone> Crowd<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            heads_up: value.clone(),
            three_way: value.clone(),
            multiway: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knobs() -> Knobs {
        Knobs {
            aggression: 1.0,
            open_loose: 0.3,
            three_bet_bluff: 0.3,
            bb_defend: 7,
            cheap_div: 45,
            kicker: 10,
            stab: 0.6,
            draw_bet: 0.5,
            draw_raise: 0.4,
            call_cap: 0.1,
            marginal_cap: 0.05,
            jam_facing_raise: 9,
        }
    }

    #[test]
    fn parse_from_command_line() {
        assert!(Knob::try_from("true").unwrap() == Knob::Flag(true));
        assert!(Knob::try_from(" OFF ").unwrap() == Knob::Flag(false));
        assert!(Knob::try_from("0.27").unwrap() == Knob::Number(0.27));
        assert!(Knob::try_from("lots").is_err());
    }

    #[test]
    fn parse_from_json() {
        let overrides: Overrides =
            serde_json::from_str(r#"{"pot_odds": 0.3, "punish_passives": false}"#).unwrap();
        assert!(overrides["pot_odds"] == Knob::Number(0.3));
        assert!(overrides["punish_passives"] == Knob::Flag(false));
    }

    #[test]
    fn typed_accessors_validate() {
        assert!(Knob::Number(1.5).frequency("k").is_err());
        assert!(Knob::Number(-1.0).size("k").is_err());
        assert!(Knob::Flag(true).size("k").is_err());
        assert!(Knob::Number(f64::NAN).size("k").is_err());
        assert!(Knob::Number(15.0).rank("k").is_err());
        assert!(Knob::Number(0.0).positive("k").is_err());
        assert!(Knob::Number(1.0).flag("k").unwrap());
        assert!(Knob::Number(0.5).flag("k").is_err());
    }

    #[test]
    fn set_known_and_unknown_fields() {
        let mut k = knobs();
        assert!(k.set("stab", "stab", &Knob::Number(0.9)).unwrap());
        assert!(k.stab == 0.9);
        assert!(!k.set("stub", "stub", &Knob::Number(0.9)).unwrap());
        assert!(k.set("kicker", "kicker", &Knob::Number(1.0)).is_err());
        for key in Knobs::KEYS {
            assert!(k.set(key, key, &Knob::Number(2.0)).is_ok() || k.set(key, key, &Knob::Number(1.0)).is_ok());
        }
    }

    #[test]
    fn crowd_picks_by_pot_size() {
        let crowd = Crowd {
            heads_up: 2,
            three_way: 3,
            multiway: 4,
        };
        assert!(*crowd.pick(0) == 2);
        assert!(*crowd.pick(2) == 2);
        assert!(*crowd.pick(3) == 3);
        assert!(*crowd.pick(6) == 4);
    }
}
