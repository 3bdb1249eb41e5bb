use super::Strategy;
use super::conservative::Conservative;
use super::error::ConfigError;
use super::exploit::Exploit;
use super::headsup::HeadsUp;
use super::knobs::Overrides;
use super::positional::Positional;
use super::tuning::Tuning;
use crate::opponents::OpponentModel;
use std::sync::Arc;

/// Every strategy the selector can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Basic,
    Advanced,
    Adaptive,
    Apex,
    Exploit,
    HeadsUp,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Basic,
        Kind::Advanced,
        Kind::Adaptive,
        Kind::Apex,
        Kind::Exploit,
        Kind::HeadsUp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Basic => "basic",
            Kind::Advanced => "advanced",
            Kind::Adaptive => "adaptive",
            Kind::Apex => "apex",
            Kind::Exploit => "exploit",
            Kind::HeadsUp => "heads_up",
        }
    }
    pub fn alias(&self) -> Option<&'static str> {
        match self {
            Kind::Basic => Some("conservative"),
            Kind::Apex => Some("apex_predator"),
            Kind::Exploit => Some("ultra_killer"),
            Kind::HeadsUp => Some("hu_closer"),
            _ => None,
        }
    }
    pub fn summary(&self) -> &'static str {
        match self {
            Kind::Basic => "min-raise pairs, call high cards, fold the rest",
            Kind::Advanced => "positional ranges with big-blind postflop sizing",
            Kind::Adaptive => "crowd-aware ranges, limp isolation, short-stack jams",
            Kind::Apex => "pot-fraction sizing, polar overbets, blocker check-raises",
            Kind::Exploit => "apex tuned live against the opponent model",
            Kind::HeadsUp => "adaptive until two remain, then press or close",
        }
    }
    /// Default tuning, or none for strategies without knobs.
    pub fn tuning(&self) -> Option<Tuning> {
        match self {
            Kind::Basic => None,
            Kind::Advanced => Some(Tuning::advanced()),
            Kind::Adaptive => Some(Tuning::adaptive()),
            Kind::Apex => Some(Tuning::apex()),
            Kind::Exploit => Some(Tuning::exploit()),
            Kind::HeadsUp => Some(Tuning::heads_up()),
        }
    }
}

impl TryFrom<&str> for Kind {
    type Error = ConfigError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let name = s.trim().to_ascii_lowercase();
        Kind::ALL
            .into_iter()
            .find(|k| k.name() == name || k.alias() == Some(name.as_str()))
            .ok_or_else(|| ConfigError::UnknownStrategy {
                name: s.to_string(),
                valid: Selector::names().join(", "),
            })
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Builds strategies by name and owns the opponent model they share.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    model: Arc<OpponentModel>,
}

impl Selector {
    pub fn new(model: Arc<OpponentModel>) -> Self {
        Self { model }
    }
    pub fn model(&self) -> &Arc<OpponentModel> {
        &self.model
    }
    pub fn names() -> Vec<&'static str> {
        Kind::ALL
            .iter()
            .flat_map(|k| std::iter::once(k.name()).chain(k.alias()))
            .collect()
    }
    pub fn available() -> Vec<(&'static str, &'static str)> {
        Kind::ALL.iter().map(|k| (k.name(), k.summary())).collect()
    }

    /// Construct a ready strategy, validating every override.
    pub fn build(&self, name: &str, overrides: &Overrides) -> Result<Box<dyn Strategy>, ConfigError> {
        let kind = Kind::try_from(name)?;
        let tuning = match kind.tuning() {
            Some(mut tuning) => {
                tuning.apply(overrides)?;
                Some(tuning)
            }
            None => match overrides.keys().next() {
                Some(key) => {
                    return Err(ConfigError::UnknownKnob {
                        key: key.clone(),
                        valid: format!("none ({} takes no knobs)", kind),
                    });
                }
                None => None,
            },
        };
        log::info!("selected strategy {} with {} overrides", kind, overrides.len());
        let strategy: Box<dyn Strategy> = match (kind, tuning) {
            (Kind::Exploit, Some(tuning)) => Box::new(Exploit::new(tuning, self.model.clone())),
            (Kind::HeadsUp, Some(tuning)) => Box::new(HeadsUp::new(tuning)),
            (_, Some(tuning)) => Box::new(Positional::new(kind.name(), tuning)),
            (_, None) => Box::new(Conservative),
        };
        Ok(strategy)
    }
}
