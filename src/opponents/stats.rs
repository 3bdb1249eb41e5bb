use crate::AF_CEILING;
use crate::PRIOR_AF;
use crate::PRIOR_FOLD_TO_RAISE;
use crate::PRIOR_PFR;
use crate::PRIOR_VPIP;
use crate::Probability;

/// Smoothed tendencies of one opponent. Fresh entries hold neutral priors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub vpip: Probability,
    pub pfr: Probability,
    pub af: Probability,
    pub fold_to_raise: Probability,
    pub hands: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            vpip: PRIOR_VPIP,
            pfr: PRIOR_PFR,
            af: PRIOR_AF,
            fold_to_raise: PRIOR_FOLD_TO_RAISE,
            hands: 0,
        }
    }
}

/// What one completed hand revealed about an opponent.
/// `None` means the hand said nothing about that statistic.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample {
    pub vpip: bool,
    pub pfr: bool,
    pub af: Option<Probability>,
    pub fold_to_raise: Option<bool>,
}

impl Stats {
    /// Exponential smoothing weight for a half-life measured in hands.
    pub fn alpha(halflife: Probability) -> Probability {
        2.0 / (halflife.max(1.0) + 1.0)
    }
    pub fn absorb(&mut self, sample: &Sample, alpha: Probability) {
        let ewma = |old: Probability, new: Probability| old + alpha * (new - old);
        self.vpip = ewma(self.vpip, sample.vpip as u8 as Probability);
        self.pfr = ewma(self.pfr, sample.pfr as u8 as Probability);
        if let Some(af) = sample.af {
            self.af = ewma(self.af, af.clamp(0.0, AF_CEILING));
        }
        if let Some(folded) = sample.fold_to_raise {
            self.fold_to_raise = ewma(self.fold_to_raise, folded as u8 as Probability);
        }
        self.hands += 1;
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "vpip {:.2} pfr {:.2} af {:.2} ftr {:.2} ({} hands)",
            self.vpip, self.pfr, self.af, self.fold_to_raise, self.hands
        )
    }
}
