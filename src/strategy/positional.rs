use super::Strategy;
use super::postflop;
use super::preflop;
use super::pushfold;
use super::tuning::Tuning;
use crate::Chips;
use crate::gameplay::Spot;

/// Range tables by seat, push/fold when short, texture-driven postflop.
/// One type serves every preset; only the tuning differs.
#[derive(Debug, Clone)]
pub struct Positional {
    name: &'static str,
    tuning: Tuning,
}

impl Positional {
    pub fn new(name: &'static str, tuning: Tuning) -> Self {
        Self { name, tuning }
    }
    /// Street dispatch shared by every tuning-driven strategy.
    pub fn play(tuning: &Tuning, spot: &Spot) -> Chips {
        let knobs = tuning.crowd.pick(spot.n_in_pot);
        match spot.street.is_preflop() {
            true if spot.effective_bb <= tuning.preflop.push_fold_bb => pushfold::jam(tuning, knobs, spot),
            true => preflop::decide(tuning, knobs, spot),
            false if tuning.pot_sizing => postflop::pot(tuning, knobs, spot),
            false => postflop::blinds(tuning, knobs, spot),
        }
    }
}

impl Strategy for Positional {
    fn name(&self) -> &'static str {
        self.name
    }
    fn intent(&self, spot: &Spot) -> anyhow::Result<Chips> {
        Ok(Self::play(&self.tuning, spot))
    }
}
