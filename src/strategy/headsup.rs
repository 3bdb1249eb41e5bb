use super::Strategy;
use super::knobs::Knobs;
use super::positional::Positional;
use super::postflop;
use super::preflop;
use super::pushfold;
use super::ranges::Rule;
use super::tuning::Tuning;
use crate::Chips;
use crate::betting::raise_to_total;
use crate::gameplay::Position;
use crate::gameplay::Spot;

/// Stance once only two players remain in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Posture {
    /// Chip-ahead and not covered: apply pressure.
    Press,
    /// Otherwise: keep variance down and limp more from the button.
    Close,
}

/// Heads-up closer. Falls back to positional play while three or more
/// players are left, then switches to the two-handed seat mapping.
#[derive(Debug, Clone)]
pub struct HeadsUp {
    tuning: Tuning,
}

impl HeadsUp {
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning }
    }
    pub fn posture(&self, spot: &Spot) -> Posture {
        match spot.lead_ratio >= self.tuning.duel.press_lead && !spot.covered {
            true => Posture::Press,
            false => Posture::Close,
        }
    }
    fn knobs(&self, posture: Posture) -> &Knobs {
        match posture {
            Posture::Press => &self.tuning.duel.press,
            Posture::Close => &self.tuning.duel.close,
        }
    }

    fn preflop(&self, knobs: &Knobs, posture: Posture, spot: &Spot) -> Chips {
        let d = &self.tuning.duel;
        let bb = spot.bb as f64;
        let raise_to = |total: f64| {
            raise_to_total(
                spot.current_buy_in(),
                spot.to_call,
                spot.minimum_raise(),
                total.round() as Chips,
                spot.stack,
            )
        };
        let admits = |rule: &Rule, salt: &str| rule.admits(spot.bucket, knobs, &spot.mixer, salt);
        match spot.heads_up_position() {
            Position::Button if spot.to_call <= spot.bb => {
                let raise = posture == Posture::Press
                    || spot.effective_bb > d.raise_all_bb
                    || admits(&d.close_open, "open");
                match raise {
                    true => raise_to(d.open_bb * bb),
                    false => spot.call(),
                }
            }
            Position::Button => preflop::facing_raise(&self.tuning, knobs, spot, Position::Button),
            _ if spot.to_call == 0 => match admits(&d.iso, "iso") {
                true => raise_to(d.iso_bb * bb),
                false => 0,
            },
            _ if admits(&d.reraise, "reraise") => {
                let factor = match spot.to_call <= spot.bb.saturating_mul(2) {
                    true => d.reraise_small,
                    false => d.reraise_big,
                };
                raise_to(factor * spot.current_buy_in() as f64)
            }
            _ if spot.to_call <= spot.bb => {
                match spot.effective_bb >= d.squeeze_depth && admits(&d.squeeze, "squeeze") {
                    true => raise_to(d.squeeze_bb * bb),
                    false => spot.call(),
                }
            }
            _ => preflop::peel(knobs, spot),
        }
    }
}

impl Strategy for HeadsUp {
    fn name(&self) -> &'static str {
        "heads_up"
    }
    fn intent(&self, spot: &Spot) -> anyhow::Result<Chips> {
        if !spot.heads_up() {
            return Ok(Positional::play(&self.tuning, spot));
        }
        let posture = self.posture(spot);
        let knobs = self.knobs(posture);
        Ok(match spot.street.is_preflop() {
            true if spot.effective_bb <= self.tuning.duel.push_fold_bb => {
                pushfold::duel(&self.tuning, knobs, spot)
            }
            true => self.preflop(knobs, posture, spot),
            false => postflop::blinds(&self.tuning, knobs, spot),
        })
    }
}
