use super::stats::Stats;
use super::tracker::Tracker;
use super::villain::Villain;
use crate::Chips;
use crate::HALFLIFE;
use crate::Probability;
use crate::gameplay::GameState;
use crate::gameplay::Spot;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

/// Table-wide averages over the opponents still in the pot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Read {
    pub vpip: Probability,
    pub pfr: Probability,
    pub af: Probability,
    pub fold_to_raise: Probability,
    /// Opponents with at least one observed hand.
    pub known: usize,
}

impl Default for Read {
    fn default() -> Self {
        let prior = Stats::default();
        Self {
            vpip: prior.vpip,
            pfr: prior.pfr,
            af: prior.af,
            fold_to_raise: prior.fold_to_raise,
            known: 0,
        }
    }
}

#[derive(Debug, Default)]
struct Ledger {
    stats: HashMap<Villain, Stats>,
    tracker: Tracker,
}

/// In-process memory of opponent tendencies, shared by every strategy a
/// selector hands out. Advisory only: lookups of unseen opponents return
/// priors, and nothing survives the process.
#[derive(Debug)]
pub struct OpponentModel {
    halflife: Probability,
    ledger: Mutex<Ledger>,
}

impl Default for OpponentModel {
    fn default() -> Self {
        Self::new(HALFLIFE)
    }
}

impl OpponentModel {
    pub fn new(halflife: Probability) -> Self {
        Self {
            halflife,
            ledger: Mutex::new(Ledger::default()),
        }
    }
    pub fn halflife(&self) -> Probability {
        self.halflife
    }
    /// A panic elsewhere never costs us the table.
    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Note the table as seen at one of our decisions.
    pub fn witness(&self, spot: &Spot, bet: Chips) {
        self.ledger().tracker.witness(spot, bet);
    }

    /// Fold the finished hand into every opponent's averages, then forget it.
    pub fn observe_hand(&self, state: &GameState) {
        let alpha = Stats::alpha(self.halflife);
        let mut ledger = self.ledger();
        ledger.tracker.sync(state);
        let samples = state
            .opponents()
            .filter(|(_, p)| p.is_alive())
            .map(|(_, p)| (Villain::from(p), ledger.tracker.sample(p)))
            .collect::<Vec<_>>();
        for (villain, sample) in samples {
            let stats = ledger.stats.entry(villain.clone()).or_default();
            stats.absorb(&sample, alpha);
            log::debug!("{:<24} {}", villain, stats);
        }
        ledger.tracker.reset();
    }

    pub fn stats(&self, villain: &Villain) -> Stats {
        self.ledger().stats.get(villain).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.ledger().stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Average opponent still contesting this pot.
    pub fn read(&self, spot: &Spot) -> Read {
        let ledger = self.ledger();
        let seen = spot
            .state
            .opponents()
            .filter(|(_, p)| p.is_active())
            .map(|(_, p)| {
                ledger
                    .stats
                    .get(&Villain::from(p))
                    .copied()
                    .unwrap_or_default()
            })
            .collect::<Vec<Stats>>();
        if seen.is_empty() {
            return Read::default();
        }
        let n = seen.len() as Probability;
        let mean = |f: fn(&Stats) -> Probability| seen.iter().map(f).sum::<Probability>() / n;
        Read {
            vpip: mean(|s| s.vpip),
            pfr: mean(|s| s.pfr),
            af: mean(|s| s.af),
            fold_to_raise: mean(|s| s.fold_to_raise),
            known: seen.iter().filter(|s| s.hands > 0).count(),
        }
    }
}
