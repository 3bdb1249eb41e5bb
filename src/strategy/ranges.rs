use super::knobs::Crowd;
use super::knobs::Knobs;
use crate::Probability;
use crate::cards::Bucket;
use crate::cards::BucketSet;
use crate::gameplay::Position;
use crate::mixing::Mixer;

/// How often the mixed part of a range is played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mix {
    Never,
    Fixed(Probability),
    /// Scaled by the crowd's `open_loose`.
    Loose(Probability),
    /// Scaled by the crowd's `three_bet_bluff`.
    Bluff(Probability),
}

impl Mix {
    pub fn frequency(&self, knobs: &Knobs) -> Probability {
        match *self {
            Self::Never => 0.0,
            Self::Fixed(p) => p,
            Self::Loose(scale) => scale * knobs.open_loose,
            Self::Bluff(scale) => scale * knobs.three_bet_bluff,
        }
        .clamp(0.0, 1.0)
    }
}

/// Buckets played always, plus buckets played at a mixed frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub always: BucketSet,
    pub mixed: BucketSet,
    pub mix: Mix,
    /// Also admit every bucket up to the crowd's `bb_defend`.
    pub defend: bool,
}

impl Rule {
    pub const NONE: Self = Self {
        always: BucketSet::EMPTY,
        mixed: BucketSet::EMPTY,
        mix: Mix::Never,
        defend: false,
    };
    pub const fn always(buckets: BucketSet) -> Self {
        Self {
            always: buckets,
            ..Self::NONE
        }
    }
    pub const fn or(self, buckets: BucketSet, mix: Mix) -> Self {
        Self {
            mixed: buckets,
            mix,
            ..self
        }
    }
    pub const fn defending(self) -> Self {
        Self {
            defend: true,
            ..self
        }
    }
    pub fn admits(&self, bucket: Bucket, knobs: &Knobs, mixer: &Mixer, salt: &str) -> bool {
        self.always.contains(bucket)
            || (self.defend && bucket.index() <= knobs.bb_defend)
            || (self.mixed.contains(bucket) && mixer.chance(salt, self.mix.frequency(knobs)))
    }
}

/// A rule per seat role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table {
    pub early: Rule,
    pub middle: Rule,
    pub cutoff: Rule,
    pub button: Rule,
    pub small_blind: Rule,
    pub big_blind: Rule,
}

impl Table {
    pub const fn uniform(rule: Rule) -> Self {
        Self {
            early: rule,
            middle: rule,
            cutoff: rule,
            button: rule,
            small_blind: rule,
            big_blind: rule,
        }
    }
    pub fn at(&self, position: Position) -> &Rule {
        match position {
            Position::Early => &self.early,
            Position::Middle => &self.middle,
            Position::Cutoff => &self.cutoff,
            Position::Button => &self.button,
            Position::SmallBlind => &self.small_blind,
            Position::BigBlind => &self.big_blind,
        }
    }
}

/// Preflop range tables. Crowd-keyed tables are looked up by players in the pot.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranges {
    pub open: Crowd<Table>,
    /// Big blind completing an unraised pot.
    pub defend: Rule,
    pub value_3bet: Table,
    pub bluff_3bet: Table,
    pub cold_call: Table,
    pub jam: Crowd<Table>,
}

const PREMIUM: BucketSet = BucketSet::of(&[1, 2]);
const BLUFFS: BucketSet = BucketSet::of(&[3, 5, 6]);
const SPECULATIVE: BucketSet = BucketSet::of(&[2, 3, 4, 5, 6]);
const SHOVES: BucketSet = BucketSet::of(&[1, 2, 4, 5]);

impl Ranges {
    /// Fixed-frequency tables tuned for six-handed play.
    pub fn advanced() -> Self {
        let value = Rule::always(BucketSet::of(&[1]));
        let value_late = Rule::always(PREMIUM);
        let bluff = Rule::always(BLUFFS);
        let peel = Rule::NONE.or(BucketSet::of(&[2, 3, 4]), Mix::Fixed(0.3));
        Self {
            open: Crowd::uniform(Table {
                early: Rule::always(PREMIUM).or(BucketSet::of(&[3, 4, 5]), Mix::Fixed(0.3)),
                middle: Rule::always(BucketSet::upto(3)).or(BucketSet::of(&[4, 5]), Mix::Fixed(0.5)),
                cutoff: Rule::always(BucketSet::upto(6)).or(BucketSet::of(&[7]), Mix::Fixed(0.2)),
                button: Rule::always(BucketSet::upto(7)),
                small_blind: Rule::always(BucketSet::upto(6)),
                big_blind: Rule::always(PREMIUM),
            }),
            defend: Rule::always(BucketSet::upto(6)).or(BucketSet::of(&[7, 8]), Mix::Fixed(0.25)),
            value_3bet: Table {
                cutoff: value_late,
                button: value_late,
                small_blind: value_late,
                ..Table::uniform(value)
            },
            bluff_3bet: Table {
                cutoff: bluff,
                button: bluff,
                small_blind: bluff,
                ..Table::uniform(Rule::NONE)
            },
            cold_call: Table {
                early: peel,
                middle: peel,
                cutoff: Rule::always(SPECULATIVE),
                button: Rule::always(SPECULATIVE),
                small_blind: Rule::NONE.or(BucketSet::of(&[2, 3, 4, 5]), Mix::Fixed(0.4)),
                big_blind: Rule::always(BucketSet::upto(7)),
            },
            jam: Crowd::uniform(Table {
                early: Rule::always(SHOVES),
                middle: Rule::always(SHOVES),
                cutoff: Rule::always(BucketSet::upto(5)),
                button: Rule::always(BucketSet::upto(6)),
                small_blind: Rule::always(BucketSet::upto(8)),
                big_blind: Rule::always(BucketSet::upto(5)),
            }),
        }
    }

    /// Loose parts scale with the crowd knobs; jam ranges tighten as the pot fills.
    pub fn adaptive() -> Self {
        let value = Rule::always(BucketSet::of(&[1]));
        let value_late = Rule::always(PREMIUM);
        let bluff = Rule::NONE.or(BLUFFS, Mix::Bluff(1.0));
        let tight = Rule::always(BucketSet::of(&[1, 2, 4]));
        Self {
            open: Crowd::uniform(Table {
                early: Rule::always(BucketSet::upto(3)).or(BucketSet::of(&[4, 5]), Mix::Loose(1.0)),
                middle: Rule::always(BucketSet::upto(5)).or(BucketSet::of(&[6]), Mix::Loose(1.0)),
                cutoff: Rule::always(BucketSet::upto(5)).or(BucketSet::of(&[6]), Mix::Loose(1.0)),
                button: Rule::always(BucketSet::upto(6)).or(BucketSet::of(&[7]), Mix::Loose(1.0)),
                small_blind: Rule::always(BucketSet::upto(6)).or(BucketSet::of(&[7]), Mix::Loose(0.6)),
                big_blind: Rule::always(PREMIUM),
            }),
            defend: Rule::NONE.defending(),
            value_3bet: Table {
                cutoff: value_late,
                button: value_late,
                ..Table::uniform(value)
            },
            bluff_3bet: Table {
                cutoff: bluff,
                button: bluff,
                small_blind: bluff,
                ..Table::uniform(Rule::NONE)
            },
            cold_call: Table {
                early: Rule::NONE,
                middle: Rule::NONE,
                cutoff: Rule::always(SPECULATIVE),
                button: Rule::always(SPECULATIVE),
                small_blind: Rule::NONE.or(BucketSet::of(&[2, 4]), Mix::Fixed(0.35)),
                big_blind: Rule::NONE.defending(),
            },
            jam: Crowd {
                heads_up: Table {
                    early: Rule::always(BucketSet::upto(5)),
                    middle: Rule::always(BucketSet::upto(5)),
                    cutoff: Rule::always(BucketSet::upto(5)),
                    button: Rule::always(BucketSet::upto(7)),
                    small_blind: Rule::always(BucketSet::upto(8)),
                    big_blind: Rule::always(BucketSet::upto(5)),
                },
                three_way: Table {
                    early: Rule::always(SHOVES),
                    middle: Rule::always(SHOVES),
                    cutoff: Rule::always(SHOVES),
                    button: Rule::always(BucketSet::upto(6)),
                    small_blind: Rule::always(BucketSet::upto(8)),
                    big_blind: Rule::always(BucketSet::upto(5)),
                },
                multiway: Table {
                    early: tight,
                    middle: tight,
                    cutoff: tight,
                    button: Rule::always(BucketSet::upto(6)),
                    small_blind: Rule::always(SHOVES),
                    big_blind: Rule::always(SHOVES),
                },
            },
        }
    }

    /// Wide four-handed tables with fixed mixing frequencies.
    pub fn apex() -> Self {
        let value = Rule::always(BucketSet::of(&[1]));
        let value_late = Rule::always(PREMIUM);
        let peel = Rule::NONE.or(BucketSet::of(&[2, 3, 4]), Mix::Fixed(0.3));
        Self {
            open: Crowd::uniform(Table {
                early: Rule::always(BucketSet::upto(6)).or(BucketSet::of(&[7]), Mix::Fixed(0.35)),
                middle: Rule::always(BucketSet::upto(6)).or(BucketSet::of(&[7]), Mix::Fixed(0.25)),
                cutoff: Rule::always(BucketSet::upto(6)).or(BucketSet::of(&[7]), Mix::Fixed(0.25)),
                button: Rule::always(BucketSet::upto(8)),
                small_blind: Rule::always(BucketSet::upto(7)).or(BucketSet::of(&[8]), Mix::Fixed(0.15)),
                big_blind: Rule::always(PREMIUM),
            }),
            defend: Rule::always(BucketSet::upto(7)).or(BucketSet::of(&[8]), Mix::Fixed(0.5)),
            value_3bet: Table {
                cutoff: value_late,
                button: value_late,
                small_blind: value_late,
                ..Table::uniform(value)
            },
            bluff_3bet: Table {
                cutoff: Rule::NONE.or(BLUFFS, Mix::Fixed(0.40)),
                button: Rule::NONE.or(BLUFFS, Mix::Fixed(0.55)),
                small_blind: Rule::NONE.or(BLUFFS, Mix::Fixed(0.55)),
                big_blind: Rule::NONE.or(BLUFFS.union(BucketSet::of(&[7])), Mix::Fixed(0.45)),
                ..Table::uniform(Rule::NONE)
            },
            cold_call: Table {
                early: peel,
                middle: peel,
                cutoff: Rule::always(SPECULATIVE),
                button: Rule::always(SPECULATIVE),
                small_blind: Rule::NONE,
                big_blind: Rule::always(BucketSet::upto(7)),
            },
            jam: Crowd::uniform(Table {
                early: Rule::always(BucketSet::upto(5)),
                middle: Rule::always(BucketSet::upto(5)),
                cutoff: Rule::always(BucketSet::upto(5)),
                button: Rule::always(BucketSet::upto(7)),
                small_blind: Rule::always(BucketSet::upto(8)),
                big_blind: Rule::always(BucketSet::upto(5)),
            }),
        }
    }
}
