use super::card::Card;
use super::hole::Hole;

/// Preflop strength class of a starting hand, 1 (best) through 8 (worst).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bucket {
    /// TT+, AK
    Premium = 1,
    /// 77-99, AQ, AJ, KQs, KJs, QJs, JTs
    Strong = 2,
    /// offsuit broadway, KTs, QTs, suited mid connectors and one-gappers
    Broadway = 3,
    /// 22-66
    SmallPair = 4,
    /// A2s-A9s
    SuitedAce = 5,
    /// remaining suited connectors and gappers
    SuitedConnector = 6,
    /// K9o-K2o, Q9o-Q2o, J9o-J2o
    WeakBroadway = 7,
    Trash = 8,
}

impl Bucket {
    pub const fn index(&self) -> u8 {
        *self as u8
    }
}

impl From<&Hole> for Bucket {
    fn from(hole: &Hole) -> Self {
        let hi = hole.hi();
        let lo = hole.lo();
        let suited = hole.is_suited();
        if lo == 0 {
            return Self::Trash;
        }
        if hole.is_pair() {
            return match hi {
                10.. => Self::Premium,
                7..=9 => Self::Strong,
                _ => Self::SmallPair,
            };
        }
        match (hi, lo, suited) {
            (14, 13, _) => Self::Premium,
            (14, 11..=12, _) => Self::Strong,
            (13, 11..=12, true) | (12, 11, true) | (11, 10, true) => Self::Strong,
            (10..=13, 10.., false) => Self::Broadway,
            (13 | 12, 10, true) => Self::Broadway,
            (8.., _, true) if hi - lo <= 2 => Self::Broadway,
            (14, ..=9, true) => Self::SuitedAce,
            (5.., _, true) if hi - lo <= 3 => Self::SuitedConnector,
            (11..=13, ..=9, false) => Self::WeakBroadway,
            _ => Self::Trash,
        }
    }
}

/// Anything short of two cards is trash.
impl From<&[Card]> for Bucket {
    fn from(cards: &[Card]) -> Self {
        Hole::try_from(cards)
            .map(|hole| Self::from(&hole))
            .unwrap_or(Self::Trash)
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "B{}", self.index())
    }
}

/// Set of buckets as a bitmask, used by range tables.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct BucketSet(u16);

impl BucketSet {
    pub const EMPTY: Self = Self(0);

    pub const fn of(buckets: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < buckets.len() {
            bits |= 1 << buckets[i];
            i += 1;
        }
        Self(bits)
    }
    /// Buckets 1 through n inclusive.
    pub const fn upto(n: u8) -> Self {
        let mut bits = 0u16;
        let mut i = 1;
        while i <= n {
            bits |= 1 << i;
            i += 1;
        }
        Self(bits)
    }
    pub const fn contains(&self, bucket: Bucket) -> bool {
        self.0 & (1 << bucket as u8) != 0
    }
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;

    fn bucket(s: &str) -> Bucket {
        Bucket::from(&Hole::try_from(s).unwrap())
    }

    #[test]
    fn premiums() {
        assert!(bucket("AsAd") == Bucket::Premium);
        assert!(bucket("TsTd") == Bucket::Premium);
        assert!(bucket("AsKd") == Bucket::Premium);
        assert!(bucket("AsKs") == Bucket::Premium);
    }

    #[test]
    fn table_spot_checks() {
        assert!(bucket("9s9d") == Bucket::Strong);
        assert!(bucket("AhJc") == Bucket::Strong);
        assert!(bucket("JhTh") == Bucket::Strong);
        assert!(bucket("KhTc") == Bucket::Broadway);
        assert!(bucket("Th9h") == Bucket::Broadway);
        assert!(bucket("Jh9h") == Bucket::Broadway);
        assert!(bucket("6s6d") == Bucket::SmallPair);
        assert!(bucket("As5s") == Bucket::SuitedAce);
        assert!(bucket("6h5h") == Bucket::SuitedConnector);
        assert!(bucket("Kh4c") == Bucket::WeakBroadway);
        assert!(bucket("7c2d") == Bucket::Trash);
    }

    #[test]
    fn ace_ten_is_outside_every_named_range() {
        assert!(bucket("AsTd") == Bucket::Trash);
        assert!(bucket("AsTs") == Bucket::Trash);
        assert!(bucket("As9s") == Bucket::SuitedAce);
        assert!(bucket("KsTd") == Bucket::Broadway);
        assert!(bucket("QhTc") == Bucket::Broadway);
    }

    #[test]
    fn totality_over_169_classes() {
        let mut classes = 0;
        for hi in Rank::all() {
            for lo in Rank::all().iter().filter(|r| *r <= hi) {
                for suited in [true, false] {
                    if hi == lo && suited {
                        continue;
                    }
                    let a = crate::cards::Card::new(*hi, Suit::Spade);
                    let b = crate::cards::Card::new(*lo, if suited { Suit::Spade } else { Suit::Heart });
                    let index = Bucket::from(&Hole::from((a, b))).index();
                    assert!((1..=8).contains(&index));
                    classes += 1;
                }
            }
        }
        assert!(classes == 169);
    }

    #[test]
    fn malformed_is_trash() {
        assert!(Bucket::from(&[][..]) == Bucket::Trash);
        let one = [crate::cards::Card::try_from("As").unwrap()];
        assert!(Bucket::from(&one[..]) == Bucket::Trash);
        let junk = serde_json::from_value::<crate::cards::Card>(serde_json::json!({"rank": "X"})).unwrap();
        assert!(Bucket::from(&[junk, one[0]][..]) == Bucket::Trash);
    }

    #[test]
    fn sets() {
        let set = BucketSet::of(&[1, 5]);
        assert!(set.contains(Bucket::Premium));
        assert!(set.contains(Bucket::SuitedAce));
        assert!(!set.contains(Bucket::Strong));
        assert!(BucketSet::upto(3).contains(Bucket::Broadway));
        assert!(!BucketSet::upto(3).contains(Bucket::SmallPair));
        assert!(BucketSet::EMPTY.is_empty());
    }
}
