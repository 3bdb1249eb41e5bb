use super::board::Board;
use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// The acting player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    /// Higher rank ordinal (0 if unparsed).
    pub fn hi(&self) -> u8 {
        self.0.ordinal().max(self.1.ordinal())
    }
    /// Lower rank ordinal (0 if unparsed).
    pub fn lo(&self) -> u8 {
        self.0.ordinal().min(self.1.ordinal())
    }
    /// Matching ranks count as a pair even when a suit failed to parse.
    pub fn is_pair(&self) -> bool {
        self.lo() > 0 && self.0.ordinal() == self.1.ordinal()
    }
    pub fn is_suited(&self) -> bool {
        matches!((self.0.suit(), self.1.suit()), (Some(a), Some(b)) if a == b)
    }
    pub fn both_high(&self, threshold: u8) -> bool {
        self.lo() >= threshold
    }
    pub fn has(&self, rank: Rank) -> bool {
        self.0.rank() == Some(rank) || self.1.rank() == Some(rank)
    }
    pub fn has_card(&self, rank: Rank, suit: Suit) -> bool {
        self.cards().contains(&Card::new(rank, suit))
    }
    /// Either hole rank appears on the board.
    pub fn pairs_board(&self, board: &Board) -> bool {
        self.cards()
            .iter()
            .map(Card::ordinal)
            .filter(|r| *r > 0)
            .any(|r| board.has(r))
    }
}

/// Fewer than two cards is malformed; any extras are ignored.
impl TryFrom<&[Card]> for Hole {
    type Error = anyhow::Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b, ..] => Ok(Self(*a, *b)),
            _ => Err(anyhow::anyhow!("need two hole cards, got {}", cards.len())),
        }
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        Self(a, b)
    }
}

/// "AsKd"
impl TryFrom<&str> for Hole {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let cut = s
            .char_indices()
            .find(|(_, c)| "cdhsCDHS♣♦♥♠".contains(*c))
            .map(|(i, c)| i + c.len_utf8())
            .ok_or_else(|| anyhow::anyhow!("invalid hole str: {}", s))?;
        let (a, b) = s.split_at(cut);
        Ok(Self(Card::try_from(a)?, Card::try_from(b)?))
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl Arbitrary for Hole {
    fn random() -> Self {
        let a = Card::random();
        loop {
            let b = Card::random();
            if b != a {
                return Self(a, b);
            }
        }
    }
}
