use super::card::Card;
use super::street::Street;
use super::suit::Suit;

/// Community cards, 0 to 5 of them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn street(&self) -> Street {
        Street::from(self.len())
    }
    /// Parsed rank ordinals, unparsed cards skipped.
    pub fn ordinals(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().map(Card::ordinal).filter(|r| *r > 0)
    }
    /// Distinct ordinals ascending, with the ace doubled as 1 for wheel windows.
    pub fn wheel_ranks(&self) -> Vec<u8> {
        wheel(self.ordinals())
    }
    pub fn top(&self) -> u8 {
        self.ordinals().max().unwrap_or(0)
    }
    pub fn has(&self, rank: u8) -> bool {
        rank > 0 && self.ordinals().any(|r| r == rank)
    }
    pub fn count(&self, suit: Suit) -> usize {
        self.0.iter().filter(|c| c.suit() == Some(suit)).count()
    }
    /// Most frequent suit and its count.
    pub fn dominant(&self) -> Option<(Suit, usize)> {
        Suit::all()
            .iter()
            .map(|s| (*s, self.count(*s)))
            .filter(|(_, n)| *n > 0)
            .max_by_key(|(_, n)| *n)
    }
}

/// Sorted distinct ranks with a low ace appended as 1.
pub fn wheel(ranks: impl Iterator<Item = u8>) -> Vec<u8> {
    let mut ranks = ranks.filter(|r| *r > 0).collect::<Vec<u8>>();
    if ranks.contains(&14) {
        ranks.push(1);
    }
    ranks.sort_unstable();
    ranks.dedup();
    ranks
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

/// "Ah7d2c"
impl TryFrom<&str> for Board {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut cards = Vec::with_capacity(5);
        let mut start = 0;
        for (i, c) in s.char_indices() {
            if "cdhsCDHS♣♦♥♠".contains(c) {
                let end = i + c.len_utf8();
                cards.push(Card::try_from(&s[start..end])?);
                start = end;
            }
        }
        match s[start..].trim().is_empty() {
            true => Ok(Self(cards)),
            false => Err(anyhow::anyhow!("trailing garbage in board str: {}", s)),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
