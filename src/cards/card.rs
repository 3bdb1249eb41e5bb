use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// A card as the platform describes it. Either half may fail to parse;
/// downstream classification treats a missing rank as ordinal 0.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Wire", into = "Wire")]
pub struct Card {
    rank: Option<Rank>,
    suit: Option<Suit>,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank: Some(rank),
            suit: Some(suit),
        }
    }
    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }
    /// Rank ordinal in 2..=14, or 0 when the rank did not parse.
    pub fn ordinal(&self) -> u8 {
        self.rank.map(u8::from).unwrap_or(0)
    }
}

/// "As", "Td", "10h"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| anyhow::anyhow!("empty card str"))?;
        let (rank, suit) = s.split_at(split);
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.rank, self.suit) {
            (Some(r), Some(s)) => write!(f, "{}{}", r, s),
            (Some(r), None) => write!(f, "{}?", r),
            (None, Some(s)) => write!(f, "?{}", s),
            (None, None) => write!(f, "??"),
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self::new(Rank::random(), Suit::random())
    }
}

/// JSON shape on the wire: `{"rank": "K", "suit": "spades"}`.
/// Ranks may also arrive as numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Wire {
    #[serde(default)]
    rank: Value,
    #[serde(default)]
    suit: Value,
}

impl From<Wire> for Card {
    fn from(wire: Wire) -> Self {
        let rank = match wire.rank {
            Value::String(ref s) => Rank::try_from(s.as_str()).ok(),
            Value::Number(ref n) => n
                .as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .and_then(|n| Rank::try_from(n).ok()),
            _ => None,
        };
        let suit = match wire.suit {
            Value::String(ref s) => Suit::try_from(s.as_str()).ok(),
            _ => None,
        };
        Self { rank, suit }
    }
}

impl From<Card> for Wire {
    fn from(card: Card) -> Self {
        let rank = card
            .rank
            .map(|r| match r {
                Rank::Ten => Value::from("10"),
                r => Value::from(r.to_string()),
            })
            .unwrap_or(Value::Null);
        let suit = card
            .suit
            .map(|s| match s {
                Suit::Club => Value::from("clubs"),
                Suit::Diamond => Value::from("diamonds"),
                Suit::Heart => Value::from("hearts"),
                Suit::Spade => Value::from("spades"),
            })
            .unwrap_or(Value::Null);
        Self { rank, suit }
    }
}
