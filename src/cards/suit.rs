use crate::Arbitrary;

/// Card suit. Only equality matters to the decision core.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const MAX: Self = Suit::Spade;
    pub const MIN: Self = Suit::Club;

    pub const fn all() -> &'static [Self] {
        &[Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// accepts "hearts", "Heart", "h", "♥" and friends
impl TryFrom<&str> for Suit {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "club" | "clubs" | "♣" => Ok(Suit::Club),
            "d" | "diamond" | "diamonds" | "♦" => Ok(Suit::Diamond),
            "h" | "heart" | "hearts" | "♥" => Ok(Suit::Heart),
            "s" | "spade" | "spades" | "♠" => Ok(Suit::Spade),
            _ => Err(anyhow::anyhow!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

impl Arbitrary for Suit {
    fn random() -> Self {
        use rand::Rng;
        Self::all()[rand::rng().random_range(0..4)]
    }
}
