use super::lenient;
use crate::Chips;
use crate::cards::Card;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Participation in the current hand.
/// Unknown or missing labels read as active.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum Status {
    #[default]
    Active,
    Folded,
    Out,
}

impl Status {
    /// Still contesting this pot.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
    /// Still alive in the match, whether or not in this pot.
    pub fn is_alive(&self) -> bool {
        !matches!(self, Self::Out)
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "folded" => Self::Folded,
            "out" => Self::Out,
            _ => Self::Active,
        }
    }
}
impl From<Value> for Status {
    fn from(value: Value) -> Self {
        value.as_str().map(Self::from).unwrap_or_default()
    }
}
impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Folded => write!(f, "folded"),
            Self::Out => write!(f, "out"),
        }
    }
}

/// One seat as reported by the platform. Hole cards are only
/// present for the acting seat, or for everyone at showdown.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    #[serde(deserialize_with = "lenient::integer")]
    pub id: i64,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub version: String,
    #[serde(deserialize_with = "lenient::chips")]
    pub stack: Chips,
    #[serde(deserialize_with = "lenient::chips")]
    pub bet: Chips,
    pub status: Status,
    #[serde(deserialize_with = "lenient::list")]
    pub hole_cards: Vec<Card>,
}

impl Player {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
    pub fn is_alive(&self) -> bool {
        self.status.is_alive()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<12} {:>6} bet {:>5} {}",
            self.name, self.stack, self.bet, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_labels() {
        assert!(Status::from("folded") == Status::Folded);
        assert!(Status::from("OUT") == Status::Out);
        assert!(Status::from("sitting") == Status::Active);
        assert!(Status::from(Value::Null) == Status::Active);
    }

    #[test]
    fn player_defaults() {
        let p = serde_json::from_value::<Player>(json!({"name": "villain"})).unwrap();
        assert!(p.stack == 0);
        assert!(p.bet == 0);
        assert!(p.is_active());
        assert!(p.hole_cards.is_empty());
    }

    #[test]
    fn player_lenient_fields() {
        let p = serde_json::from_value::<Player>(json!({
            "name": "me",
            "stack": "1000",
            "bet": null,
            "status": "folded",
            "hole_cards": [{"rank": "A", "suit": "spades"}, {"rank": "K", "suit": "hearts"}],
        }))
        .unwrap();
        assert!(p.stack == 1000);
        assert!(p.bet == 0);
        assert!(!p.is_active());
        assert!(p.is_alive());
        assert!(p.hole_cards.len() == 2);
    }
}
