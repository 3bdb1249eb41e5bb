use super::lenient;
use super::player::Player;
use super::player::Status;
use crate::Arbitrary;
use crate::Chips;
use crate::Seat;
use crate::cards::Board;
use crate::cards::Card;
use serde::Deserialize;
use serde::Serialize;

/// Table snapshot supplied by the platform for a single decision.
/// Constructed fresh per request and never mutated by a strategy.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    #[serde(deserialize_with = "lenient::seats")]
    pub players: Vec<Player>,
    #[serde(deserialize_with = "lenient::seat")]
    pub in_action: Seat,
    #[serde(deserialize_with = "lenient::list")]
    pub community_cards: Vec<Card>,
    #[serde(deserialize_with = "lenient::chips")]
    pub current_buy_in: Chips,
    #[serde(deserialize_with = "lenient::chips")]
    pub minimum_raise: Chips,
    #[serde(deserialize_with = "lenient::chips")]
    pub small_blind: Chips,
    /// Zero when the platform omits it.
    #[serde(deserialize_with = "lenient::chips")]
    pub big_blind: Chips,
    #[serde(deserialize_with = "lenient::seat")]
    pub dealer: Seat,
    #[serde(deserialize_with = "lenient::chips")]
    pub pot: Chips,
    #[serde(deserialize_with = "lenient::integer")]
    pub round: i64,
    #[serde(deserialize_with = "lenient::text")]
    pub game_id: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub bet_index: i64,
}

impl GameState {
    pub fn me(&self) -> Option<&Player> {
        self.players.get(self.in_action)
    }
    /// Every seat other than the acting one.
    pub fn opponents(&self) -> impl Iterator<Item = (Seat, &Player)> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.in_action)
    }
    pub fn board(&self) -> Board {
        Board::from(self.community_cards.clone())
    }
    /// Stable identity of the hand being played.
    pub fn hand_id(&self) -> String {
        format!("{}:{}", self.game_id, self.round)
    }
    /// Small and big blind seats. Heads-up the dealer posts the small blind.
    pub fn blind_seats(&self) -> (Seat, Seat) {
        let n = self.players.len().max(1);
        let dealer = self.dealer % n;
        match n {
            2 => (dealer, (dealer + 1) % n),
            _ => ((dealer + 1) % n, (dealer + 2) % n),
        }
    }
    /// Seats still contesting the pot.
    pub fn n_in_pot(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }
    /// Seats not yet eliminated from the match.
    pub fn n_left(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }
}

impl TryFrom<&str> for GameState {
    type Error = anyhow::Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(json)?)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "game {} round {} pot {}", self.hand_id(), self.bet_index, self.pot)?;
        writeln!(f, "board {}", self.board())?;
        for (i, player) in self.players.iter().enumerate() {
            let marker = match (i == self.dealer, i == self.in_action) {
                (true, true) => "D>",
                (true, false) => "D ",
                (false, true) => " >",
                (false, false) => "  ",
            };
            writeln!(f, "{} {}", marker, player)?;
        }
        Ok(())
    }
}

/// A plausible but unconstrained table: random stacks, bets, statuses
/// and streets, with hole cards dealt to every seat.
impl Arbitrary for GameState {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let n = rng.random_range(2..=6usize);
        let sb = rng.random_range(1..=50);
        let street = [0, 3, 4, 5][rng.random_range(0..4)];
        let players = (0..n)
            .map(|i| Player {
                id: i as i64,
                name: format!("p{}", i),
                version: "1".to_string(),
                stack: rng.random_range(0..4_000),
                bet: rng.random_range(0..=8) * sb,
                status: [Status::Active, Status::Active, Status::Folded, Status::Out]
                    [rng.random_range(0..4)],
                hole_cards: vec![Card::random(), Card::random()],
            })
            .collect::<Vec<_>>();
        let current_buy_in = players.iter().map(|p| p.bet).max().unwrap_or(0);
        let pot = players.iter().map(|p| p.bet).sum::<Chips>() + rng.random_range(0..2_000);
        Self {
            in_action: rng.random_range(0..n),
            dealer: rng.random_range(0..n),
            community_cards: (0..street).map(|_| Card::random()).collect(),
            current_buy_in,
            minimum_raise: rng.random_range(0..=4) * sb,
            small_blind: sb,
            big_blind: if rng.random_bool(0.5) { 2 * sb } else { 0 },
            pot,
            round: rng.random_range(0..500),
            game_id: format!("g{}", rng.random_range(0..1_000)),
            bet_index: rng.random_range(0..20),
            players,
        }
    }
}
