use super::player::Player;
use super::position::Position;
use super::state::GameState;
use crate::Chips;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Bucket;
use crate::cards::Hole;
use crate::cards::Street;
use crate::cards::Strength;
use crate::cards::Texture;
use crate::mixing::Mixer;

/// Everything a strategy needs about one decision, derived once from the
/// raw snapshot. Amounts are chips; depths are whole big blinds.
#[derive(Debug, Clone)]
pub struct Spot<'a> {
    pub state: &'a GameState,
    pub me: &'a Player,
    pub hole: Option<Hole>,
    pub bucket: Bucket,
    pub board: Board,
    pub street: Street,
    pub texture: Texture,
    pub position: Position,
    pub bb: Chips,
    pub stack: Chips,
    pub to_call: Chips,
    pub effective_bb: Chips,
    pub spr: Probability,
    pub n_in_pot: usize,
    pub n_left: usize,
    pub n_seats: usize,
    pub chip_leader: bool,
    pub covered: bool,
    pub lead_ratio: Probability,
    pub limpers: usize,
    pub mixer: Mixer,
}

impl<'a> Spot<'a> {
    pub fn current_buy_in(&self) -> Chips {
        self.state.current_buy_in
    }
    pub fn minimum_raise(&self) -> Chips {
        self.state.minimum_raise
    }
    pub fn pot(&self) -> Chips {
        self.state.pot
    }
    pub fn small_blind(&self) -> Chips {
        self.state.small_blind
    }
    /// Someone has raised beyond the blind.
    pub fn facing_raise(&self) -> bool {
        self.to_call > self.bb
    }
    /// Chips needed to call, capped by what we have.
    pub fn call(&self) -> Chips {
        self.to_call.min(self.stack)
    }
    pub fn heads_up(&self) -> bool {
        self.n_left == 2
    }
    pub fn multiway(&self) -> bool {
        self.n_in_pot > 2
    }
    /// Seat role under the two-handed mapping.
    pub fn heads_up_position(&self) -> Position {
        Position::heads_up(self.state.in_action, self.state.dealer)
    }
    pub fn strength(&self, kicker: u8) -> Strength {
        self.hole
            .as_ref()
            .map(|hole| Strength::new(hole, &self.board, kicker))
            .unwrap_or_default()
    }
    /// Share of the pot after calling that the call represents.
    pub fn price(&self) -> Probability {
        match self.pot().saturating_add(self.to_call) {
            _ if self.to_call <= 0 => 0.0,
            total if total <= 0 => 1.0,
            total => self.to_call as Probability / total as Probability,
        }
    }
}

impl<'a> TryFrom<&'a GameState> for Spot<'a> {
    type Error = anyhow::Error;
    fn try_from(state: &'a GameState) -> Result<Self, Self::Error> {
        let me = state.me().ok_or_else(|| {
            anyhow::anyhow!(
                "acting seat {} missing from {} players",
                state.in_action,
                state.players.len()
            )
        })?;
        let board = state.board();
        let street = board.street();
        let texture = Texture::from(&board);
        let hole = Hole::try_from(me.hole_cards.as_slice()).ok();
        let bucket = Bucket::from(me.hole_cards.as_slice());
        let n_seats = state.players.len();
        let position = Position::ring(state.in_action, state.dealer, n_seats);

        let bb = match state.big_blind {
            0 => state.small_blind.saturating_mul(2).max(state.minimum_raise).max(1),
            bb => bb,
        };
        let stack = me.stack;
        let to_call = state.current_buy_in.saturating_sub(me.bet).max(0);

        let deepest = state.opponents().map(|(_, p)| p.stack).max().unwrap_or(stack);
        let effective_bb = (stack.min(deepest) / bb.max(1)).max(1);
        let spr = stack.saturating_sub(to_call).max(1) as Probability
            / state.pot.saturating_add(to_call).max(1) as Probability;
        let chip_leader = stack >= deepest;
        let covered = state.opponents().any(|(_, p)| p.stack > stack);
        let lead_ratio = state
            .opponents()
            .find(|(_, p)| p.is_alive())
            .map(|(_, p)| p.stack)
            .filter(|s| *s > 0)
            .map(|s| stack as Probability / s as Probability)
            .unwrap_or(1.0);

        let (_, big_blind_seat) = state.blind_seats();
        let limpers = match street == Street::Pref && state.current_buy_in == bb {
            true => state
                .opponents()
                .filter(|(i, _)| *i != big_blind_seat)
                .filter(|(_, p)| p.is_active() && p.bet == bb)
                .count(),
            false => 0,
        };

        Ok(Self {
            state,
            me,
            hole,
            bucket,
            board,
            street,
            texture,
            position,
            bb,
            stack,
            to_call,
            effective_bb,
            spr,
            n_in_pot: state.n_in_pot(),
            n_left: state.n_left(),
            n_seats,
            chip_leader,
            covered,
            lead_ratio,
            limpers,
            mixer: Mixer::from(state),
        })
    }
}

impl std::fmt::Display for Spot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} call {} eff {}bb spr {:.1} pot {}/{} [{}]",
            self.street,
            self.position,
            self.hole.map(|h| h.to_string()).unwrap_or_else(|| "????".into()),
            self.bucket,
            self.to_call,
            self.effective_bb,
            self.spr,
            self.n_in_pot,
            self.n_left,
            self.texture,
        )
    }
}
