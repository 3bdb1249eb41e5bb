use super::board::Board;
use super::board::wheel;
use super::hole::Hole;
use super::rank::Rank;
use super::texture::Texture;

/// A hole card that removes nut combinations on this texture.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Blocker {
    /// Ace or king of the suit on a monotone board.
    Flush,
    /// Ace or king on a connected board.
    Straight,
}

impl Blocker {
    pub fn find(hole: &Hole, board: &Board, texture: &Texture) -> Option<Self> {
        if texture.monotone {
            if let Some((suit, _)) = board.dominant() {
                if hole.has_card(Rank::Ace, suit) || hole.has_card(Rank::King, suit) {
                    return Some(Self::Flush);
                }
            }
        }
        if texture.straighty && (hole.has(Rank::Ace) || hole.has(Rank::King)) {
            return Some(Self::Straight);
        }
        None
    }
}

/// Heuristic made-hand and draw predicates of a hole pair against the board.
/// Not mutually exclusive; none of them hold preflop except `weak_pair`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub overpair: bool,
    pub top_pair_for_value: bool,
    pub two_pair_plus: bool,
    pub strong_draw: bool,
    pub middle_pair: bool,
    pub weak_pair: bool,
    pub blocker: Option<Blocker>,
}

impl Strength {
    /// `kicker` is the lowest side card that still makes top pair worth value-betting.
    pub fn new(hole: &Hole, board: &Board, kicker: u8) -> Self {
        let texture = Texture::from(board);
        let postflop = board.len() >= 3;
        let top = board.top();
        let pair = hole.is_pair();
        let [a, b] = hole.cards().map(|c| c.ordinal());
        let paired_with_board = hole.pairs_board(board);

        let overpair = postflop && pair && hole.hi() > top;
        let two_pair_plus = postflop
            && match pair {
                true => board.has(hole.hi()),
                false => board.has(a) && board.has(b),
            };
        let top_pair = !pair && top > 0 && (a == top || b == top);
        let side = if a == top { b } else { a };
        let top_pair_for_value = top_pair && !two_pair_plus && side >= kicker;
        let middle_pair = paired_with_board && !two_pair_plus && !top_pair_for_value;
        let weak_pair = (pair && !overpair && !two_pair_plus)
            || (paired_with_board && !two_pair_plus && hole.hi() < kicker);

        let flush_draw = hole
            .cards()
            .iter()
            .filter_map(|c| c.suit())
            .any(|s| board.count(s) >= 2);
        let straight_draw = open_ended(hole, board);
        let strong_draw = postflop && !two_pair_plus && (flush_draw || straight_draw);

        Self {
            overpair,
            top_pair_for_value,
            two_pair_plus,
            strong_draw,
            middle_pair,
            weak_pair,
            blocker: Blocker::find(hole, board, &texture),
        }
    }
    /// Made hands strong enough to bet for value.
    pub fn is_value(&self) -> bool {
        self.two_pair_plus || self.overpair || self.top_pair_for_value
    }
    pub fn is_marginal(&self) -> bool {
        self.middle_pair || self.weak_pair
    }
    pub fn is_made(&self) -> bool {
        self.is_value() || self.is_marginal()
    }
}

/// Four distinct ranks inside a five-rank window, at least one from the hole.
fn open_ended(hole: &Hole, board: &Board) -> bool {
    let mine = wheel(hole.cards().iter().map(|c| c.ordinal()));
    let ranks = wheel(board.ordinals().chain(hole.cards().iter().map(|c| c.ordinal())));
    ranks.windows(4).any(|w| {
        w[3] - w[0] <= 4 && w.iter().any(|r| mine.contains(r))
    })
}
