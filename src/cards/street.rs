/// Betting round, implied by the number of community cards.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn is_preflop(&self) -> bool {
        matches!(self, Self::Pref)
    }
}

/// Partial boards round down.
impl From<usize> for Street {
    fn from(n: usize) -> Self {
        match n {
            0..=2 => Self::Pref,
            3 => Self::Flop,
            4 => Self::Turn,
            _ => Self::Rive,
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}
