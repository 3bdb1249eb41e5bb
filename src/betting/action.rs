use crate::Chips;

/// What a finalized bet means at the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call(Chips),
    Raise(Chips),
    Shove(Chips),
}

impl Action {
    /// Classify a legal bet against the price and our stack.
    pub fn classify(bet: Chips, to_call: Chips, stack: Chips) -> Self {
        match bet {
            0 if to_call > 0 => Self::Fold,
            0 => Self::Check,
            b if b >= stack => Self::Shove(b),
            b if b == to_call => Self::Call(b),
            b => Self::Raise(b),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "FOLD"),
            Self::Check => write!(f, "CHECK"),
            Self::Call(n) => write!(f, "CALL  {}", n),
            Self::Raise(n) => write!(f, "RAISE {}", n),
            Self::Shove(n) => write!(f, "SHOVE {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(Action::classify(0, 40, 1000) == Action::Fold);
        assert!(Action::classify(0, 0, 1000) == Action::Check);
        assert!(Action::classify(40, 40, 1000) == Action::Call(40));
        assert!(Action::classify(120, 40, 1000) == Action::Raise(120));
        assert!(Action::classify(1000, 40, 1000) == Action::Shove(1000));
    }
}
