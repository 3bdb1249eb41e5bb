use crate::Seat;

/// Seat role relative to the dealer button.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Position {
    Early,
    Middle,
    Cutoff,
    Button,
    SmallBlind,
    BigBlind,
}

impl Position {
    /// Ring-game mapping by distance from the dealer. Outside the blinds
    /// the seat right of the button is the cutoff, the first to act is
    /// early, and anything between is middle.
    pub fn ring(seat: Seat, dealer: Seat, n: usize) -> Self {
        if n == 0 {
            return Self::Early;
        }
        match (seat + n - dealer % n) % n {
            0 => Self::Button,
            1 => Self::SmallBlind,
            2 => Self::BigBlind,
            d if d == n - 1 => Self::Cutoff,
            3 => Self::Early,
            _ => Self::Middle,
        }
    }
    /// Two players left: the dealer is the button, the other seat the big blind.
    pub fn heads_up(seat: Seat, dealer: Seat) -> Self {
        if seat == dealer {
            Self::Button
        } else {
            Self::BigBlind
        }
    }
    /// Acts last postflop more often than not.
    pub fn in_position(&self) -> bool {
        matches!(self, Self::Cutoff | Self::Button)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Early => write!(f, "EP"),
            Self::Middle => write!(f, "MP"),
            Self::Cutoff => write!(f, "CO"),
            Self::Button => write!(f, "BTN"),
            Self::SmallBlind => write!(f, "SB"),
            Self::BigBlind => write!(f, "BB"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_max() {
        let dealer = 2;
        let seats = (0..6)
            .map(|s| Position::ring((dealer + s) % 6, dealer, 6))
            .collect::<Vec<_>>();
        assert!(
            seats
                == vec![
                    Position::Button,
                    Position::SmallBlind,
                    Position::BigBlind,
                    Position::Early,
                    Position::Middle,
                    Position::Cutoff,
                ]
        );
    }

    #[test]
    fn four_max_has_no_early() {
        assert!(Position::ring(3, 0, 4) == Position::Cutoff);
        assert!(Position::ring(0, 0, 4) == Position::Button);
    }

    #[test]
    fn heads_up_dealer_is_button() {
        assert!(Position::heads_up(1, 1) == Position::Button);
        assert!(Position::heads_up(0, 1) == Position::BigBlind);
        assert!(Position::ring(0, 1, 2) == Position::SmallBlind);
    }

    #[test]
    fn dealer_out_of_range_wraps() {
        assert!(Position::ring(1, 5, 4) == Position::Button);
    }
}
