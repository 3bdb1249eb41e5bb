use super::board::Board;

/// Qualitative shape of the community cards. Recomputed every decision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    pub paired: bool,
    pub monotone: bool,
    pub two_tone: bool,
    pub straighty: bool,
    pub dry: bool,
    pub wet: bool,
}

impl Texture {
    /// Boards that reward polarized, pot-plus sizing.
    pub fn is_polar(&self) -> bool {
        self.paired || self.monotone || self.straighty
    }
}

impl From<&Board> for Texture {
    fn from(board: &Board) -> Self {
        let ordinals = board.ordinals().collect::<Vec<u8>>();
        let paired = ordinals
            .iter()
            .enumerate()
            .any(|(i, a)| ordinals[i + 1..].contains(a));
        let suited = board.dominant().map(|(_, n)| n).unwrap_or(0);
        let monotone = suited >= 3;
        let two_tone = suited == 2;
        let ranks = board.wheel_ranks();
        let straighty = ranks
            .iter()
            .any(|r| ranks.contains(&(r + 1)) && ranks.contains(&(r + 2)));
        let dry = !(paired || monotone || straighty || two_tone);
        let wet = monotone || straighty || (two_tone && !paired);
        Self {
            paired,
            monotone,
            two_tone,
            straighty,
            dry,
            wet,
        }
    }
}

impl std::fmt::Display for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let flags = [
            (self.paired, "paired"),
            (self.monotone, "monotone"),
            (self.two_tone, "two-tone"),
            (self.straighty, "straighty"),
            (self.dry, "dry"),
            (self.wet, "wet"),
        ];
        let names = flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect::<Vec<&str>>();
        write!(f, "{}", names.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(s: &str) -> Texture {
        Texture::from(&Board::try_from(s).unwrap())
    }

    #[test]
    fn rainbow_disconnected_is_dry() {
        let t = texture("Kh7d2c");
        assert!(t.dry);
        assert!(!t.wet);
    }

    #[test]
    fn monotone_is_wet() {
        let t = texture("Kh7h2h");
        assert!(t.monotone);
        assert!(!t.two_tone);
        assert!(t.wet);
        assert!(!t.dry);
    }

    #[test]
    fn paired_two_tone_is_not_wet() {
        let t = texture("KhKd2h");
        assert!(t.paired);
        assert!(t.two_tone);
        assert!(!t.wet);
        assert!(!t.dry);
    }

    #[test]
    fn connected() {
        assert!(texture("9c8d7s").straighty);
        assert!(texture("Ac2d3s").straighty);
        assert!(!texture("Ac9d3s").straighty);
    }

    #[test]
    fn preflop_is_dry() {
        assert!(Texture::from(&Board::empty()).dry);
    }
}
