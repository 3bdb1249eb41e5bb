use crate::gameplay::Player;

/// Stable identity of an opponent across hands: `name:version`.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Villain(String);

impl Villain {
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl From<&Player> for Villain {
    fn from(player: &Player) -> Self {
        let name = if player.name.is_empty() { "?" } else { &player.name };
        let version = if player.version.is_empty() { "?" } else { &player.version };
        Self(format!("{}:{}", name, version))
    }
}

impl std::fmt::Display for Villain {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_by_name_and_version() {
        let mut p = Player::default();
        p.name = "donk".into();
        p.version = "1.2".into();
        assert!(Villain::from(&p).key() == "donk:1.2");
        assert!(Villain::from(&Player::default()).key() == "?:?");
    }
}
