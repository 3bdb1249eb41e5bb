use thiserror::Error;

/// Raised when a strategy is selected, never while deciding a bet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown strategy '{name}'; available: {valid}")]
    UnknownStrategy { name: String, valid: String },
    #[error("unknown knob '{key}'; valid: {valid}")]
    UnknownKnob { key: String, valid: String },
    #[error("invalid value for '{key}': {reason}")]
    InvalidKnob { key: String, reason: String },
}

impl ConfigError {
    pub fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidKnob {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_key() {
        let e = ConfigError::UnknownKnob {
            key: "bluf".into(),
            valid: "dry_bluff, wet_bluff".into(),
        };
        assert!(e.to_string().contains("'bluf'"));
        assert!(e.to_string().contains("dry_bluff"));
        let e = ConfigError::invalid("pot_odds", "frequency 2 outside [0, 1]");
        assert!(e.to_string() == "invalid value for 'pot_odds': frequency 2 outside [0, 1]");
    }
}
