//! Betting-decision core for a turn-based No-Limit Hold'em agent.
//!
//! Given a snapshot of the table ([`gameplay::GameState`]) a [`strategy::Strategy`]
//! returns a single legal wager. Every strategy is layered over the same primitives:
//! card and starting-hand classification ([`cards`]), legal bet arithmetic
//! ([`betting`]), stateless mixing ([`mixing`]) and an advisory opponent
//! model ([`opponents`]).
pub mod betting;
pub mod cards;
pub mod gameplay;
pub mod mixing;
pub mod opponents;
pub mod strategy;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets and pots in chips.
pub type Chips = i64;
/// Seat index around the table.
pub type Seat = usize;
/// Mixing rolls, action frequencies and smoothed opponent rates.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for property tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DECISION PARAMETERS
// ============================================================================
/// Reported by the `version` action.
pub const VERSION: &str = "bettor v0.1 modular";
/// Preflop effective depth (in big blinds) at or below which push/fold takes over.
pub const PUSH_FOLD_BB: Chips = 10;
/// Heads-up push/fold extends a little deeper.
pub const HU_PUSH_FOLD_BB: Chips = 15;
/// Largest chip amount accepted from a snapshot or an override.
pub const CHIP_CEILING: Chips = 1 << 40;
/// Deep enough that a pocket pair earns a bigger open.
pub const DEEP_BB: Chips = 40;

// ============================================================================
// OPPONENT MODEL PRIORS
// Neutral values for an opponent we have never seen.
// ============================================================================
/// Voluntarily put money in pot.
pub const PRIOR_VPIP: Probability = 0.25;
/// Preflop raise.
pub const PRIOR_PFR: Probability = 0.12;
/// Aggression factor (raises per call).
pub const PRIOR_AF: Probability = 1.2;
/// Folds when the observer raised.
pub const PRIOR_FOLD_TO_RAISE: Probability = 0.35;
/// Exponential smoothing half-life, in hands.
pub const HALFLIFE: Probability = 10.0;
/// Ceiling on a single hand's aggression observation.
pub const AF_CEILING: Probability = 5.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
