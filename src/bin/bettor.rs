use bettor::Probability;
use bettor::betting::Action;
use bettor::gameplay::GameState;
use bettor::gameplay::Spot;
use bettor::opponents::OpponentModel;
use bettor::strategy::Knob;
use bettor::strategy::Overrides;
use bettor::strategy::Selector;
use bettor::strategy::Strategy;
use clap::Parser;
use clap::ValueEnum;
use colored::Colorize;
use serde::Deserialize;
use std::io::BufRead;
use std::io::Read;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
enum Request {
    /// Decide a wager for one snapshot
    BetRequest,
    /// Feed a finished hand to the opponent model
    Showdown,
    /// Print the engine version
    Version,
    /// Decide every snapshot of a JSON-lines game log
    Replay,
    /// List the strategies the selector knows
    Strategies,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value = "bet_request")]
    action: Request,
    #[arg(long, short, default_value = "adaptive")]
    strategy: String,
    /// Override a tuning knob, e.g. `--set pot_odds=0.3`
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, Knob)>,
    /// Opponent model half-life in hands
    #[arg(long, default_value_t = bettor::HALFLIFE)]
    halflife: Probability,
    /// Snapshot or log to read; stdin when absent
    path: Option<std::path::PathBuf>,
}

fn parse_override(s: &str) -> anyhow::Result<(String, Knob)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected KEY=VALUE, got '{}'", s))?;
    Ok((key.trim().to_string(), Knob::try_from(value.trim())?))
}

/// One line of a collected game log: either the collector's envelope or a bare snapshot.
#[derive(Deserialize)]
#[serde(untagged)]
enum Record {
    Logged { state: GameState },
    Bare(GameState),
}

impl From<Record> for GameState {
    fn from(record: Record) -> Self {
        match record {
            Record::Logged { state } => state,
            Record::Bare(state) => state,
        }
    }
}

fn input(path: Option<&std::path::Path>) -> anyhow::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(std::io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(std::io::BufReader::new(std::io::stdin())),
    })
}

fn snapshot(path: Option<&std::path::Path>) -> anyhow::Result<GameState> {
    let mut text = String::new();
    input(path)?.read_to_string(&mut text)?;
    match text.trim() {
        "" => Ok(GameState::default()),
        json => GameState::try_from(json),
    }
}

fn paint(action: Action) -> String {
    let text = action.to_string();
    match action {
        Action::Fold => text.red().to_string(),
        Action::Check => text.dimmed().to_string(),
        Action::Call(_) => text.green().to_string(),
        Action::Raise(_) => text.yellow().to_string(),
        Action::Shove(_) => text.magenta().bold().to_string(),
    }
}

fn replay(strategy: &dyn Strategy, path: Option<&std::path::Path>) -> anyhow::Result<()> {
    let mut previous: Option<GameState> = None;
    let mut decided = 0usize;
    for (i, line) in input(path)?.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let state = match serde_json::from_str::<Record>(&line) {
            Ok(record) => GameState::from(record),
            Err(e) => {
                log::warn!("skipping line {}: {}", i + 1, e);
                continue;
            }
        };
        if let Some(last) = previous.take().filter(|last| last.hand_id() != state.hand_id()) {
            strategy.on_hand_complete(&last);
        }
        let bet = strategy.decide_bet(&state);
        match Spot::try_from(&state) {
            Ok(spot) => println!(
                "{:>5} {:<12} {} {}",
                i + 1,
                state.hand_id(),
                spot,
                paint(Action::classify(bet, spot.to_call, spot.stack))
            ),
            Err(_) => println!("{:>5} {:<12} {}", i + 1, state.hand_id(), bet),
        }
        decided += 1;
        previous = Some(state);
    }
    if let Some(last) = previous {
        strategy.on_hand_complete(&last);
    }
    log::info!("replayed {} decisions", decided);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    bettor::log()?;
    let overrides = args.overrides.into_iter().collect::<Overrides>();
    let selector = Selector::new(Arc::new(OpponentModel::new(args.halflife)));
    let path = args.path.as_deref();
    match args.action {
        Request::Version => println!("{}", bettor::VERSION),
        Request::Strategies => {
            for (name, summary) in Selector::available() {
                println!("{:<10} {}", name.bold(), summary);
            }
        }
        Request::BetRequest => {
            let strategy = selector.build(&args.strategy, &overrides)?;
            let state = snapshot(path)?;
            let bet = strategy.decide_bet(&state);
            log::info!("{} bets {}", strategy.name(), bet);
            println!("{}", bet);
        }
        Request::Showdown => {
            let strategy = selector.build(&args.strategy, &overrides)?;
            strategy.on_hand_complete(&snapshot(path)?);
            println!("{{}}");
        }
        Request::Replay => {
            let strategy = selector.build(&args.strategy, &overrides)?;
            replay(strategy.as_ref(), path)?;
        }
    }
    Ok(())
}
