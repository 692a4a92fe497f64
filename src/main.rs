//! dice-pass CLI - play one game of pass-the-dice in the terminal.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dice_pass::{ConsoleDisplay, Game, GameConfig, GameError, JsonLinesDisplay};
use tracing::info;

#[derive(Parser)]
#[command(name = "dice-pass")]
#[command(about = "Simulate a pass-the-dice elimination game")]
struct Args {
    /// Number of players (at least 1)
    #[arg(allow_hyphen_values = true)]
    num_players: String,

    /// Dice dealt to each player (0 or more)
    #[arg(allow_hyphen_values = true)]
    dice_per_player: String,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout is the game display.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(args.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(args, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Filter level when `RUST_LOG` is unset. The game seed is logged at `info`.
fn log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn run(args: Args, out: impl Write) -> Result<(), GameError> {
    let players = parse_count("num_players", &args.num_players)?;
    let dice = parse_count("dice_per_player", &args.dice_per_player)?;

    let mut config = GameConfig::from_raw(players, dice)?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut game = Game::seeded(&config);
    info!(seed = game.seed(), players, dice, "starting game");

    let summary = match args.format {
        OutputFormat::Text => {
            let mut display = ConsoleDisplay::new(out);
            let summary = game.run(&mut display);
            let _out = display.finish()?;
            summary
        }
        OutputFormat::Json => {
            let mut display = JsonLinesDisplay::new(out);
            let summary = game.run(&mut display);
            let _out = display.finish()?;
            summary
        }
    };

    info!(
        rounds = summary.rounds,
        last_standing = ?summary.last_standing,
        "game over"
    );
    Ok(())
}

fn parse_count(name: &'static str, value: &str) -> Result<i64, GameError> {
    value.parse().map_err(|_| GameError::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Run the CLI with logs captured at the default level.
    fn run_logged(argv: &[&str]) -> (Result<(), GameError>, String, String) {
        let logs = SharedBuf::default();
        let out = SharedBuf::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(log_level(false)))
            .with_writer({
                let logs = logs.clone();
                move || logs.clone()
            })
            .with_ansi(false)
            .finish();

        let args = Args::try_parse_from(argv).unwrap();
        let result = tracing::subscriber::with_default(subscriber, || run(args, out.clone()));
        (result, logs.contents(), out.contents())
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("num_players", "4").unwrap(), 4);
        assert_eq!(parse_count("dice_per_player", "-2").unwrap(), -2);

        let err = parse_count("num_players", "four").unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidArgument { name: "num_players", ref value } if value == "four"
        ));
    }

    #[test]
    fn test_parse_count_rejects_whitespace() {
        for value in [" 3", "3 ", " 3 ", "3\n"] {
            let err = parse_count("num_players", value).unwrap_err();
            assert!(matches!(err, GameError::InvalidArgument { .. }), "{value:?}");
        }
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["dice-pass", "3", "5", "--seed", "9", "--format", "json"])
            .unwrap();

        assert_eq!(args.num_players, "3");
        assert_eq!(args.dice_per_player, "5");
        assert_eq!(args.seed, Some(9));
        assert!(matches!(args.format, OutputFormat::Json));
    }

    #[test]
    fn test_negative_count_reaches_validation() {
        let args = Args::try_parse_from(["dice-pass", "2", "-1"]).unwrap();
        let err = run(args, io::sink()).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_default_log_level_reports_seed() {
        assert_eq!(log_level(false), "info");
        assert_eq!(log_level(true), "debug");

        let (result, logs, out) = run_logged(&["dice-pass", "2", "2"]);

        result.unwrap();
        assert!(logs.contains("starting game"), "{logs}");
        assert!(logs.contains("seed="), "{logs}");
        assert!(!out.contains("seed"));
        assert!(out.starts_with("==== Initial State ===="));
    }

    #[test]
    fn test_logged_seed_replays_game() {
        let (_, logs, first) = run_logged(&["dice-pass", "3", "2"]);
        let seed = logs
            .split("seed=")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .unwrap();

        let (_, _, replay) = run_logged(&["dice-pass", "3", "2", "--seed", seed]);
        assert_eq!(first, replay);
    }

    #[test]
    fn test_missing_argument_rejected() {
        assert!(Args::try_parse_from(["dice-pass", "3"]).is_err());
    }
}
