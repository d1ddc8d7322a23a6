mod config;
mod offline;
mod state;
mod ui;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::{GameMode, TicTacToeSession};
use common::{log, logger};
use std::path::PathBuf;

use offline::{ConsoleBroadcaster, run_tictactoe_game};
use state::HELP_TEXT;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Pvp,
    Pva,
}

impl From<ModeArg> for GameMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Pvp => GameMode::HumanVsHuman,
            ModeArg::Pva => GameMode::HumanVsComputer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Overrides the mode from the config file.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Writes the effective config back to disk before playing.
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = config::get_config_manager(args.config);
    let config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        None
    };
    logger::init_logger(prefix);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let mode = args.mode.map(GameMode::from).unwrap_or(config.game.default_mode);
    log!("Starting tic-tac-toe in {:?} mode", mode);

    let mut session = TicTacToeSession::new(
        mode,
        config.game.session_settings(),
        ConsoleBroadcaster::new(),
    );

    println!("{}", HELP_TEXT);
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    run_tictactoe_game(input, &mut session).await?;

    log!("Bye");
    Ok(())
}
