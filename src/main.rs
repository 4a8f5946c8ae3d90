use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use robo_connect_four::config::AppConfig;
use robo_connect_four::error::{EngineError, MoveError};
use robo_connect_four::game::GameState;
use robo_connect_four::narration::Phase;
use robo_connect_four::Engine;

/// Play Connect Four against the robot in the terminal.
#[derive(Parser)]
#[command(name = "robo-connect-four", about = "Play Connect Four against the robot")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "robo.toml")]
    config: PathBuf,

    /// Print the game state as JSON after every turn
    #[arg(long)]
    json: bool,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "robo_connect_four=debug"
    #[arg(long)]
    log_level: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let engine = Engine::new(config).context("building engine")?;

    play(&engine, cli.json)
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn play(engine: &Engine, json: bool) -> Result<()> {
    let mut state = engine.new_game();
    let cols = engine.config().grid.cols;
    report(engine, &state, json)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "r" | "reset" => {
                state = engine.reset();
                report(engine, &state, json)?;
            }
            input => match input.parse::<usize>() {
                Ok(column) if (1..=cols).contains(&column) => {
                    match engine.apply_human_move(&state, column - 1) {
                        Ok(next) => {
                            state = next;
                            report(engine, &state, json)?;
                        }
                        Err(EngineError::Move(MoveError::ColumnFull(_))) => {
                            eprintln!("Column {column} is full!");
                        }
                        Err(EngineError::Move(MoveError::GameAlreadyOver)) => {
                            eprintln!("Game over! Type 'r' to restart.");
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
                _ => eprintln!("Enter a column from 1 to {cols}, 'r' to restart or 'q' to quit."),
            },
        }
    }

    Ok(())
}

fn report(engine: &Engine, state: &GameState, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();

    if json {
        let view = engine.view(state);
        writeln!(out, "{}", serde_json::to_string(&view)?)?;
        return Ok(());
    }

    let (snapshot, phase) = engine.snapshot_and_phase(state);
    writeln!(out)?;
    writeln!(out, "{}", state.grid())?;
    let footer: Vec<String> = (1..=state.grid().cols()).map(|c| c.to_string()).collect();
    writeln!(out, "{}", footer.join(" "))?;
    writeln!(
        out,
        "turn {} | robot {} | you {} | robot lead {}",
        snapshot.turn_index, snapshot.computer_score, snapshot.human_score, snapshot.differential
    )?;

    let status = match phase {
        Phase::Intro => format!("Drop your first chip (1-{}), if you dare.", state.grid().cols()),
        Phase::Midgame => "Your move.".to_string(),
        Phase::ComputerWins => "Robot wins. Type 'r' for a rematch.".to_string(),
        Phase::HumanWins => "You win! Type 'r' for a rematch.".to_string(),
        Phase::Draw => "Draw. Type 'r' for a rematch.".to_string(),
    };
    writeln!(out, "{status}")?;
    out.flush()?;

    Ok(())
}
