//! Command line entry point for Swiss Room
//!
//! Drives a tournament stored on disk: register players, report results,
//! print standings and draw the next round.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use swiss_room::config::AppConfig;
use swiss_room::store::open_store;
use swiss_room::types::PlayerId;
use swiss_room::Tournament;
use tracing::{error, info};

/// Swiss Room - Swiss-system tournament standings and pairing
#[derive(Parser)]
#[command(
    name = "swiss-room",
    version,
    about = "Swiss-system tournament standings and next-round pairing",
    long_about = "Swiss Room records players and match results, ranks players by wins and \
                 pairs adjacent players in the standings for the next round."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Store file override
    #[arg(long, value_name = "PATH", help = "Override tournament JSON file")]
    store: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Print results as JSON
    #[arg(long, help = "Print results as JSON instead of tables")]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without touching the store")]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Register one or more players
    Register {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Report the result of a match
    Report { winner: PlayerId, loser: PlayerId },
    /// Show current standings
    Standings,
    /// Show pairings for the next round
    Pairings,
    /// Show player and match counts
    Count,
    /// Delete all matches, and optionally all players
    Reset {
        #[arg(long, help = "Also delete all registered players")]
        players: bool,
    },
}

#[derive(Serialize)]
struct Counts {
    players: usize,
    matches: usize,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(store) = &args.store {
        config.use_store_file(store.clone());
    }

    swiss_room::config::validate_config(&config)?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(command: Command, tournament: &Tournament, json: bool) -> Result<()> {
    match command {
        Command::Register { names } => {
            let mut ids = Vec::with_capacity(names.len());
            for name in &names {
                ids.push(tournament.register_player(name)?);
            }
            if json {
                print_json(&ids)?;
            } else {
                for (id, name) in ids.iter().zip(&names) {
                    println!("{:>4}  {}", id, name);
                }
            }
        }
        Command::Report { winner, loser } => {
            tournament.report_match(winner, loser)?;
            if !json {
                println!("Recorded: {} beat {}", winner, loser);
            }
        }
        Command::Standings => {
            let standings = tournament.player_standings()?;
            if json {
                print_json(&standings)?;
            } else {
                println!("{:>4}  {:<24} {:>4} {:>7}", "id", "name", "wins", "matches");
                for row in &standings {
                    println!(
                        "{:>4}  {:<24} {:>4} {:>7}",
                        row.id, row.name, row.wins, row.matches_played
                    );
                }
            }
        }
        Command::Pairings => {
            let pairings = tournament.swiss_pairings()?;
            if json {
                print_json(&pairings)?;
            } else {
                for (table, pairing) in pairings.iter().enumerate() {
                    println!("Table {:>2}: {}", table + 1, pairing);
                }
            }
        }
        Command::Count => {
            let counts = Counts {
                players: tournament.count_players()?,
                matches: tournament.count_matches()?,
            };
            if json {
                print_json(&counts)?;
            } else {
                println!("Players: {}", counts.players);
                println!("Matches: {}", counts.matches);
            }
        }
        Command::Reset { players } => {
            tournament.delete_matches()?;
            if players {
                tournament.delete_players()?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} v{} using {} store at {} (unplayed policy: {})",
        config.service.name,
        swiss_room::VERSION,
        config.store.backend,
        config.store.path.display(),
        config.standings.unplayed_policy
    );

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    let Some(command) = args.command else {
        eprintln!("No command given; see --help");
        std::process::exit(2);
    };

    let tournament = Tournament::from_config(open_store(&config.store), &config);
    if let Err(e) = run(command, &tournament, args.json) {
        error!("Command failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
