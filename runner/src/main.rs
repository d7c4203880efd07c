// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for simulating games
// ═══════════════════════════════════════════════════════════════════════

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use undercover_agents::AgentKind;
use undercover_engine::config::GameConfig;
use undercover_engine::types::{Role, Winner};
use undercover_engine::words::WORD_PAIRS;
use undercover_tournament::{make_agents, run_batch, run_game};

/// Safety limit on engine actions per simulated game.
const MAX_ACTIONS: usize = 50_000;

#[derive(Parser)]
#[command(name = "undercover", about = "Undercover / Mr. White game simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game with simulated players
    Play {
        #[command(flatten)]
        game: GameArgs,
        /// Seed for roles, words and agents (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Play many games and report how often each faction wins
    Simulate {
        #[command(flatten)]
        game: GameArgs,
        #[arg(short, long, default_value_t = 100)]
        games: u32,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the bundled word pairs
    Words,
    /// Print the effective game configuration as JSON
    Config {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[derive(Args)]
struct GameArgs {
    /// Number of players (3–12), ignored when names are given
    #[arg(short, long, default_value_t = 5)]
    players: usize,
    #[arg(short, long, default_value_t = 1)]
    undercover: u8,
    #[arg(short, long, default_value_t = 1)]
    mr_white: u8,
    /// Player name, in seat order (repeatable)
    #[arg(short, long = "name")]
    names: Vec<String>,
    /// Agent type: "random", "heuristic" or "mixed"
    #[arg(short, long, default_value = "random")]
    agent: AgentKind,
    /// Load names and faction sizes from a JSON file instead
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl GameArgs {
    fn game_config(&self) -> Result<GameConfig, String> {
        let config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
                serde_json::from_str(&text)
                    .map_err(|e| format!("cannot parse {}: {}", path.display(), e))?
            }
            None if !self.names.is_empty() => {
                GameConfig::new(self.names.clone(), self.undercover, self.mr_white)
            }
            None => GameConfig::with_player_count(self.players, self.undercover, self.mr_white),
        };
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "undercover=info,undercover_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Play { game, seed, json } => cmd_play(&game, seed, json),
        Commands::Simulate { game, games, seed, json } => cmd_simulate(&game, games, seed, json),
        Commands::Words => {
            cmd_words();
            Ok(())
        }
        Commands::Config { game } => cmd_config(&game),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_play(args: &GameArgs, seed: Option<u64>, json: bool) -> Result<(), String> {
    let config = args.game_config()?;
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(seed, players = config.player_count(), agent = %args.agent, "starting game");

    let mut agents = make_agents(args.agent, config.player_count(), seed);
    let result = run_game(&mut agents, &config, seed, MAX_ACTIONS).map_err(|e| e.to_string())?;

    if json {
        let text = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    println!("=== Undercover ===\n");
    println!("Seed {}, {} players, agent={}\n", seed, config.player_count(), args.agent);
    for e in &result.eliminations {
        println!("  Round {:>2}: {} eliminated ({} {})", e.round, e.name, e.role.emoji(), e.role.name());
    }
    if let Some((guess, correct)) = &result.mr_white_guess {
        println!("  Mr. White guessed {:?} -- {}", guess, if *correct { "correct!" } else { "wrong" });
    }
    println!();
    println!("{}", result.winner.label());
    println!("  Civilian word:   {}", result.civilian_word);
    println!("  Undercover word: {}", result.undercover_word);
    println!("  Rounds played:   {}", result.rounds_played);
    println!();
    println!("  Players:");
    for pr in &result.player_results {
        println!(
            "    {:<12} {} {:<10} {:<6} {}",
            pr.name,
            pr.role.emoji(),
            pr.role.name(),
            if pr.survived { "alive" } else { "out" },
            if pr.won { "won" } else { "" },
        );
    }
    Ok(())
}

fn cmd_simulate(args: &GameArgs, games: u32, seed: u64, json: bool) -> Result<(), String> {
    let config = args.game_config()?;
    let summary = run_batch(&config, args.agent, games, seed, MAX_ACTIONS);

    if json {
        let text = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    let civilians = config.player_count() - config.num_infiltrators();
    println!(
        "=== Simulation: {} games, {} players ({} civilians, {} undercover, {} Mr. White), agent={} ===\n",
        games, config.player_count(), civilians, config.num_undercover, config.num_mr_white, args.agent
    );
    println!("--- Summary ({} games, {} errors) ---", summary.games, summary.errors);
    for winner in Winner::ALL {
        println!(
            "  {:<12}: {:>5} wins ({:.1}%)",
            winner.to_string(),
            summary.wins(winner),
            summary.win_rate(winner)
        );
    }
    println!("  Average rounds: {:.2}", summary.average_rounds());
    if summary.mr_white_guesses > 0 {
        println!(
            "  {} guesses: {} of {} correct",
            Role::MrWhite.name(),
            summary.mr_white_correct,
            summary.mr_white_guesses
        );
    }
    Ok(())
}

fn cmd_words() {
    println!("{} word pairs:\n", WORD_PAIRS.len());
    for (a, b) in WORD_PAIRS {
        println!("  {:<16} {}", a, b);
    }
}

fn cmd_config(args: &GameArgs) -> Result<(), String> {
    let config = args.game_config()?;
    let text = serde_json::to_string_pretty(&config).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}
