use anyhow::{bail, Context};
use checkers_analysis::{AnalysisClient, CheckersConfig};
use checkers_cli::render::render_game;
use checkers_cli::session::{parse_command, Reply, Session, HELP};
use checkers_core::Player;
use checkers_engine::movegen::perft::{perft, perft_divide};
use checkers_engine::{Board, GameState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Play checkers in the terminal and ask for board analysis")]
struct Cli {
    /// Configuration file (defaults to ./checkers.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on stdin
    Play {
        /// Start from a board grid file instead of the initial board
        #[arg(long)]
        grid: Option<PathBuf>,
        /// Player to move first when starting from a grid (default: red)
        #[arg(long, requires = "grid")]
        player: Option<Player>,
        /// Request an analysis after every completed turn
        #[arg(long)]
        analyze: bool,
    },
    /// Analyze a single board
    Analyze {
        /// Board grid file (defaults to the initial board)
        #[arg(long)]
        grid: Option<PathBuf>,
        /// Player to move
        #[arg(long, default_value = "red")]
        player: Player,
    },
    /// Count move-generation leaf nodes from the initial board
    Perft {
        /// Search depth
        #[arg(default_value = "4")]
        depth: u32,
        /// Print the count below each root move
        #[arg(long)]
        divide: bool,
    },
}

fn load_board(path: Option<&PathBuf>) -> anyhow::Result<Board> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Board::from_grid(&text).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(Board::initial()),
    }
}

/// Resolves when the user presses Ctrl-C.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

async fn run_analysis(client: &AnalysisClient, game: &GameState) {
    println!("Analyzing (Ctrl-C to cancel)...");
    match client
        .analyze_until(game.board(), game.to_move(), interrupted())
        .await
    {
        Some(analysis) => println!("{analysis}"),
        None => println!("No analysis available."),
    }
}

async fn play(
    mut session: Session,
    client: AnalysisClient,
    auto_analyze: bool,
) -> anyhow::Result<()> {
    println!("{}\n", HELP);
    println!("{}", render_game(session.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match session.handle(command) {
            Reply::Text(text) => println!("{text}"),
            Reply::Analyze => run_analysis(&client, session.state()).await,
            Reply::Quit => break,
        }

        let state = session.state();
        if auto_analyze && session.turn_passed() && !state.is_game_over() {
            run_analysis(&client, state).await;
        }
        if let Some(result) = state.result() {
            tracing::info!(%result, plies = state.ply(), "game finished");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            CheckersConfig::load_from(path)?
        }
        None => CheckersConfig::load()?,
    };
    tracing::debug!(
        endpoint = %config.analysis.endpoint,
        model = %config.analysis.model,
        "configuration loaded"
    );

    match cli.command {
        Commands::Play {
            grid,
            player,
            analyze,
        } => {
            let board = load_board(grid.as_ref())?;
            let player = player.unwrap_or(Player::Red);
            let session = Session::from_state(GameState::from_board(board, player));
            let client = AnalysisClient::new(config.analysis);
            play(session, client, analyze).await?;
        }
        Commands::Analyze { grid, player } => {
            let board = load_board(grid.as_ref())?;
            let game = GameState::from_board(board, player);
            println!("{}\n", render_game(&game));
            let client = AnalysisClient::new(config.analysis);
            run_analysis(&client, &game).await;
        }
        Commands::Perft { depth, divide } => {
            let game = GameState::new();
            if divide {
                for (notation, nodes) in perft_divide(&game, depth) {
                    println!("{notation}: {nodes}");
                }
            }
            println!("perft({depth}) = {}", perft(&game, depth));
        }
    }

    Ok(())
}
