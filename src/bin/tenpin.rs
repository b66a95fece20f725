use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use tenpin::{Game, GameConfig, ScoringEngine, STANDARD_FRAMES};

/// Score a ten-pin bowling game from per-frame tokens
#[derive(Parser)]
#[command(name = "tenpin")]
#[command(about = "Score a ten-pin bowling game, e.g. `tenpin X 7/ 9- X -8 8/ -6 X X X 81`")]
struct Args {
    /// Frame tokens: X (strike), 7/ (spare), 72 / 9- / -- (open), 4/5 (last-frame spare + bonus).
    /// Put `--` first when a gutter frame (`--`) is among them.
    #[arg(required = true, allow_hyphen_values = true)]
    tokens: Vec<String>,

    /// Number of frames in the game
    #[arg(long, default_value_t = STANDARD_FRAMES)]
    frames: usize,

    /// Print the scored game as JSON
    #[arg(long)]
    json: bool,

    /// Log filter (e.g. "debug", "tenpin=trace")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        std::process::exit(2);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = GameConfig::try_new(args.frames).context("invalid --frames")?;

    info!("Run with {} tokens", args.tokens.len());
    let count = args.tokens.len();
    if count < config.frame_count() || count > config.max_tokens() {
        bail!(
            "invalid number of tokens: got {}, expected {} to {}",
            count,
            config.frame_count(),
            config.max_tokens()
        );
    }

    let engine = ScoringEngine::new(config);
    let game = engine
        .score(&args.tokens)
        .context("failed to score game")?;
    debug!(total = ?game.total_score(), "done");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game)?);
    } else {
        print_scorecard(&game);
    }
    Ok(())
}

fn print_scorecard(game: &Game) {
    let totals = game.running_totals();

    println!("{:>5} {:>6} {:>5} {:>7}", "Frame", "Rolls", "Score", "Running");
    for (index, (frame, running)) in game.frames().iter().zip(&totals).enumerate() {
        println!(
            "{:>5} {:>6} {:>5} {:>7}",
            index + 1,
            frame.to_string(),
            frame.score(),
            running
        );
    }
    println!();
    println!("Total score is: {}", game.total_score().unwrap_or_default());
}
