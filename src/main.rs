use anyhow::Result;
use breakthrough::search::noise::rng_from_seed;
use breakthrough::selfplay::play_game;
use breakthrough::{GameConfig, Strategy};
use clap::Parser;

const USAGE: &str = "Correct usage: breakthrough [rows]<int >= 1> [columns]<int >= 1> \
[rows_of_pawns]<int >= 1 and <= rows / 2> [white_strategy] [black_strategy]\n\
strategies: evasive, conqueror, balanced, rusher";

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a game of Breakthrough between two heuristic agents", long_about = None)]
struct Args {
    /// Number of board rows
    rows: usize,

    /// Number of board columns
    columns: usize,

    /// Full rows of pawns per side at the start
    rows_of_pawns: usize,

    /// White's strategy: evasive, conqueror, balanced or rusher
    white: Strategy,

    /// Black's strategy: evasive, conqueror, balanced or rusher
    black: Strategy,

    /// Seed for the tie-breaking random source
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the result, not every board
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = GameConfig::new(args.rows, args.columns, args.rows_of_pawns, args.white, args.black)
        .map_err(|e| anyhow::anyhow!("{e}\n{USAGE}"))?;
    if let Some(seed) = args.seed { config = config.with_seed(seed); }

    let mut rng = rng_from_seed(config.seed);
    let record = play_game(&config, &mut rng, |state| {
        if !args.quiet { println!("{state}"); }
    });

    println!("{} won!", record.winner);
    println!("{}", record.plies);
    Ok(())
}
