use breakthrough::selfplay::{play_match_with_progress, write_records, MatchParams, MatchSummary};
use breakthrough::{GameConfig, Strategy};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "breakthrough-selfplay", about = "Play a batch of engine games and summarise the results")]
struct Args {
    #[arg(long, default_value_t = 8)]
    rows: usize,
    #[arg(long, default_value_t = 8)]
    columns: usize,
    #[arg(long, default_value_t = 2)]
    rows_of_pawns: usize,
    #[arg(long, default_value = "balanced")]
    white: Strategy,
    #[arg(long, default_value = "rusher")]
    black: Strategy,
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Optional: write every game as JSON lines to this path
    #[arg(long)]
    out: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let config = GameConfig::new(a.rows, a.columns, a.rows_of_pawns, a.white, a.black)?;
    let params = MatchParams { config, games: a.games, seed: a.seed, threads: a.threads };

    eprintln!("Playing {} games on {}x{} ({} rows of pawns): white={} black={} threads={}",
        a.games, a.rows, a.columns, a.rows_of_pawns, a.white, a.black, a.threads);
    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")?
            .progress_chars("=>-"),
    );
    let records = play_match_with_progress(&params, |_| pb.inc(1))?;
    pb.finish_and_clear();

    if let Some(path) = a.out.as_deref() {
        write_records(path, &records)?;
        eprintln!("Wrote {} games to {}", records.len(), path.display());
    }

    let summary = MatchSummary::from_records(&records);
    if a.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("summary: games={} white_wins={} black_wins={} avg_plies={:.1}",
            summary.games, summary.white_wins, summary.black_wins, summary.avg_plies);
        for (strategy, wins) in &summary.wins_by_strategy {
            println!("  {strategy}: {wins}");
        }
    }
    Ok(())
}
