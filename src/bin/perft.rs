use breakthrough::perft::perft;
use breakthrough::{GameConfig, Strategy};
use clap::Parser;
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the Breakthrough move generator")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    #[arg(long, default_value_t = 8)]
    rows: usize,
    #[arg(long, default_value_t = 8)]
    columns: usize,
    #[arg(long, default_value_t = 2)]
    rows_of_pawns: usize,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    // strategies are irrelevant to perft; only the geometry is validated
    let base = GameConfig::new(args.rows, args.columns, args.rows_of_pawns, Strategy::Balanced, Strategy::Balanced)?.initial_state();

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || args.depth == 0 {
            perft(&base, args.depth)
        } else {
            base.successors().par_iter().map(|(_, child)| perft(child, args.depth - 1)).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
