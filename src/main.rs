use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use scan_cluster::cluster::Engine;
use scan_cluster::config::{Config, ScanParams};
use scan_cluster::{data, storage};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineArg {
    Sequential,
    Bulk,
    BulkParallel,
    All,
}

impl EngineArg {
    fn engines(self) -> Vec<Engine> {
        match self {
            EngineArg::Sequential => vec![Engine::Sequential],
            EngineArg::Bulk => vec![Engine::Bulk],
            EngineArg::BulkParallel => vec![Engine::BulkParallel],
            EngineArg::All => Engine::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "scan-cluster",
    about = "Structural clustering (SCAN) of graphs given as edge lists"
)]
struct Cli {
    /// Path to the edge list (two whitespace-separated ids per line)
    #[clap(long)]
    input: String,

    /// Treat each line as a one-way edge
    #[clap(long)]
    directed: bool,

    /// Structural similarity threshold, within [0, 1]
    #[clap(long, default_value = "0.5")]
    epsilon: f64,

    /// Minimum number of epsilon-neighbors for a core vertex
    #[clap(long, default_value = "2")]
    mu: usize,

    /// Clustering engine to run
    #[clap(long, value_enum, default_value = "sequential")]
    engine: EngineArg,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Also save JSON results to this directory
    #[clap(long)]
    output_dir: Option<String>,

    /// Don't print per-vertex assignments
    #[clap(long, short)]
    quiet: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config::new(
        ScanParams::new(args.epsilon, args.mu),
        args.directed,
        args.engine.engines(),
        args.threads,
        args.output_dir,
    );
    config.validate()?;

    let num_threads = config.worker_threads();
    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Input: {}", args.input);
    let graph = data::load_edge_list(&args.input, config.directed)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for &engine in &config.engines {
        let started = Instant::now();
        let clustering = engine.run(&graph, config.params);
        let elapsed = started.elapsed().as_secs_f64();

        log::info!(
            "{} engine: {} clusters over {} vertices in {} rounds",
            engine,
            clustering.cluster_count(),
            clustering.len(),
            clustering.rounds
        );

        if !args.quiet {
            storage::write_assignment(&mut out, &graph, &clustering)?;
        }
        writeln!(out, "Total Time:{}s", elapsed)?;
        out.flush()?;

        if let Some(dir) = &config.output_dir {
            storage::save_results(&graph, &clustering, engine, dir)?;
        }
    }

    Ok(())
}
