use clap::Parser;
use std::path::PathBuf;

use genosim::coverage::MergePolicy;
use genosim::loader;
use genosim::pairwise::{self, SimilarityParams};
use genosim::utils;

#[derive(Parser)]
#[command(name = "genosim")]
#[command(about = "Pairwise genome similarity via suffix-array windowed matching", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory whose subdirectories hold FASTA-like genome files
    #[arg(value_name = "GENOMES_DIR")]
    genomes: PathBuf,

    /// Matching window length in symbols
    #[arg(short = 'w', long, value_name = "INT", default_value = "10")]
    window: usize,

    /// Output file for the semicolon-delimited matrix
    #[arg(short = 'o', long, value_name = "FILE", default_value = "output.csv")]
    output: PathBuf,

    /// Number of worker threads (default: all logical CPUs)
    #[arg(short = 't', long, value_name = "INT")]
    threads: Option<usize>,

    /// Interval merge behavior: 'legacy' stops at nested intervals like the
    /// reference tool, 'complete' merges everything
    #[arg(long, value_enum, value_name = "POLICY", default_value = "legacy")]
    merge_policy: MergePolicy,

    /// Verbose level: 1=error, 2=warning, 3=message, 4+=debugging
    #[arg(short = 'v', long, value_name = "INT", default_value = "3")]
    verbosity: i32,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbosity {
        v if v <= 1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if cli.window == 0 {
        log::error!("Window length must be at least 1");
        std::process::exit(1);
    }

    let mut num_threads = cli.threads.unwrap_or_else(num_cpus::get);
    if num_threads < 1 {
        log::warn!("Invalid thread count {}, using 1 thread", num_threads);
        num_threads = 1;
    }
    let max_threads = num_cpus::get() * 2;
    if num_threads > max_threads {
        log::warn!(
            "Thread count {} exceeds recommended maximum {}, capping at {}",
            num_threads,
            max_threads,
            max_threads
        );
        num_threads = max_threads;
    }
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        log::warn!(
            "Failed to configure thread pool: {} (may already be initialized)",
            e
        );
    }
    let thread_word = if num_threads == 1 { "thread" } else { "threads" };
    log::info!("Using {} {}", num_threads, thread_word);

    let start = utils::realtime();

    let sequences = match loader::load_sequences(&cli.genomes) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to load genomes: {:#}", e);
            std::process::exit(1);
        }
    };
    if sequences.is_empty() {
        log::error!("No sequences found under {}", cli.genomes.display());
        std::process::exit(1);
    }
    log::info!(
        "Loaded {} sequences from {}",
        sequences.len(),
        cli.genomes.display()
    );

    let params = SimilarityParams {
        window: cli.window,
        merge: cli.merge_policy,
    };
    log::info!("Computing similarity matrix (window {})", params.window);
    let matrix = pairwise::compute_matrix(&sequences, &params);

    if let Err(e) = matrix.write_to_path(&cli.output) {
        log::error!("Failed to write {}: {}", cli.output.display(), e);
        std::process::exit(1);
    }
    log::info!(
        "Wrote {} in {:.2} s",
        cli.output.display(),
        utils::realtime() - start
    );
}
