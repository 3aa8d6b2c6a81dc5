//! hashlab — fill hash tables with random keys and compare multiplicative constants.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hashlab::config::{LabConfig, TableConfig};
use hashlab::{
    ChainTable, DoubleHashTable, Experiment, ExperimentConfig, Key, KeySource, ProbeTable,
    RandomKeys, TableError, Tally,
};
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "hashlab")]
#[command(version)]
#[command(
    about = "Chaining, linear probing and double hashing with multiplicative hashes",
    long_about = None
)]
struct Cli {
    /// TOML file with [chaining], [probing] and [compare] sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for key generation (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print timings to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print a separate-chaining table
    Chain(TableArgs),

    /// Build and print a linear-probing table
    Linear(TableArgs),

    /// Build and print a double-hashing table
    Double(TableArgs),

    /// Compare two constants by maximum chain length over many trials
    Compare(CompareArgs),

    /// Chaining table, comparison, then linear probing and double hashing on one key set
    Demo,
}

#[derive(Args)]
struct TableArgs {
    /// Number of keys to insert
    #[arg(long)]
    keys: Option<usize>,

    /// Keys are drawn from [1, KEY_RANGE)
    #[arg(long)]
    key_range: Option<Key>,

    /// Number of slots
    #[arg(long)]
    table_size: Option<usize>,

    /// Multiplicative constant
    #[arg(long)]
    constant: Option<f64>,
}

impl TableArgs {
    fn apply(&self, mut cfg: TableConfig) -> TableConfig {
        if let Some(keys) = self.keys {
            cfg.keys = keys;
        }
        if let Some(range) = self.key_range {
            cfg.key_range = range;
        }
        if let Some(size) = self.table_size {
            cfg.table_size = size;
        }
        if let Some(constant) = self.constant {
            cfg.constant = constant;
        }
        cfg
    }
}

#[derive(Args)]
struct CompareArgs {
    #[arg(long)]
    trials: Option<usize>,

    #[arg(long)]
    keys: Option<usize>,

    #[arg(long)]
    key_range: Option<Key>,

    #[arg(long)]
    table_size: Option<usize>,

    /// Incumbent constant (wins ties)
    #[arg(long)]
    constant_a: Option<f64>,

    /// Challenger constant
    #[arg(long)]
    constant_b: Option<f64>,

    #[arg(long, default_value = "Knuth constant")]
    label_a: String,

    #[arg(long, default_value = "My constant")]
    label_b: String,

    /// Spread trials over all cores
    #[arg(long)]
    parallel: bool,

    /// Print the tally as JSON
    #[arg(long)]
    json: bool,
}

impl CompareArgs {
    fn apply(&self, mut cfg: ExperimentConfig) -> ExperimentConfig {
        if let Some(trials) = self.trials {
            cfg.trials = trials;
        }
        if let Some(keys) = self.keys {
            cfg.keys_per_trial = keys;
        }
        if let Some(range) = self.key_range {
            cfg.key_range = range;
        }
        if let Some(size) = self.table_size {
            cfg.table_size = size;
        }
        if let Some(a) = self.constant_a {
            cfg.constant_a = a;
        }
        if let Some(b) = self.constant_b {
            cfg.constant_b = b;
        }
        cfg
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lab = match &cli.config {
        Some(path) => LabConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LabConfig::default(),
    };
    let mut source = match cli.seed {
        Some(seed) => RandomKeys::seeded(seed),
        None => RandomKeys::from_entropy(),
    };

    let t0 = Instant::now();
    match &cli.command {
        Commands::Chain(args) => print_chain(&args.apply(lab.chaining), &mut source)?,
        Commands::Linear(args) => {
            let cfg = args.apply(lab.probing);
            let keys = draw_keys(&cfg, &mut source)?;
            print_linear(&cfg, &keys)?;
        }
        Commands::Double(args) => {
            let cfg = args.apply(lab.probing);
            let keys = draw_keys(&cfg, &mut source)?;
            print_double(&cfg, &keys)?;
        }
        Commands::Compare(args) => {
            let tally = compare(&args.apply(lab.compare), args.parallel, cli.seed, &mut source)?;
            if args.json {
                println!("{}", serde_json::to_string(&tally)?);
            } else {
                println!("{}", tally.summary(&args.label_a, &args.label_b));
            }
        }
        Commands::Demo => {
            print_chain(&lab.chaining, &mut source)?;
            let tally = compare(&lab.compare, false, cli.seed, &mut source)?;
            println!("{}", tally.summary("Knuth constant", "My constant"));
            let keys = draw_keys(&lab.probing, &mut source)?;
            print_linear(&lab.probing, &keys)?;
            print_double(&lab.probing, &keys)?;
        }
    }
    if cli.verbose {
        eprintln!("done in {:.3} s", t0.elapsed().as_secs_f64());
    }
    Ok(())
}

fn draw_keys(cfg: &TableConfig, source: &mut RandomKeys<StdRng>) -> Result<Vec<Key>> {
    if cfg.key_range < 2 {
        return Err(TableError::InvalidKeyRange { range: cfg.key_range }.into());
    }
    Ok(source.keys(cfg.keys, cfg.key_range))
}

fn print_chain(cfg: &TableConfig, source: &mut RandomKeys<StdRng>) -> Result<()> {
    let keys = draw_keys(cfg, source)?;
    let table = ChainTable::from_keys(cfg.table_size, &keys, cfg.constant)?;
    println!("Separate chaining:");
    println!("{table}");
    Ok(())
}

fn print_linear(cfg: &TableConfig, keys: &[Key]) -> Result<()> {
    let table = ProbeTable::from_keys(cfg.table_size, keys, cfg.constant)
        .context("linear probing")?;
    println!("Linear probing:");
    println!("{table}");
    Ok(())
}

fn print_double(cfg: &TableConfig, keys: &[Key]) -> Result<()> {
    let table = DoubleHashTable::from_keys(cfg.table_size, keys, cfg.constant)
        .context("double hashing")?;
    println!("Double hashing:");
    println!("{table}");
    Ok(())
}

fn compare(
    cfg: &ExperimentConfig,
    parallel: bool,
    seed: Option<u64>,
    source: &mut RandomKeys<StdRng>,
) -> Result<Tally> {
    let experiment = Experiment::new(cfg.clone())?;
    if parallel {
        return Ok(experiment.run_parallel(seed.unwrap_or_else(rand::random))?);
    }
    Ok(experiment.run(source)?)
}
