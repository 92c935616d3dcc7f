use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info, LevelFilter};
use perceptive_core::{
    fingerprint_from_file, Config, Distance, Fingerprint, HashKind, Similarity,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "perceptive")]
#[command(about = "Perceptual image fingerprints and near-duplicate comparison")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to rotating files in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fingerprint of each image
    Hash {
        /// Images to fingerprint
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Hash algorithm (defaults to the configured one)
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Compare two images and report their distance
    Compare {
        first: PathBuf,
        second: PathBuf,

        /// Hash algorithm (defaults to the configured one)
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "perceptive.json")]
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Average,
    Difference,
}

impl From<KindArg> for HashKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Average => HashKind::Average,
            KindArg::Difference => HashKind::Difference,
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    // Set log level based on verbosity
    let level = match cli.verbose {
        0 => LevelFilter::from(config.log_level),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_logging(cli.log_dir.as_ref(), level)?;

    match cli.command {
        Commands::Hash { files, kind } => {
            let kind = kind.map(HashKind::from).unwrap_or(config.hash_kind);
            info!("Hashing {} files with {} hash", files.len(), kind);

            for path in &files {
                let fingerprint = fingerprint_from_file(path, kind)
                    .with_context(|| format!("Failed to hash {}", path.display()))?;
                println!("{}  {:>20}  {}", fingerprint, fingerprint.value(), path.display());
            }
            Ok(())
        }

        Commands::Compare {
            first,
            second,
            kind,
        } => {
            if let Some(kind) = kind {
                config.hash_kind = kind.into();
            }
            config.validate()?;
            let kind = config.hash_kind;

            // First image is hashed and checked before the second
            let a = fingerprint_from_file(&first, kind)
                .with_context(|| format!("Failed to hash {}", first.display()))?;
            let b = fingerprint_from_file(&second, kind)
                .with_context(|| format!("Failed to hash {}", second.display()))?;

            let (distance, similarity) = score(&config, a, b)?;
            debug!("{} {} -> {} ({})", a, b, distance, similarity);
            println!("{} distance: {} ({})", kind, distance, similarity);
            Ok(())
        }

        Commands::GenerateConfig { path } => {
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}

fn init_logging(log_dir: Option<&PathBuf>, level: LevelFilter) -> Result<(), anyhow::Error> {
    match log_dir {
        Some(dir) => perceptive_core::logging::init_logger(dir, level)?,
        None => env_logger::Builder::new()
            .filter_level(level)
            .parse_env(perceptive_core::logging::LOG_ENV)
            .init(),
    }
    Ok(())
}

/// Distance and interpretation for one pair; no thread pool for a single pair
fn score(
    config: &Config,
    a: Fingerprint,
    b: Fingerprint,
) -> perceptive_core::Result<(Distance, Similarity)> {
    config.validate()?;
    let distance = a.distance(&b);
    Ok((distance, Similarity::classify(distance, config.variation_threshold)))
}
