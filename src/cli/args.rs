use crate::core::{BenchConfig, StoragePolicy, Variant, DEFAULT_INCREMENT, DEFAULT_ITERATIONS};
use crate::profiling::{ProfileConfig, ProfileFormat, DEFAULT_FREQUENCY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dispatch_bench")]
#[command(about = "Measure the overhead of trait-object calls against direct calls")]
#[command(version)]
pub struct Cli {
    /// Receiver variant to run
    #[arg(short, long, value_enum, default_value_t = VariantArg::All)]
    pub variant: VariantArg,

    /// Number of additions per loop
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u64,

    /// Amount added on every iteration
    #[arg(short = 'k', long, default_value_t = DEFAULT_INCREMENT.get(), allow_negative_numbers = true)]
    pub increment: i64,

    /// Counter storage for the by-reference variants
    #[arg(short, long, value_enum, default_value_t = StorageArg::Independent)]
    pub storage: StorageArg,

    /// Enable CPU profiling for the whole run
    #[arg(long)]
    pub profile: bool,

    /// Profile output format
    #[arg(long, value_enum, default_value_t = ProfileFormat::Pprof, requires = "profile")]
    pub profile_format: ProfileFormat,

    /// Directory for the profile (defaults to a fresh directory under the system temp dir)
    #[arg(long, requires = "profile")]
    pub profile_dir: Option<PathBuf>,

    /// Profiler sampling frequency in Hz
    #[arg(long, default_value_t = DEFAULT_FREQUENCY, requires = "profile")]
    pub profile_frequency: i32,

    /// Write a JSON report to this path
    #[arg(long)]
    pub report_json: Option<PathBuf>,

    /// Print a header and the interface/concrete ratio for each variant
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress the per-loop lines
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantArg {
    Value,
    Pointer,
    InPlace,
    All,
}

impl VariantArg {
    pub fn variants(&self) -> Vec<Variant> {
        match self {
            Self::Value => vec![Variant::Value],
            Self::Pointer => vec![Variant::Pointer],
            Self::InPlace => vec![Variant::InPlace],
            Self::All => Variant::ALL.to_vec(),
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArg {
    Independent,
    Shared,
}

impl From<StorageArg> for StoragePolicy {
    fn from(arg: StorageArg) -> Self {
        match arg {
            StorageArg::Independent => StoragePolicy::Independent,
            StorageArg::Shared => StoragePolicy::Shared,
        }
    }
}

impl Cli {
    pub fn bench_config(&self) -> BenchConfig {
        BenchConfig::new()
            .with_iterations(self.iterations)
            .with_increment(self.increment)
            .with_storage(self.storage.into())
            .with_variants(self.variant.variants())
    }

    /// `--profile` 指定時のみプロファイリング設定を返す
    pub fn profile_config(&self) -> Option<ProfileConfig> {
        if !self.profile {
            return None;
        }
        let config = ProfileConfig::new()
            .with_format(self.profile_format)
            .with_frequency(self.profile_frequency);
        Some(match &self.profile_dir {
            Some(dir) => config.with_output_dir(dir),
            None => config,
        })
    }
}
