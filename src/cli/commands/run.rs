//! ベンチマーク実行コマンド
//!
//! プロファイラの起動 → 全バリアントの計測 → レポート出力 → プロファイラ停止

use crate::benchmarks::BenchmarkReport;
use crate::cli::Cli;
use crate::core::{BenchConfig, BenchResult, VariantOutcome};
use crate::harness::BenchmarkRunner;
use crate::profiling::{ProfileConfig, ProfileSession};
use crate::reporting::{BenchmarkReporter, ConsoleReporter, NoOpReporter};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// 実行設定
pub struct RunOptions {
    pub bench: BenchConfig,
    pub profile: Option<ProfileConfig>,
    pub report_json: Option<PathBuf>,
    pub reporter: Box<dyn BenchmarkReporter>,
}

impl RunOptions {
    /// 単体ベンチマークプログラム用の設定（共有ストレージ、プロファイリング有効）
    pub fn faithful(variant: crate::core::Variant) -> Self {
        Self {
            bench: BenchConfig::faithful(variant),
            profile: Some(ProfileConfig::default()),
            report_json: None,
            reporter: Box::new(ConsoleReporter::new()),
        }
    }
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        let reporter: Box<dyn BenchmarkReporter> = if cli.quiet {
            Box::new(NoOpReporter::new())
        } else if cli.verbose {
            Box::new(ConsoleReporter::verbose())
        } else {
            Box::new(ConsoleReporter::new())
        };

        Self {
            bench: cli.bench_config(),
            profile: cli.profile_config(),
            report_json: cli.report_json.clone(),
            reporter,
        }
    }
}

/// ベンチマークを実行
///
/// プロファイリングは計測区間全体を囲み、どの経路で抜けても停止される。
pub fn execute_run(options: RunOptions) -> Result<Vec<VariantOutcome>> {
    let session = options
        .profile
        .map(ProfileSession::start)
        .transpose()
        .context("CPUプロファイラを起動できません")?;

    let outcomes = run_benchmarks(options.bench, options.reporter, options.report_json)?;

    if let Some(session) = session {
        session
            .finish()
            .context("プロファイルの書き出しに失敗しました")?;
    }

    Ok(outcomes)
}

fn run_benchmarks(
    config: BenchConfig,
    reporter: Box<dyn BenchmarkReporter>,
    report_json: Option<PathBuf>,
) -> BenchResult<Vec<VariantOutcome>> {
    let runner = BenchmarkRunner::new(config, reporter)?;
    let outcomes = runner.run_all()?;

    if let Some(path) = report_json {
        BenchmarkReport::from_outcomes(runner.config(), &outcomes).export_json(&path)?;
        eprintln!("📄 レポートを出力しました: {}", path.display());
    }

    Ok(outcomes)
}
