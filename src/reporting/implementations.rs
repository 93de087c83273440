// 基本的なレポーター実装

use super::traits::BenchmarkReporter;
use crate::core::{BenchConfig, LoopOutcome, Variant, VariantOutcome};
use std::time::Duration;

/// 1ループ分の結果行を整形
///
/// ラベルの後ろを揃えるため `[concrete]` の後には空白が2つ入る。
pub fn format_report_line(label: &str, iterations: u64, elapsed: Duration) -> String {
    let tag = format!("[{label}]");
    format!("{tag:<11} computed {iterations} sums in {elapsed:?}")
}

/// 標準出力への結果報告
///
/// 通常は1ループにつき1行だけを出力する。`verbose()` では開始・完了時の
/// 補足情報も出す。
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl BenchmarkReporter for ConsoleReporter {
    fn report_started(&self, variant: Variant, config: &BenchConfig) {
        if self.verbose {
            println!(
                "🔬 {variant}: {} ({} iterations, storage: {:?})",
                variant.description(),
                config.iterations(),
                config.storage_for(variant),
            );
        }
    }

    fn report_loop(&self, outcome: &LoopOutcome) {
        println!(
            "{}",
            format_report_line(outcome.path.label(), outcome.iterations, outcome.elapsed)
        );
    }

    fn report_completed(&self, outcome: &VariantOutcome) {
        if !self.verbose {
            return;
        }
        match outcome.overhead_ratio() {
            Some(ratio) => println!("📊 interface / concrete: {ratio:.2}x"),
            None => println!("📊 interface / concrete: n/a"),
        }
        if !outcome.is_consistent() {
            eprintln!("⚠️  {}: 最終値が期待値と一致しません", outcome.variant);
        }
    }
}

/// 何もしないレポーター実装（テスト・ベンチマーク用）
#[derive(Debug, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkReporter for NoOpReporter {
    fn report_started(&self, _variant: Variant, _config: &BenchConfig) {
        // 何もしない
    }

    fn report_loop(&self, _outcome: &LoopOutcome) {
        // 何もしない
    }

    fn report_completed(&self, _outcome: &VariantOutcome) {
        // 何もしない
    }
}
