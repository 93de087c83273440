// 計測結果報告のトレイト定義

use crate::core::{BenchConfig, LoopOutcome, Variant, VariantOutcome};
use mockall::automock;

/// 計測結果の報告を抽象化するトレイト
#[automock]
pub trait BenchmarkReporter {
    /// バリアントの計測開始時の報告
    fn report_started(&self, variant: Variant, config: &BenchConfig);

    /// 1ループ分の計測結果の報告
    fn report_loop(&self, outcome: &LoopOutcome);

    /// バリアントの計測完了時の報告
    fn report_completed(&self, outcome: &VariantOutcome);
}

// BenchmarkReporter for Box<dyn BenchmarkReporter>
impl BenchmarkReporter for Box<dyn BenchmarkReporter> {
    fn report_started(&self, variant: Variant, config: &BenchConfig) {
        self.as_ref().report_started(variant, config)
    }

    fn report_loop(&self, outcome: &LoopOutcome) {
        self.as_ref().report_loop(outcome)
    }

    fn report_completed(&self, outcome: &VariantOutcome) {
        self.as_ref().report_completed(outcome)
    }
}
