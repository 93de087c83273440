//! 計測結果のレポート生成
//!
//! 複数バリアントの計測結果をまとめ、JSON形式で出力する

pub mod report;

pub use report::{BenchmarkReport, VariantSummary};
