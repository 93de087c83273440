//! 静的ディスパッチと動的ディスパッチの呼び出しコストを比較するマイクロベンチマーク
//!
//! 3つのレシーバー形状（値、参照を返す参照、戻り値なしの参照）それぞれについて、
//! 同じ加算を具象型経由とトレイトオブジェクト経由で `10^8` 回ずつ実行し、
//! 経過時間を比較する。

pub mod benchmarks;
pub mod cli;
pub mod core;
pub mod harness;
pub mod profiling;
pub mod reporting;

pub use crate::core::{BenchConfig, BenchError, BenchResult, Int, Variant, VariantOutcome};
pub use harness::BenchmarkRunner;
