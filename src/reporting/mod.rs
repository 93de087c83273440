// 計測結果の報告
//
// 標準出力への結果行の出力と、テスト用の記録・モック実装を提供する。

pub mod implementations;
pub mod traits;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use implementations::{format_report_line, ConsoleReporter, NoOpReporter};
pub use traits::*;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
