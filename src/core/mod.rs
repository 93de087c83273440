// コアレイヤー - カウンター、設定、結果型、エラー定義
// 他のレイヤーから参照される基本的な型を提供

pub mod config;
pub mod counter;
pub mod error;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use config::{BenchConfig, DEFAULT_INCREMENT, DEFAULT_ITERATIONS};
pub use counter::{InPlaceSummable, Int, PointerSummable, Summable};
pub use error::{BenchError, BenchResult, ValidationError, ValidationResult};
pub use types::{DispatchPath, LoopOutcome, StoragePolicy, Variant, VariantOutcome};
