// ベンチマーク用のカスタムエラー型定義

use thiserror::Error;

/// ベンチマーク実行時のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("バリデーションエラー: {0}")]
    Validation(#[from] ValidationError),

    #[error("オーバーフローエラー: {increment} を {iterations} 回加算すると i64 の範囲を超えます (初期値: {initial})")]
    Overflow {
        initial: i64,
        increment: i64,
        iterations: u64,
    },

    #[error("プロファイラエラー: {source}")]
    Profiling {
        #[source]
        source: anyhow::Error,
    },

    #[error("このプラットフォームではCPUプロファイリングを利用できません")]
    ProfilingUnsupported,

    #[error("レポート出力エラー: {path} - {source}")]
    Report {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(field, reason))
    }

    pub fn overflow(initial: i64, increment: i64, iterations: u64) -> Self {
        Self::Overflow {
            initial,
            increment,
            iterations,
        }
    }

    pub fn profiling(source: impl Into<anyhow::Error>) -> Self {
        Self::Profiling {
            source: source.into(),
        }
    }

    pub fn report(path: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Report {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// ベンチマークの結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// バリデーション結果型
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// バリデーション専用エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} - {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
