// ベンチマーク結果の型定義

use super::counter::Int;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// レシーバー形状によるバリアント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// A: 値レシーバー、新しい値を返す
    Value,
    /// B: 参照レシーバー、参照を返す
    Pointer,
    /// C: 参照レシーバー、戻り値なし
    InPlace,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Value, Variant::Pointer, Variant::InPlace];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Pointer => "pointer",
            Self::InPlace => "in-place",
        }
    }

    /// 参照経由でカウンターを操作するかどうか
    ///
    /// 共有ストレージ設定はこのバリアントにのみ効く。
    pub const fn is_by_reference(&self) -> bool {
        matches!(self, Self::Pointer | Self::InPlace)
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Value => "値レシーバー: 毎回の再代入でボックス化が発生する",
            Self::Pointer => "参照レシーバー（参照を返す）: ボックス化なし、間接呼び出しのみ",
            Self::InPlace => "参照レシーバー（戻り値なし）: 具象呼び出しとほぼ同等",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 呼び出し経路
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchPath {
    /// 具象型を通した静的ディスパッチ
    Concrete,
    /// トレイトオブジェクトを通した動的ディスパッチ
    Interface,
}

impl DispatchPath {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Concrete => "concrete",
            Self::Interface => "interface",
        }
    }
}

impl fmt::Display for DispatchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 参照バリアントでのカウンター保持方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoragePolicy {
    /// ループごとにゼロ初期化した別々のカウンターを使う
    #[default]
    Independent,
    /// 2つのループが同じカウンターを使う（インターフェース側は具象側の最終値から始まる）
    Shared,
}

/// 1回のループ計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopOutcome {
    pub variant: Variant,
    pub path: DispatchPath,
    pub iterations: u64,
    pub increment: Int,
    pub initial: Int,
    pub final_value: Int,
    pub elapsed: Duration,
}

impl LoopOutcome {
    /// `initial + increment * iterations` と最終値が一致するか
    pub fn is_consistent(&self) -> bool {
        self.increment
            .checked_times(self.iterations)
            .and_then(|delta| self.initial.checked_add(delta))
            == Some(self.final_value)
    }

    /// 1回あたりの平均時間（ナノ秒）
    pub fn nanos_per_op(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }
}

/// 1バリアント分（具象＋インターフェース）の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantOutcome {
    pub variant: Variant,
    pub storage: StoragePolicy,
    pub concrete: LoopOutcome,
    pub interface: LoopOutcome,
}

impl VariantOutcome {
    /// インターフェース経由の時間 / 具象の時間
    ///
    /// 具象側が 0 のときは `None`。
    pub fn overhead_ratio(&self) -> Option<f64> {
        let concrete = self.concrete.elapsed.as_secs_f64();
        if concrete <= 0.0 {
            return None;
        }
        Some(self.interface.elapsed.as_secs_f64() / concrete)
    }

    /// 具象に対する相対的な差（|interface - concrete| / concrete）
    pub fn relative_gap(&self) -> Option<f64> {
        self.overhead_ratio().map(|ratio| (ratio - 1.0).abs())
    }

    pub fn is_consistent(&self) -> bool {
        self.concrete.is_consistent() && self.interface.is_consistent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(path: DispatchPath, initial: i64, final_value: i64, millis: u64) -> LoopOutcome {
        LoopOutcome {
            variant: Variant::Pointer,
            path,
            iterations: 100,
            increment: Int(10),
            initial: Int(initial),
            final_value: Int(final_value),
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn test_loop_outcome_consistency() {
        assert!(outcome(DispatchPath::Concrete, 0, 1_000, 1).is_consistent());
        assert!(outcome(DispatchPath::Interface, 1_000, 2_000, 1).is_consistent());
        assert!(!outcome(DispatchPath::Interface, 0, 2_000, 1).is_consistent());
    }

    #[test]
    fn test_nanos_per_op() {
        let loop_outcome = outcome(DispatchPath::Concrete, 0, 1_000, 1);
        assert_eq!(loop_outcome.nanos_per_op(), 10_000.0);

        let empty = LoopOutcome {
            iterations: 0,
            final_value: Int(0),
            ..loop_outcome
        };
        assert_eq!(empty.nanos_per_op(), 0.0);
    }

    #[test]
    fn test_overhead_ratio() {
        let result = VariantOutcome {
            variant: Variant::Pointer,
            storage: StoragePolicy::Independent,
            concrete: outcome(DispatchPath::Concrete, 0, 1_000, 10),
            interface: outcome(DispatchPath::Interface, 0, 1_000, 25),
        };

        let ratio = result.overhead_ratio().unwrap();
        assert!((ratio - 2.5).abs() < 1e-9);
        assert!((result.relative_gap().unwrap() - 1.5).abs() < 1e-9);
        assert!(result.is_consistent());
    }

    #[test]
    fn test_overhead_ratio_zero_concrete() {
        let result = VariantOutcome {
            variant: Variant::Value,
            storage: StoragePolicy::Independent,
            concrete: outcome(DispatchPath::Concrete, 0, 1_000, 0),
            interface: outcome(DispatchPath::Interface, 0, 1_000, 1),
        };
        assert_eq!(result.overhead_ratio(), None);
    }

    #[test]
    fn test_variant_properties() {
        assert!(!Variant::Value.is_by_reference());
        assert!(Variant::Pointer.is_by_reference());
        assert!(Variant::InPlace.is_by_reference());
        assert_eq!(Variant::InPlace.to_string(), "in-place");
        assert_eq!(DispatchPath::Concrete.label(), "concrete");
        assert_eq!(StoragePolicy::default(), StoragePolicy::Independent);
    }
}
