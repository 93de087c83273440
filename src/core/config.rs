// ベンチマーク設定

use super::counter::Int;
use super::error::{BenchError, BenchResult};
use super::types::{StoragePolicy, Variant};
use serde::{Deserialize, Serialize};

/// 1ループあたりの加算回数（10^8）
pub const DEFAULT_ITERATIONS: u64 = 100_000_000;

/// 1回あたりの加算量
pub const DEFAULT_INCREMENT: Int = Int(10);

/// ベンチマーク設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    iterations: u64,
    increment: Int,
    storage: StoragePolicy,
    variants: Vec<Variant>,
}

impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 単体ベンチマークプログラム用の設定
    ///
    /// 参照バリアントでは具象ループとインターフェースループが同じカウンターを共有する。
    pub fn faithful(variant: Variant) -> Self {
        Self::default()
            .with_variants(vec![variant])
            .with_storage(StoragePolicy::Shared)
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_increment(mut self, increment: i64) -> Self {
        self.increment = Int(increment);
        self
    }

    pub fn with_storage(mut self, storage: StoragePolicy) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_variants(mut self, variants: Vec<Variant>) -> Self {
        self.variants = variants;
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn increment(&self) -> Int {
        self.increment
    }

    pub fn storage(&self) -> StoragePolicy {
        self.storage
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// バリアントに実際に適用されるストレージ方式
    ///
    /// 値バリアントは常に独立したカウンターを使う。
    pub fn storage_for(&self, variant: Variant) -> StoragePolicy {
        if variant.is_by_reference() {
            self.storage
        } else {
            StoragePolicy::Independent
        }
    }

    /// 指定バリアントで到達する最大のカウンター値を計算
    ///
    /// 共有ストレージでは2ループ分を積み上げる。
    pub fn peak_value(&self, variant: Variant) -> BenchResult<Int> {
        let overflow = || BenchError::overflow(0, self.increment.get(), self.iterations);

        let per_loop = self.increment.checked_times(self.iterations).ok_or_else(overflow)?;
        match self.storage_for(variant) {
            StoragePolicy::Independent => Ok(per_loop),
            StoragePolicy::Shared => per_loop.checked_add(per_loop).ok_or_else(|| {
                BenchError::overflow(per_loop.get(), self.increment.get(), self.iterations)
            }),
        }
    }

    /// 設定の検証
    pub fn validate(&self) -> BenchResult<()> {
        if self.variants.is_empty() {
            return Err(BenchError::validation(
                "variants",
                "1つ以上のバリアントを指定してください",
            ));
        }

        for variant in &self.variants {
            self.peak_value(*variant)?;
        }

        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            increment: DEFAULT_INCREMENT,
            storage: StoragePolicy::default(),
            variants: Variant::ALL.to_vec(),
        }
    }
}
