//! 計測結果のJSONレポート

use crate::core::{BenchConfig, BenchError, BenchResult, Int, StoragePolicy, Variant, VariantOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// バリアントごとの要約
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSummary {
    pub variant: Variant,
    pub description: String,
    pub concrete_ns_per_op: f64,
    pub interface_ns_per_op: f64,
    pub overhead_ratio: Option<f64>,
    pub consistent: bool,
    pub outcome: VariantOutcome,
}

impl From<&VariantOutcome> for VariantSummary {
    fn from(outcome: &VariantOutcome) -> Self {
        Self {
            variant: outcome.variant,
            description: outcome.variant.description().to_string(),
            concrete_ns_per_op: outcome.concrete.nanos_per_op(),
            interface_ns_per_op: outcome.interface.nanos_per_op(),
            overhead_ratio: outcome.overhead_ratio(),
            consistent: outcome.is_consistent(),
            outcome: outcome.clone(),
        }
    }
}

/// 1回の実行全体のレポート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub timestamp: DateTime<Utc>,
    pub iterations: u64,
    pub increment: Int,
    pub storage: StoragePolicy,
    pub logical_cpus: usize,
    pub results: Vec<VariantSummary>,
}

impl BenchmarkReport {
    pub fn from_outcomes(config: &BenchConfig, outcomes: &[VariantOutcome]) -> Self {
        Self {
            timestamp: Utc::now(),
            iterations: config.iterations(),
            increment: config.increment(),
            storage: config.storage(),
            logical_cpus: num_cpus::get(),
            results: outcomes.iter().map(VariantSummary::from).collect(),
        }
    }

    /// 全バリアントで最終値が期待値と一致したか
    pub fn all_consistent(&self) -> bool {
        self.results.iter().all(|summary| summary.consistent)
    }

    pub fn to_json(&self) -> BenchResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BenchError::report("<memory>", e))
    }

    /// JSON形式でファイルに出力
    pub fn export_json(&self, path: &Path) -> BenchResult<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| BenchError::report(parent.display().to_string(), e))?;
        }
        std::fs::write(path, json).map_err(|e| BenchError::report(path.display().to_string(), e))
    }
}
