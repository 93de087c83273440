//! ベンチマークランナー
//!
//! 1バリアントにつき具象ループ → インターフェースループの順で計測し、
//! 各ループの結果をレポーターへ渡す。

use super::variants::{DispatchVariant, InPlaceReceiver, PointerReceiver, ValueReceiver};
use crate::core::{
    BenchConfig, BenchResult, DispatchPath, Int, LoopOutcome, StoragePolicy, Variant,
    VariantOutcome,
};
use crate::reporting::BenchmarkReporter;

/// 設定とレポーターを保持するランナー
pub struct BenchmarkRunner<R: BenchmarkReporter> {
    config: BenchConfig,
    reporter: R,
}

impl<R: BenchmarkReporter> BenchmarkRunner<R> {
    /// 設定を検証してランナーを作成
    pub fn new(config: BenchConfig, reporter: R) -> BenchResult<Self> {
        config.validate()?;
        Ok(Self { config, reporter })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 設定された全バリアントを順番に実行
    pub fn run_all(&self) -> BenchResult<Vec<VariantOutcome>> {
        self.config
            .variants()
            .iter()
            .map(|variant| self.run_variant(*variant))
            .collect()
    }

    /// 指定バリアントを実行
    pub fn run_variant(&self, variant: Variant) -> BenchResult<VariantOutcome> {
        self.config.peak_value(variant)?;

        self.reporter.report_started(variant, &self.config);
        let outcome = match variant {
            Variant::Value => self.measure(&ValueReceiver),
            Variant::Pointer => self.measure(&PointerReceiver),
            Variant::InPlace => self.measure(&InPlaceReceiver),
        };
        self.reporter.report_completed(&outcome);

        Ok(outcome)
    }

    fn measure<V: DispatchVariant>(&self, receiver: &V) -> VariantOutcome {
        let iterations = self.config.iterations();
        let increment = self.config.increment();
        let storage = self.config.storage_for(V::VARIANT);

        let mut counter = Int::ZERO;
        let initial = counter;
        let elapsed = receiver.run_concrete_loop(&mut counter, iterations, increment);
        let concrete = LoopOutcome {
            variant: V::VARIANT,
            path: DispatchPath::Concrete,
            iterations,
            increment,
            initial,
            final_value: counter,
            elapsed,
        };
        self.reporter.report_loop(&concrete);

        // 共有ストレージでは具象ループが残した値をそのまま引き継ぐ
        if storage == StoragePolicy::Independent {
            counter = Int::ZERO;
        }
        let initial = counter;
        let elapsed = receiver.run_polymorphic_loop(&mut counter, iterations, increment);
        let interface = LoopOutcome {
            variant: V::VARIANT,
            path: DispatchPath::Interface,
            iterations,
            increment,
            initial,
            final_value: counter,
            elapsed,
        };
        self.reporter.report_loop(&interface);

        VariantOutcome {
            variant: V::VARIANT,
            storage,
            concrete,
            interface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::{MockBenchmarkReporter, NoOpReporter, RecordingReporter};
    use mockall::predicate::*;

    const ITERATIONS: u64 = 1_000;

    fn small_config() -> BenchConfig {
        BenchConfig::new().with_iterations(ITERATIONS).with_increment(10)
    }

    #[test]
    fn test_run_all_results_are_deterministic() {
        let runner = BenchmarkRunner::new(small_config(), NoOpReporter::new()).unwrap();
        let outcomes = runner.run_all().unwrap();

        assert_eq!(outcomes.len(), 3);
        for outcome in &outcomes {
            assert_eq!(outcome.concrete.final_value, Int(10_000));
            assert_eq!(outcome.interface.final_value, Int(10_000));
            assert!(outcome.is_consistent());
        }
    }

    #[test]
    fn test_shared_storage_carries_value_into_interface_loop() {
        let config = small_config().with_storage(StoragePolicy::Shared);
        let runner = BenchmarkRunner::new(config, NoOpReporter::new()).unwrap();

        let pointer = runner.run_variant(Variant::Pointer).unwrap();
        assert_eq!(pointer.storage, StoragePolicy::Shared);
        assert_eq!(pointer.interface.initial, Int(10_000));
        assert_eq!(pointer.interface.final_value, Int(20_000));
        assert!(pointer.interface.is_consistent());
        assert!(pointer.is_consistent());

        // 値バリアントは共有設定でも独立
        let value = runner.run_variant(Variant::Value).unwrap();
        assert_eq!(value.storage, StoragePolicy::Independent);
        assert_eq!(value.interface.initial, Int::ZERO);
    }

    #[test]
    fn test_zero_iterations() {
        let config = small_config().with_iterations(0);
        let runner = BenchmarkRunner::new(config, NoOpReporter::new()).unwrap();

        for outcome in runner.run_all().unwrap() {
            assert_eq!(outcome.concrete.final_value, Int::ZERO);
            assert_eq!(outcome.interface.final_value, Int::ZERO);
            assert!(outcome.concrete.elapsed < std::time::Duration::from_millis(100));
            assert!(outcome.interface.elapsed < std::time::Duration::from_millis(100));
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = small_config().with_variants(Vec::new());
        assert!(BenchmarkRunner::new(config, NoOpReporter::new()).is_err());
    }

    #[test]
    fn test_reporter_receives_loops_in_order() {
        let reporter = RecordingReporter::new();
        let config = small_config().with_variants(vec![Variant::InPlace]);
        let runner = BenchmarkRunner::new(config, reporter).unwrap();
        runner.run_all().unwrap();

        let loops = runner.reporter().loops();
        assert_eq!(loops.len(), 2);
        assert_eq!(loops[0].path, DispatchPath::Concrete);
        assert_eq!(loops[1].path, DispatchPath::Interface);
        assert_eq!(runner.reporter().started(), vec![Variant::InPlace]);
        assert_eq!(runner.reporter().completed().len(), 1);
    }

    #[test]
    fn test_reporter_call_counts_with_mock() {
        let mut mock = MockBenchmarkReporter::new();
        mock.expect_report_started()
            .with(eq(Variant::Pointer), always())
            .times(1)
            .return_const(());
        mock.expect_report_loop()
            .withf(|outcome: &LoopOutcome| outcome.iterations == ITERATIONS)
            .times(2)
            .return_const(());
        mock.expect_report_completed()
            .withf(|outcome: &VariantOutcome| outcome.variant == Variant::Pointer)
            .times(1)
            .return_const(());

        let config = small_config().with_variants(vec![Variant::Pointer]);
        let runner = BenchmarkRunner::new(config, mock).unwrap();
        let outcomes = runner.run_all().unwrap();

        assert_eq!(outcomes.len(), 1);
    }
}
