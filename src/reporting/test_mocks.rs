// テスト用の記録レポーター

use super::traits::BenchmarkReporter;
use crate::core::{BenchConfig, LoopOutcome, Variant, VariantOutcome};
use std::cell::RefCell;

/// 受け取った報告をすべて記録するレポーター
#[derive(Debug, Default)]
pub struct RecordingReporter {
    started: RefCell<Vec<Variant>>,
    loops: RefCell<Vec<LoopOutcome>>,
    completed: RefCell<Vec<VariantOutcome>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> Vec<Variant> {
        self.started.borrow().clone()
    }

    pub fn loops(&self) -> Vec<LoopOutcome> {
        self.loops.borrow().clone()
    }

    pub fn completed(&self) -> Vec<VariantOutcome> {
        self.completed.borrow().clone()
    }
}

impl BenchmarkReporter for RecordingReporter {
    fn report_started(&self, variant: Variant, _config: &BenchConfig) {
        self.started.borrow_mut().push(variant);
    }

    fn report_loop(&self, outcome: &LoopOutcome) {
        self.loops.borrow_mut().push(outcome.clone());
    }

    fn report_completed(&self, outcome: &VariantOutcome) {
        self.completed.borrow_mut().push(outcome.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DispatchPath, Int, StoragePolicy};
    use std::time::Duration;

    fn loop_outcome(path: DispatchPath) -> LoopOutcome {
        LoopOutcome {
            variant: Variant::Value,
            path,
            iterations: 1,
            increment: Int(10),
            initial: Int::ZERO,
            final_value: Int(10),
            elapsed: Duration::from_nanos(10),
        }
    }

    #[test]
    fn test_recording_reporter_through_trait_object() {
        let reporter = RecordingReporter::new();
        let reporter_ref: &dyn BenchmarkReporter = &reporter;

        reporter_ref.report_started(Variant::Value, &BenchConfig::default());
        reporter_ref.report_loop(&loop_outcome(DispatchPath::Concrete));
        reporter_ref.report_loop(&loop_outcome(DispatchPath::Interface));
        reporter_ref.report_completed(&VariantOutcome {
            variant: Variant::Value,
            storage: StoragePolicy::Independent,
            concrete: loop_outcome(DispatchPath::Concrete),
            interface: loop_outcome(DispatchPath::Interface),
        });

        assert_eq!(reporter.started(), vec![Variant::Value]);
        assert_eq!(reporter.loops().len(), 2);
        assert_eq!(reporter.completed().len(), 1);
    }
}
