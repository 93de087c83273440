// バリアントC: 参照レシーバー、戻り値なし

use super::DispatchVariant;
use crate::core::{InPlaceSummable, Int, Variant};
use crate::harness::stopwatch::Stopwatch;
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy)]
pub struct InPlaceReceiver;

impl DispatchVariant for InPlaceReceiver {
    const VARIANT: Variant = Variant::InPlace;

    #[inline(never)]
    fn run_concrete_loop(&self, storage: &mut Int, iterations: u64, increment: Int) -> Duration {
        let counter: &mut Int = black_box(storage);

        let running = Stopwatch::start();
        for _ in 0..iterations {
            counter.sum(black_box(increment));
        }
        running.stop()
    }

    #[inline(never)]
    fn run_polymorphic_loop(
        &self,
        storage: &mut Int,
        iterations: u64,
        increment: Int,
    ) -> Duration {
        let handle = black_box(storage as &mut dyn InPlaceSummable);

        let running = Stopwatch::start();
        for _ in 0..iterations {
            handle.sum(black_box(increment));
        }
        running.stop()
    }
}
