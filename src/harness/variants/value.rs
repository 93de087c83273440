// バリアントA: 値レシーバー、新しい値を返す
//
// インターフェース側は加算結果を毎回 `Box<dyn Summable>` に詰め直す。

use super::DispatchVariant;
use crate::core::{Int, Summable, Variant};
use crate::harness::stopwatch::Stopwatch;
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy)]
pub struct ValueReceiver;

impl DispatchVariant for ValueReceiver {
    const VARIANT: Variant = Variant::Value;

    #[inline(never)]
    fn run_concrete_loop(&self, storage: &mut Int, iterations: u64, increment: Int) -> Duration {
        let mut counter: Int = *storage;

        let running = Stopwatch::start();
        for _ in 0..iterations {
            counter = counter.sum(black_box(increment));
        }
        let elapsed = running.stop();

        *storage = counter;
        elapsed
    }

    #[inline(never)]
    fn run_polymorphic_loop(
        &self,
        storage: &mut Int,
        iterations: u64,
        increment: Int,
    ) -> Duration {
        let mut handle = black_box(Box::new(*storage) as Box<dyn Summable>);

        let running = Stopwatch::start();
        for _ in 0..iterations {
            handle = Box::new(handle.sum(black_box(increment)));
        }
        let elapsed = running.stop();

        *storage = handle.value();
        elapsed
    }
}
