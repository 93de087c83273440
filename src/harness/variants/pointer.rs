// バリアントB: 参照レシーバー、参照を返す
//
// 返された `&mut Int` をそのままハンドルに再代入する。ボックス化は起きない。

use super::DispatchVariant;
use crate::core::{Int, PointerSummable, Variant};
use crate::harness::stopwatch::Stopwatch;
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy)]
pub struct PointerReceiver;

impl DispatchVariant for PointerReceiver {
    const VARIANT: Variant = Variant::Pointer;

    #[inline(never)]
    fn run_concrete_loop(&self, storage: &mut Int, iterations: u64, increment: Int) -> Duration {
        let mut cursor: &mut Int = black_box(storage);

        let running = Stopwatch::start();
        for _ in 0..iterations {
            cursor = cursor.sum(black_box(increment));
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
        let mut handle = black_box(storage as &mut dyn PointerSummable);

        let running = Stopwatch::start();
        for _ in 0..iterations {
            handle = handle.sum(black_box(increment));
        }
        running.stop()
    }
}
