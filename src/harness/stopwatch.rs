//! 型状態による計測タイマー
//!
//! `Stopwatch::start()` で計測中状態 `RunningStopwatch` を得て、
//! `stop()` で所有権ごと消費して経過時間を返す。停止済みタイマーを
//! 再度止めたり、開始前に止めたりする操作は型レベルで表現できない。

use std::time::{Duration, Instant};

/// 未開始状態のタイマー
#[derive(Debug, Default, Clone, Copy)]
pub struct Stopwatch;

impl Stopwatch {
    /// 計測を開始
    #[inline]
    pub fn start() -> RunningStopwatch {
        RunningStopwatch {
            started_at: Instant::now(),
        }
    }
}

/// 計測中のタイマー
#[derive(Debug)]
#[must_use = "計測を終えるには stop() を呼んでください"]
pub struct RunningStopwatch {
    started_at: Instant,
}

impl RunningStopwatch {
    /// 計測を止めて経過時間を返す
    #[inline]
    pub fn stop(self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwatch_measures_elapsed_time() {
        let running = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(5));
        let elapsed = running.stop();

        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_independent_stopwatches() {
        let outer = Stopwatch::start();
        let inner = Stopwatch::start();
        let inner_elapsed = inner.stop();
        let outer_elapsed = outer.stop();

        assert!(inner_elapsed <= outer_elapsed);
    }
}
