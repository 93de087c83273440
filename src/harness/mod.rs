// 計測ハーネス - タイマー、バリアントごとの計測ループ、ランナー

pub mod runner;
pub mod stopwatch;
pub mod variants;

pub use runner::BenchmarkRunner;
pub use stopwatch::{RunningStopwatch, Stopwatch};
pub use variants::{DispatchVariant, InPlaceReceiver, PointerReceiver, ValueReceiver};
