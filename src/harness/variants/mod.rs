//! レシーバー形状ごとの計測ループ
//!
//! 各バリアントは同じ論理操作（`increment` の加算を `iterations` 回）を
//! 具象型経由とトレイトオブジェクト経由で1回ずつ実行する。2つのループ本体の
//! 違いは呼び出しの静的型だけであること。
//!
//! - 加算量は毎回 `black_box` を通し、ループの畳み込みを防ぐ
//! - トレイトオブジェクトは `black_box` 経由で取得し、脱仮想化を防ぐ
//! - ハンドルの取得はタイマー開始前に行う

use crate::core::{Int, Variant};
use std::time::Duration;

pub mod in_place;
pub mod pointer;
pub mod value;

pub use in_place::InPlaceReceiver;
pub use pointer::PointerReceiver;
pub use value::ValueReceiver;

/// 具象ループとポリモーフィックループの組
pub trait DispatchVariant {
    /// 対応するバリアント
    const VARIANT: Variant;

    /// 具象型を通して `iterations` 回加算し、経過時間を返す
    ///
    /// 戻ったとき `*storage` は `初期値 + increment * iterations` になっている。
    fn run_concrete_loop(&self, storage: &mut Int, iterations: u64, increment: Int) -> Duration;

    /// トレイトオブジェクトを通して `iterations` 回加算し、経過時間を返す
    fn run_polymorphic_loop(&self, storage: &mut Int, iterations: u64, increment: Int)
        -> Duration;
}
