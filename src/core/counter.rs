//! カウンター型と加算ケイパビリティのトレイト定義
//!
//! 3つのレシーバー形状をそれぞれ別トレイトで表現する：
//! - `Summable`: 値レシーバー、新しい値を返す（バリアントA）
//! - `PointerSummable`: 参照レシーバー、参照を返す（バリアントB）
//! - `InPlaceSummable`: 参照レシーバー、戻り値なし（バリアントC）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// `i64` をラップしたカウンター
///
/// メソッドを付与するための名前付き型。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Int(pub i64);

impl Int {
    pub const ZERO: Int = Int(0);

    pub const fn get(self) -> i64 {
        self.0
    }

    /// `iterations` 回 `self` を足した結果（オーバーフロー時は `None`）
    pub fn checked_times(self, iterations: u64) -> Option<Int> {
        let iterations = i64::try_from(iterations).ok()?;
        self.0.checked_mul(iterations).map(Int)
    }

    pub fn checked_add(self, rhs: Int) -> Option<Int> {
        self.0.checked_add(rhs.0).map(Int)
    }
}

impl Add for Int {
    type Output = Int;

    #[inline]
    fn add(self, rhs: Int) -> Int {
        Int(self.0 + rhs.0)
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 値レシーバーの加算ケイパビリティ
pub trait Summable {
    /// 2つの `Int` を足した新しい値を返す
    fn sum(&self, rhs: Int) -> Int;

    /// 現在値を取得
    fn value(&self) -> Int;
}

impl Summable for Int {
    #[inline]
    fn sum(&self, rhs: Int) -> Int {
        *self + rhs
    }

    #[inline]
    fn value(&self) -> Int {
        *self
    }
}

/// 参照レシーバーの加算ケイパビリティ（参照を返す）
pub trait PointerSummable {
    /// 自身に加算し、加算後のカウンターへの参照を返す
    fn sum(&mut self, rhs: Int) -> &mut Int;

    fn value(&self) -> Int;
}

impl PointerSummable for Int {
    #[inline]
    fn sum(&mut self, rhs: Int) -> &mut Int {
        self.0 += rhs.0;
        self
    }

    #[inline]
    fn value(&self) -> Int {
        *self
    }
}

/// 参照レシーバーの加算ケイパビリティ（戻り値なし）
pub trait InPlaceSummable {
    fn sum(&mut self, rhs: Int);

    fn value(&self) -> Int;
}

impl InPlaceSummable for Int {
    #[inline]
    fn sum(&mut self, rhs: Int) {
        self.0 += rhs.0;
    }

    #[inline]
    fn value(&self) -> Int {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_sum_returns_new_value() {
        let a = Int(5);
        let b = Summable::sum(&a, Int(10));

        assert_eq!(b, Int(15));
        // レシーバーは変わらない
        assert_eq!(a, Int(5));
    }

    #[test]
    fn test_pointer_sum_mutates_and_returns_same_storage() {
        let mut counter = Int(1);
        let returned = PointerSummable::sum(&mut counter, Int(10));
        returned.0 += 1;

        assert_eq!(counter, Int(12));
    }

    #[test]
    fn test_in_place_sum_mutates() {
        let mut counter = Int::ZERO;
        InPlaceSummable::sum(&mut counter, Int(10));
        InPlaceSummable::sum(&mut counter, Int(10));

        assert_eq!(counter.get(), 20);
    }

    #[test]
    fn test_trait_objects_agree_with_concrete_calls() {
        let boxed: Box<dyn Summable> = Box::new(Int(3));
        assert_eq!(boxed.sum(Int(4)), Summable::sum(&Int(3), Int(4)));

        let mut storage = Int(3);
        let handle: &mut dyn InPlaceSummable = &mut storage;
        handle.sum(Int(4));
        assert_eq!(handle.value(), Int(7));
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(Int(10).checked_times(100_000_000), Some(Int(1_000_000_000)));
        assert_eq!(Int(10).checked_times(0), Some(Int::ZERO));
        assert_eq!(Int(i64::MAX).checked_times(2), None);
        assert_eq!(Int(1).checked_times(u64::MAX), None);
        assert_eq!(Int(i64::MAX).checked_add(Int(1)), None);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Int(-42).to_string(), "-42");
        assert_eq!(serde_json::to_string(&Int(7)).unwrap(), "7");
        let parsed: Int = serde_json::from_str("99").unwrap();
        assert_eq!(parsed, Int(99));
    }
}
