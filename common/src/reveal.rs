//! スキルバーの表示アニメーション
//!
//! 要素ごとに一度だけアニメーションを開始する。

pub const ANIMATION_PAUSED: &str = "paused";
pub const ANIMATION_RUNNING: &str = "running";

/// 監視対象の集合。開始済みの要素は二度と発火しない。
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    released: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            released: vec![false; count],
        }
    }

    /// 交差通知を処理し、アニメーションを開始すべきなら `true`
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        match self.released.get_mut(index) {
            Some(released) if is_intersecting && !*released => {
                *released = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_once() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.on_intersection(0, false));
        assert!(tracker.on_intersection(0, true));
        // スクロールで外れて戻ってきても再発火しない
        assert!(!tracker.on_intersection(0, false));
        assert!(!tracker.on_intersection(0, true));
        // 他の要素は独立して発火する
        assert!(tracker.on_intersection(1, true));
    }

    #[test]
    fn test_out_of_range_index() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.on_intersection(5, true));
        assert!(tracker.on_intersection(0, true));
    }
}
