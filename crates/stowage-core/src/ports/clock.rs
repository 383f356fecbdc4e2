//! 시각 포트.
//!
//! 어댑터는 쓰기 한 번에 `now_secs()`를 정확히 한 번 호출하므로,
//! 하나의 논리 연산은 하나의 일관된 타임스탬프를 관측한다.

use std::sync::atomic::{AtomicI64, Ordering};

/// 현재 시각 공급자
pub trait Clock: Send + Sync {
    /// 현재 Unix 시각 (초)
    fn now_secs(&self) -> i64;
}

/// 고정 시각 (테스트용)
///
/// `set`/`advance`로 값을 바꾸기 전까지 항상 같은 시각을 돌려준다.
#[derive(Debug, Default)]
pub struct FixedClock {
    secs: AtomicI64,
}

impl FixedClock {
    /// 주어진 시각으로 생성
    pub fn new(secs: i64) -> Self {
        Self {
            secs: AtomicI64::new(secs),
        }
    }

    /// 시각 설정
    pub fn set(&self, secs: i64) {
        self.secs.store(secs, Ordering::SeqCst);
    }

    /// 시각 전진
    pub fn advance(&self, delta_secs: i64) {
        self.secs.fetch_add(delta_secs, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_secs(&self) -> i64 {
        self.secs.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_moves_only_when_told() {
        let clock = FixedClock::new(1_700_000_000);
        assert_eq!(clock.now_secs(), 1_700_000_000);
        assert_eq!(clock.now_secs(), 1_700_000_000);

        clock.advance(5);
        assert_eq!(clock.now_secs(), 1_700_000_005);

        clock.set(10);
        assert_eq!(clock.now_secs(), 10);
    }
}
