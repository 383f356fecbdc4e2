//! 시스템 시각 공급자.

use stowage_core::ports::clock::Clock;

/// 벽시계 기반 `Clock` (UTC, 초 단위)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_close_to_now() {
        let before = chrono::Utc::now().timestamp();
        let now = SystemClock.now_secs();
        let after = chrono::Utc::now().timestamp();
        assert!(before <= now && now <= after);
    }
}
