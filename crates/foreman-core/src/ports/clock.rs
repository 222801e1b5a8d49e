//! Clock port - 時刻の抽象化
//!
//! `updated_at` のスタンプ元を差し替え可能にします。
//!
//! # テスト容易性
//! - 本番は `SystemClock`
//! - テストでは `FixedClock` で決定的な時刻を使う

use chrono::{DateTime, Utc};

/// Clock は現在時刻を提供
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// SystemClock は実時刻（本番用）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// FixedClock は固定時刻（テスト用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock;
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let t2 = clock.now();
        assert!(t2 > t1);
    }

    #[test]
    fn fixed_clock_stays_put() {
        let frozen = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let clock = FixedClock::new(frozen);
        assert_eq!(clock.now(), frozen);
        assert_eq!(clock.now(), frozen);
    }
}
