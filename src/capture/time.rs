//! 捕获时间类型
//!
//! 定义捕获时间戳及其单位转换。

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// 捕获时间（自 Unix 纪元起的纳秒）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize)]
pub struct CaptureTime(pub u64);

/// 帧间隔：20ms（50 帧/秒）
pub const FRAME_INTERVAL: CaptureTime = CaptureTime::from_millis(20);

impl CaptureTime {
    pub const ZERO: CaptureTime = CaptureTime(0);
    pub const fn from_micros(us: u64) -> CaptureTime {
        CaptureTime(us.saturating_mul(1_000))
    }
    pub const fn from_millis(ms: u64) -> CaptureTime {
        CaptureTime(ms.saturating_mul(1_000_000))
    }
    pub const fn from_secs(s: u64) -> CaptureTime {
        CaptureTime(s.saturating_mul(1_000_000_000))
    }

    /// 纪元之前的时间按 0 处理
    pub fn from_system_time(t: SystemTime) -> CaptureTime {
        let nanos = t
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        CaptureTime(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    pub fn now() -> CaptureTime {
        CaptureTime::from_system_time(SystemTime::now())
    }

    pub fn saturating_add(self, other: CaptureTime) -> CaptureTime {
        CaptureTime(self.0.saturating_add(other.0))
    }

    /// `(秒, 微秒)`，即传统 pcap 记录头的两个字段
    pub fn to_pcap_parts(self) -> (u32, u32) {
        let secs = self.0 / 1_000_000_000;
        let usecs = (self.0 % 1_000_000_000) / 1_000;
        (secs as u32, usecs as u32)
    }
}

/// Stamps frame `i` with `start + i * FRAME_INTERVAL`.
pub fn assign_timestamps(frames: &mut [crate::net::Frame], start: CaptureTime) {
    for (i, frame) in frames.iter_mut().enumerate() {
        frame.timestamp = CaptureTime(start.0.saturating_add(FRAME_INTERVAL.0.saturating_mul(i as u64)));
    }
}
