//! 帧报告（JSON）
//!
//! 每帧一条结构化记录，便于离线核对 seq/ack，而不必重新解析 pcap。

use serde::{Deserialize, Serialize};

use super::time::CaptureTime;
use crate::config::{SessionConfig, TransportProtocol};
use crate::net::{Frame, Transport};
use crate::payload::Direction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameSummary {
    pub index: usize,
    pub ts_ns: CaptureTime,
    pub direction: Direction,
    pub protocol: TransportProtocol,
    pub ip_id: u16,
    /// TCP 标志缩写，如 `PA`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack: Option<u32>,
    pub payload_len: usize,
    pub wire_len: usize,
}

impl FrameSummary {
    pub fn from_frame(index: usize, frame: &Frame) -> Self {
        let (flags, seq, ack) = match &frame.transport {
            Transport::Tcp(h) => (
                Some(h.flags.to_string()),
                Some(h.sequence),
                Some(h.acknowledgement),
            ),
            Transport::Udp(_) => (None, None, None),
        };
        Self {
            index,
            ts_ns: frame.timestamp,
            direction: frame.direction,
            protocol: frame.transport.protocol(),
            ip_id: frame.ip.identification,
            flags,
            seq,
            ack,
            payload_len: frame.payload.len(),
            wire_len: frame.wire_len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureReport {
    pub config: SessionConfig,
    pub frames: Vec<FrameSummary>,
}

impl CaptureReport {
    pub fn new(config: &SessionConfig, frames: &[Frame]) -> Self {
        Self {
            config: config.clone(),
            frames: frames
                .iter()
                .enumerate()
                .map(|(i, f)| FrameSummary::from_frame(i, f))
                .collect(),
        }
    }
}
