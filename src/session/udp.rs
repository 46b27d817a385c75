//! UDP 会话：无握手、无 seq/ack，每条记录一个帧

use tracing::info;

use super::counters::SessionCounters;
use crate::net::{Frame, FrameAssembler};
use crate::payload::PayloadRecord;

pub fn build_udp(
    assembler: &FrameAssembler,
    counters: &mut SessionCounters,
    records: &[PayloadRecord],
) -> Vec<Frame> {
    let frames: Vec<Frame> = records
        .iter()
        .map(|r| assembler.udp(counters, r.direction, r.payload.clone()))
        .collect();
    info!(frames = frames.len(), "udp session built");
    frames
}
