//! 方向载荷记录

use bytes::Bytes;

use super::direction::Direction;

/// 一段等待封帧的单向应用层载荷
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadRecord {
    pub direction: Direction,
    pub payload: Bytes,
}

impl PayloadRecord {
    pub fn new(direction: Direction, payload: impl Into<Bytes>) -> Self {
        Self {
            direction,
            payload: payload.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
