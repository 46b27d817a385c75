//! 方向类型

use serde::{Deserialize, Serialize};

/// 记录或帧的发起方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ClientToServer,
    ServerToClient,
}

impl Direction {
    /// Resolves the peer marker of an exported C array (`peer0_*` / `peer1_*`).
    ///
    /// The exporter numbers its peers the opposite way round from this crate's
    /// client/server bit (`1` = client to server), so the marker is flipped
    /// exactly once here: marker `0` is `ClientToServer`, marker `1` is
    /// `ServerToClient`. Nothing else in the crate should repeat this flip.
    pub fn from_peer_marker(marker: u8) -> Option<Self> {
        match marker ^ 1 {
            1 => Some(Direction::ClientToServer),
            0 => Some(Direction::ServerToClient),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::ClientToServer => Direction::ServerToClient,
            Direction::ServerToClient => Direction::ClientToServer,
        }
    }
}
