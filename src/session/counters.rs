//! 会话计数器
//!
//! 每个会话一份，只由帧组装器（IP ID）和 TCP 状态机（seq/ack）修改。

use rand::Rng;
use tracing::trace;

use crate::payload::Direction;

/// Counters of one direction: the values the next frame sent that way carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionCounters {
    pub ip_id: u16,
    pub seq: u32,
    pub ack: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCounters {
    client_to_server: DirectionCounters,
    server_to_client: DirectionCounters,
}

impl SessionCounters {
    pub fn new(client_to_server: DirectionCounters, server_to_client: DirectionCounters) -> Self {
        Self {
            client_to_server,
            server_to_client,
        }
    }

    /// Draws random initial IP identifiers and sequence numbers; acks start at 0.
    pub fn seeded<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut draw = || DirectionCounters {
            ip_id: rng.random(),
            seq: rng.random(),
            ack: 0,
        };
        let client_to_server = draw();
        let server_to_client = draw();
        Self::new(client_to_server, server_to_client)
    }

    pub fn get(&self, direction: Direction) -> &DirectionCounters {
        match direction {
            Direction::ClientToServer => &self.client_to_server,
            Direction::ServerToClient => &self.server_to_client,
        }
    }

    fn get_mut(&mut self, direction: Direction) -> &mut DirectionCounters {
        match direction {
            Direction::ClientToServer => &mut self.client_to_server,
            Direction::ServerToClient => &mut self.server_to_client,
        }
    }

    pub fn seq(&self, direction: Direction) -> u32 {
        self.get(direction).seq
    }

    pub fn ack(&self, direction: Direction) -> u32 {
        self.get(direction).ack
    }

    /// 返回当前 IP ID，随后该方向计数加一
    pub fn next_ip_id(&mut self, direction: Direction) -> u16 {
        let c = self.get_mut(direction);
        let id = c.ip_id;
        c.ip_id = c.ip_id.wrapping_add(1);
        id
    }

    /// 推进发送方序列号，返回推进后的值
    pub fn advance_seq(&mut self, direction: Direction, bytes: u32) -> u32 {
        let c = self.get_mut(direction);
        c.seq = c.seq.wrapping_add(bytes);
        trace!(?direction, bytes, seq = c.seq, "advance seq");
        c.seq
    }

    /// 令 `direction` 方向的 ack 等于对端当前序列号
    pub fn acknowledge_peer(&mut self, direction: Direction) -> u32 {
        let peer_seq = self.seq(direction.opposite());
        self.get_mut(direction).ack = peer_seq;
        trace!(?direction, ack = peer_seq, "ack peer");
        peer_seq
    }
}
