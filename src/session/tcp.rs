//! TCP 会话状态机
//!
//! 严格线性，无分支无重传：
//!
//! ```text
//! Idle -> SynSent -> SynAckSent -> Established -> DataExchange (n 次)
//!      -> FinWaitServer -> FinAckClient -> FinClient -> FinAckServer -> Closed
//! ```
//!
//! 所有 seq/ack 修改集中在这里；每个 ACK 帧的 ack 字段都等于对端在建帧时刻的序列号。

use bytes::Bytes;
use tracing::{debug, info};

use super::counters::SessionCounters;
use crate::error::{Error, Result};
use crate::net::{Frame, FrameAssembler, TcpFlags};
use crate::payload::{Direction, PayloadRecord};

use Direction::{ClientToServer, ServerToClient};

/// 握手需要的帧数
pub const HANDSHAKE_FRAMES: usize = 3;

/// TCP 会话状态（以最后发出的帧命名）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcpState {
    Idle,
    SynSent,
    SynAckSent,
    Established,
    DataExchange,
    FinWaitServer,
    FinAckClient,
    FinClient,
    FinAckServer,
    Closed,
}

impl TcpState {
    fn accepts_data(self) -> bool {
        matches!(self, TcpState::Established | TcpState::DataExchange)
    }
}

pub struct TcpMachine<'a> {
    assembler: &'a FrameAssembler,
    counters: &'a mut SessionCounters,
    frames: Vec<Frame>,
    state: TcpState,
    last_sender: Option<Direction>,
}

impl<'a> TcpMachine<'a> {
    pub fn new(assembler: &'a FrameAssembler, counters: &'a mut SessionCounters) -> Self {
        Self {
            assembler,
            counters,
            frames: Vec::new(),
            state: TcpState::Idle,
            last_sender: None,
        }
    }

    pub fn state(&self) -> TcpState {
        self.state
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Handshake, one data exchange per record, then server-initiated teardown.
    pub fn run(&mut self, records: &[PayloadRecord]) -> Result<()> {
        self.handshake()?;
        for record in records {
            self.send(record)?;
        }
        self.teardown()?;
        info!(
            frames = self.frames.len(),
            client_seq = self.counters.seq(ClientToServer),
            server_seq = self.counters.seq(ServerToClient),
            "tcp session closed"
        );
        Ok(())
    }

    /// SYN, SYN+ACK, ACK.
    pub fn handshake(&mut self) -> Result<()> {
        if self.state != TcpState::Idle {
            return Err(self.invalid("open the connection"));
        }

        self.emit(ClientToServer, TcpFlags::SYN, Bytes::new());
        self.counters.advance_seq(ClientToServer, 1);
        self.counters.acknowledge_peer(ServerToClient);
        self.state = TcpState::SynSent;

        self.emit(ServerToClient, TcpFlags::SYN_ACK, Bytes::new());
        self.counters.advance_seq(ServerToClient, 1);
        self.counters.acknowledge_peer(ClientToServer);
        self.state = TcpState::SynAckSent;

        self.emit(ClientToServer, TcpFlags::ACK, Bytes::new());
        self.state = TcpState::Established;
        debug!("handshake done");
        Ok(())
    }

    /// One PSH+ACK data frame for `record`.
    ///
    /// When the same side sends twice in a row, the peer first acknowledges
    /// the previous data with a bare ACK.
    pub fn send(&mut self, record: &PayloadRecord) -> Result<()> {
        if !self.state.accepts_data() {
            return Err(self.invalid("send data"));
        }
        let direction = record.direction;

        if self.last_sender == Some(direction) {
            self.emit(direction.opposite(), TcpFlags::ACK, Bytes::new());
        }

        self.emit(direction, TcpFlags::PSH_ACK, record.payload.clone());
        // 载荷不超过 MSS；序列号本身按 2^32 回绕
        self.counters.advance_seq(direction, record.len() as u32);
        self.counters.acknowledge_peer(direction.opposite());

        self.last_sender = Some(direction);
        self.state = TcpState::DataExchange;
        Ok(())
    }

    /// Server FIN+ACK, client ACK, client FIN+ACK, server ACK.
    pub fn teardown(&mut self) -> Result<()> {
        if self.frames.len() < HANDSHAKE_FRAMES {
            return Err(Error::MissingHandshake {
                frames: self.frames.len(),
            });
        }
        if !self.state.accepts_data() {
            return Err(self.invalid("close the connection"));
        }

        self.emit(ServerToClient, TcpFlags::FIN_ACK, Bytes::new());
        self.state = TcpState::FinWaitServer;
        self.counters.advance_seq(ServerToClient, 1);
        self.counters.acknowledge_peer(ClientToServer);

        self.emit(ClientToServer, TcpFlags::ACK, Bytes::new());
        self.state = TcpState::FinAckClient;

        self.emit(ClientToServer, TcpFlags::FIN_ACK, Bytes::new());
        self.state = TcpState::FinClient;
        self.counters.advance_seq(ClientToServer, 1);
        self.counters.acknowledge_peer(ServerToClient);

        self.emit(ServerToClient, TcpFlags::ACK, Bytes::new());
        self.state = TcpState::FinAckServer;
        debug!(state = ?self.state, "teardown done");

        self.state = TcpState::Closed;
        Ok(())
    }

    fn emit(&mut self, direction: Direction, flags: TcpFlags, payload: Bytes) {
        let frame = self.assembler.tcp(self.counters, direction, flags, payload);
        self.frames.push(frame);
    }

    fn invalid(&self, action: &'static str) -> Error {
        Error::InvalidState {
            state: self.state,
            action,
        }
    }
}
