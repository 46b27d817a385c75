//! 会话对象与入口函数

use rand::Rng;
use tracing::{debug, info};

use super::counters::SessionCounters;
use super::endpoint::EndpointPair;
use super::tcp::TcpMachine;
use super::udp::build_udp;
use crate::capture::{CaptureTime, assign_timestamps};
use crate::config::{SessionConfig, TransportProtocol};
use crate::error::Result;
use crate::net::{Frame, FrameAssembler};
use crate::payload::{PayloadRecord, parse_c_array};

/// One conversion run: endpoints, counters, input records and the built frames.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    assembler: FrameAssembler,
    counters: SessionCounters,
    records: Vec<PayloadRecord>,
    frames: Vec<Frame>,
}

impl Session {
    /// Records must already respect the MSS of `config.protocol`.
    pub fn new(
        config: SessionConfig,
        records: Vec<PayloadRecord>,
        counters: SessionCounters,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            assembler: FrameAssembler::new(EndpointPair::from_config(&config)),
            config,
            counters,
            records,
            frames: Vec::new(),
        })
    }

    /// 解析 C 数组文本，并从 `rng` 抽取初始 IP ID / 序列号
    pub fn from_c_array<R: Rng + ?Sized>(
        config: SessionConfig,
        text: &str,
        rng: &mut R,
    ) -> Result<Self> {
        let records = parse_c_array(text, config.protocol)?;
        Self::new(config, records, SessionCounters::seeded(rng))
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    pub fn records(&self) -> &[PayloadRecord] {
        &self.records
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Builds the frame sequence. On error no frames are kept.
    #[tracing::instrument(skip(self), fields(protocol = %self.config.protocol, records = self.records.len()))]
    pub fn build(&mut self) -> Result<&[Frame]> {
        if !self.frames.is_empty() {
            debug!("session already built");
            return Ok(&self.frames);
        }

        self.frames = match self.config.protocol {
            TransportProtocol::Tcp => {
                let mut tcp = TcpMachine::new(&self.assembler, &mut self.counters);
                tcp.run(&self.records)?;
                tcp.into_frames()
            }
            TransportProtocol::Udp => build_udp(&self.assembler, &mut self.counters, &self.records),
        };
        info!(frames = self.frames.len(), "session built");
        Ok(&self.frames)
    }
}

/// Parses `text`, builds the session and timestamps every frame from `start`.
///
/// This is the single entry point for a conversion run; nothing is written.
pub fn synthesize<R: Rng + ?Sized>(
    config: &SessionConfig,
    text: &str,
    start: CaptureTime,
    rng: &mut R,
) -> Result<Vec<Frame>> {
    let mut session = Session::from_c_array(config.clone(), text, rng)?;
    session.build()?;
    let mut frames = session.into_frames();
    assign_timestamps(&mut frames, start);
    Ok(frames)
}
