//! 帧组装器
//!
//! 只负责把方向、标志和载荷渲染成头部栈。TCP seq/ack 只读；唯一的副作用是
//! 消耗一个 IP ID。

use bytes::Bytes;
use tracing::debug;

use super::ethernet::EthernetHeader;
use super::frame::Frame;
use super::ipv4::Ipv4Header;
use super::tcp::{DEFAULT_WINDOW, TcpFlags, TcpHeader};
use super::transport::Transport;
use super::udp::UdpHeader;
use crate::capture::CaptureTime;
use crate::config::TransportProtocol;
use crate::payload::Direction;
use crate::session::{EndpointPair, SessionCounters};

#[derive(Debug, Clone)]
pub struct FrameAssembler {
    endpoints: EndpointPair,
}

impl FrameAssembler {
    pub fn new(endpoints: EndpointPair) -> Self {
        Self { endpoints }
    }

    /// Ethernet | IPv4 | TCP，seq/ack 取自该方向的当前计数
    pub fn tcp(
        &self,
        counters: &mut SessionCounters,
        direction: Direction,
        flags: TcpFlags,
        payload: Bytes,
    ) -> Frame {
        let (src, dst) = self.ports(direction);
        let header = TcpHeader {
            source_port: src,
            destination_port: dst,
            sequence: counters.seq(direction),
            acknowledgement: counters.ack(direction),
            flags,
            window: DEFAULT_WINDOW,
        };
        let frame = self.frame(
            counters,
            direction,
            TransportProtocol::Tcp,
            Transport::Tcp(header),
            payload,
        );
        debug!(
            ?direction,
            src_mac = %frame.ethernet.source,
            dst_mac = %frame.ethernet.destination,
            %flags,
            seq = header.sequence,
            ack = header.acknowledgement,
            ip_id = frame.ip.identification,
            payload_len = frame.payload.len(),
            "assembled tcp frame"
        );
        frame
    }

    /// Ethernet | IPv4 | UDP
    pub fn udp(&self, counters: &mut SessionCounters, direction: Direction, payload: Bytes) -> Frame {
        let (src, dst) = self.ports(direction);
        let header = UdpHeader {
            source_port: src,
            destination_port: dst,
        };
        let frame = self.frame(
            counters,
            direction,
            TransportProtocol::Udp,
            Transport::Udp(header),
            payload,
        );
        debug!(
            ?direction,
            src_mac = %frame.ethernet.source,
            dst_mac = %frame.ethernet.destination,
            ip_id = frame.ip.identification,
            payload_len = frame.payload.len(),
            "assembled udp frame"
        );
        frame
    }

    fn ports(&self, direction: Direction) -> (u16, u16) {
        (
            self.endpoints.source(direction).port,
            self.endpoints.destination(direction).port,
        )
    }

    fn frame(
        &self,
        counters: &mut SessionCounters,
        direction: Direction,
        protocol: TransportProtocol,
        transport: Transport,
        payload: Bytes,
    ) -> Frame {
        let ip = Ipv4Header::new(
            self.endpoints.source(direction).ip,
            self.endpoints.destination(direction).ip,
            counters.next_ip_id(direction),
            protocol.ip_protocol(),
        );
        Frame {
            direction,
            ethernet: EthernetHeader::for_direction(direction),
            ip,
            transport,
            payload,
            timestamp: CaptureTime::ZERO,
        }
    }
}
