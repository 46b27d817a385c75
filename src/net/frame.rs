//! 帧类型
//!
//! 一个帧 = Ethernet | IPv4 | TCP/UDP | 载荷，再加上捕获时间戳。

use bytes::{Bytes, BytesMut};

use super::ethernet::{ETHERNET_HEADER_LEN, EthernetHeader};
use super::ipv4::{IPV4_HEADER_LEN, Ipv4Header};
use super::tcp::TcpHeader;
use super::transport::Transport;
use crate::capture::CaptureTime;
use crate::payload::Direction;

/// 已组装的链路层帧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub direction: Direction,
    pub ethernet: EthernetHeader,
    pub ip: Ipv4Header,
    pub transport: Transport,
    pub payload: Bytes,
    /// 在最后一遍统一赋值，见 [`crate::capture::assign_timestamps`]
    pub timestamp: CaptureTime,
}

impl Frame {
    /// TCP 头（UDP 帧返回 `None`）
    pub fn tcp(&self) -> Option<&TcpHeader> {
        match &self.transport {
            Transport::Tcp(h) => Some(h),
            Transport::Udp(_) => None,
        }
    }

    /// 渲染后的总字节数
    pub fn wire_len(&self) -> usize {
        ETHERNET_HEADER_LEN + IPV4_HEADER_LEN + self.transport.header_len() + self.payload.len()
    }

    /// Renders the full header stack and payload into wire bytes.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.wire_len());
        self.ethernet.write(&mut buf);
        self.ip.write(&mut buf, self.transport.header_len() + self.payload.len());
        match &self.transport {
            Transport::Tcp(h) => h.write(&mut buf, self.ip.source, self.ip.destination, &self.payload),
            Transport::Udp(h) => h.write(&mut buf, self.ip.source, self.ip.destination, &self.payload),
        }
        buf.freeze()
    }
}
