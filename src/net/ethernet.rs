//! Ethernet II 头

use std::fmt;

use bytes::{BufMut, BytesMut};

use crate::payload::Direction;

pub const ETHERTYPE_IPV4: u16 = 0x0800;
pub const ETHERNET_HEADER_LEN: usize = 14;

/// 客户端网卡地址
pub const CLIENT_MAC: MacAddress = MacAddress([0x00, 0x1b, 0x17, 0x01, 0x10, 0x20]);
/// 服务端网卡地址
pub const SERVER_MAC: MacAddress = MacAddress([0x00, 0x1c, 0x23, 0x10, 0xf8, 0xf1]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetHeader {
    pub destination: MacAddress,
    pub source: MacAddress,
    pub ethertype: u16,
}

impl EthernetHeader {
    /// 每个方向一对固定地址
    pub fn for_direction(direction: Direction) -> Self {
        let (source, destination) = match direction {
            Direction::ClientToServer => (CLIENT_MAC, SERVER_MAC),
            Direction::ServerToClient => (SERVER_MAC, CLIENT_MAC),
        };
        Self {
            destination,
            source,
            ethertype: ETHERTYPE_IPV4,
        }
    }

    pub fn write(&self, buf: &mut BytesMut) {
        buf.put_slice(&self.destination.0);
        buf.put_slice(&self.source.0);
        buf.put_u16(self.ethertype);
    }
}
