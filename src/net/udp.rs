//! UDP 头

use std::net::Ipv4Addr;

use bytes::{BufMut, BytesMut};

use super::checksum::transport_checksum;

pub const UDP_HEADER_LEN: usize = 8;
const UDP_PROTOCOL: u8 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpHeader {
    pub source_port: u16,
    pub destination_port: u16,
}

impl UdpHeader {
    pub fn write(&self, buf: &mut BytesMut, src: Ipv4Addr, dst: Ipv4Addr, payload: &[u8]) {
        let start = buf.len();
        buf.put_u16(self.source_port);
        buf.put_u16(self.destination_port);
        buf.put_u16((UDP_HEADER_LEN + payload.len()) as u16);
        buf.put_u16(0);
        buf.put_slice(payload);

        let mut checksum = transport_checksum(src, dst, UDP_PROTOCOL, &buf[start..]);
        // 全 0 表示“未计算”，按 RFC 768 改写为全 1
        if checksum == 0 {
            checksum = 0xFFFF;
        }
        buf[start + 6..start + 8].copy_from_slice(&checksum.to_be_bytes());
    }
}
