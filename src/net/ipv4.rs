//! IPv4 头（无选项）

use std::net::Ipv4Addr;

use bytes::{BufMut, BytesMut};

use super::checksum::internet_checksum;

pub const IPV4_HEADER_LEN: usize = 20;
pub const DEFAULT_TTL: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Header {
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
    pub identification: u16,
    pub ttl: u8,
    pub protocol: u8,
}

impl Ipv4Header {
    pub fn new(source: Ipv4Addr, destination: Ipv4Addr, identification: u16, protocol: u8) -> Self {
        Self {
            source,
            destination,
            identification,
            ttl: DEFAULT_TTL,
            protocol,
        }
    }

    /// Writes the header for a datagram carrying `payload_len` bytes after it.
    pub fn write(&self, buf: &mut BytesMut, payload_len: usize) {
        let mut header = [0u8; IPV4_HEADER_LEN];
        let total_len = (IPV4_HEADER_LEN + payload_len) as u16;
        header[0] = (4 << 4) | 5;
        header[1] = 0; // TOS
        header[2..4].copy_from_slice(&total_len.to_be_bytes());
        header[4..6].copy_from_slice(&self.identification.to_be_bytes());
        // flags + fragment offset 保持 0
        header[8] = self.ttl;
        header[9] = self.protocol;
        header[12..16].copy_from_slice(&self.source.octets());
        header[16..20].copy_from_slice(&self.destination.octets());
        let checksum = internet_checksum(&header);
        header[10..12].copy_from_slice(&checksum.to_be_bytes());
        buf.put_slice(&header);
    }
}
