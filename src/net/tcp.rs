//! TCP 头与标志位

use std::fmt;
use std::net::Ipv4Addr;

use bytes::{BufMut, BytesMut};

use super::checksum::transport_checksum;

pub const TCP_HEADER_LEN: usize = 20;
pub const DEFAULT_WINDOW: u16 = 8192;
const TCP_PROTOCOL: u8 = 6;

/// TCP flag bits, stored as the on-wire byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TcpFlags(pub u8);

impl TcpFlags {
    pub const FIN: TcpFlags = TcpFlags(0x01);
    pub const SYN: TcpFlags = TcpFlags(0x02);
    pub const RST: TcpFlags = TcpFlags(0x04);
    pub const PSH: TcpFlags = TcpFlags(0x08);
    pub const ACK: TcpFlags = TcpFlags(0x10);

    pub const SYN_ACK: TcpFlags = TcpFlags(0x12);
    pub const PSH_ACK: TcpFlags = TcpFlags(0x18);
    pub const FIN_ACK: TcpFlags = TcpFlags(0x11);

    pub fn contains(self, other: TcpFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl fmt::Debug for TcpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TcpFlags({self})")
    }
}

/// 与常见抓包工具一致的缩写：`S`, `SA`, `PA`, `FA`, `A` ...
impl fmt::Display for TcpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(TcpFlags, char); 5] = [
            (TcpFlags::FIN, 'F'),
            (TcpFlags::SYN, 'S'),
            (TcpFlags::RST, 'R'),
            (TcpFlags::PSH, 'P'),
            (TcpFlags::ACK, 'A'),
        ];
        for (flag, name) in NAMES {
            if self.contains(flag) {
                write!(f, "{name}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpHeader {
    pub source_port: u16,
    pub destination_port: u16,
    pub sequence: u32,
    pub acknowledgement: u32,
    pub flags: TcpFlags,
    pub window: u16,
}

impl TcpHeader {
    /// Writes header and payload, computing the checksum over the pseudo-header.
    pub fn write(&self, buf: &mut BytesMut, src: Ipv4Addr, dst: Ipv4Addr, payload: &[u8]) {
        let start = buf.len();
        buf.put_u16(self.source_port);
        buf.put_u16(self.destination_port);
        buf.put_u32(self.sequence);
        buf.put_u32(self.acknowledgement);
        buf.put_u8(((TCP_HEADER_LEN / 4) as u8) << 4);
        buf.put_u8(self.flags.0);
        buf.put_u16(self.window);
        buf.put_u16(0); // checksum
        buf.put_u16(0); // urgent pointer
        buf.put_slice(payload);

        let checksum = transport_checksum(src, dst, TCP_PROTOCOL, &buf[start..]);
        buf[start + 16..start + 18].copy_from_slice(&checksum.to_be_bytes());
    }
}
