//! Transport-layer headers carried by frames.

use super::tcp::{TCP_HEADER_LEN, TcpHeader};
use super::udp::{UDP_HEADER_LEN, UdpHeader};
use crate::config::TransportProtocol;

/// Transport header of a rendered frame.
///
/// Keeps the TCP fields inspectable after assembly so sequencing can be
/// checked without re-parsing the rendered bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// TCP segment header.
    Tcp(TcpHeader),
    /// UDP datagram header.
    Udp(UdpHeader),
}

impl Transport {
    pub fn protocol(&self) -> TransportProtocol {
        match self {
            Transport::Tcp(_) => TransportProtocol::Tcp,
            Transport::Udp(_) => TransportProtocol::Udp,
        }
    }

    pub fn header_len(&self) -> usize {
        match self {
            Transport::Tcp(_) => TCP_HEADER_LEN,
            Transport::Udp(_) => UDP_HEADER_LEN,
        }
    }
}
