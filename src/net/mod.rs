//! 帧组装模块
//!
//! Ethernet / IPv4 / TCP / UDP 头部类型、校验和，以及把抽象帧渲染为字节的组装器。

mod assembler;
mod checksum;
mod ethernet;
mod frame;
mod ipv4;
mod tcp;
mod transport;
mod udp;

pub use assembler::FrameAssembler;
pub use checksum::{internet_checksum, transport_checksum};
pub use ethernet::{CLIENT_MAC, ETHERTYPE_IPV4, EthernetHeader, MacAddress, SERVER_MAC};
pub use frame::Frame;
pub use ipv4::Ipv4Header;
pub use tcp::{TcpFlags, TcpHeader};
pub use transport::Transport;
pub use udp::UdpHeader;
