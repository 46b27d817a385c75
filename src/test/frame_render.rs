use bytes::Bytes;
use hex_literal::hex;

use super::{fixed_counters, test_config};
use crate::config::TransportProtocol;
use crate::net::{
    CLIENT_MAC, FrameAssembler, SERVER_MAC, TcpFlags, internet_checksum, transport_checksum,
};
use crate::payload::Direction;
use crate::session::EndpointPair;

fn assembler(protocol: TransportProtocol) -> FrameAssembler {
    FrameAssembler::new(EndpointPair::from_config(&test_config(protocol)))
}

#[test]
fn ethernet_addresses_swap_with_direction() {
    let asm = assembler(TransportProtocol::Tcp);
    let mut counters = fixed_counters();

    let c2s = asm
        .tcp(&mut counters, Direction::ClientToServer, TcpFlags::SYN, Bytes::new())
        .to_bytes();
    assert_eq!(&c2s[..14], &hex!("001c2310f8f1 001b17011020 0800"));

    let s2c = asm
        .tcp(&mut counters, Direction::ServerToClient, TcpFlags::SYN_ACK, Bytes::new())
        .to_bytes();
    assert_eq!(&s2c[..14], &hex!("001b17011020 001c2310f8f1 0800"));
}

#[test]
fn mac_addresses_display_colon_separated() {
    assert_eq!(CLIENT_MAC.to_string(), "00:1b:17:01:10:20");
    assert_eq!(SERVER_MAC.to_string(), "00:1c:23:10:f8:f1");
}

#[test]
fn tcp_frame_renders_valid_ipv4_and_tcp_headers() {
    let asm = assembler(TransportProtocol::Tcp);
    let mut counters = fixed_counters();
    let frame = asm.tcp(
        &mut counters,
        Direction::ServerToClient,
        TcpFlags::PSH_ACK,
        Bytes::from_static(b"payload"),
    );
    let bytes = frame.to_bytes();
    assert_eq!(bytes.len(), 14 + 20 + 20 + 7);
    assert_eq!(bytes.len(), frame.wire_len());

    let ip = &bytes[14..34];
    assert_eq!(ip[0], 0x45);
    assert_eq!(u16::from_be_bytes([ip[2], ip[3]]), 20 + 20 + 7);
    assert_eq!(u16::from_be_bytes([ip[4], ip[5]]), 200);
    assert_eq!(ip[8], 64);
    assert_eq!(ip[9], 6);
    assert_eq!(&ip[12..16], &[10, 0, 0, 2]);
    assert_eq!(&ip[16..20], &[10, 0, 0, 1]);
    assert_eq!(internet_checksum(ip), 0, "ip header checksum must verify");

    let tcp = &bytes[34..];
    assert_eq!(u16::from_be_bytes([tcp[0], tcp[1]]), 443);
    assert_eq!(u16::from_be_bytes([tcp[2], tcp[3]]), 50000);
    assert_eq!(u32::from_be_bytes([tcp[4], tcp[5], tcp[6], tcp[7]]), 5000);
    assert_eq!(u32::from_be_bytes([tcp[8], tcp[9], tcp[10], tcp[11]]), 0);
    assert_eq!(tcp[12] >> 4, 5);
    assert_eq!(tcp[13], 0x18);
    assert_eq!(&tcp[20..], b"payload");
    assert_eq!(
        transport_checksum(frame.ip.source, frame.ip.destination, 6, tcp),
        0,
        "tcp checksum must verify"
    );
}

#[test]
fn assembler_reads_tcp_counters_without_mutating_them() {
    let asm = assembler(TransportProtocol::Tcp);
    let mut counters = fixed_counters();
    asm.tcp(&mut counters, Direction::ClientToServer, TcpFlags::ACK, Bytes::from_static(b"abc"));
    assert_eq!(counters.seq(Direction::ClientToServer), 1000);
    assert_eq!(counters.ack(Direction::ClientToServer), 0);
    assert_eq!(counters.next_ip_id(Direction::ClientToServer), 101);
}

#[test]
fn udp_frame_renders_length_and_checksum() {
    let asm = assembler(TransportProtocol::Udp);
    let mut counters = fixed_counters();
    let frame = asm.udp(&mut counters, Direction::ClientToServer, Bytes::from_static(b"hi!"));
    let bytes = frame.to_bytes();
    assert_eq!(bytes.len(), 14 + 20 + 8 + 3);
    assert_eq!(bytes[14 + 9], 17);

    let udp = &bytes[34..];
    assert_eq!(u16::from_be_bytes([udp[0], udp[1]]), 50000);
    assert_eq!(u16::from_be_bytes([udp[2], udp[3]]), 443);
    assert_eq!(u16::from_be_bytes([udp[4], udp[5]]), 11);
    assert_eq!(transport_checksum(frame.ip.source, frame.ip.destination, 17, udp), 0);
}

#[test]
fn tcp_flags_display_like_capture_tools() {
    assert_eq!(TcpFlags::SYN.to_string(), "S");
    assert_eq!(TcpFlags::SYN_ACK.to_string(), "SA");
    assert_eq!(TcpFlags::PSH_ACK.to_string(), "PA");
    assert_eq!(TcpFlags::FIN_ACK.to_string(), "FA");
    assert_eq!(TcpFlags::ACK.to_string(), "A");
}
