use super::{fixed_counters, test_config};
use crate::config::TransportProtocol;
use crate::net::{FrameAssembler, Transport};
use crate::payload::{Direction, PayloadRecord};
use crate::session::{EndpointPair, build_udp};

#[test]
fn each_record_becomes_one_udp_frame_in_order() {
    let cfg = test_config(TransportProtocol::Udp);
    let asm = FrameAssembler::new(EndpointPair::from_config(&cfg));
    let mut counters = fixed_counters();
    let records = vec![
        PayloadRecord::new(Direction::ClientToServer, &b"query"[..]),
        PayloadRecord::new(Direction::ServerToClient, &b"answer"[..]),
        PayloadRecord::new(Direction::ServerToClient, &b"more"[..]),
    ];

    let frames = build_udp(&asm, &mut counters, &records);
    assert_eq!(frames.len(), 3);
    for (frame, record) in frames.iter().zip(&records) {
        assert_eq!(frame.direction, record.direction);
        assert_eq!(frame.payload, record.payload);
        assert!(frame.tcp().is_none());
    }

    match frames[0].transport {
        Transport::Udp(h) => {
            assert_eq!(h.source_port, cfg.client_port);
            assert_eq!(h.destination_port, cfg.server_port);
        }
        _ => panic!("expected udp"),
    }
    match frames[1].transport {
        Transport::Udp(h) => {
            assert_eq!(h.source_port, cfg.server_port);
            assert_eq!(h.destination_port, cfg.client_port);
        }
        _ => panic!("expected udp"),
    }
    assert_eq!(frames[1].ip.identification, 200);
    assert_eq!(frames[2].ip.identification, 201);
    // UDP 不触碰 seq/ack
    assert_eq!(counters, fixed_counters_after_ip_ids());
}

fn fixed_counters_after_ip_ids() -> crate::session::SessionCounters {
    let mut c = fixed_counters();
    c.next_ip_id(Direction::ClientToServer);
    c.next_ip_id(Direction::ServerToClient);
    c.next_ip_id(Direction::ServerToClient);
    c
}
