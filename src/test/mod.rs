mod frame_render;
mod udp_session;

use std::net::Ipv4Addr;

use crate::config::{SessionConfig, TransportProtocol};
use crate::session::{DirectionCounters, SessionCounters};

pub(crate) fn test_config(protocol: TransportProtocol) -> SessionConfig {
    SessionConfig {
        client_ip: Ipv4Addr::new(10, 0, 0, 1),
        client_port: 50000,
        server_ip: Ipv4Addr::new(10, 0, 0, 2),
        server_port: 443,
        protocol,
    }
}

/// client: ip_id 100, seq 1000；server: ip_id 200, seq 5000
pub(crate) fn fixed_counters() -> SessionCounters {
    SessionCounters::new(
        DirectionCounters {
            ip_id: 100,
            seq: 1000,
            ack: 0,
        },
        DirectionCounters {
            ip_id: 200,
            seq: 5000,
            ack: 0,
        },
    )
}
