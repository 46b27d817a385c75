//! 会话端点

use std::net::Ipv4Addr;

use crate::config::SessionConfig;
use crate::payload::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub ip: Ipv4Addr,
    pub port: u16,
}

/// 客户端/服务端地址对，会话期间不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointPair {
    pub client: Endpoint,
    pub server: Endpoint,
}

impl EndpointPair {
    pub fn from_config(cfg: &SessionConfig) -> Self {
        Self {
            client: Endpoint {
                ip: cfg.client_ip,
                port: cfg.client_port,
            },
            server: Endpoint {
                ip: cfg.server_ip,
                port: cfg.server_port,
            },
        }
    }

    /// 发送方
    pub fn source(&self, direction: Direction) -> Endpoint {
        match direction {
            Direction::ClientToServer => self.client,
            Direction::ServerToClient => self.server,
        }
    }

    /// 接收方
    pub fn destination(&self, direction: Direction) -> Endpoint {
        self.source(direction.opposite())
    }
}
