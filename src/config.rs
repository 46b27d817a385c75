//! 会话配置
//!
//! 由 CLI 层填充，核心只按字段读取。

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_CLIENT_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 111);
pub const DEFAULT_SERVER_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 222);
pub const DEFAULT_SERVER_PORT: u16 = 443;
/// 未指定客户端端口时的随机范围
pub const CLIENT_PORT_RANGE: std::ops::RangeInclusive<u16> = 40000..=64000;

/// 传输层协议
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransportProtocol {
    Tcp,
    Udp,
}

impl TransportProtocol {
    /// Maximum payload bytes carried by one data frame.
    pub const fn mss(self) -> usize {
        match self {
            TransportProtocol::Tcp => 1460,
            TransportProtocol::Udp => 1472,
        }
    }

    /// IPv4 protocol number.
    pub const fn ip_protocol(self) -> u8 {
        match self {
            TransportProtocol::Tcp => 6,
            TransportProtocol::Udp => 17,
        }
    }
}

impl FromStr for TransportProtocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tcp" => Ok(TransportProtocol::Tcp),
            "udp" => Ok(TransportProtocol::Udp),
            _ => Err(Error::UnsupportedTransport(s.to_string())),
        }
    }
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportProtocol::Tcp => f.write_str("tcp"),
            TransportProtocol::Udp => f.write_str("udp"),
        }
    }
}

/// 一次转换所需的全部配置值
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    pub client_ip: Ipv4Addr,
    pub client_port: u16,
    pub server_ip: Ipv4Addr,
    pub server_port: u16,
    pub protocol: TransportProtocol,
}

impl SessionConfig {
    pub fn new(client_port: u16, protocol: TransportProtocol) -> Self {
        Self {
            client_ip: DEFAULT_CLIENT_IP,
            client_port,
            server_ip: DEFAULT_SERVER_IP,
            server_port: DEFAULT_SERVER_PORT,
            protocol,
        }
    }

    /// 两端地址端口完全相同的会话无法区分方向。
    pub fn validate(&self) -> Result<(), Error> {
        if self.client_ip == self.server_ip && self.client_port == self.server_port {
            return Err(Error::InvalidConfig(format!(
                "client and server endpoints are identical ({}:{})",
                self.client_ip, self.client_port
            )));
        }
        Ok(())
    }
}
