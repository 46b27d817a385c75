//! 会话合成模块
//!
//! 端点、计数器、TCP 状态机与 UDP 路径，以及唯一入口 [`synthesize`]。

mod counters;
mod endpoint;
mod synthesize;
mod tcp;
mod udp;

pub use counters::{DirectionCounters, SessionCounters};
pub use endpoint::{Endpoint, EndpointPair};
pub use synthesize::{Session, synthesize};
pub use tcp::{HANDSHAKE_FRAMES, TcpMachine, TcpState};
pub use udp::build_udp;
