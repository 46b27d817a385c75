pub mod capture;
pub mod config;
pub mod error;
pub mod net;
pub mod payload;
pub mod session;

pub use config::{SessionConfig, TransportProtocol};
pub use error::{Error, FormatIssue, Result};
pub use session::{Session, synthesize};

#[cfg(test)]
mod test;
