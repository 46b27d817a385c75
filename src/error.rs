//! 错误类型
//!
//! 所有错误在检测点即不可恢复：调用方拿到 `Err` 后不应写出任何捕获文件。

use thiserror::Error;

use crate::session::TcpState;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// 报错时保留的 token 前缀长度（字符数）。
const TOKEN_CONTEXT_CHARS: usize = 48;

#[derive(Error, Debug)]
pub enum Error {
    /// 输入 C 数组 token 格式错误
    #[error("format error in token #{index} ({token:?}): {issue}")]
    Format {
        index: usize,
        token: String,
        issue: FormatIssue,
    },

    /// 传输层协议只能是 tcp 或 udp
    #[error("unsupported transport protocol '{0}', must be tcp or udp")]
    UnsupportedTransport(String),

    /// 挥手之前必须先有三次握手
    #[error("cannot tear down TCP session: only {frames} frame(s) built, handshake needs 3")]
    MissingHandshake { frames: usize },

    /// TCP 状态机收到当前状态不允许的操作
    #[error("TCP session in state {state:?} cannot {action}")]
    InvalidState {
        state: TcpState,
        action: &'static str,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// pcap 编码失败
    #[error("capture serialization failed: {0}")]
    Serialize(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 构造格式错误，token 过长时只保留前缀。
    pub(crate) fn format(index: usize, token: &str, issue: FormatIssue) -> Self {
        let token = if token.chars().count() > TOKEN_CONTEXT_CHARS {
            let head: String = token.chars().take(TOKEN_CONTEXT_CHARS).collect();
            format!("{head}...")
        } else {
            token.to_string()
        };
        Error::Format {
            index,
            token,
            issue,
        }
    }
}

/// Why a single C-array token was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    #[error("missing direction marker `r0_` or `r1_`")]
    MissingDirection,
    #[error("missing or unbalanced `{{ ... }}` byte list")]
    MissingBraces,
    #[error("unterminated `/* ... */` comment")]
    UnterminatedComment,
    #[error("hex digit string has odd length {0}")]
    OddLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidHex(char),
}
