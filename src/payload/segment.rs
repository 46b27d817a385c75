//! MSS 分段

use tracing::info;

use crate::config::TransportProtocol;

/// Splits a hex digit string into chunks of at most `protocol.mss()` bytes.
///
/// `hex` must hold ASCII hex digits only (the parser validates this first).
/// A string within the limit comes back unchanged as the only element. Chunks
/// are consecutive and non-overlapping; only the last one may be shorter.
pub fn segment_hex(hex: &str, protocol: TransportProtocol) -> Vec<&str> {
    let max_digits = protocol.mss() * 2;
    if hex.len() <= max_digits {
        return vec![hex];
    }

    let mut out = Vec::with_capacity(hex.len().div_ceil(max_digits));
    let mut rest = hex;
    while !rest.is_empty() {
        let (head, tail) = rest.split_at(max_digits.min(rest.len()));
        out.push(head);
        rest = tail;
    }

    info!(
        %protocol,
        payload_bytes = hex.len() / 2,
        mss = protocol.mss(),
        segments = out.len(),
        "payload larger than MSS, split into segments"
    );
    out
}
