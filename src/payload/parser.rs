//! C 数组文本解析
//!
//! 输入格式（抓包软件 "Follow Stream -> C Arrays" 导出）：
//!
//! ```text
//! char peer0_0[] = { /* Packet 4 */
//! 0x16, 0x03, 0x01 };
//! char peer1_0[] = {
//! 0x16, 0x03, 0x03 };
//! ```
//!
//! 每个 `;` 结尾的 token 产生一条或多条（超过 MSS 时）[`PayloadRecord`]。

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use super::direction::Direction;
use super::record::PayloadRecord;
use super::segment::segment_hex;
use crate::config::TransportProtocol;
use crate::error::{Error, FormatIssue, Result};

static DIRECTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"r([01])_").expect("direction marker regex"));
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment regex"));

/// Parses the whole C-array dump into ordered, MSS-sized payload records.
///
/// Any malformed token aborts the parse; no records are returned in that case.
pub fn parse_c_array(text: &str, protocol: TransportProtocol) -> Result<Vec<PayloadRecord>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let mut records = Vec::new();
    let mut tokens = 0usize;
    for (index, token) in compact.split(';').enumerate() {
        if token.is_empty() {
            continue;
        }
        tokens += 1;
        let (direction, digits) = parse_token(index, token)?;
        for segment in segment_hex(&digits, protocol) {
            let payload = hex::decode(segment).map_err(|e| match e {
                hex::FromHexError::InvalidHexCharacter { c, .. } => {
                    Error::format(index, token, FormatIssue::InvalidHex(c))
                }
                _ => Error::format(index, token, FormatIssue::OddLength(segment.len())),
            })?;
            records.push(PayloadRecord::new(direction, payload));
        }
        debug!(index, ?direction, payload_bytes = digits.len() / 2, "parsed token");
    }

    info!(tokens, records = records.len(), %protocol, "parsed C array payload");
    Ok(records)
}

/// 单个 token -> (方向, 十六进制字符串)
fn parse_token(index: usize, token: &str) -> Result<(Direction, String)> {
    let marker = DIRECTION_MARKER
        .captures(token)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok())
        .ok_or_else(|| Error::format(index, token, FormatIssue::MissingDirection))?;

    let stripped = BLOCK_COMMENT.replace_all(token, "");
    if stripped.contains("/*") || stripped.contains("*/") {
        return Err(Error::format(index, token, FormatIssue::UnterminatedComment));
    }

    let body = match (stripped.find('{'), stripped.rfind('}')) {
        (Some(open), Some(close)) if open < close => &stripped[open + 1..close],
        _ => return Err(Error::format(index, token, FormatIssue::MissingBraces)),
    };

    let digits = body.replace("0x", "").replace("0X", "").replace(',', "");
    if digits.len() % 2 != 0 {
        return Err(Error::format(index, token, FormatIssue::OddLength(digits.len())));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Error::format(index, token, FormatIssue::InvalidHex(bad)));
    }

    let direction = Direction::from_peer_marker(marker)
        .ok_or_else(|| Error::format(index, token, FormatIssue::MissingDirection))?;
    Ok((direction, digits))
}
