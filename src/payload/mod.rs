//! 载荷解析模块
//!
//! 把抓包软件导出的 C 数组文本转换为有序的 `(方向, 字节载荷)` 记录，并按 MSS 分段。

mod direction;
mod parser;
mod record;
mod segment;

pub use direction::Direction;
pub use parser::parse_c_array;
pub use record::PayloadRecord;
pub use segment::segment_hex;
