//! 时间戳与捕获输出模块
//!
//! 按固定 20ms 间隔赋时间戳，并把完整帧序列交给 pcap 序列化器。

mod report;
mod time;
mod writer;

pub use report::{CaptureReport, FrameSummary};
pub use time::{CaptureTime, FRAME_INTERVAL, assign_timestamps};
pub use writer::{CaptureSink, DEFAULT_SNAPLEN, PcapWriter, encode_pcap, write_pcap_file};
