//! pcap 序列化
//!
//! 传统 pcap 格式（微秒精度，小端），链路类型 Ethernet。

use std::fs;
use std::io::Write;
use std::path::Path;

use pcap_parser::{LegacyPcapBlock, Linktype, PcapHeader, ToVec};
use tracing::info;

use crate::error::{Error, Result};
use crate::net::Frame;

pub const DEFAULT_SNAPLEN: u32 = 65535;

/// Receives a fully built, timestamped frame sequence.
pub trait CaptureSink {
    fn write_frames(&mut self, frames: &[Frame]) -> Result<()>;
}

/// 把帧编码为 pcap 并写入任意 `Write`
pub struct PcapWriter<W: Write> {
    out: W,
    snaplen: u32,
}

impl<W: Write> PcapWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            snaplen: DEFAULT_SNAPLEN,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CaptureSink for PcapWriter<W> {
    fn write_frames(&mut self, frames: &[Frame]) -> Result<()> {
        // 先完整编码，编码失败时不写出任何字节
        let bytes = encode_pcap(frames, self.snaplen)?;
        self.out.write_all(&bytes)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encodes the global header followed by one record per frame.
pub fn encode_pcap(frames: &[Frame], snaplen: u32) -> Result<Vec<u8>> {
    let mut header = PcapHeader::new();
    header.snaplen = snaplen;
    header.network = Linktype::ETHERNET;

    let mut out = header
        .to_vec()
        .map_err(|e| Error::Serialize(format!("pcap header: {e:?}")))?;

    for (index, frame) in frames.iter().enumerate() {
        let data = frame.to_bytes();
        let (ts_sec, ts_usec) = frame.timestamp.to_pcap_parts();
        let origlen = data.len() as u32;
        let caplen = origlen.min(snaplen);
        let mut block = LegacyPcapBlock {
            ts_sec,
            ts_usec,
            caplen,
            origlen,
            data: &data[..caplen as usize],
        };
        let record = block
            .to_vec()
            .map_err(|e| Error::Serialize(format!("frame #{index}: {e:?}")))?;
        out.extend_from_slice(&record);
    }
    Ok(out)
}

/// Writes `frames` to `path` as a pcap file, replacing any existing file.
pub fn write_pcap_file(path: impl AsRef<Path>, frames: &[Frame]) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_pcap(frames, DEFAULT_SNAPLEN)?;
    fs::write(path, &bytes)?;
    info!(path = %path.display(), frames = frames.len(), bytes = bytes.len(), "pcap written");
    Ok(())
}
