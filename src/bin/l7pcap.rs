//! C 数组载荷 -> pcap
//!
//! 读取抓包软件导出的 C 数组文本，合成一个完整的 TCP/UDP 会话并写成 pcap 文件。

use clap::Parser;
use l7pcap_rs::capture::{CaptureReport, CaptureTime, write_pcap_file};
use l7pcap_rs::config::{
    CLIENT_PORT_RANGE, DEFAULT_CLIENT_IP, DEFAULT_SERVER_IP, DEFAULT_SERVER_PORT, SessionConfig,
    TransportProtocol,
};
use l7pcap_rs::{Result, synthesize};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "l7pcap",
    about = "Build a pcap with a complete TCP/UDP session from an L7 payload C array"
)]
struct Args {
    /// 客户端 IP
    #[arg(short = 's', long, default_value_t = DEFAULT_CLIENT_IP)]
    source_ip: Ipv4Addr,

    /// 客户端端口；默认在 40000..=64000 内随机
    #[arg(long)]
    source_port: Option<u16>,

    /// 服务端 IP
    #[arg(short = 'd', long, default_value_t = DEFAULT_SERVER_IP)]
    destination_ip: Ipv4Addr,

    /// 服务端端口
    #[arg(long, default_value_t = DEFAULT_SERVER_PORT)]
    destination_port: u16,

    /// C 数组输入文件
    #[arg(short = 'f', long, default_value = "pmk-input.txt")]
    input: PathBuf,

    /// 输出 pcap 文件
    #[arg(short = 'o', long, default_value = "pmk-output.pcap")]
    output: PathBuf,

    /// 传输层协议：tcp 或 udp
    #[arg(short = 'p', long, default_value = "tcp")]
    protocol: String,

    /// 额外输出逐帧 JSON 报告
    #[arg(long)]
    frames_json: Option<PathBuf>,

    /// 随机源种子（端口、IP ID、初始序列号可复现）
    #[arg(long)]
    seed: Option<u64>,

    /// 第一帧时间戳（Unix 秒）；默认当前时间
    #[arg(long)]
    start_secs: Option<u64>,
}

fn run(args: Args) -> Result<()> {
    let protocol: TransportProtocol = args.protocol.parse()?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = SessionConfig {
        client_ip: args.source_ip,
        client_port: args
            .source_port
            .unwrap_or_else(|| rng.random_range(CLIENT_PORT_RANGE)),
        server_ip: args.destination_ip,
        server_port: args.destination_port,
        protocol,
    };
    info!(
        client = %format!("{}:{}", config.client_ip, config.client_port),
        server = %format!("{}:{}", config.server_ip, config.server_port),
        %protocol,
        input = %args.input.display(),
        "building session"
    );

    let text = fs::read_to_string(&args.input)?;
    let start = args
        .start_secs
        .map(CaptureTime::from_secs)
        .unwrap_or_else(CaptureTime::now);
    let frames = synthesize(&config, &text, start, &mut rng)?;

    // 报告先于 pcap 落盘：任一步失败都不留下 pcap
    if let Some(path) = &args.frames_json {
        let report = CaptureReport::new(&config, &frames);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| l7pcap_rs::Error::Serialize(e.to_string()))?;
        fs::write(path, json)?;
        eprintln!("wrote frame report to {}", path.display());
    }

    write_pcap_file(&args.output, &frames)?;

    println!(
        "pcap file {} has been created ({} frames)",
        args.output.display(),
        frames.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "conversion failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
