use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "l7pcap-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

const HTTP_EXCHANGE: &str = r#"
char peer0_0[] = { /* Packet 4 */
0x47, 0x45, 0x54, 0x20, 0x2f, 0x20, 0x48, 0x54,
0x54, 0x50, 0x2f, 0x31, 0x2e, 0x31, 0x0d, 0x0a };
char peer1_0[] = { /* Packet 6 */
0x48, 0x54, 0x54, 0x50, 0x2f, 0x31, 0x2e, 0x31 };
"#;

#[test]
fn tcp_conversion_writes_pcap_and_frame_report() {
    let dir = unique_temp_dir("tcp");
    let input = write_file(&dir, "input.txt", HTTP_EXCHANGE);
    let pcap = dir.join("out.pcap");
    let report = dir.join("frames.json");

    let output = Command::new(env!("CARGO_BIN_EXE_l7pcap"))
        .args([
            "-f",
            input.to_str().unwrap(),
            "-o",
            pcap.to_str().unwrap(),
            "--source-port",
            "50123",
            "--seed",
            "11",
            "--start-secs",
            "1700000000",
            "--frames-json",
            report.to_str().unwrap(),
        ])
        .output()
        .expect("run l7pcap");
    assert!(
        output.status.success(),
        "l7pcap failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let bytes = fs::read(&pcap).expect("read pcap");
    assert_eq!(&bytes[..4], &0xa1b2_c3d4u32.to_le_bytes());

    let v: Value = serde_json::from_str(&fs::read_to_string(&report).expect("read report"))
        .expect("parse report");
    let frames = v["frames"].as_array().expect("frames array");
    // 3 握手 + 2 数据 + 4 挥手
    assert_eq!(frames.len(), 9);
    assert_eq!(v["config"]["client_port"], 50123);
    assert_eq!(v["config"]["server_port"], 443);
    assert_eq!(frames[3]["payload_len"], 16);
    assert_eq!(frames[4]["direction"], "server_to_client");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn same_seed_and_start_produce_identical_files() {
    let dir = unique_temp_dir("seed");
    let input = write_file(&dir, "input.txt", HTTP_EXCHANGE);
    let mut outputs = Vec::new();
    for name in ["a.pcap", "b.pcap"] {
        let pcap = dir.join(name);
        let status = Command::new(env!("CARGO_BIN_EXE_l7pcap"))
            .args([
                "-f",
                input.to_str().unwrap(),
                "-o",
                pcap.to_str().unwrap(),
                "-p",
                "udp",
                "--seed",
                "5",
                "--start-secs",
                "1",
            ])
            .status()
            .expect("run l7pcap");
        assert!(status.success());
        outputs.push(fs::read(&pcap).expect("read pcap"));
    }
    assert_eq!(outputs[0], outputs[1]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_input_fails_without_writing_output() {
    let dir = unique_temp_dir("bad");
    let input = write_file(&dir, "input.txt", "char peer0_0[] = { 0x41, 0x4 };");
    let pcap = dir.join("out.pcap");

    let output = Command::new(env!("CARGO_BIN_EXE_l7pcap"))
        .args(["-f", input.to_str().unwrap(), "-o", pcap.to_str().unwrap()])
        .output()
        .expect("run l7pcap");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("odd length"));
    assert!(!pcap.exists(), "no pcap should be written on error");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn failed_frame_report_leaves_no_pcap() {
    let dir = unique_temp_dir("report");
    let input = write_file(&dir, "input.txt", HTTP_EXCHANGE);
    let pcap = dir.join("out.pcap");
    let report = dir.join("missing").join("frames.json");

    let output = Command::new(env!("CARGO_BIN_EXE_l7pcap"))
        .args([
            "-f",
            input.to_str().unwrap(),
            "-o",
            pcap.to_str().unwrap(),
            "--frames-json",
            report.to_str().unwrap(),
        ])
        .output()
        .expect("run l7pcap");
    assert!(!output.status.success());
    assert!(!pcap.exists(), "no pcap should be written when the report fails");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unsupported_protocol_is_rejected() {
    let dir = unique_temp_dir("proto");
    let input = write_file(&dir, "input.txt", HTTP_EXCHANGE);
    let pcap = dir.join("out.pcap");

    let output = Command::new(env!("CARGO_BIN_EXE_l7pcap"))
        .args([
            "-f",
            input.to_str().unwrap(),
            "-o",
            pcap.to_str().unwrap(),
            "-p",
            "sctp",
        ])
        .output()
        .expect("run l7pcap");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("must be tcp or udp"));
    assert!(!pcap.exists());

    let _ = fs::remove_dir_all(&dir);
}
