use std::fs;
use std::process::Command;

fn lzwtext() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lzwtext"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn compress_then_decompress_restores_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let text = "TOBEORNOTTOBEORTOBEORNOT#\nこんにちは こんにちは\n".repeat(20);
    let input    = dir.path().join("input.txt");
    let archive  = dir.path().join("input.lzw");
    let restored = dir.path().join("restored.txt");
    fs::write(&input, &text).expect("write input");

    let out = lzwtext().arg("compress").arg(&input).arg(&archive).output().expect("run compress");
    assert!(out.status.success(), "compress failed: {}", String::from_utf8_lossy(&out.stderr));
    let archive_len = fs::metadata(&archive).expect("archive").len();
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains(&format!("Done. {} bytes → {} bytes", text.len(), archive_len)),
        "unexpected stdout: {}", stdout
    );

    let out = lzwtext().arg("decompress").arg(&archive).arg(&restored).output().expect("run decompress");
    assert!(out.status.success(), "decompress failed: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Done."));
    assert_eq!(fs::read_to_string(&restored).expect("restored"), text);
}

#[test]
fn explicit_scheme_flag_is_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input   = dir.path().join("input.txt");
    let archive = dir.path().join("input.lzw");
    fs::write(&input, "abababab").expect("write input");

    let out = lzwtext()
        .args(["compress", "--scheme", "lzw"])
        .arg(&input)
        .arg(&archive)
        .output()
        .expect("run compress");
    assert!(out.status.success());
    assert_eq!(lzwtext::unpack_archive(&fs::read(&archive).unwrap()).unwrap(), "abababab");
}

#[test]
fn undecodable_archive_fails_with_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let archive = dir.path().join("bad.lzw");
    let output  = dir.path().join("out.txt");
    // Valid header, but the stream starts with an unassigned dictionary code.
    fs::write(&archive, [1u8, 0, 0, 0, 1, 0x12, 0x34]).expect("write archive");

    let out = lzwtext().arg("decompress").arg(&archive).arg(&output).output().expect("run decompress");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Failed to decompress"), "unexpected stderr: {}", stderr);
    assert!(stderr.contains("Unknown dictionary code"), "unexpected stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn missing_input_fails_with_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.txt");

    let out = lzwtext()
        .arg("compress")
        .arg(&missing)
        .arg(dir.path().join("out.lzw"))
        .output()
        .expect("run compress");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to read"));
}
