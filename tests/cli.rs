use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const URLS: &str = "\
https://example.com/users/?id=5&name=bob
https://example.com/users/?id=7
https://example.com/admin/?token=abc%2Dxyz
";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_w-extract"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run w-extract")
}

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("urls.txt"), URLS).unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_path_segments_by_default() {
    let dir = setup();
    assert_eq!(stdout(&run(dir.path(), &["urls.txt"])), "admin\nexample\nusers\n");
}

#[test]
fn test_parameter_names() {
    let dir = setup();
    assert_eq!(stdout(&run(dir.path(), &["urls.txt", "-p"])), "id\nname\ntoken\n");
}

#[test]
fn test_parameter_values_with_decoding() {
    let dir = setup();

    assert_eq!(stdout(&run(dir.path(), &["urls.txt", "-v"])), "5\n7\nabc\nbob\n");
    assert_eq!(
        stdout(&run(dir.path(), &["urls.txt", "-v", "-u"])),
        "5\n7\nabc-xyz\nbob\n"
    );
}

#[test]
fn test_parameters_flag_wins_over_all() {
    let dir = setup();
    assert_eq!(
        stdout(&run(dir.path(), &["urls.txt", "-A", "-p"])),
        stdout(&run(dir.path(), &["urls.txt", "-p"]))
    );
}

#[test]
fn test_count_to_outfile() {
    let dir = setup();
    let output = run(dir.path(), &["urls.txt", "-c", "-o", "counts.txt", "--quiet"]);

    assert_eq!(stdout(&output), "");
    assert_eq!(
        fs::read_to_string(dir.path().join("counts.txt")).unwrap(),
        "3 example\n2 users\n1 admin\n"
    );
}

#[test]
fn test_empty_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();

    assert_eq!(stdout(&run(dir.path(), &["empty.txt", "-A"])), "");
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["missing.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}

#[test]
fn test_stats_go_to_stderr() {
    let dir = setup();
    let output = run(dir.path(), &["urls.txt", "--stats"]);

    assert_eq!(stdout(&output), "admin\nexample\nusers\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("EXTRACTION COMPLETE"));
}

#[test]
fn test_utf16_input_fails() {
    let dir = TempDir::new().unwrap();
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "/a/".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(dir.path().join("u16.txt"), bytes).unwrap();

    let output = run(dir.path(), &["u16.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_decoded_space_is_not_part_of_segment() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("urls.txt"), "/a%20b/").unwrap();

    assert_eq!(stdout(&run(dir.path(), &["urls.txt"])), "a\n");
    assert_eq!(stdout(&run(dir.path(), &["urls.txt", "-u"])), "a\n");
}
