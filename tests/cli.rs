use std::env;
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

struct Scratch(PathBuf);

impl Deref for Scratch {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn scratch(name: &str) -> Scratch {
    let dir = env::temp_dir().join(format!("brightness-cli-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    Scratch(dir)
}

fn device(name: &str, max: &str, current: &str) -> Scratch {
    let dir = scratch(name);
    fs::write(dir.join("max_brightness"), max).unwrap();
    fs::write(dir.join("brightness"), current).unwrap();
    dir
}

fn run(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("config.json");
    fs::write(&config, "{}").unwrap();
    Command::new(env!("CARGO_BIN_EXE_brightness"))
        .arg("--device")
        .arg(dir)
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn brightness(dir: &Path) -> String {
    fs::read_to_string(dir.join("brightness")).unwrap()
}

#[test]
fn query() {
    let dir = device("query", "1000\n", "600\n");
    let out = run(&dir, &["-q"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "60\n");
    assert_eq!(brightness(&dir), "600\n");
}

#[test]
fn absolute() {
    let dir = device("absolute", "1000\n", "600\n");
    let out = run(&dir, &["-a", "75"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(brightness(&dir), "750\n");
}

#[test]
fn absolute_over_max() {
    let dir = device("over", "1000\n", "600\n");
    let out = run(&dir, &["-a", "150", "-q"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "100\n");
    assert_eq!(brightness(&dir), "1000\n");
}

#[test]
fn relative_clamps_to_floor() {
    let dir = device("floor", "1000\n", "600\n");
    let out = run(&dir, &["-r", "-80", "-q"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "50\n");
    assert_eq!(brightness(&dir), "500\n");
}

#[test]
fn relative_with_custom_floor() {
    let dir = device("minflag", "1000\n", "600\n");
    let out = run(&dir, &["-r", "-80", "--min", "10"]);
    assert!(out.status.success());
    assert_eq!(brightness(&dir), "100\n");
}

#[test]
fn relative_increase() {
    let dir = device("increase", "1000\n", "600\n");
    let out = run(&dir, &["-r", "10"]);
    assert!(out.status.success());
    assert_eq!(brightness(&dir), "700\n");
}

#[test]
fn query_only_below_floor() {
    let dir = device("below", "1000\n", "100\n");
    let out = run(&dir, &["-q"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "50\n");
    assert_eq!(brightness(&dir), "100\n");
}

#[test]
fn writes_round_to_device_units() {
    let dir = device("round", "255\n", "200\n");
    let out = run(&dir, &["-a", "75", "-q"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "75\n");
    assert_eq!(brightness(&dir), "191\n");

    let out = run(&dir, &["-a", "87.5"]);
    assert!(out.status.success());
    // 223.125
    assert_eq!(brightness(&dir), "223\n");
}

#[test]
fn repeated_operation_is_rejected() {
    let dir = device("repeat", "1000\n", "600\n");
    let out = run(&dir, &["-r", "5", "-r", "5"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(brightness(&dir), "600\n");
}

#[test]
fn floor_out_of_range() {
    let dir = device("badmin", "1000\n", "600\n");
    let out = run(&dir, &["-a", "10", "--min", "120"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("--min"));
    assert_eq!(brightness(&dir), "600\n");
}

#[test]
fn malformed_device_file() {
    let dir = device("malformed-cur", "1000\n", "abc\n");
    let out = run(&dir, &["-a", "60"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("abc"));
    assert_eq!(brightness(&dir), "abc\n");

    let dir = device("malformed-max", "abc\n", "600\n");
    let out = run(&dir, &["-a", "60"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(brightness(&dir), "600\n");
}

#[test]
fn zero_max() {
    let dir = device("zero", "0\n", "0\n");
    let out = run(&dir, &["-q"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn no_flags() {
    let dir = device("noflags", "1000\n", "600\n");
    let out = run(&dir, &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
    assert_eq!(brightness(&dir), "600\n");
}

#[test]
fn usage_errors() {
    let dir = device("usage", "1000\n", "600\n");
    for args in &[&["-x"][..], &["-q", "extra"][..], &["-a", "10", "-r", "10"][..], &["-h"][..]] {
        let out = run(&dir, args);
        assert_eq!(out.status.code(), Some(1), "{:?}", args);
        assert!(out.stdout.is_empty());
    }
    assert_eq!(brightness(&dir), "600\n");
}

#[test]
fn invalid_percentage() {
    let dir = device("badpct", "1000\n", "600\n");
    let out = run(&dir, &["-a", "bright"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("'bright'"));
    assert!(stderr.contains("-a"));
    assert_eq!(brightness(&dir), "600\n");
}

#[test]
fn missing_device() {
    let dir = scratch("missing");
    let out = run(&dir, &["-q"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("max_brightness"));
}
