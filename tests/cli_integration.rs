//! CLI integration tests
//!
//! Tests the server binary's command line surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("college-config-server").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("college-config-server").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--data-file"));
}

#[test]
fn test_invalid_port_value_fails() {
    let mut cmd = Command::cargo_bin("college-config-server").unwrap();
    cmd.args(["--port", "not-a-port"]);

    cmd.assert().failure();
}

/// Pick a port that is currently free on the loopback interface
fn free_local_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Wait until something is accepting connections on `port`
fn wait_for_listener(port: u16, timeout: std::time::Duration) -> bool {
    let deadline = std::time::Instant::now() + timeout;
    while std::time::Instant::now() < deadline {
        if std::net::TcpStream::connect(("127.0.0.1", port)).is_ok() {
            return true;
        }
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
    false
}

#[test]
fn test_env_port_honored_without_port_flag() {
    let dir = tempfile::TempDir::new().unwrap();
    let port = free_local_port();

    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin(
        "college-config-server",
    ))
    .env("CONFIG_SERVER_HOST", "127.0.0.1")
    .env("CONFIG_SERVER_PORT", port.to_string())
    .env(
        "CONFIG_STORE_PATH",
        dir.path().join("college_config.json"),
    )
    .stdout(std::process::Stdio::null())
    .stderr(std::process::Stdio::null())
    .spawn()
    .unwrap();

    let listening = wait_for_listener(port, std::time::Duration::from_secs(10));
    child.kill().ok();
    child.wait().ok();

    assert!(listening, "server did not listen on CONFIG_SERVER_PORT");
}

#[test]
fn test_port_flag_wins_over_env() {
    let dir = tempfile::TempDir::new().unwrap();
    // Hold both listeners at once so the two ports are distinct
    let env_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let cli_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let env_port = env_listener.local_addr().unwrap().port();
    let cli_port = cli_listener.local_addr().unwrap().port();
    drop(env_listener);
    drop(cli_listener);

    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin(
        "college-config-server",
    ))
    .args(["--host", "127.0.0.1", "--port", &cli_port.to_string()])
    .env("CONFIG_SERVER_PORT", env_port.to_string())
    .env(
        "CONFIG_STORE_PATH",
        dir.path().join("college_config.json"),
    )
    .stdout(std::process::Stdio::null())
    .stderr(std::process::Stdio::null())
    .spawn()
    .unwrap();

    let listening = wait_for_listener(cli_port, std::time::Duration::from_secs(10));
    let env_port_listening = std::net::TcpStream::connect(("127.0.0.1", env_port)).is_ok();
    child.kill().ok();
    child.wait().ok();

    assert!(listening, "server did not listen on the --port value");
    assert!(!env_port_listening, "server listened on the env port despite --port");
}
