use assert_cmd::prelude::*;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::process::{Command, Stdio};

fn env_probe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("env-probe").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_success_output_and_exit_code() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200);
    });

    env_probe_cmd()
        .args(["--endpoint", &server.url("/")])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::is_match(r"^Executable: \S.*\n").unwrap())
        .stdout(predicate::str::contains(
            "GitHub Status: 200\nSuccess! Request library is working.\n",
        ));

    api_mock.assert();
}

#[test]
fn test_network_failure_still_exits_zero() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let output = env_probe_cmd()
        .args(["--endpoint", &format!("http://127.0.0.1:{}/", port)])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Executable: "));
    assert!(!lines[1].contains("Status:"));
    assert!(!lines[1].contains("Success!"));
}

#[test]
fn test_custom_label() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(204);
    });

    env_probe_cmd()
        .args(["--endpoint", &server.url("/health"), "--label", "Local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Local Status: 204\n"));
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    env_probe_cmd()
        .args(["--endpoint", "ftp://example.com"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported URL scheme"));
}

#[test]
fn test_rust_log_without_verbose_keeps_stderr_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200);
    });

    env_probe_cmd()
        .env("RUST_LOG", "debug")
        .args(["--endpoint", &server.url("/")])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("GitHub Status: 200\n"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200);
    });

    let output = env_probe_cmd()
        .args(["--endpoint", &server.url("/"), "--verbose"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(!output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "GitHub Status: 200");
}

#[test]
fn test_closed_stdout_still_exits_zero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200);
    });

    let mut child = env_probe_cmd()
        .args(["--endpoint", &server.url("/")])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
}
