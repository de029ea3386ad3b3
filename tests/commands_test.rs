//! Tests for the CLI run loop with fake I/O boundaries

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use ztctl::cli::commands::run;
use ztctl::cli::Cli;
use ztctl::config::Settings;
use ztctl::domain::{Method, Platform};
use ztctl::infrastructure::di::ServiceContainer;
use ztctl::infrastructure::traits::{FileSystem, HttpTransport};
use ztctl::util::testing::{init_test_setup, MemoryFileSystem, RecordingTransport};

const TOKEN_PATH: &str = "/var/lib/zerotier-one/authtoken.secret";

struct Harness {
    transport: Arc<RecordingTransport>,
    container: ServiceContainer,
}

impl Harness {
    fn new(status: u16, body: &str) -> Self {
        Self::with_fs(
            status,
            body,
            MemoryFileSystem::new().with_file(TOKEN_PATH, "tok123\n"),
        )
    }

    fn with_fs(status: u16, body: &str, fs: MemoryFileSystem) -> Self {
        init_test_setup();
        let transport = Arc::new(RecordingTransport::responding(status, body));
        let http: Arc<dyn HttpTransport> = transport.clone();
        let fs: Arc<dyn FileSystem> = Arc::new(fs);
        let container = ServiceContainer::with_deps(Settings::default(), Platform::Linux, fs, http);
        Self {
            transport,
            container,
        }
    }

    fn run(&self, args: &[&str]) -> Result<String, ztctl::cli::CliError> {
        let cli = Cli::try_parse_from(std::iter::once("ztctl").chain(args.iter().copied()))
            .expect("valid arguments");
        let mut out = Vec::new();
        run(&cli, &self.container, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }
}

#[test]
fn given_network_id_when_running_then_prints_indented_document() {
    let h = Harness::new(200, r#"{"id":"net123","name":"lab"}"#);

    let out = h.run(&["network", "net123"]).unwrap();

    assert_eq!(out, "{\n  \"id\": \"net123\",\n  \"name\": \"lab\"\n}\n");
    let requests = h.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(
        requests[0].url,
        "http://localhost:9993/controller/network/net123"
    );
    assert_eq!(
        requests[0].headers,
        vec![("X-ZT1-AUTH".to_string(), "tok123".to_string())]
    );
}

#[test]
fn given_no_command_when_running_then_requests_status() {
    let h = Harness::new(200, r#"{"online":true}"#);

    h.run(&[]).unwrap();

    assert_eq!(h.transport.requests()[0].url, "http://localhost:9993/status");
}

#[test]
fn given_delete_when_running_then_sends_delete_to_member_path() {
    let h = Harness::new(200, "{}");

    h.run(&["delete", "net123", "memberABC"]).unwrap();

    let request = &h.transport.requests()[0];
    assert_eq!(request.method, Method::Delete);
    assert_eq!(
        request.url,
        "http://localhost:9993/controller/network/net123/member/memberABC"
    );
}

#[test]
fn given_member_shorthand_and_authorize_when_running_then_requests_are_identical() {
    let a = Harness::new(200, "{}");
    let b = Harness::new(200, "{}");

    a.run(&["member", "net123", "memberABC"]).unwrap();
    b.run(&["authorize", "net123", "memberABC"]).unwrap();

    assert_eq!(a.transport.requests(), b.transport.requests());
    assert_eq!(a.transport.requests()[0].method, Method::Post);
}

#[test]
fn given_wrong_argument_count_when_running_then_prints_usage_without_request() {
    let h = Harness::new(200, "{}");

    let out = h.run(&["deauthorize", "net123"]).unwrap();

    assert_eq!(out, "Usage: deauthorize <network_id> <member_id>\n");
    assert!(h.transport.requests().is_empty());
}

#[test]
fn given_unknown_command_when_running_then_prints_commands_and_help() {
    let h = Harness::new(200, "{}");

    let out = h.run(&["join", "net123"]).unwrap();

    assert!(out.starts_with("Unknown command: join\n"), "{out}");
    assert!(out.contains(
        "Available commands: status, network, member, authorize, deauthorize, delete"
    ));
    assert!(out.contains("--authtoken_path"), "full help expected: {out}");
    assert!(out.contains("deauthorize"), "{out}");
    assert!(h.transport.requests().is_empty());
}

#[test]
fn given_missing_token_file_when_running_then_fails_before_any_request() {
    let h = Harness::with_fs(200, "{}", MemoryFileSystem::new());

    let err = h.run(&["status"]).unwrap_err();

    assert_eq!(err.exit_code(), ztctl::exitcode::NOINPUT);
    assert!(h.transport.requests().is_empty());
}

#[test]
fn given_explicit_token_when_running_then_token_file_is_not_needed() {
    let h = Harness::with_fs(200, "{}", MemoryFileSystem::new());

    h.run(&["--authtoken", "flagtoken", "network"]).unwrap();

    assert_eq!(
        h.transport.requests()[0].headers,
        vec![("X-ZT1-AUTH".to_string(), "flagtoken".to_string())]
    );
}

#[test]
fn given_authtoken_path_flag_when_running_then_reads_that_file() {
    let fs = MemoryFileSystem::new().with_file(PathBuf::from("/tmp/other.secret"), "othertoken");
    let h = Harness::with_fs(200, "{}", fs);

    h.run(&["--authtoken_path", "/tmp/other.secret", "status"])
        .unwrap();

    assert_eq!(h.transport.requests()[0].headers[0].1, "othertoken");
}

#[test]
fn given_server_error_when_running_then_error_maps_to_unavailable() {
    let h = Harness::new(500, "{}");

    let err = h.run(&["network"]).unwrap_err();

    assert_eq!(err.exit_code(), ztctl::exitcode::UNAVAILABLE);
}

#[test]
fn given_large_integers_in_document_when_running_then_printed_verbatim() {
    let h = Harness::new(200, r#"{"id":18446744073709551616,"n":-9223372036854775809}"#);

    let out = h.run(&["status"]).unwrap();

    assert_eq!(
        out,
        "{\n  \"id\": 18446744073709551616,\n  \"n\": -9223372036854775809\n}\n"
    );
}

#[test]
fn given_padded_explicit_token_when_running_then_header_carries_it_unchanged() {
    let h = Harness::with_fs(200, "{}", MemoryFileSystem::new());

    h.run(&["--authtoken", " flagtoken ", "status"]).unwrap();

    assert_eq!(h.transport.requests()[0].headers[0].1, " flagtoken ");
}
