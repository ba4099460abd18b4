//! Tests for url and fetch subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use regexport_core::ExportField;

#[test]
fn cli_parse_url_defaults() {
    match parse(&["regexport", "url", "/fest/export/excel"]) {
        CliCommand::Url { request } => {
            assert_eq!(request.path, "/fest/export/excel");
            assert!(request.origin.is_none());
            assert!(request.selection.checks.is_empty());
            assert!(request.selection.snapshot.is_none());
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_url_checks() {
    match parse(&[
        "regexport",
        "url",
        "/export",
        "--check",
        "email",
        "--check",
        "shirt",
        "--origin",
        "https://helfer.example.org",
    ]) {
        CliCommand::Url { request } => {
            assert_eq!(request.selection.checks, [ExportField::Email, ExportField::Shirt]);
            assert_eq!(request.origin.as_deref(), Some("https://helfer.example.org"));
        }
        _ => panic!("expected Url with checks"),
    }
}

#[test]
fn cli_parse_url_unknown_field() {
    assert!(Cli::try_parse_from(["regexport", "url", "/export", "--check", "age"]).is_err());
}

#[test]
fn cli_parse_check_conflicts_with_snapshot() {
    assert!(Cli::try_parse_from([
        "regexport",
        "url",
        "/export",
        "--check",
        "name",
        "--snapshot",
        "page.json",
    ])
    .is_err());
}

#[test]
fn cli_parse_fetch_output_dir() {
    match parse(&[
        "regexport",
        "fetch",
        "/export",
        "--snapshot",
        "page.json",
        "--output-dir",
        "/tmp/exports",
    ]) {
        CliCommand::Fetch {
            request,
            output_dir,
            session_cookie,
        } => {
            assert!(session_cookie.is_none());
            assert_eq!(
                request.selection.snapshot.as_deref(),
                Some(std::path::Path::new("page.json"))
            );
            assert_eq!(
                output_dir.as_deref(),
                Some(std::path::Path::new("/tmp/exports"))
            );
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_session_cookie() {
    match parse(&[
        "regexport",
        "fetch",
        "/export",
        "--session-cookie",
        "sessionid=abc123",
    ]) {
        CliCommand::Fetch { session_cookie, .. } => {
            assert_eq!(session_cookie.as_deref(), Some("sessionid=abc123"));
        }
        _ => panic!("expected Fetch with --session-cookie"),
    }
}
