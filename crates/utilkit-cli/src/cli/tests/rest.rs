//! Tests for hash, unique and completions.

use super::parse;
use crate::cli::CliCommand;
use utilkit_core::config::UtilkitConfig;

#[test]
fn cli_parse_hash() {
    match parse(&["utilkit", "hash", "abc"]) {
        CliCommand::Hash { value, digest } => {
            assert_eq!(value, "abc");
            assert!(!digest);
        }
        _ => panic!("expected Hash"),
    }
}

#[test]
fn cli_parse_hash_digest() {
    match parse(&["utilkit", "hash", "abc", "--digest"]) {
        CliCommand::Hash { value, digest } => {
            assert_eq!(value, "abc");
            assert!(digest);
        }
        _ => panic!("expected Hash with --digest"),
    }
}

#[test]
fn cli_parse_unique() {
    match parse(&["utilkit", "unique", "/tmp", "report.txt"]) {
        CliCommand::Unique { dir, filename } => {
            assert_eq!(dir, std::path::Path::new("/tmp"));
            assert_eq!(filename, "report.txt");
        }
        _ => panic!("expected Unique"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["utilkit", "completions", "zsh"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Zsh),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn unique_respects_config_limit() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = UtilkitConfig {
        max_unique_counter: Some(3),
        ..UtilkitConfig::default()
    };
    let dir_arg = dir.path().to_str().unwrap();
    for _ in 0..2 {
        let mut out = Vec::new();
        parse(&["utilkit", "unique", dir_arg, "a.txt"])
            .run(&cfg, &mut out)
            .unwrap();
    }
    assert!(dir.path().join("a-2.txt").exists());

    let mut out = Vec::new();
    assert!(parse(&["utilkit", "unique", dir_arg, "a.txt"])
        .run(&cfg, &mut out)
        .is_err());
}
