/// End-to-end tests for turning flags, config files and prompt answers into
/// a `RunConfig`, then running it.
use booklister_cli::prompt::{Prompter, BASE_PROMPT, RANDOM_PROMPT, ROOTS_PROMPT};
use booklister_cli::{build_config, Cli};
use booklister_core::{run, FileErrorPolicy, NamingPolicy};
use clap::Parser;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["booklister"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

/// With no flags everything comes from the prompts, in order.
#[test]
fn prompts_supply_roots_and_base() {
    let mut p = prompter("/a | /b\nmaybe\nNO\nmylist.csv\n");
    let config = build_config(&cli(&[]), &mut p).unwrap();

    assert_eq!(config.roots, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    assert_eq!(config.naming, NamingPolicy::FixedBase("mylist.csv".into()));
    assert_eq!(config.on_file_error, FileErrorPolicy::Skip);

    let transcript = String::from_utf8(p.into_output()).unwrap();
    let roots_at = transcript.find(ROOTS_PROMPT).unwrap();
    let random_at = transcript.find(RANDOM_PROMPT).unwrap();
    let base_at = transcript.find(BASE_PROMPT).unwrap();
    assert!(roots_at < random_at && random_at < base_at);
    assert_eq!(transcript.matches(RANDOM_PROMPT).count(), 2);
}

/// Flags that cover roots and naming mean no prompt is shown at all.
#[test]
fn flags_skip_prompts() {
    let mut p = prompter("");
    let config = build_config(
        &cli(&["--paths", "/a|/b", "--random", "--strict", "-o", "out"]),
        &mut p,
    )
    .unwrap();

    assert_eq!(config.roots.len(), 2);
    assert_eq!(config.naming, NamingPolicy::Random);
    assert_eq!(config.on_file_error, FileErrorPolicy::Abort);
    assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    assert!(p.into_output().is_empty());
}

/// Roots given as flags still leave the naming question to the prompt.
#[test]
fn naming_prompted_when_only_roots_given() {
    let mut p = prompter("yes\n");
    let config = build_config(&cli(&["/books"]), &mut p).unwrap();
    assert_eq!(config.naming, NamingPolicy::Random);
    let transcript = String::from_utf8(p.into_output()).unwrap();
    assert_eq!(transcript, RANDOM_PROMPT);
}

/// A config file supplies naming; flags override its roots.
#[test]
fn config_file_with_flag_overrides() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("run.json");
    fs::write(
        &path,
        r#"{"roots": ["/from-file"], "naming": {"fixed_base": "lib"}, "output_dir": "reports"}"#,
    )
    .unwrap();
    let path_arg = path.to_string_lossy().into_owned();

    let mut p = prompter("");
    let config = build_config(&cli(&["--config", path_arg.as_str(), "/from-flag"]), &mut p).unwrap();

    assert_eq!(config.roots, vec![PathBuf::from("/from-flag")]);
    assert_eq!(config.naming, NamingPolicy::FixedBase("lib".into()));
    assert_eq!(config.output_dir, Some(PathBuf::from("reports")));
}

#[test]
fn unreadable_config_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.json");
    let missing_arg = missing.to_string_lossy().into_owned();
    let mut p = prompter("");
    assert!(build_config(&cli(&["--config", missing_arg.as_str()]), &mut p).is_err());
}

/// An empty `--base` is rejected by validation rather than producing `_0.csv`.
#[test]
fn empty_base_flag_is_rejected() {
    let mut p = prompter("");
    assert!(build_config(&cli(&["/a", "--base", ".csv"]), &mut p).is_err());
}

/// Prompted config runs end to end: two roots, fixed base, indexed names.
#[test]
fn prompted_run_writes_indexed_reports() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    for name in ["A", "B"] {
        let dir = src.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("book.epub"), b"epub").unwrap();
    }
    let line = format!(
        "{}|{}\nno\nmylist\n",
        src.path().join("A").display(),
        src.path().join("B").display()
    );
    let out_arg = out.path().to_string_lossy().into_owned();

    let mut p = prompter(&line);
    let config = build_config(&cli(&["--output-dir", out_arg.as_str()]), &mut p).unwrap();
    let summary = run(&config, &mut |_| {});

    assert_eq!(summary.exported_count(), 2);
    assert!(out.path().join("mylist_0.csv").is_file());
    assert!(out.path().join("mylist_1.csv").is_file());
}
