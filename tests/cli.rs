use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const APP_PATH: &str = env!("CARGO_BIN_EXE_svgnorm");

const ICON: &str = r#"<svg viewBox="0 0 48 48"><path d="M12 12L36 36"/></svg>"#;

fn run(args: &[&str]) -> Output {
    Command::new(APP_PATH).args(args).output().unwrap()
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    let dir = dir.to_str().unwrap();
    let mut full = vec!["--dir", dir];
    full.extend_from_slice(args);
    run(&full)
}

fn write_file(dir: &Path, name: &str, text: &str) {
    std::fs::write(dir.join(name), text).unwrap();
}

fn read_file(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn normalize_directory() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.svg", ICON);

    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        read_file(dir.path(), "a.svg"),
        r#"<svg width="24" height="24" viewBox="0 0 24 24"><path d="M6 6L18 18"/></svg>"#
    );

    let stdout = stdout(&out);
    assert!(stdout.contains("to 24×24..."));
    assert!(stdout.contains("Scaled to 24×24: a.svg"));
    assert!(stdout.ends_with("Done normalizing SVGs.\n"));
    assert_eq!(stderr(&out), "");
}

#[test]
fn custom_size() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.svg", ICON);
    write_file(dir.path(), "b.svg", ICON);

    let out = run_in(dir.path(), &["--size", "12"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(read_file(dir.path(), "a.svg").contains(r#"d="M3 3L9 9""#));

    let out = run_in(dir.path(), &["--size=48"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        read_file(dir.path(), "b.svg"),
        r#"<svg width="48" height="48" viewBox="0 0 48 48"><path d="M12 12L36 36"/></svg>"#
    );
    assert!(stdout(&out).contains("Scaled to 48×48: b.svg"));
}

#[test]
fn invalid_size_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.svg", ICON);

    let out = run_in(dir.path(), &["--size", "abc"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(read_file(dir.path(), "a.svg").contains(r#"viewBox="0 0 24 24""#));
    assert_eq!(stderr(&out), "");
}

#[test]
fn unknown_arguments_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.svg", ICON);

    let out = run_in(dir.path(), &["--verbose", "extra", "--size", "12"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(read_file(dir.path(), "a.svg").contains(r#"d="M3 3L9 9""#));
    assert_eq!(stderr(&out), "");
}

#[test]
fn missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("icons");

    let out = run_in(&missing, &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("input folder does not exist"));
    assert!(!missing.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn skipped_file_is_untouched() {
    let dir = TempDir::new().unwrap();
    let text = "<svg>\n  <path d='M0 0L10 10'/>\n</svg>\n";
    write_file(dir.path(), "a.svg", ICON);
    write_file(dir.path(), "b.svg", text);
    write_file(dir.path(), "c.svg", "<svg viewBox='0 0 48 48'>");

    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(read_file(dir.path(), "b.svg"), text);
    assert_eq!(read_file(dir.path(), "c.svg"), "<svg viewBox='0 0 48 48'>");
    assert!(read_file(dir.path(), "a.svg").contains(r#"viewBox="0 0 24 24""#));

    let stderr = stderr(&out);
    assert!(stderr.contains("Warning: Skipping b.svg: couldn't detect original size"));
    assert!(stderr.contains("Warning: Skipping c.svg: not a well-formed XML, "));
}

#[test]
fn only_svg_files_are_processed() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "UPPER.SVG", ICON);
    write_file(dir.path(), "notes.txt", ICON);
    std::fs::create_dir(dir.path().join("nested.svg")).unwrap();
    write_file(&dir.path().join("nested.svg"), "inner.svg", ICON);

    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(0));
    assert!(read_file(dir.path(), "UPPER.SVG").contains(r#"viewBox="0 0 24 24""#));
    assert_eq!(read_file(dir.path(), "notes.txt"), ICON);
    assert_eq!(read_file(&dir.path().join("nested.svg"), "inner.svg"), ICON);
}

#[test]
fn malformed_path_data_aborts() {
    let dir = TempDir::new().unwrap();
    let bad = r#"<svg viewBox="0 0 48 48"><path d="M0 0L5"/></svg>"#;
    write_file(dir.path(), "a.svg", ICON);
    write_file(dir.path(), "b.svg", bad);
    write_file(dir.path(), "c.svg", ICON);

    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Error: failed to process"));

    // Files are processed in name order.
    assert!(read_file(dir.path(), "a.svg").contains(r#"viewBox="0 0 24 24""#));
    assert_eq!(read_file(dir.path(), "b.svg"), bad);
    assert_eq!(read_file(dir.path(), "c.svg"), ICON);
}

#[test]
fn second_run_changes_nothing() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.svg", "<svg viewBox='1 2 30 70'><path d='M1 2c3 4 5 6 7 8a3 5 20 0 1 9 9z'/></svg>");

    run_in(dir.path(), &[]);
    let once = read_file(dir.path(), "a.svg");

    run_in(dir.path(), &[]);
    assert_eq!(read_file(dir.path(), "a.svg"), once);
}
