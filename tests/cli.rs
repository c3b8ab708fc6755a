use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

fn gof(args: &[&str]) -> Output {
    gof_in(Path::new(env!("CARGO_MANIFEST_DIR")), args)
}

fn gof_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gof-patterns"))
        .current_dir(dir)
        .args(args)
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch binary")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn list_shows_every_pattern() {
    let output = gof(&["list"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 23);
}

#[test]
fn list_json_filters_by_category() {
    let output = gof(&["list", "--json", "--category", "creational"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["abstract-factory", "builder", "factory-method", "prototype", "singleton"]
    );
}

#[test]
fn describe_prints_participants() {
    let output = gof(&["describe", "Template Method"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("template-method (behavioral)"));
    assert!(text.contains("CsvMiner, JsonMiner"));
}

#[test]
fn run_named_patterns_in_order() {
    let output = gof(&["run", "bridge", "memento"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let bridge = text.find("=== Bridge ===").unwrap();
    let memento = text.find("=== Memento ===").unwrap();
    assert!(bridge < memento);
}

#[test]
fn unknown_pattern_fails_without_output() {
    let output = gof(&["run", "facade", "singelton"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    assert!(stderr(&output).contains("did you mean 'singleton'?"));
}

#[test]
fn run_all_respects_config_file() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "only = [\"adapter\", \"visitor\"]").unwrap();
    let path = config.path().to_str().unwrap().to_string();

    let output = gof(&["--config", &path, "run", "--all"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.matches("=== ").count(), 2);
    assert!(text.contains("=== Adapter ==="));
    assert!(text.contains("=== Visitor ==="));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let output = gof(&["--config", "does-not-exist.toml", "list"]);
    assert!(!output.status.success());
}

#[test]
fn expected_denial_stays_off_stderr() {
    let output = gof(&["run", "proxy"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("access denied"));
    assert!(stderr(&output).is_empty(), "stderr: {}", stderr(&output));
}

#[test]
fn verbose_logs_are_plain_without_color() {
    let dir = tempfile::tempdir().unwrap();
    let output = gof_in(dir.path(), &["-v", "run", "proxy"]);
    assert!(output.status.success());

    let log = stderr(&output);
    assert!(log.contains("no config file, using defaults"));
    assert!(log.contains("access denied"));
    assert!(!log.contains('\x1b'), "stderr has escape codes: {log:?}");
}
