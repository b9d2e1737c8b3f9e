use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;
use crate::Resolution;

const STARTUP: &str = r#"
[[invocations]]
command = "migrate"
args = ["--all", "--dry-run"]
terminate_on_failure = true

[[invocations]]
command = "serve"
"#;

#[test]
fn parses_entries_with_defaults() {
	let config = StartupConfig::from_toml_str(STARTUP).expect("config should parse");
	assert_eq!(
		config.invocations,
		vec![
			InvocationSpec {
				command: "migrate".into(),
				args: vec!["--all".into(), "--dry-run".into()],
				terminate_on_failure: true,
			},
			InvocationSpec {
				command: "serve".into(),
				args: Vec::new(),
				terminate_on_failure: false,
			},
		]
	);
}

#[test]
fn builds_by_name_invocations_in_order() {
	let invocations = StartupConfig::from_toml_str(STARTUP).unwrap().build().expect("entries should build");
	assert_eq!(invocations.len(), 2);

	assert_eq!(invocations[0].resolution(), &Resolution::ByName("migrate".into()));
	assert_eq!(invocations[0].arguments(), ["--all", "--dry-run"]);
	assert!(invocations[0].should_terminate_on_failure());

	assert_eq!(invocations[1].resolution(), &Resolution::ByName("serve".into()));
	assert!(invocations[1].arguments().is_empty());
	assert!(!invocations[1].should_terminate_on_failure());
}

#[test]
fn empty_source_yields_no_invocations() {
	let config = StartupConfig::from_toml_str("").unwrap();
	assert!(config.build().unwrap().is_empty());
}

#[test]
fn empty_command_name_fails_build() {
	let config = StartupConfig::from_toml_str("[[invocations]]\ncommand = \"\"\n").unwrap();
	assert!(matches!(config.build(), Err(InvocationError::EmptyCommandName)));
}

#[test]
fn rejects_unknown_fields() {
	let err = StartupConfig::from_toml_str("[[invocations]]\ncommand = \"serve\"\nretries = 3\n").unwrap_err();
	assert!(matches!(err, InvocationError::Toml(_)), "got: {err}");
	assert!(err.to_string().contains("retries"), "got: {err}");
	assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn rejects_missing_command() {
	let err = StartupConfig::from_toml_str("[[invocations]]\nargs = [\"x\"]\n").unwrap_err();
	assert!(matches!(err, InvocationError::Toml(_)), "got: {err}");
}

#[test]
fn reads_from_path() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(STARTUP.as_bytes()).unwrap();
	let config = StartupConfig::from_path(file.path()).expect("file should load");
	assert_eq!(config.invocations.len(), 2);
}

#[test]
fn missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("startup.toml");
	let err = StartupConfig::from_path(&path).unwrap_err();
	assert!(matches!(err, InvocationError::Io { path: ref p, .. } if *p == path), "got: {err}");
}
