mod cli_integration {
	// cargo test --package rollbook --test cli -- cli_integration --nocapture

	use std::fs;
	use std::path::{Path, PathBuf};
	use std::process::{Command, Stdio};

	/// Child is a (maybe running) CLI process. It can be killed by dropping it
	struct Child {
		inner: Option<std::process::Child>,
	}

	impl Child {
		/// Read the child's stdout, and its stderr. Returns Ok if the child
		/// returns successfully, Err otherwise.
		fn output(mut self) -> Result<(String, String), String> {
			let output = self.inner.take().unwrap().wait_with_output().unwrap();

			let stdout = String::from_utf8(output.stdout).unwrap();
			let stderr = String::from_utf8(output.stderr).unwrap();

			if output.status.success() {
				Ok((stdout, stderr))
			} else {
				Err(format!("{stdout}{stderr}"))
			}
		}
	}

	impl Drop for Child {
		fn drop(&mut self) {
			if let Some(inner) = self.inner.as_mut() {
				let _ = inner.kill();
			}
		}
	}

	/// Run the CLI with the given args inside the given directory
	fn run_in_dir<P: AsRef<Path>>(args: &str, current_dir: P) -> Child {
		let mut cmd = Command::new(env!("CARGO_BIN_EXE_rollbook"));
		cmd.current_dir(current_dir);
		cmd.env_clear();
		cmd.stdin(Stdio::null());
		cmd.stdout(Stdio::piped());
		cmd.stderr(Stdio::piped());
		cmd.args(args.split_ascii_whitespace());
		Child {
			inner: Some(cmd.spawn().unwrap()),
		}
	}

	/// Run the CLI with the given args from the repository root
	fn run(args: &str) -> Child {
		run_in_dir(args, env!("CARGO_MANIFEST_DIR"))
	}

	fn fixtures() -> PathBuf {
		Path::new(env!("CARGO_MANIFEST_DIR")).join("crates/compat/fixtures")
	}

	#[test]
	fn version() {
		let (stdout, _) = run("--version").output().unwrap();
		assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "unexpected output: {stdout:?}");
	}

	#[test]
	fn matrix_with_the_shipped_configuration() {
		let (stdout, stderr) = run("matrix --config rollbook.toml --seed 7").output().unwrap();
		assert!(stdout.contains("v1 => v2: ok, 4 records"), "unexpected output: {stdout:?}");
		assert!(stdout.contains("v2 => v1: ok, 6 records (2 coarsened)"), "{stdout:?}");
		assert!(stdout.trim_end().ends_with("4 pairs, 0 failed"), "{stdout:?}");
		assert!(stderr.contains("Finished matrix"), "unexpected logs: {stderr:?}");
	}

	#[test]
	fn matrix_without_a_configuration_uses_the_default() {
		let dir = tempfile::tempdir().unwrap();
		let args = format!("matrix --fixtures {}", fixtures().display());
		let (stdout, stderr) = run_in_dir(&args, dir.path()).output().unwrap();
		assert!(stdout.contains("4 pairs, 0 failed"), "{stdout:?}");
		assert!(stderr.contains("No configuration found"), "{stderr:?}");
	}

	#[test]
	fn default_matrix_finds_the_shipped_fixtures() {
		let (stdout, stderr) = run("matrix --config absent.toml --seed 3").output().unwrap();
		assert!(stdout.contains("v1 => v2: ok, 4 records"), "{stdout:?}");
		assert!(stdout.contains("4 pairs, 0 failed"), "{stdout:?}");
		assert!(stderr.contains("pass --fixtures"), "{stderr:?}");
	}

	#[test]
	fn matrix_with_missing_fixtures_fails() {
		let dir = tempfile::tempdir().unwrap();
		let args = format!("matrix --config rollbook.toml --fixtures {}", dir.path().display());
		let output = run(&args).output().unwrap_err();
		assert!(output.contains("Failed to set up the matrix"), "{output:?}");
	}

	#[test]
	fn record_then_inspect() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("v2.cbor");

		// Record a second generation sample
		{
			let args = format!("record --generation v2 --seed 1 --out {}", path.display());
			run(&args).output().unwrap();
			assert!(!fs::read(&path).unwrap().is_empty());
		}

		// Inspect it with the first generation
		{
			let args = format!("inspect --generation v1 --fields {}", path.display());
			let (stdout, _) = run(&args).output().unwrap();
			let lines: Vec<_> = stdout.lines().collect();
			assert_eq!(lines.len(), 12, "{stdout:?}");
			assert!(lines[4].starts_with("4: ") && lines[4].ends_with("(freshman)"), "{stdout:?}");
			assert!(lines[6].contains("is_graduate"), "{stdout:?}");
		}

		// Inspect it with the second generation
		{
			let args = format!("inspect --generation v2 {}", path.display());
			let (stdout, _) = run(&args).output().unwrap();
			let lines: Vec<_> = stdout.lines().collect();
			assert_eq!(lines.len(), 6, "{stdout:?}");
			assert!(lines[4].ends_with("(graduate)"), "{stdout:?}");
			assert!(lines[5].ends_with("(unclassified)"), "{stdout:?}");
		}
	}

	#[test]
	fn inspect_a_truncated_sample_fails() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("short.cbor");
		let mut bytes = fs::read(fixtures().join("v1.cbor")).unwrap();
		bytes.truncate(bytes.len() - 5);
		fs::write(&path, bytes).unwrap();
		let args = format!("inspect --generation v2 {}", path.display());
		let output = run(&args).output().unwrap_err();
		assert!(output.contains("can not read"), "{output:?}");
	}

	#[test]
	fn unknown_generation_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		let args = format!("record --generation v3 --out {}", dir.path().join("v3.cbor").display());
		run(&args).output().unwrap_err();
		assert!(!dir.path().join("v3.cbor").exists());
	}
}
