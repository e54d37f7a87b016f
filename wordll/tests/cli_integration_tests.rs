// wordll/tests/cli_integration_tests.rs
//! Command-line integration tests for the `wordll` binary.
//!
//! Each test writes its reference, likelihood and auxiliary files into a
//! temporary directory, runs the binary through `assert_cmd` and checks
//! stdout, stderr and the exit status. Output is stripped of ANSI escapes
//! before comparison.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Two sentences, two systems, and a count file where `a` occurs twice.
    fn new() -> Result<Self> {
        let fixture = Fixture { dir: tempfile::tempdir()? };
        fixture.write("ref.txt", "a b\na c\n")?;
        fixture.write("sys1.ll", "-1.0 -2.0\n-3.0 -4.0\n")?;
        fixture.write("sys2.ll", "-0.5 -0.5\n-0.5 -1.5\n")?;
        fixture.write("counts.tsv", "a\t2\nb\t1\nc\t1\n")?;
        fixture.write("ref.pos", "DET NOUN\nDET VERB\n")?;
        Ok(fixture)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    fn arg(&self, name: &str) -> String {
        self.path(name).display().to_string()
    }

    /// Base command with the reference and both likelihood files.
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("wordll").unwrap();
        cmd.env("RUST_LOG", "debug");
        cmd.arg("--ref-file")
            .arg(self.arg("ref.txt"))
            .arg("--ll-files")
            .arg(self.arg("sys1.ll"))
            .arg(self.arg("sys2.ll"));
        cmd
    }
}

fn stripped(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes_fn(bytes)).into_owned()
}

fn count_profile(dir: &Path) -> String {
    format!("bucket_type=freq,freq_count_file={}", dir.join("counts.tsv").display())
}

#[test]
fn test_frequency_report_from_count_file() -> Result<()> {
    let fixture = Fixture::new()?;
    let output = fixture
        .command()
        .arg("--compare-word-likelihoods")
        .arg(count_profile(fixture.dir.path()))
        .output()?;

    assert!(output.status.success(), "stderr: {}", stripped(&output.stderr));
    let stdout = stripped(&output.stdout);
    let expected = "\
--- average word log likelihood by frequency bucket
<=1\t-3.0000\t-1.0000
2\t-2.0000\t-0.5000
3\tN/A\tN/A
4\tN/A\tN/A
5\tN/A\tN/A
(5,10]\tN/A\tN/A
(10,100]\tN/A\tN/A
(100,1000]\tN/A\tN/A
>1000\tN/A\tN/A
";
    assert!(stdout.contains("Word Likelihood Analysis"), "stdout: {}", stdout);
    assert!(stdout.ends_with(expected), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_label_report_with_label_set_and_decimals() -> Result<()> {
    let fixture = Fixture::new()?;
    let profile = format!(
        "bucket_type=label,label_corpus={},label_set=NOUN+VERB+DET",
        fixture.arg("ref.pos")
    );
    let output = fixture
        .command()
        .args(["--compare-word-likelihoods", &profile, "--decimals", "2"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stripped(&output.stderr));
    let stdout = stripped(&output.stdout);
    assert!(stdout.contains("--- average word log likelihood by label bucket\nNOUN\t-2.00\t-0.50\nVERB\t-4.00\t-1.50\nDET\t-2.00\t-0.50\n"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_numeric_report_uses_interval_labels() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.write("ref.num", "0.1 0.6\n0.9 0.3\n")?;
    let profile = format!("bucket_type=numeric,label_corpus={}", fixture.arg("ref.num"));

    fixture
        .command()
        .args(["--compare-word-likelihoods", &profile])
        .assert()
        .success()
        .stdout(predicate::str::contains("by numeric bucket"))
        .stdout(predicate::str::contains("<=0.25\t-1.0000\t-0.5000"))
        .stdout(predicate::str::contains("(0.25,0.5]\t-4.0000\t-1.5000"))
        .stdout(predicate::str::contains(">0.75\t-3.0000\t-0.5000"));
    Ok(())
}

#[test]
fn test_default_profile_needs_a_frequency_source() -> Result<()> {
    let fixture = Fixture::new()?;
    // The implicit profile is `bucket_type=freq`, which has no count or corpus file.
    fixture
        .command()
        .assert()
        .failure()
        .stdout(predicate::str::contains("Word Likelihood Analysis"))
        .stderr(predicate::str::contains("freq_count_file or freq_corpus_file"));
    Ok(())
}

#[test]
fn test_empty_profile_list_prints_nothing() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture
        .command()
        .arg("--compare-word-likelihoods")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_unknown_key_fails_only_that_profile() -> Result<()> {
    let fixture = Fixture::new()?;
    let output = fixture
        .command()
        .arg("--compare-word-likelihoods")
        .arg("bucket_type=freq,bucket_size=3")
        .arg(count_profile(fixture.dir.path()))
        .output()?;

    assert!(!output.status.success());
    let stdout = stripped(&output.stdout);
    let stderr = stripped(&output.stderr);
    assert!(stdout.contains("by frequency bucket"), "stdout: {}", stdout);
    assert!(stderr.contains("bucket_size"), "stderr: {}", stderr);
    assert!(stderr.contains("1 of 2 profiles failed"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_unrecognized_label_is_reported() -> Result<()> {
    let fixture = Fixture::new()?;
    let profile = format!(
        "bucket_type=label,label_corpus={},label_set=NOUN+VERB",
        fixture.arg("ref.pos")
    );
    fixture
        .command()
        .args(["--compare-word-likelihoods", &profile])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DET"));
    Ok(())
}

#[test]
fn test_misaligned_likelihood_file_fails() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.write("sys2.ll", "-0.5 -0.5\n-0.5\n")?;
    fixture
        .command()
        .arg("--compare-word-likelihoods")
        .arg(count_profile(fixture.dir.path()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Misaligned input"))
        .stderr(predicate::str::contains("1 of 1 profiles failed"));
    Ok(())
}

#[test]
fn test_sys_names_count_mismatch_fails_before_any_report() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture
        .command()
        .args(["--sys-names", "baseline"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("system names"));
    Ok(())
}

#[test]
fn test_json_format_with_sys_names() -> Result<()> {
    let fixture = Fixture::new()?;
    let output = fixture
        .command()
        .args(["--sys-names", "baseline", "improved", "--format", "json"])
        .arg("--compare-word-likelihoods")
        .arg(count_profile(fixture.dir.path()))
        .output()?;

    assert!(output.status.success(), "stderr: {}", stripped(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let report = &value[0];
    assert_eq!(report["bucketer"], "frequency");
    assert_eq!(report["systems"], serde_json::json!(["baseline", "improved"]));
    assert_eq!(report["rows"][0]["label"], "<=1");
    assert_eq!(report["rows"][0]["averages"][0], -3.0);
    assert!(report["rows"][2]["averages"][0].is_null());
    Ok(())
}

#[test]
fn test_table_format_lists_system_names() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture
        .command()
        .args(["--sys-names", "baseline", "improved", "--format", "table"])
        .arg("--compare-word-likelihoods")
        .arg(count_profile(fixture.dir.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("baseline"))
        .stdout(predicate::str::contains("improved"))
        .stdout(predicate::str::contains("frequency bucket"));
    Ok(())
}

#[test]
fn test_profile_file_runs_every_profile() -> Result<()> {
    let fixture = Fixture::new()?;
    let yaml = format!(
        "- bucket_type: freq\n  freq_count_file: {}\n  bucket_cutoffs: \"1:2\"\n- bucket_type: label\n  label_corpus: {}\n",
        fixture.arg("counts.tsv"),
        fixture.arg("ref.pos")
    );
    let profiles = fixture.write("profiles.yaml", &yaml)?;

    let output = fixture.command().arg("--profile-file").arg(&profiles).output()?;
    assert!(output.status.success(), "stderr: {}", stripped(&output.stderr));
    let stdout = stripped(&output.stdout);
    assert!(stdout.contains("<=1\t-3.0000\t-1.0000\n2\t-2.0000\t-0.5000\n>2\tN/A\tN/A\n"), "stdout: {}", stdout);
    assert!(stdout.contains("by label bucket\nDET\t-2.0000\t-0.5000\n"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_quiet_suppresses_logs() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture
        .command()
        .arg("-q")
        .arg("--compare-word-likelihoods")
        .arg(count_profile(fixture.dir.path()))
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_help_lists_flags() {
    Command::cargo_bin("wordll")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ref-file"))
        .stdout(predicate::str::contains("--compare-word-likelihoods"));
}
