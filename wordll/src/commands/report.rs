//! Report command: loads the inputs once, then builds one likelihood report per profile.

use anyhow::{bail, Context, Result};
use log::{debug, error, info};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

use wordll_core::{
    default_system_names, generate_report, load_nums, load_tokens, BucketProfile, LikelihoodCorpus,
    LikelihoodReport, NumberFormat, TokenCorpus,
};

use crate::ui::output_format::{self, OutputFormat};
use crate::ui::theme::ThemeMap;

/// Banner printed once before the text and table reports.
pub const SECTION_TITLE: &str = "Word Likelihood Analysis";

/// A profile as handed to the command, either still inline or already parsed from a file.
#[derive(Debug, Clone)]
pub enum ProfileInput {
    Inline(String),
    Parsed(BucketProfile),
}

impl ProfileInput {
    pub fn resolve(&self) -> wordll_core::errors::Result<BucketProfile> {
        match self {
            ProfileInput::Inline(text) => BucketProfile::parse(text),
            ProfileInput::Parsed(profile) => {
                profile.validate()?;
                Ok(profile.clone())
            }
        }
    }

    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            ProfileInput::Inline(text) if text.is_empty() => "(default)".to_string(),
            ProfileInput::Inline(text) => format!("'{}'", text),
            ProfileInput::Parsed(profile) => format!("{} profile from file", profile.bucket_type),
        }
    }
}

/// Options for [`run_report`].
pub struct ReportOptions {
    pub ref_file: PathBuf,
    pub ll_files: Vec<PathBuf>,
    pub sys_names: Option<Vec<String>>,
    pub profiles: Vec<ProfileInput>,
    pub decimals: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Debug, Error)]
pub enum ReportRunError {
    #[error("{failed} of {total} profiles failed")]
    ProfilesFailed { failed: usize, total: usize },
}

/// Loads the reference and likelihood files, then runs every profile.
///
/// A failing profile is reported on `err` and the remaining profiles still
/// run. If any profile failed, [`ReportRunError::ProfilesFailed`] is returned
/// after all output has been written.
pub fn run_report<W: Write, E: Write>(
    opts: &ReportOptions,
    out: &mut W,
    err: &mut E,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<RunSummary> {
    info!("Starting word likelihood report.");

    let reference = load_tokens(&opts.ref_file)
        .with_context(|| format!("Failed to load reference file: {}", opts.ref_file.display()))?;
    let systems = opts
        .ll_files
        .iter()
        .map(|path| {
            load_nums(path).with_context(|| format!("Failed to load likelihood file: {}", path.display()))
        })
        .collect::<Result<Vec<LikelihoodCorpus>>>()?;

    let system_names = match &opts.sys_names {
        Some(names) if names.len() != systems.len() => bail!(
            "Got {} system names for {} likelihood files",
            names.len(),
            systems.len()
        ),
        Some(names) => names.clone(),
        None => default_system_names(systems.len()),
    };
    debug!(
        "Loaded {} reference sentences and {} systems.",
        reference.num_sentences(),
        systems.len()
    );

    let reports = build_reports(opts, &reference, &systems, &system_names, err, theme, supports_color)?;
    write_reports(opts, &reports, out, theme, supports_color)?;

    let summary = RunSummary {
        succeeded: reports.len(),
        failed: opts.profiles.len() - reports.len(),
    };
    info!("Report finished: {} succeeded, {} failed.", summary.succeeded, summary.failed);

    if summary.failed > 0 {
        return Err(ReportRunError::ProfilesFailed {
            failed: summary.failed,
            total: opts.profiles.len(),
        }
        .into());
    }
    Ok(summary)
}

fn build_reports<E: Write>(
    opts: &ReportOptions,
    reference: &TokenCorpus,
    systems: &[LikelihoodCorpus],
    system_names: &[String],
    err: &mut E,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<Vec<LikelihoodReport>> {
    let mut reports = Vec::with_capacity(opts.profiles.len());
    for input in &opts.profiles {
        let outcome = input
            .resolve()
            .and_then(|profile| generate_report(reference, systems, system_names, &profile));
        match outcome {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("Profile {} failed: {}", input.describe(), e);
                output_format::print_error_message(
                    err,
                    &format!("profile {} failed: {}", input.describe(), e),
                    theme,
                    supports_color,
                )?;
            }
        }
    }
    Ok(reports)
}

fn write_reports<W: Write>(
    opts: &ReportOptions,
    reports: &[LikelihoodReport],
    out: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    if opts.format == OutputFormat::Json {
        return output_format::write_json_reports(out, reports);
    }
    if opts.profiles.is_empty() {
        debug!("No profiles requested; nothing to print.");
        return Ok(());
    }

    let number_format = NumberFormat::new(opts.decimals);
    output_format::print_section_header(out, SECTION_TITLE, theme, supports_color)?;
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        match opts.format {
            OutputFormat::Table => {
                output_format::write_table_report(out, report, &number_format, theme, supports_color)?
            }
            _ => output_format::write_text_report(out, report, &number_format, theme, supports_color)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use std::fs;
    use tempfile::TempDir;
    use test_log::test;

    struct Inputs {
        dir: TempDir,
        ref_file: PathBuf,
        ll_files: Vec<PathBuf>,
    }

    fn write_inputs() -> Inputs {
        let dir = tempfile::tempdir().unwrap();
        let ref_file = dir.path().join("ref.txt");
        fs::write(&ref_file, "a b\na c\n").unwrap();
        let sys1 = dir.path().join("sys1.ll");
        fs::write(&sys1, "-1.0 -2.0\n-3.0 -4.0\n").unwrap();
        let sys2 = dir.path().join("sys2.ll");
        fs::write(&sys2, "-0.5 -0.5\n-0.5 -1.5\n").unwrap();
        Inputs {
            dir,
            ref_file,
            ll_files: vec![sys1, sys2],
        }
    }

    fn options(inputs: &Inputs, profiles: Vec<ProfileInput>) -> ReportOptions {
        ReportOptions {
            ref_file: inputs.ref_file.clone(),
            ll_files: inputs.ll_files.clone(),
            sys_names: None,
            profiles,
            decimals: 4,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn runs_frequency_profile_over_count_file() -> Result<()> {
        let inputs = write_inputs();
        let counts = inputs.dir.path().join("counts.tsv");
        fs::write(&counts, "a\t2\nb\t1\nc\t1\n")?;
        let profile = format!("bucket_type=freq,freq_count_file={}", counts.display());
        let opts = options(&inputs, vec![ProfileInput::Inline(profile)]);

        let theme = ThemeStyle::default_theme_map();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary = run_report(&opts, &mut out, &mut err, &theme, false)?;
        assert_eq!(summary, RunSummary { succeeded: 1, failed: 0 });

        let text = String::from_utf8(out)?;
        assert!(text.contains("Word Likelihood Analysis"));
        assert!(text.contains("--- average word log likelihood by frequency bucket"));
        assert!(text.contains("<=1\t-3.0000\t-1.0000\n"));
        assert!(text.contains("2\t-2.0000\t-0.5000\n"));
        assert!(text.contains(">1000\tN/A\tN/A\n"));
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn failing_profile_does_not_stop_the_others() {
        let inputs = write_inputs();
        let counts = inputs.dir.path().join("counts.tsv");
        fs::write(&counts, "a\t2\n").unwrap();
        let opts = options(
            &inputs,
            vec![
                ProfileInput::Inline("bucket_type=freq,colour=red".to_string()),
                ProfileInput::Inline(format!("freq_count_file={}", counts.display())),
            ],
        );

        let theme = ThemeStyle::default_theme_map();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let result = run_report(&opts, &mut out, &mut err, &theme, false);

        let e = result.unwrap_err();
        match e.downcast_ref::<ReportRunError>() {
            Some(ReportRunError::ProfilesFailed { failed, total }) => {
                assert_eq!((*failed, *total), (1, 2));
            }
            None => panic!("unexpected error: {e}"),
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("by frequency bucket"));
        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("colour"), "{errors}");
    }

    #[test]
    fn no_profiles_prints_nothing() -> Result<()> {
        let inputs = write_inputs();
        let opts = options(&inputs, Vec::new());

        let theme = ThemeStyle::default_theme_map();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary = run_report(&opts, &mut out, &mut err, &theme, false)?;
        assert_eq!(summary, RunSummary::default());
        assert!(out.is_empty());
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn mismatched_system_names_are_rejected() {
        let inputs = write_inputs();
        let mut opts = options(&inputs, vec![ProfileInput::Inline(String::new())]);
        opts.sys_names = Some(vec!["only-one".to_string()]);

        let theme = ThemeStyle::default_theme_map();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let e = run_report(&opts, &mut out, &mut err, &theme, false).unwrap_err();
        assert!(e.to_string().contains("system names"));
        assert!(out.is_empty());
    }

    #[test]
    fn json_output_is_a_single_array() -> Result<()> {
        let inputs = write_inputs();
        let labels = inputs.dir.path().join("ref.pos");
        fs::write(&labels, "DET NOUN\nDET VERB\n")?;
        let mut opts = options(
            &inputs,
            vec![ProfileInput::Parsed(BucketProfile {
                bucket_type: wordll_core::BucketType::Label,
                label_corpus: Some(labels),
                ..BucketProfile::default()
            })],
        );
        opts.format = OutputFormat::Json;
        opts.sys_names = Some(vec!["base".to_string(), "new".to_string()]);

        let theme = ThemeStyle::default_theme_map();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        run_report(&opts, &mut out, &mut err, &theme, false)?;

        let value: serde_json::Value = serde_json::from_slice(&out)?;
        let reports = value.as_array().expect("array of reports");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["bucketer"], "label");
        assert_eq!(reports[0]["systems"][1], "new");
        assert_eq!(reports[0]["rows"][0]["label"], "DET");
        Ok(())
    }
}
