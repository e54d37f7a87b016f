// wordll/src/main.rs
//! wordll entry point.
//!
//! Parses the command line, sets up logging and the theme, then runs every
//! bucketing profile against the loaded files.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use std::io::{self, Write};

use wordll::cli::Cli;
use wordll::commands::report::{run_report, ProfileInput, ReportOptions};
use wordll::logger;
use wordll::ui::theme::build_theme_map;
use wordll_core::load_profiles_from_file;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let theme_map = build_theme_map(args.theme.as_deref()).context("Theme error")?;

    let mut profiles: Vec<ProfileInput> = args.inline_profiles().into_iter().map(ProfileInput::Inline).collect();
    if let Some(path) = &args.profile_file {
        let from_file = load_profiles_from_file(path)
            .with_context(|| format!("Failed to load profile file: {}", path.display()))?;
        profiles.extend(from_file.into_iter().map(ProfileInput::Parsed));
    }

    let opts = ReportOptions {
        ref_file: args.ref_file,
        ll_files: args.ll_files,
        sys_names: args.sys_names,
        profiles,
        decimals: args.decimals,
        format: args.format,
    };

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    let mut stderr = io::stderr();

    let result = run_report(&opts, &mut writer, &mut stderr, &theme_map, supports_color);
    writer.flush()?;
    result?;
    Ok(())
}
