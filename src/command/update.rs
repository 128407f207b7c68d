use crate::error::Result;
use crate::ops::{RewriteOptions, rewrite};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// Manifest rewritten when `--manifest-path` is not given.
pub const DEFAULT_MANIFEST: &str = "pyproject.toml";

#[derive(Parser, Debug, Clone)]
pub struct UpdateArgs {
    /// Version to write, inserted verbatim (e.g. 1.4.0)
    #[arg(value_name = "VERSION")]
    pub new_version: String,

    /// Path to the manifest to rewrite
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST)]
    pub manifest_path: PathBuf,

    /// Fail if the manifest has no `version = "..."` line
    #[arg(long)]
    pub strict: bool,

    /// Show the change without writing the manifest
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl UpdateArgs {
    pub fn options(&self) -> RewriteOptions {
        RewriteOptions {
            strict: self.strict,
            dry_run: self.dry_run,
        }
    }
}

pub fn execute(args: UpdateArgs) -> Result<()> {
    log::debug!(
        "Setting version {} in {}",
        args.new_version,
        args.manifest_path.display()
    );

    let outcome = rewrite(&args.manifest_path, &args.new_version, &args.options())?;

    if args.dry_run {
        match &outcome.previous {
            Some(previous) if !outcome.changed => println!(
                "{} {}: already at {}",
                "Would keep".cyan().bold(),
                outcome.path.display(),
                previous.green().bold()
            ),
            Some(previous) => println!(
                "{} {}: {} → {}",
                "Would update".cyan().bold(),
                outcome.path.display(),
                previous.yellow(),
                outcome.new_version.green().bold()
            ),
            None => println!(
                "{} {}: no version declaration",
                "Would skip".yellow().bold(),
                outcome.path.display()
            ),
        }
    } else if outcome.written {
        match &outcome.previous {
            Some(previous) if !outcome.changed => log::info!(
                "{} already at version {}",
                outcome.path.display(),
                previous
            ),
            Some(previous) => log::info!(
                "Updated version in {}: {} → {}",
                outcome.path.display(),
                previous,
                outcome.new_version
            ),
            None => {}
        }
    }

    Ok(())
}
