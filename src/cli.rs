use crate::command::update::UpdateArgs;
use clap::Parser;

/// Rewrite the version declaration of a TOML packaging manifest.
///
/// Meant to run as the prepare step of a release pipeline, e.g.
/// `update-version ${nextRelease.version}`.
#[derive(Parser)]
#[command(name = "update-version", version)]
pub struct Cli {
    #[command(flatten)]
    pub args: UpdateArgs,
}
