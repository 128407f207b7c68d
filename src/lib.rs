#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod ops;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    command::update::execute(cli.args)
}
