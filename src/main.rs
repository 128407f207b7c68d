//! Binary entry point for `update-version`.

use colored::Colorize;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = update_version::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
