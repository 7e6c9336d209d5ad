//! Interactive front end for Sound Finder.
//!
//! Reads per-version sound datasets from a folder, asks for the base version
//! and the versions to include, and writes the generated enum constants.

mod shell;
mod start;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sound_finder::{DEFAULT_OUTPUT_PATH, DEFAULT_SOUNDS_DIR};

use crate::shell::{Shell, ShellConfig};

#[derive(Parser, Debug)]
#[command(name = "sound-finder")]
#[command(version, about = "Generates a version-ranged sound enum from per-version sound datasets.", long_about = None)]
struct Cli {
    /// Folder scanned for `<name> <version>.json` sound datasets.
    #[arg(long, default_value = DEFAULT_SOUNDS_DIR)]
    sounds_dir: PathBuf,
    /// Where the generated enum constants are written (replaced if present).
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    /// Skip the pauses between messages.
    #[arg(long, aliases = ["speedrun", "nodelay", "nosleep"], default_value_t = false)]
    no_delay: bool,
}

fn main() -> Result<()> {
    try_main().map_err(|err| {
        eprintln!("{err:#}");
        err
    })
}

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = ShellConfig {
        sounds_dir: cli.sounds_dir,
        output: cli.output,
        delay: !cli.no_delay,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);
    shell.greet().context("failed to write to stdout")?;
    shell.run().context("interactive shell failed")
}
