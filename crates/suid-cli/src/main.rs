#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, Config};
use std::io::{self, Write};
use suid::{SuidGenerator, SystemClock, ThreadRandom};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_telemetry()?;

    let config = Config::try_from(args)?;
    tracing::debug!(?config, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let generator = SuidGenerator::new(SystemClock, ThreadRandom);
    commands::run(&config, &generator, &mut out)?;
    out.flush()?;
    Ok(())
}
