// src/main.rs

// Checks a directory of PowerBlade measurement logs ($PB_DATA) for completeness.
// Prints one table per device (or only the gaps with `missing`), then writes every
// device's reading spread, largest first, to sorted_maxDiff_power.dat.
// `clear <device>` instead creates empty logs for each missing recording of that device.

// USAGE #### PB_DATA=/path/to/logs cargo run --release -- [<device> | missing | clear <device>]

mod cli;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;

use pb_data_check::{
    build_store, create_missing_files, render_report, summarize_store, write_ranking,
};

use cli::{Args, Mode};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mode = args.mode()?;

    let start: DateTime<Local> = Local::now();
    eprintln!("[{}] Reading {}…", start.format("%Y-%m-%d %H:%M:%S"), args.data_dir.display());

    let store = build_store(&args.data_dir)
        .with_context(|| format!("checking {}", args.data_dir.display()))?;

    let (device, missing_only) = match mode {
        Mode::Clear(device) => {
            let created = create_missing_files(&args.data_dir, &store, &device)?;
            log::info!("{} file(s) created for {device}", created.len());
            return Ok(());
        }
        Mode::All => (None, false),
        Mode::Missing => (None, true),
        Mode::Device(device) => (Some(device), false),
    };

    print!("{}", render_report(&store, device.as_deref(), missing_only)?);

    let summaries = summarize_store(&store);
    let ranked = write_ranking(&args.output, &summaries)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let end: DateTime<Local> = Local::now();
    eprintln!(
        "[{}] Finished. {} devices ranked → {} ({}s)",
        end.format("%Y-%m-%d %H:%M:%S"),
        ranked.len(),
        args.output.display(),
        end.signed_duration_since(start).num_seconds()
    );

    Ok(())
}
