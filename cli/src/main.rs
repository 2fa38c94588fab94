// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

mod config;
mod replace;
mod source;

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use mapinfo::MapInfo;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Settings file to use
    #[arg(long, global = true, default_value = config::FILE_NAME)]
    config: PathBuf,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enable exactly the regions listed in the region source
    Sync {
        /// The map descriptor file, usually mapinfo.ifo
        #[arg(value_name = "MAPINFO")]
        path: PathBuf,
        /// Region ID list, overriding the settings file (`-` for stdin)
        #[arg(short, long)]
        regions: Option<PathBuf>,
        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the header and enabled regions of a map descriptor file
    Inspect {
        #[arg(value_name = "MAPINFO")]
        path: PathBuf,
        /// List every enabled region
        #[arg(short, long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match args.command {
        Command::Sync {
            path,
            regions,
            dry_run,
        } => {
            let settings = config::load_or_create(&args.config)?;

            let mut map = load(&path)?;
            let before = map.regions.clone();

            // The complete list must be read before the grid is touched
            let region_list = regions.or(settings.regions.source).ok_or_else(|| {
                anyhow!(
                    "No region source given. Pass --regions or set regions.source in '{}'",
                    args.config.display(),
                )
            })?;
            let ids = source::read_region_ids(&region_list)?;
            if ids.is_empty() {
                warn!(
                    "Region source '{}' is empty, disabling every region",
                    region_list.display(),
                );
            }

            mapinfo::synchronize(&mut map.regions, ids);

            let summary = mapinfo::summarize(&before, &map.regions);
            info!(
                "{} regions enabled (was {}): {} enabled, {} disabled",
                summary.after, summary.before, summary.enabled, summary.disabled,
            );

            if dry_run {
                info!("Dry run, leaving {} untouched", path.display());
            } else if summary.is_unchanged() {
                info!("{} is already up to date", path.display());
            } else {
                let backup = replace::replace_with_backup(
                    &path,
                    &map.to_bytes(),
                    settings.backup.extension(),
                )?;
                match backup {
                    Some(backup) => info!(
                        "Saved {} (previous version at {})",
                        path.display(),
                        backup.display(),
                    ),
                    None => info!("Saved {}", path.display()),
                }
            }
        }
        Command::Inspect { path, list } => {
            let map = load(&path)?;
            let header = &map.header;

            println!("Size:      {} x {}", header.width, header.height);
            println!("Reserved:  {:?}", header.reserved);
            println!(
                "Enabled:   {} of {} regions",
                map.regions.enabled_count(),
                mapinfo::REGION_COUNT,
            );
            if list {
                for id in map.regions.enabled_ids() {
                    println!("{:>6} ({}, {})", i16::from(id), id.x(), id.y());
                }
            }
        }
    }

    Ok(())
}

fn load(path: &Path) -> anyhow::Result<MapInfo> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open map file '{}'", path.display()))?;

    mapinfo::decode(BufReader::new(file))
        .with_context(|| format!("Failed to load map file '{}'", path.display()))
}
