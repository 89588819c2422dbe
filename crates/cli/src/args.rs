use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct VolumeArgs {
    /// Point cloud table with x, y and z columns.
    pub cloud_path: PathBuf,

    /// Elevation of the horizontal reference plane.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub reference: f64,

    /// Width of the progress bar in characters.
    #[arg(long, default_value_t = 50)]
    pub bar_length: usize,

    /// Do not draw a progress bar.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Point cloud table with x, y and z columns.
    pub cloud_path: PathBuf,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Volume between the triangulated cloud and a horizontal plane.
    Volume(VolumeArgs),
    /// Size and extent of the triangulated cloud.
    Info(InfoArgs),
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
