use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// disksnap command-line interface
#[derive(Parser, Debug, Clone)]
#[command(name = "disksnap", version, about = "Manage Compute Engine data-disk snapshots", long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// The project ID
    #[arg(long)]
    pub project: String,

    /// The Compute Engine zone to operate in
    #[arg(long)]
    pub zone: String,

    /// Path to the service-account JSON key file
    #[arg(long, value_name = "FILE")]
    pub auth: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List instances and any disks attached beyond the boot disk
    #[command(name = "list_instances")]
    ListInstances,

    /// Snapshot a named data disk on a named instance
    #[command(name = "snapshot_disk")]
    SnapshotDisk {
        /// Instance the disk is attached to
        #[arg(long, value_name = "NAME")]
        instance: String,

        /// Device name of the disk to snapshot
        #[arg(long, value_name = "DEVICE")]
        disk: String,
    },

    /// List snapshots in the project
    #[command(name = "list_snapshots")]
    ListSnapshots,
}
