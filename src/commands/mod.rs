use anyhow::Result;

use crate::{
    app::context::AppContext,
    cli::{Cli, Commands},
};

pub mod list_instances;
pub mod list_snapshots;
pub mod snapshot_disk;

/// Unified interface implemented by each subcommand handler.
pub trait Command {
    /// Execute the subcommand.
    ///
    /// # Errors
    /// Returns an error if the command fails.
    fn run(&self, ctx: &AppContext) -> Result<()>;
}

/// Central dispatcher: routes parsed CLI to subcommand handlers.
///
/// # Errors
/// Returns an error if the invoked subcommand fails.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli);

    match &cli.command {
        Commands::ListInstances => list_instances::ListInstancesCommand.run(&ctx),
        Commands::SnapshotDisk { instance, disk } => {
            let cmd = snapshot_disk::SnapshotDiskCommand { instance, disk };
            cmd.run(&ctx)
        }
        Commands::ListSnapshots => list_snapshots::ListSnapshotsCommand.run(&ctx),
    }
}
