use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::compute::ComputeProvider;

pub struct ListSnapshotsCommand;

impl Command for ListSnapshotsCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let provider = ctx.provider()?;
        for snap in provider.list_snapshots(&ctx.project)? {
            println!("{}", snap.summary_line());
        }
        Ok(())
    }
}
