use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::compute::snapshot;

pub struct SnapshotDiskCommand<'a> {
    pub instance: &'a str,
    pub disk: &'a str,
}

impl Command for SnapshotDiskCommand<'_> {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let provider = ctx.provider()?;
        let response = snapshot::create_data_disk_snapshot(
            &provider,
            &ctx.project,
            &ctx.zone,
            self.instance,
            self.disk,
        )?;
        // The raw operation response, as the provider returned it
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
