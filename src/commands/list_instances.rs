use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::compute::inspect;

pub struct ListInstancesCommand;

impl Command for ListInstancesCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let provider = ctx.provider()?;
        let reports = inspect::instances_with_data_disks(&provider, &ctx.project, &ctx.zone)?;
        for report in reports {
            println!("{}", report.name);
            for device in &report.data_disks {
                println!("  {device}");
            }
        }
        Ok(())
    }
}
