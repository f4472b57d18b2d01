use anyhow::Result;

use super::provider::ComputeProvider;

/// One instance's inspection result: its name plus any non-boot device names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceReport {
    pub name: String,
    pub data_disks: Vec<String>,
}

/// Fetch the instances in a zone and report each one's non-boot disks.
///
/// Instances carrying only a boot disk still appear, with an empty disk list.
///
/// # Errors
/// Provider failures propagate untouched.
pub fn instances_with_data_disks(
    provider: &impl ComputeProvider,
    project: &str,
    zone: &str,
) -> Result<Vec<InstanceReport>> {
    let instances = provider.list_instances(project, zone)?;
    Ok(instances
        .into_iter()
        .map(|instance| InstanceReport {
            name: instance.name,
            data_disks: instance
                .disks
                .into_iter()
                .filter(|disk| !disk.boot)
                .map(|disk| disk.device_name)
                .collect(),
        })
        .collect())
}
