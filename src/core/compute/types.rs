use serde::{Deserialize, Serialize};

/// A compute instance and its attached disks, decoded at the provider boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub name: String,
    #[serde(default)]
    pub disks: Vec<AttachedDisk>,
}

/// A disk attached to an instance. Exactly one disk per instance is expected
/// to carry `boot: true`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachedDisk {
    pub device_name: String,
    #[serde(default)]
    pub boot: bool,
}

/// A point-in-time disk snapshot. The size stays the string the API returned;
/// no numeric parsing is done on it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub name: String,
    pub creation_timestamp: String,
    pub disk_size_gb: String,
}

impl Snapshot {
    /// One listing line: `<name> - <creationTimestamp> - <sizeGb> Gb`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} - {} - {} Gb",
            self.name, self.creation_timestamp, self.disk_size_gb
        )
    }
}

/// Body of a create-snapshot request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRequest {
    pub name: String,
    pub storage_locations: Vec<String>,
}
