use anyhow::Result;
use serde_json::Value;

use super::types::{Instance, Snapshot, SnapshotRequest};

/// Capability interface over the remote compute-management API.
///
/// The real implementation is [`crate::gcp::GcpComputeClient`]; unit tests
/// substitute in-memory fakes.
pub trait ComputeProvider {
    /// List all instances in a zone, with their attached disks.
    ///
    /// # Errors
    /// Returns an error if the API call fails or the response cannot be decoded.
    fn list_instances(&self, project: &str, zone: &str) -> Result<Vec<Instance>>;

    /// List all snapshots visible in a project.
    ///
    /// # Errors
    /// Returns an error if the API call fails or the response cannot be decoded.
    fn list_snapshots(&self, project: &str) -> Result<Vec<Snapshot>>;

    /// Create a snapshot of a zonal disk and return the raw operation response.
    ///
    /// # Errors
    /// Returns an error if the API rejects the request.
    fn create_snapshot(
        &self,
        project: &str,
        zone: &str,
        disk: &str,
        request: &SnapshotRequest,
    ) -> Result<Value>;
}
