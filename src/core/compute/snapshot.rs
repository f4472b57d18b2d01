use anyhow::Result;
use serde_json::Value;
use tracing::info;

use super::error::ComputeError;
use super::provider::ComputeProvider;
use super::types::SnapshotRequest;

/// Suffix appended to the disk device name to form the snapshot name.
/// There is no increment scheme: a repeat snapshot of the same disk reuses
/// the same name and collides at the provider.
const SNAPSHOT_NAME_SUFFIX: &str = "-001";

/// Derive the snapshot storage region from a zone name.
///
/// Zones are `<region>-<letter>`, so the region is the zone minus its last
/// two characters. The zone format is not validated.
#[must_use]
pub fn region_for_zone(zone: &str) -> String {
    let cut = zone.len().saturating_sub(2);
    zone.get(..cut).unwrap_or("").to_string()
}

/// Snapshot one named data disk on one named instance.
///
/// Scans the zone's instances for the given instance name (first match wins,
/// names are assumed unique), then that instance's disks for the given device
/// name. Boot disks are refused. At most one create-snapshot call is issued,
/// and its raw operation response is returned.
///
/// # Errors
/// [`ComputeError::BootDisk`] if the matched disk is the boot disk,
/// [`ComputeError::DiskNotFound`] if no instance/disk pair matches; provider
/// failures propagate untouched.
pub fn create_data_disk_snapshot(
    provider: &impl ComputeProvider,
    project: &str,
    zone: &str,
    instance: &str,
    disk: &str,
) -> Result<Value> {
    let instances = provider.list_instances(project, zone)?;

    for candidate in &instances {
        if candidate.name != instance {
            continue;
        }
        for attached in &candidate.disks {
            if attached.device_name != disk {
                continue;
            }
            if attached.boot {
                return Err(ComputeError::BootDisk {
                    instance: instance.to_string(),
                    disk: disk.to_string(),
                }
                .into());
            }

            let request = SnapshotRequest {
                name: format!("{disk}{SNAPSHOT_NAME_SUFFIX}"),
                storage_locations: vec![region_for_zone(zone)],
            };
            info!(snapshot = %request.name, "snapshotting {disk} on {instance}");
            return provider.create_snapshot(project, zone, disk, &request);
        }
    }

    Err(ComputeError::DiskNotFound {
        instance: instance.to_string(),
        disk: disk.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::Result;
    use serde_json::{Value, json};

    use super::*;
    use crate::core::compute::types::{AttachedDisk, Instance, Snapshot};

    #[derive(Default)]
    struct FakeProvider {
        instances: Vec<Instance>,
        create_calls: RefCell<Vec<(String, String, String, SnapshotRequest)>>,
    }

    impl ComputeProvider for FakeProvider {
        fn list_instances(&self, _project: &str, _zone: &str) -> Result<Vec<Instance>> {
            Ok(self.instances.clone())
        }

        fn list_snapshots(&self, _project: &str) -> Result<Vec<Snapshot>> {
            Ok(Vec::new())
        }

        fn create_snapshot(
            &self,
            project: &str,
            zone: &str,
            disk: &str,
            request: &SnapshotRequest,
        ) -> Result<Value> {
            self.create_calls.borrow_mut().push((
                project.into(),
                zone.into(),
                disk.into(),
                request.clone(),
            ));
            Ok(json!({"status": "PENDING"}))
        }
    }

    fn provider_with_vm1() -> FakeProvider {
        FakeProvider {
            instances: vec![Instance {
                name: "vm1".into(),
                disks: vec![
                    AttachedDisk {
                        device_name: "boot-disk".into(),
                        boot: true,
                    },
                    AttachedDisk {
                        device_name: "data-disk".into(),
                        boot: false,
                    },
                ],
            }],
            ..FakeProvider::default()
        }
    }

    #[test]
    fn region_strips_zone_suffix() {
        assert_eq!(region_for_zone("us-central1-a"), "us-central1");
        assert_eq!(region_for_zone("europe-west4-b"), "europe-west4");
    }

    #[test]
    fn region_of_degenerate_zone_is_empty_not_a_panic() {
        assert_eq!(region_for_zone("a"), "");
        assert_eq!(region_for_zone(""), "");
    }

    #[test]
    fn snapshots_data_disk_once_with_derived_region() {
        let provider = provider_with_vm1();

        let response =
            create_data_disk_snapshot(&provider, "demo", "us-central1-a", "vm1", "data-disk")
                .unwrap();
        assert_eq!(response, json!({"status": "PENDING"}));

        let calls = provider.create_calls.borrow();
        assert_eq!(calls.len(), 1);
        let (project, zone, disk, request) = &calls[0];
        assert_eq!(project, "demo");
        assert_eq!(zone, "us-central1-a");
        assert_eq!(disk, "data-disk");
        assert_eq!(request.name, "data-disk-001");
        assert_eq!(request.storage_locations, vec!["us-central1".to_string()]);
    }

    #[test]
    fn refuses_boot_disk_without_calling_the_api() {
        let provider = provider_with_vm1();

        let err =
            create_data_disk_snapshot(&provider, "demo", "us-central1-a", "vm1", "boot-disk")
                .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ComputeError>(),
            Some(ComputeError::BootDisk { .. })
        ));
        assert!(provider.create_calls.borrow().is_empty());
    }

    #[test]
    fn unknown_instance_is_disk_not_found() {
        let provider = provider_with_vm1();

        let err =
            create_data_disk_snapshot(&provider, "demo", "us-central1-a", "vm2", "data-disk")
                .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ComputeError>(),
            Some(ComputeError::DiskNotFound { .. })
        ));
        assert!(provider.create_calls.borrow().is_empty());
    }

    #[test]
    fn unknown_device_is_disk_not_found() {
        let provider = provider_with_vm1();

        let err = create_data_disk_snapshot(&provider, "demo", "us-central1-a", "vm1", "other")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ComputeError>(),
            Some(ComputeError::DiskNotFound { .. })
        ));
        assert!(provider.create_calls.borrow().is_empty());
    }

    #[test]
    fn repeat_invocations_reuse_the_same_name() {
        let provider = provider_with_vm1();

        create_data_disk_snapshot(&provider, "demo", "us-central1-a", "vm1", "data-disk").unwrap();
        create_data_disk_snapshot(&provider, "demo", "us-central1-a", "vm1", "data-disk").unwrap();

        let calls = provider.create_calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].3, calls[1].3);
        assert_eq!(calls[0].3.name, "data-disk-001");
    }
}
