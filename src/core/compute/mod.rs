pub mod error;
pub mod inspect;
pub mod provider;
pub mod snapshot;
pub mod types;

pub use error::ComputeError;
pub use inspect::instances_with_data_disks;
pub use provider::ComputeProvider;
pub use snapshot::{create_data_disk_snapshot, region_for_zone};
pub use types::{AttachedDisk, Instance, Snapshot, SnapshotRequest};
