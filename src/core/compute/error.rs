use thiserror::Error;

/// Domain errors that abort a command with a printed message and exit code 1.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// Boot disks are never snapshotted by this tool.
    #[error("disk {disk:?} on instance {instance:?} is bootable")]
    BootDisk { instance: String, disk: String },

    /// No instance/disk pair in the zone matched the requested names.
    #[error("matching disk not found ({instance:?}/{disk:?})")]
    DiskNotFound { instance: String, disk: String },
}
