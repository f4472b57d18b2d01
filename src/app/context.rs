use std::path::PathBuf;

use anyhow::Result;

use crate::cli::Cli;
use crate::gcp::GcpComputeClient;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub project: String,
    pub zone: String,
    pub auth_file: PathBuf,
    pub verbosity: u8,
}

impl AppContext {
    #[must_use]
    pub fn new(project: String, zone: String, auth_file: PathBuf, verbosity: u8) -> Self {
        Self {
            project,
            zone,
            auth_file,
            verbosity,
        }
    }

    /// Convenience constructor from the parsed CLI globals.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(
            cli.project.clone(),
            cli.zone.clone(),
            cli.auth.clone(),
            cli.verbose,
        )
    }

    /// Authenticate with the key file and build the Compute Engine client.
    ///
    /// # Errors
    /// Returns an error if the key file cannot be read or the token exchange fails.
    pub fn provider(&self) -> Result<GcpComputeClient> {
        GcpComputeClient::connect(&self.auth_file)
    }
}
