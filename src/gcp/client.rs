use std::path::Path;

use anyhow::{Context, Result, bail};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::compute::provider::ComputeProvider;
use crate::core::compute::types::{Instance, Snapshot, SnapshotRequest};

use super::auth::{self, ServiceAccountKey};

const COMPUTE_ROOT: &str = "https://compute.googleapis.com/compute/v1";

/// Blocking Compute Engine v1 REST client.
///
/// Authenticates once on construction; the access token is held for the rest
/// of the process.
pub struct GcpComputeClient {
    http: Client,
    token: String,
    root: String,
}

/// List responses wrap their results in an `items` array that is omitted
/// entirely when the listing is empty.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ListEnvelope<T> {
    #[serde(default)]
    items: Vec<T>,
}

impl GcpComputeClient {
    /// Authenticate with a service-account key file and build the client.
    ///
    /// # Errors
    /// Returns an error if the key cannot be loaded or the token exchange fails.
    pub fn connect(auth_file: &Path) -> Result<Self> {
        let key = ServiceAccountKey::load(auth_file)?;
        let http = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        let token = auth::fetch_access_token(&http, &key)?;
        Ok(Self {
            http,
            token,
            root: COMPUTE_ROOT.to_string(),
        })
    }

    fn get(&self, url: &str) -> Result<Response> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .with_context(|| format!("GET {url} failed"))?;
        check_status(response, url)
    }
}

fn check_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().unwrap_or_default();
        bail!("{url} returned {status}: {body}");
    }
}

impl ComputeProvider for GcpComputeClient {
    fn list_instances(&self, project: &str, zone: &str) -> Result<Vec<Instance>> {
        let url = format!("{}/projects/{project}/zones/{zone}/instances", self.root);
        let envelope: ListEnvelope<Instance> = self
            .get(&url)?
            .json()
            .context("malformed instance list response")?;
        Ok(envelope.items)
    }

    fn list_snapshots(&self, project: &str) -> Result<Vec<Snapshot>> {
        let url = format!("{}/projects/{project}/global/snapshots", self.root);
        let envelope: ListEnvelope<Snapshot> = self
            .get(&url)?
            .json()
            .context("malformed snapshot list response")?;
        Ok(envelope.items)
    }

    fn create_snapshot(
        &self,
        project: &str,
        zone: &str,
        disk: &str,
        request: &SnapshotRequest,
    ) -> Result<Value> {
        let url = format!(
            "{}/projects/{project}/zones/{zone}/disks/{disk}/createSnapshot",
            self.root
        );
        debug!(%url, snapshot = %request.name, "POST");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .with_context(|| format!("POST {url} failed"))?;
        let response = check_status(response, &url)?;
        response.json().context("malformed create-snapshot response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_omits_items() {
        let envelope: ListEnvelope<Snapshot> =
            serde_json::from_str(r#"{"kind": "compute#snapshotList"}"#).expect("decode envelope");
        assert!(envelope.items.is_empty());
    }

    #[test]
    fn listing_decodes_items() {
        let envelope: ListEnvelope<Snapshot> = serde_json::from_str(
            r#"{
                "kind": "compute#snapshotList",
                "items": [
                    {
                        "name": "data-disk-001",
                        "creationTimestamp": "2024-05-01T12:00:00.000-07:00",
                        "diskSizeGb": "200",
                        "status": "READY"
                    }
                ]
            }"#,
        )
        .expect("decode envelope");
        assert_eq!(envelope.items.len(), 1);
        assert_eq!(envelope.items[0].name, "data-disk-001");
        assert_eq!(envelope.items[0].disk_size_gb, "200");
    }
}
