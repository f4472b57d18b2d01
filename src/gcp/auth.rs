use std::path::Path;

use anyhow::{Context, Result, bail};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// OAuth scope granting access to the Compute Engine API.
const COMPUTE_SCOPE: &str = "https://www.googleapis.com/auth/compute";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime in seconds (the maximum the token endpoint accepts).
const TOKEN_LIFETIME_SECS: i64 = 3600;

/// The fields of a service-account JSON key file this tool uses.
/// Key files carry more fields; the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    pub token_uri: String,
}

impl ServiceAccountKey {
    /// Read and parse a service-account key file.
    ///
    /// # Errors
    /// Returns an error if the file is missing or not a valid key JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read service account key {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("malformed service account key {}", path.display()))
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange a signed JWT assertion for a bearer access token.
///
/// # Errors
/// Returns an error if the private key is not valid RSA PEM, the token
/// endpoint is unreachable, or it rejects the assertion.
pub fn fetch_access_token(
    http: &reqwest::blocking::Client,
    key: &ServiceAccountKey,
) -> Result<String> {
    let iat = time::OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        iss: &key.client_email,
        scope: COMPUTE_SCOPE,
        aud: &key.token_uri,
        iat,
        exp: iat + TOKEN_LIFETIME_SECS,
    };

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .context("service account private key is not valid RSA PEM")?;
    let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
        .context("failed to sign token assertion")?;

    debug!(token_uri = %key.token_uri, "requesting access token");
    let response = http
        .post(&key.token_uri)
        .form(&[
            ("grant_type", JWT_BEARER_GRANT),
            ("assertion", assertion.as_str()),
        ])
        .send()
        .with_context(|| format!("token request to {} failed", key.token_uri))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        bail!("token endpoint returned {status}: {body}");
    }

    let token: TokenResponse = response.json().context("malformed token response")?;
    Ok(token.access_token)
}
