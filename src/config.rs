// presigned-test-images: presigned GET URLs for objects under an S3 prefix
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration resolved from environment variables
//!
//! Resolution goes through a lookup function so callers can supply any
//! source of variables; `from_env` is the process-environment wrapper.

use crate::error::ConfigError;
use crate::s3::S3Client;
use crate::s3::client::DEFAULT_EXPIRY_SECONDS;
use crate::s3::creds::StaticProvider;
use crate::s3::http::BaseUrl;

pub const ENV_BUCKET_NAME: &str = "S3_TEST_BUCKET_NAME";
pub const ENV_PREFIX: &str = "S3_TEST_PREFIX";
pub const ENV_LIFETIME: &str = "S3_TEST_LIFETIME";

pub const ENV_ENDPOINT: &str = "S3_ENDPOINT";
/// Region override. `AWS_REGION` is ignored; it names the runtime's region,
/// not the bucket's.
pub const ENV_REGION: &str = "S3_REGION";

/// Lifetime of every presigned URL when `S3_TEST_LIFETIME` is unset or not a number.
pub const DEFAULT_LIFETIME_SECS: u32 = DEFAULT_EXPIRY_SECONDS;

/// Region the storage client signs for unless overridden.
pub const DEFAULT_STORAGE_REGION: &str = "us-west-1";

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

/// What to list and how long the resulting URLs stay valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    bucket_name: String,
    prefix: String,
    lifetime: u32,
}

impl Config {
    pub fn new<B: Into<String>, P: Into<String>>(bucket_name: B, prefix: P) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            prefix: prefix.into(),
            lifetime: DEFAULT_LIFETIME_SECS,
        }
    }

    /// URL lifetime in seconds.
    pub fn lifetime(mut self, lifetime: u32) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn lifetime_secs(&self) -> u32 {
        self.lifetime
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Resolves the configuration through `lookup`.
    ///
    /// Bucket name and prefix are required, in that order. A lifetime that
    /// is missing or does not parse as an unsigned 32-bit number falls back
    /// to [`DEFAULT_LIFETIME_SECS`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket_name = required(&lookup, ENV_BUCKET_NAME)?;
        let prefix = required(&lookup, ENV_PREFIX)?;

        let lifetime = match lookup(ENV_LIFETIME) {
            None => DEFAULT_LIFETIME_SECS,
            Some(raw) => match raw.parse::<u32>() {
                Ok(v) => v,
                Err(e) => {
                    log::warn!(
                        "{ENV_LIFETIME}={raw:?} is not a valid lifetime ({e}); using {DEFAULT_LIFETIME_SECS} seconds"
                    );
                    DEFAULT_LIFETIME_SECS
                }
            },
        };

        Ok(Self {
            bucket_name,
            prefix,
            lifetime,
        })
    }
}

/// Where the storage service lives and how to authenticate to it.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub endpoint: BaseUrl,
    pub region: String,
    /// `None` means anonymous access.
    pub provider: Option<StaticProvider>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: BaseUrl::default(),
            region: DEFAULT_STORAGE_REGION.to_string(),
            provider: None,
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Resolves endpoint, region and credentials through `lookup`; every
    /// variable is optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let endpoint = match non_empty(ENV_ENDPOINT) {
            Some(raw) => raw
                .trim()
                .parse::<BaseUrl>()
                .map_err(ConfigError::InvalidEndpoint)?,
            None => BaseUrl::default(),
        };
        let region = non_empty(ENV_REGION)
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_STORAGE_REGION.to_string());
        let provider = StaticProvider::from_lookup(&lookup);
        if provider.is_none() {
            log::info!("no AWS credentials found; using anonymous access");
        }

        Ok(Self {
            endpoint,
            region,
            provider,
        })
    }

    /// Builds the S3 client this configuration describes.
    pub fn build_client(&self) -> Result<S3Client, ConfigError> {
        S3Client::builder(self.endpoint.clone())
            .region(self.region.clone())
            .provider(self.provider.clone())
            .build()
            .map_err(ConfigError::Client)
    }
}
