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

//! Errors of the presigning pipeline
//!
//! Every variant is fatal: there is no retry and no partial result.

use crate::s3;
use crate::s3::error::ValidationErr;
use thiserror::Error;

/// Configuration could not be resolved; raised before any backend call.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is required")]
    MissingVar(&'static str),

    #[error("invalid storage endpoint: {0}")]
    InvalidEndpoint(#[source] ValidationErr),

    #[error("could not build storage client: {0}")]
    Client(#[source] s3::error::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to list objects in bucket {bucket} with prefix {prefix}: {source}")]
    Listing {
        bucket: String,
        prefix: String,
        #[source]
        source: s3::error::Error,
    },

    #[error("failed to generate presigned URL for key {key} in bucket {bucket}: {source}")]
    Signing {
        bucket: String,
        key: String,
        #[source]
        source: s3::error::Error,
    },

    #[error("error marshalling response to JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}
