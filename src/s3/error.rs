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

//! Error definitions for the S3 client

use crate::s3::error_response::S3ErrorResponse;
use thiserror::Error;

/// Errors raised while validating arguments or decoding server payloads,
/// before or after the request is on the wire.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid bucket name '{name}': {reason}")]
    InvalidBucketName { name: String, reason: String },

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("URL build error: {0}")]
    UrlBuildError(String),

    #[error("invalid URI: {0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error("expiry {0} seconds is out of range; must be between 1 and {max}", max = crate::s3::client::MAX_EXPIRY_SECONDS)]
    InvalidExpiry(u32),

    #[error("credentials are required to presign a request")]
    MissingCredentials,

    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("XML error: {0}")]
    XmlError(String),

    #[error("URL decoding failed: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("integer parse error: {0}")]
    IntError(#[from] std::num::ParseIntError),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Transport level failures.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("network error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

/// Failures reported by the storage server.
#[derive(Error, Debug)]
pub enum S3ServerError {
    #[error("{0}")]
    S3Error(Box<S3ErrorResponse>),

    #[error("server failed with HTTP status code {0}; content-type: {1}")]
    HttpError(u16, String),
}

/// Top-level error of every S3 client operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("S3 server error: {0}")]
    S3Server(#[from] S3ServerError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::ReqwestError(err))
    }
}

impl From<xmltree::ParseError> for Error {
    fn from(err: xmltree::ParseError) -> Self {
        Error::Validation(ValidationErr::XmlParseError(err))
    }
}
