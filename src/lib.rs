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

//! # presigned-test-images
//!
//! Lists the objects under a prefix in an S3 (or S3-compatible) bucket and
//! returns a time-limited presigned GET URL for each of them, so a front end
//! or a test harness can read a fixed set of objects without holding
//! credentials.
//!
//! The pipeline lives in [`presign`]; it talks to storage only through the
//! [`store::ObjectStore`] trait, implemented by [`s3::S3Client`].
//!
//! ## Basic Usage
//!
//! ```no_run
//! use presigned_test_images::config::{Config, StorageConfig};
//! use presigned_test_images::presign::get_presigned_test_images;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let client = StorageConfig::from_env()?.build_client()?;
//!     let config = Config::new("assets", "images/").lifetime(600);
//!
//!     let response = get_presigned_test_images(&config, &client).await?;
//!     for url in response.presigned_urls() {
//!         println!("{url}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Entry points
//! - [`presign::get_presigned_test_images`] for library callers
//! - `presign-urls`, a console binary driven by `S3_TEST_*` variables
//! - [`handler::Handler`] and the `presign-handler` binary for
//!   serverless-style invocation

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]

pub mod config;
pub mod error;
pub mod handler;
pub mod presign;
pub mod response;
pub mod s3;
pub mod store;

pub use config::{Config, StorageConfig};
pub use error::{ConfigError, Error};
pub use handler::Handler;
pub use response::Response;
pub use store::ObjectStore;
