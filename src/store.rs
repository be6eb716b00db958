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

//! The object-storage capabilities the presigning pipeline depends on.

use std::sync::Arc;

use async_trait::async_trait;
use http::Method;

use crate::s3::S3Client;
use crate::s3::error::Error;
use crate::s3::response::PresignedRequest;

/// Listing and signing, as offered by an object-storage backend.
///
/// [`S3Client`] is the production implementation; tests substitute a
/// recording double.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Keys under `prefix` in `bucket`, first page only, in backend order.
    async fn list_object_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, Error>;

    /// A presigned GET for one object, valid for `expires` seconds from issuance.
    async fn presign_get_object(
        &self,
        bucket: &str,
        key: &str,
        expires: u32,
    ) -> Result<PresignedRequest, Error>;
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn list_object_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, Error> {
        Ok(self.list_objects_v2(bucket, prefix).await?.keys)
    }

    async fn presign_get_object(
        &self,
        bucket: &str,
        key: &str,
        expires: u32,
    ) -> Result<PresignedRequest, Error> {
        self.get_presigned_object_url(Method::GET, bucket, key, expires)
    }
}

#[async_trait]
impl<T: ObjectStore + ?Sized> ObjectStore for Arc<T> {
    async fn list_object_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, Error> {
        (**self).list_object_keys(bucket, prefix).await
    }

    async fn presign_get_object(
        &self,
        bucket: &str,
        key: &str,
        expires: u32,
    ) -> Result<PresignedRequest, Error> {
        (**self).presign_get_object(bucket, key, expires).await
    }
}
