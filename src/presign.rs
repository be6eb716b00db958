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

//! The presigning pipeline: list keys, sign each one, assemble the response.

use futures_util::future::try_join_all;
use http::Method;

use crate::config::Config;
use crate::error::Error;
use crate::response::Response;
use crate::s3::response::PresignedRequest;
use crate::store::ObjectStore;

/// Lists the keys under `prefix`, dropping a key equal to the prefix itself.
///
/// Only the first page of the listing is used.
pub async fn get_object_keys<S>(store: &S, bucket: &str, prefix: &str) -> Result<Vec<String>, Error>
where
    S: ObjectStore + ?Sized,
{
    let keys = store
        .list_object_keys(bucket, prefix)
        .await
        .map_err(|source| Error::Listing {
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
            source,
        })?;

    Ok(keys.into_iter().filter(|key| key != prefix).collect())
}

/// Presigns a GET of `key`, valid for `lifetime` seconds.
pub async fn get_presigned_url<S>(
    store: &S,
    bucket: &str,
    key: &str,
    lifetime: u32,
) -> Result<PresignedRequest, Error>
where
    S: ObjectStore + ?Sized,
{
    store
        .presign_get_object(bucket, key, lifetime)
        .await
        .map_err(|source| Error::Signing {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source,
        })
}

/// Presigns every key; the result is in key order, and the first failure
/// fails the whole batch.
pub async fn get_presigned_urls<S>(
    store: &S,
    bucket: &str,
    keys: &[String],
    lifetime: u32,
) -> Result<Vec<PresignedRequest>, Error>
where
    S: ObjectStore + ?Sized,
{
    try_join_all(
        keys.iter()
            .map(|key| get_presigned_url(store, bucket, key, lifetime)),
    )
    .await
}

pub fn format_response(
    requests: &[PresignedRequest],
    bucket: &str,
    prefix: &str,
    method: &Method,
) -> Response {
    Response::new(
        bucket,
        prefix,
        method.as_str(),
        requests.iter().map(|r| r.url.clone()).collect(),
    )
}

/// Runs the whole pipeline for `config` against `store`.
pub async fn get_presigned_test_images<S>(config: &Config, store: &S) -> Result<Response, Error>
where
    S: ObjectStore + ?Sized,
{
    let bucket = config.bucket_name();
    let prefix = config.prefix();

    let keys = get_object_keys(store, bucket, prefix).await?;
    log::info!("found {} objects in s3://{bucket}/{prefix}", keys.len());

    let requests = get_presigned_urls(store, bucket, &keys, config.lifetime_secs()).await?;
    log::debug!(
        "presigned {} URLs valid for {} seconds",
        requests.len(),
        config.lifetime_secs()
    );

    Ok(format_response(&requests, bucket, prefix, &Method::GET))
}
