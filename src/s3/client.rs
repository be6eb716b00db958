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

//! S3 client covering the two operations the presigner needs: a one-page
//! ListObjectsV2 and query-string presigning.

use std::sync::Arc;

use http::Method;

use crate::s3::creds::Provider;
use crate::s3::error::{Error, S3ServerError, ValidationErr};
use crate::s3::error_response::S3ErrorResponse;
use crate::s3::header_constants::*;
use crate::s3::http::BaseUrl;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::{ListObjectsV2Response, PresignedRequest};
use crate::s3::signer::{presign_v4, sign_v4_s3};
use crate::s3::utils::{
    EMPTY_SHA256, UtcTime, check_bucket_name, check_object_name, to_amz_date, utc_now,
};

/// The default AWS region to be used if no other region is specified.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Lifetime of a presigned URL when the caller does not choose one.
pub const DEFAULT_EXPIRY_SECONDS: u32 = 3600;

/// Longest lifetime S3 accepts for a SigV4 presigned URL (7 days).
pub const MAX_EXPIRY_SECONDS: u32 = 604_800;

/// Client Builder manufactures an [`S3Client`] using given parameters.
#[derive(Debug)]
pub struct S3ClientBuilder {
    base_url: BaseUrl,
    region: String,
    /// Set the credential provider. If not set, anonymous access is used.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}

impl S3ClientBuilder {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            region: DEFAULT_REGION.to_string(),
            provider: None,
        }
    }

    /// Region every request is signed for.
    pub fn region<S: Into<String>>(mut self, region: S) -> Self {
        self.region = region.into();
        self
    }

    /// Set the credential provider. If not, anonymous access is used.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<S3Client, Error> {
        let user_agent = format!(
            "presigned-test-images ({}; {}) presigned-test-images/{}",
            std::env::consts::OS,
            std::env::consts::ARCH,
            env!("CARGO_PKG_VERSION")
        );

        let http_client = reqwest::Client::builder()
            .no_gzip()
            .user_agent(user_agent)
            .build()
            .map_err(ValidationErr::HttpClient)?;

        Ok(S3Client {
            http_client,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                region: self.region,
                provider: self.provider,
            }),
        })
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) region: String,
    pub(crate) provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}

/// Simple Storage Service (aka S3) client.
///
/// If a credential provider is set, list requests are signed with AWS
/// Signature Version 4; else they are sent anonymously. Presigning always
/// needs credentials.
#[derive(Clone, Debug)]
pub struct S3Client {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl S3Client {
    pub fn builder(base_url: BaseUrl) -> S3ClientBuilder {
        S3ClientBuilder::new(base_url)
    }

    pub fn region(&self) -> &str {
        &self.shared.region
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Lists the first page of objects in `bucket` whose keys start with `prefix`.
    ///
    /// No continuation: a truncated listing is returned as is, with
    /// `is_truncated` set.
    pub async fn list_objects_v2(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<ListObjectsV2Response, Error> {
        check_bucket_name(bucket)?;

        let resp = self
            .execute(Method::GET, &list_objects_v2_query(prefix), bucket, None)
            .await?;
        let listing = ListObjectsV2Response::from_response(resp).await?;

        let listed = listing.key_count.unwrap_or(listing.keys.len() as u32);
        log::debug!("listed {listed} keys from bucket {}", listing.name);
        if listing.is_truncated {
            log::warn!(
                "listing of s3://{bucket}/{} is truncated after {listed} keys; continuation token {} is not followed",
                listing.prefix,
                listing.next_continuation_token.as_deref().unwrap_or("<none>"),
            );
        }
        Ok(listing)
    }

    /// Presigns a request for `object` in `bucket`, valid for `expires` seconds from now.
    pub fn get_presigned_object_url(
        &self,
        method: Method,
        bucket: &str,
        object: &str,
        expires: u32,
    ) -> Result<PresignedRequest, Error> {
        self.presign_at(method, bucket, object, expires, utc_now())
    }

    /// Same as [`get_presigned_object_url`](Self::get_presigned_object_url) with
    /// an explicit issuance time.
    pub fn presign_at(
        &self,
        method: Method,
        bucket: &str,
        object: &str,
        expires: u32,
        request_time: UtcTime,
    ) -> Result<PresignedRequest, Error> {
        check_bucket_name(bucket)?;
        check_object_name(object)?;
        if expires == 0 || expires > MAX_EXPIRY_SECONDS {
            return Err(ValidationErr::InvalidExpiry(expires).into());
        }
        let provider = self
            .shared
            .provider
            .as_ref()
            .ok_or(ValidationErr::MissingCredentials)?;
        let creds = provider.fetch();

        let region = self.shared.region.clone();
        let mut url = self
            .shared
            .base_url
            .build_url(&region, &Multimap::new(), bucket, Some(object))?;

        let mut query_params = Multimap::new();
        presign_v4(
            &method,
            &url.host_header_value(),
            &url.path,
            &region,
            &mut query_params,
            &creds,
            request_time,
            expires,
        );
        url.query = query_params;

        Ok(PresignedRequest {
            url: url.to_string(),
            method,
            region,
            bucket: bucket.to_string(),
            object: object.to_string(),
            expires,
        })
    }

    /// Builds the request for an S3 call, signed for `date` when credentials exist.
    pub(crate) fn new_request(
        &self,
        method: Method,
        query_params: &Multimap,
        bucket: &str,
        object: Option<&str>,
        date: UtcTime,
    ) -> Result<reqwest::Request, Error> {
        let region = &self.shared.region;
        let url = self
            .shared
            .base_url
            .build_url(region, query_params, bucket, object)?;

        let mut headers = Multimap::new();
        headers.add(HOST, url.host_header_value());
        headers.add(X_AMZ_CONTENT_SHA256, EMPTY_SHA256);

        if let Some(p) = &self.shared.provider {
            let creds = p.fetch();
            headers.add(X_AMZ_DATE, to_amz_date(date));
            if let Some(token) = &creds.session_token {
                headers.add(X_AMZ_SECURITY_TOKEN, token.as_str());
            }
            sign_v4_s3(
                &method,
                &url.path,
                region,
                &mut headers,
                query_params,
                &creds,
                EMPTY_SHA256,
                date,
            );
        }

        let mut req = self.http_client.request(method, url.to_string());
        for (key, values) in headers.iter_all() {
            // reqwest derives Host from the URL
            if key == HOST {
                continue;
            }
            for value in values {
                req = req.header(key.as_str(), value.as_str());
            }
        }
        Ok(req.build()?)
    }

    async fn execute(
        &self,
        method: Method,
        query_params: &Multimap,
        bucket: &str,
        object: Option<&str>,
    ) -> Result<reqwest::Response, Error> {
        let req = self.new_request(method, query_params, bucket, object, utc_now())?;
        log::debug!("{} {}", req.method(), req.url());

        let resp = self.http_client.execute(req).await?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        Err(Self::server_error(resp).await)
    }

    /// Maps a failed response to an S3 error document, or to the bare HTTP
    /// status when the body is not one.
    pub(crate) async fn server_error(resp: reqwest::Response) -> Error {
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = match resp.bytes().await {
            Ok(b) => b,
            Err(e) => return e.into(),
        };

        match S3ErrorResponse::new_from_body(status, body) {
            Ok(er) if !er.code().is_empty() => S3ServerError::S3Error(Box::new(er)).into(),
            _ => S3ServerError::HttpError(status, content_type).into(),
        }
    }
}

/// Query of a one-page ListObjectsV2 call.
fn list_objects_v2_query(prefix: &str) -> Multimap {
    let mut query_params = Multimap::new();
    query_params.add("list-type", "2");
    query_params.add("prefix", prefix);
    query_params.add("encoding-type", "url");
    query_params
}
