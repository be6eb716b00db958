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

//! Signature V4 for S3 API
//!
//! Two flavours are provided: [`sign_v4_s3`] puts the signature in the
//! `Authorization` header of a request about to be sent, [`presign_v4`] puts
//! it in the query string so the URL can be handed to someone else.

use crate::s3::creds::Credentials;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{UtcTime, sha256_hash, to_amz_date, to_signer_date};
use hmac::{Hmac, Mac};
use http::Method;
use sha2::Sha256;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE_NAME: &str = "s3";
const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Returns HMAC hash for given key and data
pub fn hmac_hash(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Date, region and service a signature is bound to.
#[derive(Clone, Copy, Debug)]
struct Scope<'a> {
    date: UtcTime,
    region: &'a str,
    service: &'a str,
}

impl Scope<'_> {
    /// `<yyyymmdd>/<region>/<service>/aws4_request`
    fn credential_scope(&self) -> String {
        format!(
            "{}/{}/{}/aws4_request",
            to_signer_date(self.date),
            self.region,
            self.service
        )
    }

    fn signing_key(&self, secret_key: &str) -> Vec<u8> {
        let date_key = hmac_hash(
            format!("AWS4{secret_key}").as_bytes(),
            to_signer_date(self.date).as_bytes(),
        );
        let region_key = hmac_hash(&date_key, self.region.as_bytes());
        let service_key = hmac_hash(&region_key, self.service.as_bytes());
        hmac_hash(&service_key, b"aws4_request")
    }

    fn string_to_sign(&self, canonical_request_hash: &str) -> String {
        format!(
            "{ALGORITHM}\n{}\n{}\n{canonical_request_hash}",
            to_amz_date(self.date),
            self.credential_scope(),
        )
    }

    /// Hex encoded signature over the given canonical request hash
    fn sign(&self, secret_key: &str, canonical_request_hash: &str) -> String {
        let signing_key = self.signing_key(secret_key);
        hex::encode(hmac_hash(
            &signing_key,
            self.string_to_sign(canonical_request_hash).as_bytes(),
        ))
    }
}

/// Returns hex encoded SHA256 hash of canonical request
fn get_canonical_request_hash(
    method: &Method,
    uri: &str,
    query_string: &str,
    headers: &str,
    signed_headers: &str,
    content_sha256: &str,
) -> String {
    // CanonicalRequest =
    //   HTTPRequestMethod + '\n' +
    //   CanonicalURI + '\n' +
    //   CanonicalQueryString + '\n' +
    //   CanonicalHeaders + '\n\n' +
    //   SignedHeaders + '\n' +
    //   HexEncode(Hash(RequestPayload))
    let canonical_request =
        format!("{method}\n{uri}\n{query_string}\n{headers}\n\n{signed_headers}\n{content_sha256}");
    sha256_hash(canonical_request.as_bytes())
}

/// Signs and updates headers for given parameters for S3 request
///
/// `headers` must already carry `Host`, `x-amz-date` and
/// `x-amz-content-sha256`; the `Authorization` header is added.
pub fn sign_v4_s3(
    method: &Method,
    uri: &str,
    region: &str,
    headers: &mut Multimap,
    query_params: &Multimap,
    creds: &Credentials,
    content_sha256: &str,
    date: UtcTime,
) {
    let scope = Scope {
        date,
        region,
        service: SERVICE_NAME,
    };
    let (signed_headers, canonical_headers) = headers.get_canonical_headers();
    let canonical_request_hash = get_canonical_request_hash(
        method,
        uri,
        &query_params.get_canonical_query_string(),
        &canonical_headers,
        &signed_headers,
        content_sha256,
    );
    let signature = scope.sign(&creds.secret_key, &canonical_request_hash);

    headers.add(
        AUTHORIZATION,
        format!(
            "{ALGORITHM} Credential={}/{}, SignedHeaders={signed_headers}, Signature={signature}",
            creds.access_key,
            scope.credential_scope(),
        ),
    );
}

/// Adds the presigning parameters and the signature to `query_params`
///
/// Only the `host` header is signed; the payload is `UNSIGNED-PAYLOAD`.
/// A session token, if any, is added as `X-Amz-Security-Token` before signing.
pub fn presign_v4(
    method: &Method,
    host: &str,
    uri: &str,
    region: &str,
    query_params: &mut Multimap,
    creds: &Credentials,
    date: UtcTime,
    expires: u32,
) {
    let scope = Scope {
        date,
        region,
        service: SERVICE_NAME,
    };
    let signed_headers = "host";

    query_params.add(X_AMZ_ALGORITHM, ALGORITHM);
    query_params.add(
        X_AMZ_CREDENTIAL,
        format!("{}/{}", creds.access_key, scope.credential_scope()),
    );
    query_params.add(X_AMZ_DATE_QUERY, to_amz_date(date));
    query_params.add(X_AMZ_EXPIRES, expires.to_string());
    query_params.add(X_AMZ_SIGNED_HEADERS, signed_headers);
    if let Some(token) = &creds.session_token {
        query_params.add(X_AMZ_SECURITY_TOKEN_QUERY, token.as_str());
    }

    let canonical_request_hash = get_canonical_request_hash(
        method,
        uri,
        &query_params.get_canonical_query_string(),
        &format!("host:{host}"),
        signed_headers,
        UNSIGNED_PAYLOAD,
    );
    let signature = scope.sign(&creds.secret_key, &canonical_request_hash);

    query_params.add(X_AMZ_SIGNATURE, signature);
}
