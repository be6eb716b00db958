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

use std::collections::HashMap;

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use http::{Response as HttpResponse, StatusCode};
use presigned_test_images::s3::utils::UtcTime;

/// Issuance time used by every signature produced in tests.
pub fn fixed_time() -> UtcTime {
    Utc.with_ymd_and_hms(2024, 5, 24, 12, 0, 0).unwrap()
}

/// An environment lookup backed by `pairs` instead of the process environment.
pub fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + Send + Sync + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

pub fn get_response_from_bytes(status: StatusCode, content_type: &str, body: Bytes) -> reqwest::Response {
    let http_response = HttpResponse::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
        .expect("Failed to build HTTP response");

    reqwest::Response::try_from(http_response).expect("Failed to convert to reqwest::Response")
}
