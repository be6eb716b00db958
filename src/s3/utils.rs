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

//! Various utility and helper functions

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use sha2::{Digest, Sha256};
use xmltree::Element;

use crate::s3::error::ValidationErr;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// SHA256 of an empty payload, sent with every bodiless request
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Percent-encodes everything except the SigV4 unreserved set
pub fn url_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

pub fn url_decode(s: &str) -> Result<String, ValidationErr> {
    Ok(urlencoding::decode(s)?.into_owned())
}

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Encodes an object key for use as a URL path; `/` separators are kept.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Validates given bucket name against the naming rules S3-compatible
/// servers accept (uppercase, `_` and `:` are tolerated).
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    let invalid = |reason: &str| ValidationErr::InvalidBucketName {
        name: bucket_name.to_string(),
        reason: reason.to_string(),
    };

    if bucket_name.trim().is_empty() {
        return Err(invalid("bucket name cannot be empty"));
    }
    if bucket_name.len() < 3 {
        return Err(invalid("bucket name cannot be less than 3 characters"));
    }
    if bucket_name.len() > 63 {
        return Err(invalid("bucket name cannot be greater than 63 characters"));
    }

    lazy_static! {
        static ref IPV4_REGEX: Regex = Regex::new(r"^((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$").unwrap();
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[A-Za-z0-9][A-Za-z0-9\\.\\-_:]{1,61}[A-Za-z0-9]$").unwrap();
    }

    if IPV4_REGEX.is_match(bucket_name) {
        return Err(invalid("bucket name cannot be an IP address"));
    }
    if bucket_name.contains("..") || bucket_name.contains(".-") || bucket_name.contains("-.") {
        return Err(invalid(
            "bucket name contains invalid successive characters '..', '.-' or '-.'",
        ));
    }

    if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        return Err(invalid("bucket name does not follow S3 standards"));
    }

    Ok(())
}

pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if object_name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    if object_name.len() > 1024 {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name '{object_name}' exceeds 1024 bytes"
        )));
    }
    Ok(())
}

/// Gets text of the named child, or an empty string when absent.
pub fn get_text_default(element: &Element, tag: &str) -> String {
    element.get_child(tag).map_or(String::new(), |v| {
        v.get_text().unwrap_or_default().to_string()
    })
}

pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

pub fn get_text_result(element: &Element, tag: &str) -> Result<String, ValidationErr> {
    Ok(element
        .get_child(tag)
        .ok_or(ValidationErr::XmlError(format!("<{tag}> tag not found")))?
        .get_text()
        .ok_or(ValidationErr::XmlError(format!(
            "text of <{tag}> tag not found"
        )))?
        .to_string())
}
