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

//! The record returned to callers: one presigned URL per listed object.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    bucket_name: String,
    bucket_prefix: String,
    method: String,
    presigned_urls: Vec<String>,
}

impl Response {
    pub fn new<B, P, M>(bucket_name: B, bucket_prefix: P, method: M, presigned_urls: Vec<String>) -> Self
    where
        B: Into<String>,
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            bucket_name: bucket_name.into(),
            bucket_prefix: bucket_prefix.into(),
            method: method.into(),
            presigned_urls,
        }
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn bucket_prefix(&self) -> &str {
        &self.bucket_prefix
    }

    /// HTTP method every URL authorizes.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// URLs in listing order.
    pub fn presigned_urls(&self) -> &[String] {
        &self.presigned_urls
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Two-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_names() {
        let response = Response::new("assets", "images/", "GET", vec!["https://u/1".into()]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "bucket_name": "assets",
                "bucket_prefix": "images/",
                "method": "GET",
                "presigned_urls": ["https://u/1"],
            })
        );
    }

    #[test]
    fn test_empty_urls_serialize_as_array() {
        let response = Response::new("assets", "images/", "GET", vec![]);
        assert_eq!(
            response.to_json().unwrap(),
            r#"{"bucket_name":"assets","bucket_prefix":"images/","method":"GET","presigned_urls":[]}"#
        );
    }

    #[test]
    fn test_pretty_uses_two_spaces() {
        let response = Response::new("assets", "images/", "GET", vec![]);
        let pretty = response.to_json_pretty().unwrap();
        assert!(pretty.starts_with("{\n  \"bucket_name\": \"assets\",\n"), "{pretty}");
        let parsed: Response = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, response);
    }
}
