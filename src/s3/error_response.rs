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

use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use xmltree::Element;

/// Typed form of the `<Error>` document S3 returns with a failed request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct S3ErrorResponse {
    status: u16,
    code: String,
    message: Option<String>,
    resource: String,
    request_id: String,
    host_id: String,
    bucket_name: Option<String>,
    object_name: Option<String>,
}

impl S3ErrorResponse {
    pub fn new_from_body(status: u16, body: Bytes) -> Result<Self, ValidationErr> {
        let root = Element::parse(body.reader())?;
        Ok(Self {
            status,
            code: get_text_default(&root, "Code"),
            message: get_text_option(&root, "Message"),
            resource: get_text_default(&root, "Resource"),
            request_id: get_text_default(&root, "RequestId"),
            host_id: get_text_default(&root, "HostId"),
            bucket_name: get_text_option(&root, "BucketName"),
            object_name: get_text_option(&root, "Key"),
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }
    pub fn code(&self) -> &str {
        &self.code
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn resource(&self) -> &str {
        &self.resource
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn bucket_name(&self) -> Option<&str> {
        self.bucket_name.as_deref()
    }
    pub fn object_name(&self) -> Option<&str> {
        self.object_name.as_deref()
    }
}

impl std::fmt::Display for S3ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "S3 operation failed; status: {}, code: {}, message: {}, resource: {}, request_id: {}, host_id: {}",
            self.status,
            self.code,
            self.message.as_deref().unwrap_or_default(),
            self.resource,
            self.request_id,
            self.host_id,
        )
    }
}

impl std::error::Error for S3ErrorResponse {}
