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

use bytes::Bytes;
use http::StatusCode;
use presign_common::utils::get_response_from_bytes;
use presigned_test_images::s3::response::ListObjectsV2Response;

const LISTING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>assets</Name>
  <Prefix>images%2F</Prefix>
  <KeyCount>5</KeyCount>
  <MaxKeys>1000</MaxKeys>
  <EncodingType>url</EncodingType>
  <IsTruncated>false</IsTruncated>
  <Contents><Key>images%2F</Key><Size>0</Size></Contents>
  <Contents><Key>images%2Fz.png</Key><Size>11</Size></Contents>
  <Contents><Key>images%2Fcats%2Fa%2Bb.png</Key><Size>12</Size></Contents>
  <Contents><Key>images%2Fmy+cat.png</Key><Size>14</Size></Contents>
  <Contents><Key>images%2Fa.png</Key><Size>13</Size></Contents>
</ListBucketResult>"#;

#[tokio::test]
async fn list_objects_v2_from_response() {
    let resp = get_response_from_bytes(
        StatusCode::OK,
        "application/xml",
        Bytes::from_static(LISTING.as_bytes()),
    );

    let listing = ListObjectsV2Response::from_response(resp).await.unwrap();
    assert_eq!(listing.name, "assets");
    assert_eq!(listing.prefix, "images/");
    assert_eq!(listing.key_count, Some(5));
    assert!(!listing.is_truncated);
    assert_eq!(
        listing.keys,
        vec![
            "images/",
            "images/z.png",
            "images/cats/a+b.png",
            "images/my cat.png",
            "images/a.png"
        ]
    );
}

#[tokio::test]
async fn list_objects_v2_rejects_malformed_body() {
    let resp = get_response_from_bytes(
        StatusCode::OK,
        "application/xml",
        Bytes::from_static(b"<ListBucketResult><Name>"),
    );
    assert!(ListObjectsV2Response::from_response(resp).await.is_err());
}
