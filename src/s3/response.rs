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

//! Response types for S3 APIs

use bytes::{Buf, Bytes};
use http::Method;
use xmltree::{Element, XMLNode};

use crate::s3::error::{Error, ValidationErr};
use crate::s3::utils::{get_text_default, get_text_option, get_text_result, url_decode};

/// S3 form-encodes keys under `encoding-type=url`: a space arrives as `+`,
/// a literal plus as `%2B`.
fn decode_key(encoding_type: Option<&str>, value: String) -> Result<String, ValidationErr> {
    match encoding_type {
        Some("url") => url_decode(&value.replace('+', " ")),
        _ => Ok(value),
    }
}

/// Response of [list_objects_v2()](crate::s3::client::S3Client::list_objects_v2): one page only.
#[derive(Clone, Debug)]
pub struct ListObjectsV2Response {
    pub name: String,
    pub prefix: String,
    pub is_truncated: bool,
    pub key_count: Option<u32>,
    pub next_continuation_token: Option<String>,
    /// Object keys in the order the server listed them
    pub keys: Vec<String>,
}

impl ListObjectsV2Response {
    /// Reads a `ListBucketResult` document, keeping `Contents/Key` in document order.
    pub fn from_xml(body: Bytes) -> Result<Self, Error> {
        let root = Element::parse(body.reader())?;
        let encoding_type = get_text_option(&root, "EncodingType");
        let encoding_type = encoding_type.as_deref();

        let keys = root
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .filter(|e| e.name == "Contents")
            .map(|content| decode_key(encoding_type, get_text_result(content, "Key")?))
            .collect::<Result<Vec<String>, ValidationErr>>()?;

        Ok(Self {
            name: get_text_result(&root, "Name")?,
            prefix: decode_key(encoding_type, get_text_default(&root, "Prefix"))?,
            is_truncated: get_text_default(&root, "IsTruncated").eq_ignore_ascii_case("true"),
            key_count: get_text_option(&root, "KeyCount")
                .map(|v| v.parse::<u32>())
                .transpose()
                .map_err(ValidationErr::from)?,
            next_continuation_token: get_text_option(&root, "NextContinuationToken"),
            keys,
        })
    }

    pub async fn from_response(resp: reqwest::Response) -> Result<Self, Error> {
        Self::from_xml(resp.bytes().await?)
    }
}

/// Result of presigning one object: a URL anyone can use until it expires.
#[derive(Clone, Debug, PartialEq)]
pub struct PresignedRequest {
    /// The fully qualified presigned URL.
    pub url: String,

    /// HTTP method the URL authorizes.
    pub method: Method,

    /// The AWS region the signature is scoped to.
    pub region: String,

    pub bucket: String,

    pub object: String,

    /// Lifetime in seconds, counted from issuance.
    pub expires: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>assets</Name>
  <Prefix>images%2F</Prefix>
  <KeyCount>3</KeyCount>
  <MaxKeys>1000</MaxKeys>
  <EncodingType>url</EncodingType>
  <IsTruncated>false</IsTruncated>
  <Contents><Key>images%2F</Key><Size>0</Size></Contents>
  <Contents><Key>images%2Fb%20c.png</Key><Size>10</Size></Contents>
  <Contents><Key>images%2Fa.png</Key><Size>20</Size></Contents>
</ListBucketResult>"#;

    #[test]
    fn test_from_xml_keeps_server_order_and_decodes() {
        let resp =
            ListObjectsV2Response::from_xml(Bytes::from_static(LISTING.as_bytes()))
                .unwrap();
        assert_eq!(resp.name, "assets");
        assert_eq!(resp.prefix, "images/");
        assert_eq!(resp.key_count, Some(3));
        assert!(!resp.is_truncated);
        assert_eq!(
            resp.keys,
            vec!["images/", "images/b c.png", "images/a.png"]
        );
    }

    #[test]
    fn test_from_xml_plus_is_a_space_under_url_encoding() {
        let body = r#"<ListBucketResult>
  <Name>assets</Name>
  <Prefix>images%2F</Prefix>
  <EncodingType>url</EncodingType>
  <Contents><Key>images%2Fa+b.png</Key></Contents>
  <Contents><Key>images%2Fa%2Bb.png</Key></Contents>
</ListBucketResult>"#;
        let resp = ListObjectsV2Response::from_xml(Bytes::from(body)).unwrap();
        assert_eq!(resp.keys, vec!["images/a b.png", "images/a+b.png"]);
    }

    #[test]
    fn test_from_xml_plus_kept_without_encoding() {
        let body = "<ListBucketResult><Name>assets</Name><Contents><Key>images/a+b.png</Key></Contents></ListBucketResult>";
        let resp = ListObjectsV2Response::from_xml(Bytes::from(body)).unwrap();
        assert_eq!(resp.keys, vec!["images/a+b.png"]);
    }

    #[test]
    fn test_from_xml_without_encoding_and_truncated() {
        let body = r#"<ListBucketResult>
  <Name>assets</Name>
  <Prefix>docs/</Prefix>
  <IsTruncated>true</IsTruncated>
  <NextContinuationToken>token-1</NextContinuationToken>
  <Contents><Key>docs/a%20b.txt</Key></Contents>
</ListBucketResult>"#;
        let resp =
            ListObjectsV2Response::from_xml(Bytes::from(body)).unwrap();
        assert!(resp.is_truncated);
        assert_eq!(resp.next_continuation_token.as_deref(), Some("token-1"));
        assert_eq!(resp.keys, vec!["docs/a%20b.txt"]);
        assert_eq!(resp.key_count, None);
    }

    #[test]
    fn test_from_xml_empty_listing() {
        let body = "<ListBucketResult><Name>assets</Name><Prefix>none/</Prefix><KeyCount>0</KeyCount></ListBucketResult>";
        let resp =
            ListObjectsV2Response::from_xml(Bytes::from(body)).unwrap();
        assert!(resp.keys.is_empty());
    }

    #[test]
    fn test_from_xml_missing_name_fails() {
        let body = "<ListBucketResult><Prefix>p/</Prefix></ListBucketResult>";
        assert!(ListObjectsV2Response::from_xml(Bytes::from(body)).is_err());
    }
}
