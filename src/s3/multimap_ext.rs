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

use crate::s3::utils::url_encode;
use std::collections::BTreeMap;

/// Multimap for string key and string value; used for both headers and query parameters
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Converts multimap to canonical query string: keys sorted, values sorted per key.
    /// Also used as the query of every URL this crate renders, so output is stable.
    fn get_canonical_query_string(&self) -> String;

    /// Converts multimap to (signed headers, canonical headers)
    fn get_canonical_headers(&self) -> (String, String);
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn get_canonical_query_string(&self) -> String {
        let mut sorted: BTreeMap<String, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(url_encode(key))
                .or_default()
                .extend(values.iter().map(|s| s.as_str()));
        }

        let mut query = String::new();
        for (key, mut values) in sorted {
            values.sort_unstable();
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&key);
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_headers(&self) -> (String, String) {
        let mut btmap: BTreeMap<String, String> = BTreeMap::new();

        for (k, values) in self.iter_all() {
            let key = k.to_lowercase();
            if key == "authorization" || key == "user-agent" {
                continue;
            }

            let mut vs: Vec<&String> = values.iter().collect();
            vs.sort();
            let value = vs
                .into_iter()
                .map(|v| v.split_whitespace().collect::<Vec<_>>().join(" "))
                .collect::<Vec<_>>()
                .join(",");
            btmap.insert(key, value);
        }

        let signed_headers = btmap.keys().cloned().collect::<Vec<_>>().join(";");
        let canonical_headers = btmap
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join("\n");

        (signed_headers, canonical_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_query_string_is_sorted_and_encoded() {
        let mut query = Multimap::new();
        query.add("prefix", "images/");
        query.add("list-type", "2");
        query.add("encoding-type", "url");
        assert_eq!(
            query.get_canonical_query_string(),
            "encoding-type=url&list-type=2&prefix=images%2F"
        );
    }

    #[test]
    fn test_canonical_query_string_empty() {
        assert_eq!(Multimap::new().get_canonical_query_string(), "");
    }

    #[test]
    fn test_canonical_headers_lowercase_and_skip_authorization() {
        let mut headers = Multimap::new();
        headers.add("Host", "assets.s3.us-west-1.amazonaws.com");
        headers.add("X-Amz-Date", "20130524T000000Z");
        headers.add("Authorization", "ignored");
        headers.add("User-Agent", "ignored");
        headers.add("x-amz-meta-note", "  two   spaces  ");

        let (signed, canonical) = headers.get_canonical_headers();
        assert_eq!(signed, "host;x-amz-date;x-amz-meta-note");
        assert_eq!(
            canonical,
            "host:assets.s3.us-west-1.amazonaws.com\nx-amz-date:20130524T000000Z\nx-amz-meta-note:two spaces"
        );
    }
}
