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
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::urlencode_object_key;
use http::Uri;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    // s3.amazonaws.com, s3.<region>.amazonaws.com, s3-<region>.amazonaws.com and the .cn variants
    static ref AWS_S3_ENDPOINT_REGEX: Regex =
        Regex::new(r"^s3([.-][a-z0-9-]+)?\.amazonaws\.com(\.cn)?$").unwrap();
}

#[derive(Clone, Debug, PartialEq)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        f.write_str(if self.https { "https://" } else { "http://" })?;
        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.get_canonical_query_string())?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Represents Base URL of S3 endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    aws_domain_suffix: Option<String>,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: "s3.amazonaws.com".to_string(),
            port: 0,
            aws_domain_suffix: Some("amazonaws.com".to_string()),
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use presigned_test_images::s3::http::BaseUrl;
    ///
    /// let aws: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();
    /// assert!(aws.is_aws_host());
    /// let local: BaseUrl = "http://localhost:9000".parse().unwrap();
    /// assert!(!local.is_aws_host());
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(_) => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = url
            .host()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ValidationErr::InvalidBaseUrl("valid host must be provided".into()))?
            .to_lowercase();

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }
        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let aws_domain_suffix = if AWS_S3_ENDPOINT_REGEX.is_match(&host) {
            Some(if host.ends_with(".cn") {
                "amazonaws.com.cn".to_string()
            } else {
                "amazonaws.com".to_string()
            })
        } else if host.ends_with("amazonaws.com") || host.ends_with("amazonaws.com.cn") {
            return Err(ValidationErr::UrlBuildError(format!(
                "invalid Amazon AWS host {host}"
            )));
        } else {
            None
        };

        Ok(BaseUrl {
            https,
            host,
            port,
            aws_domain_suffix,
        })
    }
}

impl BaseUrl {
    /// Checks base URL is AWS host
    pub fn is_aws_host(&self) -> bool {
        self.aws_domain_suffix.is_some()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Builds URL from base URL for given parameters for S3 operation
    ///
    /// AWS endpoints are addressed as `<bucket>.s3.<region>.<suffix>`
    /// (virtual-hosted style) unless the bucket name contains a dot on HTTPS,
    /// which would break certificate validation. Other endpoints use path style.
    pub fn build_url(
        &self,
        region: &str,
        query: &Multimap,
        bucket_name: &str,
        object_name: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        if region.is_empty() && self.is_aws_host() {
            return Err(ValidationErr::UrlBuildError(
                "region must be provided for Amazon S3 endpoints".into(),
            ));
        }

        let mut url = Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: String::new(),
            query: query.clone(),
        };

        let mut virtual_style = false;
        if let Some(suffix) = &self.aws_domain_suffix {
            url.host = format!("s3.{region}.{suffix}");
            virtual_style = !(bucket_name.contains('.') && self.https);
        }

        if virtual_style {
            url.host = format!("{bucket_name}.{}", url.host);
        } else {
            url.path.push('/');
            url.path.push_str(bucket_name);
        }

        match object_name {
            Some(object) => {
                if !object.starts_with('/') {
                    url.path.push('/');
                }
                url.path.push_str(&urlencode_object_key(object));
            }
            None if url.path.is_empty() => url.path.push('/'),
            None => {}
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aws_endpoints() {
        for endpoint in [
            "https://s3.amazonaws.com",
            "s3.us-west-1.amazonaws.com",
            "https://s3-us-west-1.amazonaws.com",
            "https://s3.cn-north-1.amazonaws.com.cn",
        ] {
            let base_url: BaseUrl = endpoint.parse().unwrap();
            assert!(base_url.is_aws_host(), "{endpoint}");
            assert!(base_url.https, "{endpoint}");
        }
    }

    #[test]
    fn test_parse_rejects_bad_base_urls() {
        assert!("ftp://s3.amazonaws.com".parse::<BaseUrl>().is_err());
        assert!("http://localhost:9000/bucket".parse::<BaseUrl>().is_err());
        assert!("http://localhost:9000/?a=b".parse::<BaseUrl>().is_err());
        assert!("https://ec2.amazonaws.com".parse::<BaseUrl>().is_err());
    }

    #[test]
    fn test_default_ports_are_dropped() {
        let base_url: BaseUrl = "https://minio.example.com:443".parse().unwrap();
        let url = base_url
            .build_url("us-east-1", &Multimap::new(), "assets", None)
            .unwrap();
        assert_eq!(url.to_string(), "https://minio.example.com/assets");
    }

    #[test]
    fn test_build_url_virtual_style_for_aws() {
        let base_url = BaseUrl::default();
        let url = base_url
            .build_url("us-west-1", &Multimap::new(), "assets", Some("images/a b.png"))
            .unwrap();
        assert_eq!(url.host, "assets.s3.us-west-1.amazonaws.com");
        assert_eq!(url.path, "/images/a%20b.png");
        assert_eq!(
            url.to_string(),
            "https://assets.s3.us-west-1.amazonaws.com/images/a%20b.png"
        );
    }

    #[test]
    fn test_build_url_bucket_root_for_aws() {
        let url = BaseUrl::default()
            .build_url("us-west-1", &Multimap::new(), "assets", None)
            .unwrap();
        assert_eq!(url.to_string(), "https://assets.s3.us-west-1.amazonaws.com/");
    }

    #[test]
    fn test_build_url_path_style_for_dotted_bucket() {
        let url = BaseUrl::default()
            .build_url("us-west-1", &Multimap::new(), "my.assets", Some("a.png"))
            .unwrap();
        assert_eq!(url.host, "s3.us-west-1.amazonaws.com");
        assert_eq!(url.path, "/my.assets/a.png");
    }

    #[test]
    fn test_build_url_path_style_for_custom_endpoint() {
        let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
        let url = base_url
            .build_url("us-east-1", &Multimap::new(), "assets", Some("images/b.png"))
            .unwrap();
        assert_eq!(url.host_header_value(), "localhost:9000");
        assert_eq!(url.to_string(), "http://localhost:9000/assets/images/b.png");
    }

    #[test]
    fn test_build_url_requires_region_for_aws() {
        assert!(
            BaseUrl::default()
                .build_url("", &Multimap::new(), "assets", None)
                .is_err()
        );
    }
}
