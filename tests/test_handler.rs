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

use presign_common::RecordingStore;
use presign_common::utils::lookup_from;
use presigned_test_images::error::{ConfigError, Error};
use presigned_test_images::{Handler, Response};
use serde_json::json;

fn env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("S3_TEST_BUCKET_NAME", "assets"),
        ("S3_TEST_PREFIX", "images/"),
        ("S3_TEST_LIFETIME", "60"),
    ]
}

#[tokio::test]
async fn returns_pretty_json() {
    let store = RecordingStore::new(["images/", "images/a.png", "images/b.png"]);
    let handler = Handler::with_lookup(store, lookup_from(&env()));

    let body = handler.handle(json!({})).await.unwrap();
    assert!(body.starts_with("{\n  \"bucket_name\": \"assets\",\n  \"bucket_prefix\": \"images/\","));

    let response: Response = serde_json::from_str(&body).unwrap();
    assert_eq!(response.method(), "GET");
    assert_eq!(response.presigned_urls().len(), 2);
}

#[tokio::test]
async fn event_contents_are_ignored() {
    let events = [
        serde_json::Value::Null,
        json!({"Records": [{"s3": {"bucket": {"name": "other"}}}]}),
        json!([1, 2, 3]),
        json!("ping"),
    ];

    let mut bodies = Vec::new();
    for event in events {
        let handler = Handler::with_lookup(
            RecordingStore::new(["images/a.png"]),
            lookup_from(&env()),
        );
        bodies.push(handler.handle(event).await.unwrap());
    }
    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn missing_bucket_fails_before_any_store_call() {
    let handler = Handler::with_lookup(
        RecordingStore::new(["images/a.png"]),
        lookup_from(&[("S3_TEST_PREFIX", "images/")]),
    );

    let err = handler.handle(json!({})).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingVar("S3_TEST_BUCKET_NAME"))
    ));
    assert!(handler.store().calls().is_empty());
}

#[tokio::test]
async fn missing_prefix_fails_before_any_store_call() {
    let handler = Handler::with_lookup(
        RecordingStore::new(["images/a.png"]),
        lookup_from(&[("S3_TEST_BUCKET_NAME", "assets")]),
    );

    let err = handler.handle(json!({})).await.unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::MissingVar("S3_TEST_PREFIX"))));
    assert!(handler.store().calls().is_empty());
}

#[tokio::test]
async fn unparsable_lifetime_falls_back_to_default() {
    let handler = Handler::with_lookup(
        RecordingStore::new(["images/a.png"]),
        lookup_from(&[
            ("S3_TEST_BUCKET_NAME", "assets"),
            ("S3_TEST_PREFIX", "images/"),
            ("S3_TEST_LIFETIME", "abc"),
        ]),
    );

    let body = handler.handle(json!({})).await.unwrap();
    let response: Response = serde_json::from_str(&body).unwrap();
    assert!(response.presigned_urls()[0].contains("X-Amz-Expires=3600"));
}

#[tokio::test]
async fn signing_failure_fails_the_invocation() {
    let handler = Handler::with_lookup(
        RecordingStore::new(["images/a.png", "images/b.png", "images/c.png"])
            .failing_key("images/b.png"),
        lookup_from(&env()),
    );

    let err = handler.handle(json!({})).await.unwrap_err();
    assert!(matches!(err, Error::Signing { ref key, .. } if key == "images/b.png"));
}
