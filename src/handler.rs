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

//! Serverless-style entry point: one event in, one JSON document out.

use std::fmt;

use crate::config::Config;
use crate::error::Error;
use crate::presign::get_presigned_test_images;
use crate::store::ObjectStore;

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Runs the pipeline once per invocation against a long-lived store.
///
/// Configuration is re-read on every call, so a store can outlive changes
/// to the environment.
pub struct Handler<S> {
    store: S,
    lookup: Lookup,
}

impl<S> fmt::Debug for Handler<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl<S: ObjectStore> Handler<S> {
    /// A handler reading its configuration from the process environment.
    pub fn new(store: S) -> Self {
        Self::with_lookup(store, |name| std::env::var(name).ok())
    }

    pub fn with_lookup<F>(store: S, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            store,
            lookup: Box::new(lookup),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handles one invocation. The event is accepted for any shape and not
    /// inspected; the result is the response as two-space indented JSON.
    pub async fn handle(&self, event: serde_json::Value) -> Result<String, Error> {
        log::debug!("invoked with event {event}");
        let config = Config::from_lookup(&self.lookup)?;
        let response = get_presigned_test_images(&config, &self.store).await?;
        Ok(response.to_json_pretty()?)
    }
}
