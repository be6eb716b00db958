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

//! Prints presigned GET URLs for every object under `S3_TEST_PREFIX` in
//! `S3_TEST_BUCKET_NAME`. Set `RUST_LOG=info` to see progress.

use std::path::PathBuf;

use presigned_test_images::config::{Config, StorageConfig};
use presigned_test_images::error::Error;
use presigned_test_images::presign::get_presigned_test_images;

async fn run() -> Result<String, Error> {
    let config = Config::from_env()?;
    let client = StorageConfig::from_env()?.build_client()?;
    log::info!(
        "presigning objects in s3://{}/{} for {} seconds",
        config.bucket_name(),
        config.prefix(),
        config.lifetime_secs()
    );

    let response = get_presigned_test_images(&config, &client).await?;
    Ok(response.to_json()?)
}

/// Applies the `.env` file, then initialises logging so `RUST_LOG` may come
/// from the file.
fn init<F>(load_dotenv: F) -> Option<PathBuf>
where
    F: FnOnce() -> Result<PathBuf, dotenv::Error>,
{
    let loaded = load_dotenv();
    let _ = env_logger::try_init();

    match loaded {
        Ok(path) => {
            log::debug!("loaded {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("no .env file loaded: {e}");
            None
        }
    }
}

#[tokio::main]
async fn main() {
    init(dotenv::dotenv);

    match run().await {
        Ok(json) => println!("json_response: {json}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_can_come_from_dotenv() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let path = std::env::temp_dir().join(format!("presign-urls-{}.env", std::process::id()));
        std::fs::write(&path, "RUST_LOG=debug\n").unwrap();

        let loaded = init(|| dotenv::from_path(&path).map(|_| path.clone()));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, Some(path));
        assert!(log::log_enabled!(log::Level::Debug));
        assert!(!log::log_enabled!(log::Level::Trace));
    }
}
