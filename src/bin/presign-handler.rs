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

//! Local stand-in for a serverless invocation: reads one JSON trigger event
//! from stdin and prints the handler's result.

use presigned_test_images::StorageConfig;
use presigned_test_images::handler::Handler;
use tokio::io::AsyncReadExt;

async fn read_event() -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    if input.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(&input)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let client = StorageConfig::from_env()?.build_client()?;
    let handler = Handler::new(client);

    let event = read_event().await?;
    match handler.handle(event).await {
        Ok(body) => {
            println!("{body}");
            Ok(())
        }
        Err(e) => {
            log::error!("invocation failed: {e}");
            std::process::exit(1);
        }
    }
}
