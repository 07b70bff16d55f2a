// Copyright 2025 Hooklog Developers
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

use std::time::Duration;

use anyhow::Context;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;

/// Delivers rendered payloads to the webhook endpoint.
///
/// One HTTP POST per payload, no retry. The connect and read timeouts bound
/// how long a single delivery can block.
#[derive(Debug)]
pub(crate) struct Transport {
    client: reqwest::blocking::Client,
    url: Url,
}

impl Transport {
    pub(crate) fn new(
        url: Url,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .build()
            .context("failed to construct webhook HTTP client")?;
        Ok(Self { client, url })
    }

    pub(crate) fn deliver(&self, payload: Vec<u8>) -> anyhow::Result<()> {
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .with_context(|| format!("failed to deliver webhook request to {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("webhook endpoint {} returned {status}", self.url);
        }
        Ok(())
    }
}
