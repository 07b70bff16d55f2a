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

use hooklog::append::WorkflowWebhook;
use log::LevelFilter;

// Set WORKFLOW_WEBHOOK_URL to the URL of a webhook-triggered Slack Workflow,
// e.g. https://hooks.slack.com/workflows/<team>/<app>/<id>/<token>.
fn main() -> anyhow::Result<()> {
    let url = std::env::var("WORKFLOW_WEBHOOK_URL")?;

    let webhook = WorkflowWebhook::builder(url)
        .connect_timeout(Duration::from_secs(5))
        .read_timeout(Duration::from_secs(10))
        .build()?;

    hooklog::builder()
        .dispatch(|d| d.filter(LevelFilter::Warn).append(webhook))
        .dispatch(|d| d.append(hooklog::append::Stdout::default()))
        .apply();

    log::warn!("Hello Workflow");
    log::info!("this one stays on stdout");

    Ok(())
}
