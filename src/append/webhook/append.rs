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

use super::non_blocking::NonBlocking;
use super::non_blocking::OverflowPolicy;
use super::throttle::DropCount;
use super::throttle::Throttle;
use super::transport::Transport;
use crate::append::Append;
use crate::layout::Layout;
use crate::layout::WorkflowTextLayout;

/// An appender that POSTs log records to a Slack Workflow webhook.
///
/// Each appended record becomes one HTTP POST with a `Content-Type:
/// application/json` header and a body rendered by the configured layout (by
/// default, [`WorkflowTextLayout`]). There is no retry: a connect or read
/// timeout, or a non-2xx response, fails the single attempt.
///
/// # Examples
///
/// ```no_run
/// use hooklog::append::WorkflowWebhook;
///
/// let webhook = WorkflowWebhook::builder(
///     "https://hooks.slack.com/workflows/T0000/A0000/0000/secret",
/// )
/// .build()
/// .unwrap();
/// ```
#[derive(Debug)]
pub struct WorkflowWebhook {
    layout: Box<dyn Layout>,
    throttle: Option<Throttle>,
    delivery: Delivery,
}

#[derive(Debug)]
enum Delivery {
    Blocking(Transport),
    NonBlocking(NonBlocking),
}

impl WorkflowWebhook {
    /// Creates a builder for an appender posting to `url`.
    pub fn builder(url: impl Into<String>) -> WorkflowWebhookBuilder {
        WorkflowWebhookBuilder {
            url: url.into(),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
            layout: None,
            min_interval: Some(Duration::from_secs(1)),
            non_blocking: None,
        }
    }

    /// The number of records dropped by the delivery throttle so far.
    pub fn dropped_records(&self) -> u64 {
        self.throttle.as_ref().map_or(0, Throttle::dropped)
    }

    /// A cloneable handle to the throttle's drop count.
    ///
    /// Installing the appender moves it into the logger; take a handle first
    /// to keep reading the count afterwards. An unthrottled appender never
    /// drops, so its handle stays at zero.
    pub fn drop_count(&self) -> DropCount {
        self.throttle.as_ref().map(Throttle::counter).unwrap_or_default()
    }
}

impl Append for WorkflowWebhook {
    fn append(&self, record: &log::Record) -> anyhow::Result<()> {
        if let Some(throttle) = &self.throttle {
            if !throttle.admit() {
                return Ok(());
            }
        }

        let payload = self.layout.format(record)?;
        match &self.delivery {
            Delivery::Blocking(transport) => transport.deliver(payload),
            Delivery::NonBlocking(non_blocking) => non_blocking.send(payload),
        }
    }
}

/// A builder for [`WorkflowWebhook`].
#[derive(Debug)]
pub struct WorkflowWebhookBuilder {
    url: String,
    connect_timeout: Duration,
    read_timeout: Duration,
    layout: Option<Box<dyn Layout>>,
    min_interval: Option<Duration>,
    non_blocking: Option<NonBlockingConfig>,
}

#[derive(Debug)]
struct NonBlockingConfig {
    thread_name: String,
    buffered_lines_limit: Option<usize>,
    overflow: OverflowPolicy,
}

impl WorkflowWebhookBuilder {
    /// Sets the timeout for establishing the HTTP connection. Defaults to 5
    /// seconds.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the timeout for the whole request once connected. Defaults to 10
    /// seconds.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Sets the layout producing the request body. Defaults to
    /// [`WorkflowTextLayout`].
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Sets the minimum interval between deliveries. Records arriving faster
    /// are dropped and counted.
    ///
    /// Defaults to 1 second, the rate Slack accepts per webhook.
    pub fn min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = Some(min_interval);
        self
    }

    /// Disables the delivery throttle. Requests beyond the service's rate
    /// ceiling are then rejected by the service instead.
    pub fn unthrottled(mut self) -> Self {
        self.min_interval = None;
        self
    }

    /// Moves delivery onto a dedicated worker thread with the given name.
    ///
    /// `append` then only renders the record and enqueues the payload, so the
    /// emitting thread never waits on the network round trip.
    pub fn non_blocking(mut self, thread_name: impl Into<String>) -> Self {
        self.non_blocking = Some(NonBlockingConfig {
            thread_name: thread_name.into(),
            buffered_lines_limit: None,
            overflow: OverflowPolicy::Block,
        });
        self
    }

    /// Sets the buffer size of pending payloads in non-blocking mode.
    ///
    /// Has no effect unless [`non_blocking`][Self::non_blocking] is set.
    pub fn buffered_lines_limit(mut self, limit: usize) -> Self {
        if let Some(config) = self.non_blocking.as_mut() {
            config.buffered_lines_limit = Some(limit);
        }
        self
    }

    /// Sets the overflow policy for non-blocking delivery.
    ///
    /// Has no effect unless [`non_blocking`][Self::non_blocking] is set.
    pub fn overflow_policy(mut self, overflow: OverflowPolicy) -> Self {
        if let Some(config) = self.non_blocking.as_mut() {
            config.overflow = overflow;
        }
        self
    }

    /// Builds the appender.
    ///
    /// # Errors
    ///
    /// Fails if the webhook URL is malformed or the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> anyhow::Result<WorkflowWebhook> {
        let url = Url::parse(&self.url)
            .with_context(|| format!("malformed webhook URL: {}", self.url))?;
        let transport = Transport::new(url, self.connect_timeout, self.read_timeout)?;

        let delivery = match self.non_blocking {
            Some(config) => Delivery::NonBlocking(NonBlocking::new(
                transport,
                config.thread_name,
                config.buffered_lines_limit,
                config.overflow,
            )),
            None => Delivery::Blocking(transport),
        };

        Ok(WorkflowWebhook {
            layout: self
                .layout
                .unwrap_or_else(|| Box::new(WorkflowTextLayout::default())),
            throttle: self.min_interval.map(Throttle::new),
            delivery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_url() {
        let result = WorkflowWebhook::builder("not a url").build();
        assert!(result.is_err());
    }
}
