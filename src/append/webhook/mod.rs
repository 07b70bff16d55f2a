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

//! Appender for Slack Workflow webhooks.
//!
//! A webhook-triggered Slack Workflow accepts an HTTP POST with a JSON body of
//! the shape `{"text": "<string>"}` and posts the text to a pre-selected
//! channel. [`WorkflowWebhook`] delivers one POST per appended record, with the
//! body produced by the configured layout.
//!
//! Delivery is blocking by default: the emitting thread performs the HTTP
//! round trip, bounded by the configured connect and read timeouts. If logging
//! latency matters, enable the non-blocking mode to move delivery onto a
//! dedicated worker thread.
//!
//! Slack accepts at most one request per second per webhook. The appender
//! enforces that ceiling client-side with a minimum delivery interval; records
//! arriving faster are dropped and counted instead of being rejected by the
//! service.

mod append;
mod non_blocking;
mod throttle;
mod transport;

pub use self::append::WorkflowWebhook;
pub use self::append::WorkflowWebhookBuilder;
pub use self::non_blocking::OverflowPolicy;
pub use self::throttle::DropCount;
