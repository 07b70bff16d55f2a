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

//! Hooklog is a logging implementation for the [`log`] facade that delivers log
//! records to Slack Workflow webhooks.
//!
//! # Overview
//!
//! A log record flows strictly downstream: the application calls a `log` macro,
//! Hooklog matches the record against the configured filters, a layout renders
//! it into bytes, and an appender writes those bytes to a destination. The
//! centerpiece is [`append::WorkflowWebhook`], which performs an HTTP POST of a
//! `{"text": "<rendered message>"}` payload to a webhook URL, the contract that
//! Slack Workflow triggers accept.
//!
//! # Examples
//!
//! Simple setup with the default stdout appender:
//!
//! ```
//! hooklog::stdout().apply();
//!
//! log::info!("This is an info message.");
//! ```
//!
//! Ship warnings and errors to a Slack channel while keeping everything on
//! stdout:
//!
//! ```no_run
//! use log::LevelFilter;
//! use hooklog::append;
//!
//! let webhook = append::WorkflowWebhook::builder(
//!     "https://hooks.slack.com/workflows/T0000/A0000/0000/secret",
//! )
//! .build()
//! .expect("malformed webhook configuration");
//!
//! hooklog::builder()
//!     .dispatch(|d| d.filter(LevelFilter::Warn).append(webhook))
//!     .dispatch(|d| d.filter(LevelFilter::Info).append(append::Stdout::default()))
//!     .apply();
//!
//! log::error!("Error message.");
//! log::info!("Info message.");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod filter;
pub mod layout;

pub use append::Append;
pub use filter::Filter;
pub use layout::Layout;

mod logger;
pub use logger::*;
