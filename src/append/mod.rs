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

//! Various appenders for log records.

use std::fmt;

mod stdio;
mod testing;
#[cfg(feature = "webhook")]
pub mod webhook;

pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::testing::Testing;
#[cfg(feature = "webhook")]
pub use self::webhook::WorkflowWebhook;

/// A trait representing an appender that can process log records.
///
/// Implementors of this trait deliver log records to a destination: the
/// process streams, a network endpoint, or anything custom.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Processes a log record.
    fn append(&self, record: &log::Record) -> anyhow::Result<()>;

    /// Flushes any buffered records.
    fn flush(&self) {}
}
