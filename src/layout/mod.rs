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

//! Layouts for formatting log records.

use std::fmt;

mod custom;
mod json;
mod kv;
mod text;
mod workflow_text;

pub use self::custom::CustomLayout;
pub use self::json::JsonLayout;
pub use self::kv::KvDisplay;
pub use self::kv::collect_kvs;
pub use self::text::LevelColor;
pub use self::text::TextLayout;
pub use self::workflow_text::WorkflowTextLayout;

/// A layout that formats a log record into bytes.
///
/// The output of a layout is handed to an appender as-is; a layout therefore
/// decides the entire wire representation of a record.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Formats a log record.
    fn format(&self, record: &log::Record) -> anyhow::Result<Vec<u8>>;
}

impl<T: Layout> From<T> for Box<dyn Layout> {
    fn from(layout: T) -> Self {
        Box::new(layout)
    }
}
