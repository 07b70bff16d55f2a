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

use std::fmt::Debug;
use std::fmt::Formatter;

use crate::layout::Layout;

type FormatFunction = dyn Fn(&log::Record) -> anyhow::Result<Vec<u8>> + Send + Sync + 'static;

/// A layout that you can pass a custom layout function.
///
/// The custom layout function accepts [`&log::Record`][log::Record] and formats
/// it into bytes. For example:
///
/// ```rust
/// use hooklog::layout::CustomLayout;
///
/// let layout = CustomLayout::new(|record| {
///     Ok(format!("{} - {}", record.level(), record.args()).into_bytes())
/// });
/// ```
pub struct CustomLayout {
    f: Box<FormatFunction>,
}

impl Debug for CustomLayout {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "CustomLayout {{ ... }}")
    }
}

impl CustomLayout {
    pub fn new(
        layout: impl Fn(&log::Record) -> anyhow::Result<Vec<u8>> + Send + Sync + 'static,
    ) -> Self {
        CustomLayout {
            f: Box::new(layout),
        }
    }
}

impl Layout for CustomLayout {
    fn format(&self, record: &log::Record) -> anyhow::Result<Vec<u8>> {
        (self.f)(record)
    }
}
