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

use colored::Color;
use colored::Colorize;
use jiff::Zoned;
use jiff::tz::TimeZone;
use log::Level;

use crate::layout::KvDisplay;
use crate::layout::Layout;

/// A layout that formats a log record as a human-readable text line.
///
/// Output format:
///
/// ```text
/// 2024-08-11T22:44:57.172105+08:00 ERROR my_app: src/order.rs:51 payment declined
/// ```
///
/// Log levels are colored by default; customize the colors with
/// [`LevelColor`], or set the timezone of the timestamp with a
/// [`TimeZone`] instance.
#[derive(Default, Debug, Clone)]
pub struct TextLayout {
    pub colors: LevelColor,
    pub tz: Option<TimeZone>,
}

/// Customize the color of each log level.
#[derive(Debug, Clone)]
pub struct LevelColor {
    pub error: Color,
    pub warn: Color,
    pub info: Color,
    pub debug: Color,
    pub trace: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Green,
            debug: Color::Blue,
            trace: Color::Magenta,
        }
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &log::Record) -> anyhow::Result<Vec<u8>> {
        let color = match record.level() {
            Level::Error => self.colors.error,
            Level::Warn => self.colors.warn,
            Level::Info => self.colors.info,
            Level::Debug => self.colors.debug,
            Level::Trace => self.colors.trace,
        };

        let time = match self.tz.clone() {
            Some(tz) => Zoned::now().with_time_zone(tz),
            None => Zoned::now(),
        }
        .strftime("%Y-%m-%dT%H:%M:%S.%6f%:z")
        .to_string();
        let level = record.level().as_str().color(color);
        let target = record.target();
        let file = record.file().unwrap_or_default();
        let line = record.line().unwrap_or_default();
        let message = record.args();
        let kvs = KvDisplay::new(record.key_values());

        Ok(format!("{time} {level:>5} {target}: {file}:{line} {message}{kvs}").into_bytes())
    }
}
