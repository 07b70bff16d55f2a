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

use std::fmt::Arguments;

use jiff::Timestamp;
use jiff::Zoned;
use jiff::tz::TimeZone;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::layout::Layout;
use crate::layout::collect_kvs;

/// A layout that formats a log record as a single-line JSON object.
///
/// Output format:
///
/// ```json
/// {"timestamp":"2024-08-11T22:44:57.172051+08:00","level":"INFO","target":"my_app","file":"src/order.rs","line":51,"message":"order shipped","kvs":{}}
/// ```
///
/// # Examples
///
/// ```
/// use hooklog::layout::JsonLayout;
///
/// let json_layout = JsonLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
pub struct JsonLayout {
    tz: Option<TimeZone>,
}

impl JsonLayout {
    /// Sets the timezone for timestamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use hooklog::layout::JsonLayout;
    ///
    /// let json_layout = JsonLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
struct RecordLine<'a> {
    #[serde(serialize_with = "serialize_timestamp")]
    timestamp: Zoned,
    level: &'a str,
    target: &'a str,
    file: &'a str,
    line: u32,
    #[serde(serialize_with = "serialize_args")]
    message: &'a Arguments<'a>,
    kvs: Map<String, Value>,
}

fn serialize_timestamp<S>(timestamp: &Zoned, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&format_args!("{timestamp:.6}"))
}

fn serialize_args<S>(args: &Arguments, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(args)
}

impl Layout for JsonLayout {
    fn format(&self, record: &log::Record) -> anyhow::Result<Vec<u8>> {
        let mut kvs = Map::new();
        for (key, value) in collect_kvs(record.key_values()) {
            kvs.insert(key, value.into());
        }

        let record_line = RecordLine {
            timestamp: match self.tz.clone() {
                Some(tz) => Timestamp::now().to_zoned(tz),
                None => Zoned::now(),
            },
            level: record.level().as_str(),
            target: record.target(),
            file: record.file().unwrap_or_default(),
            line: record.line().unwrap_or_default(),
            message: record.args(),
            kvs,
        };

        Ok(serde_json::to_vec(&record_line)?)
    }
}
