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

use std::fmt::Write;

use serde::Serialize;

use crate::layout::Layout;

/// A layout that renders a log record as a Slack Workflow webhook payload.
///
/// The output is a single-line JSON object with exactly one key, `text`, which
/// is the wire contract of webhook-triggered Slack Workflows:
///
/// ```json
/// {"text":"[main] my_app::order - payment declined"}
/// ```
///
/// The thread name and target segments can be toggled off individually; the
/// message body is always present. Serialization goes through [`serde_json`],
/// so the payload stays valid JSON no matter what the message contains.
///
/// # Examples
///
/// ```
/// use hooklog::layout::WorkflowTextLayout;
///
/// let layout = WorkflowTextLayout::default().thread(false);
/// ```
#[derive(Debug, Clone)]
pub struct WorkflowTextLayout {
    thread: bool,
    target: bool,
}

impl Default for WorkflowTextLayout {
    fn default() -> Self {
        Self {
            thread: true,
            target: true,
        }
    }
}

impl WorkflowTextLayout {
    /// Sets whether the calling thread's name prefixes the text, as `[name]`.
    pub fn thread(mut self, thread: bool) -> Self {
        self.thread = thread;
        self
    }

    /// Sets whether the record's target prefixes the text, as `target - `.
    pub fn target(mut self, target: bool) -> Self {
        self.target = target;
        self
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    text: &'a str,
}

impl Layout for WorkflowTextLayout {
    fn format(&self, record: &log::Record) -> anyhow::Result<Vec<u8>> {
        let mut text = String::new();

        if self.thread {
            let thread = std::thread::current();
            write!(text, "[{}] ", thread.name().unwrap_or("unnamed"))?;
        }
        if self.target {
            write!(text, "{} - ", record.target())?;
        }
        write!(text, "{}", record.args())?;

        Ok(serde_json::to_vec(&Payload { text: &text })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(layout: &WorkflowTextLayout, message: std::fmt::Arguments) -> serde_json::Value {
        let bytes = layout
            .format(
                &log::Record::builder()
                    .args(message)
                    .level(log::Level::Info)
                    .target("app")
                    .build(),
            )
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn payload_has_exactly_one_key() {
        let layout = WorkflowTextLayout::default().thread(false);
        let value = format(&layout, format_args!("Hello Workflow"));

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["text"], "app - Hello Workflow");
    }

    #[test]
    fn payload_stays_valid_json_for_hostile_messages() {
        let layout = WorkflowTextLayout::default().thread(false).target(false);

        let value = format(&layout, format_args!("a \"quoted\" message\nwith newline"));
        assert_eq!(value["text"], "a \"quoted\" message\nwith newline");

        // a rendered error chain is plain text to the payload
        let err = std::io::Error::other("boom: {\"k\":1}");
        let value = format(&layout, format_args!("request failed: {err}"));
        assert_eq!(value["text"], "request failed: boom: {\"k\":1}");
    }

    #[test]
    fn thread_segment_uses_current_thread_name() {
        let layout = WorkflowTextLayout::default().target(false);
        let value = std::thread::Builder::new()
            .name("worker-1".to_string())
            .spawn(move || format(&layout, format_args!("hi")))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(value["text"], "[worker-1] hi");
    }
}
