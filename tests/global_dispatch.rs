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

use std::sync::Arc;
use std::sync::Mutex;

use hooklog::Append;
use hooklog::append::Testing;
use log::LevelFilter;

#[derive(Debug, Default, Clone)]
struct Capture(Arc<Mutex<Vec<String>>>);

impl Capture {
    fn records(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Append for Capture {
    fn append(&self, record: &log::Record) -> anyhow::Result<()> {
        self.0
            .lock()
            .unwrap()
            .push(format!("{}:{}", record.level(), record.args()));
        Ok(())
    }
}

#[test]
fn routes_by_severity_and_target() {
    let warnings = Capture::default();
    let noisy = Capture::default();

    hooklog::builder()
        .dispatch(|d| d.filter(LevelFilter::Warn).append(warnings.clone()))
        .dispatch(|d| d.filter("noisy=debug").append(noisy.clone()))
        // every record also goes to the harness-captured output
        .dispatch(|d| d.append(Testing::default()))
        .apply();

    log::error!("boom");
    log::info!("routine");
    log::debug!(target: "noisy", "chatter");

    assert_eq!(warnings.records(), ["ERROR:boom"]);
    assert_eq!(noisy.records(), ["DEBUG:chatter"]);
}
