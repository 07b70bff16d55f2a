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

use hooklog::Layout;
use hooklog::append::Stderr;
use hooklog::append::Stdout;

#[derive(Debug)]
struct PrefixLayout(&'static str);

impl Layout for PrefixLayout {
    fn format(&self, record: &log::Record) -> anyhow::Result<Vec<u8>> {
        Ok(format!("{} [{}] {}", self.0, record.level(), record.args()).into_bytes())
    }
}

// ensure hooklog's impl properly handles recursive logging
#[test]
fn meta_logging_in_format_works() {
    let stdout = Stdout::default().with_layout(PrefixLayout("out"));
    let stderr = Stderr::default().with_layout(PrefixLayout("err"));

    hooklog::builder()
        .dispatch(|d| d.append(stdout))
        .dispatch(|d| d.append(stderr))
        .apply();

    struct Thing<'a>(&'a str);

    impl std::fmt::Display for Thing<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            log::debug!("formatting wrapping ({})", self.0);
            f.write_str(self.0)
        }
    }

    log::info!("I'm logging {}!", Thing("aha"));
}
