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

use std::fmt;

/// Displays a record's key-value pairs as ` key=value` segments.
pub struct KvDisplay<'kvs> {
    source: &'kvs dyn log::kv::Source,
}

impl<'kvs> KvDisplay<'kvs> {
    pub fn new(source: &'kvs dyn log::kv::Source) -> Self {
        Self { source }
    }
}

impl fmt::Display for KvDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        struct Writer<'a, 'f> {
            f: &'a mut fmt::Formatter<'f>,
        }

        impl<'kvs> log::kv::VisitSource<'kvs> for Writer<'_, '_> {
            fn visit_pair(
                &mut self,
                key: log::kv::Key<'kvs>,
                value: log::kv::Value<'kvs>,
            ) -> Result<(), log::kv::Error> {
                write!(self.f, " {key}={value}")?;
                Ok(())
            }
        }

        self.source.visit(&mut Writer { f }).ok();
        Ok(())
    }
}

/// Collects a record's key-value pairs into owned strings.
pub fn collect_kvs(source: &dyn log::kv::Source) -> Vec<(String, String)> {
    struct Collector(Vec<(String, String)>);

    impl<'kvs> log::kv::VisitSource<'kvs> for Collector {
        fn visit_pair(
            &mut self,
            key: log::kv::Key<'kvs>,
            value: log::kv::Value<'kvs>,
        ) -> Result<(), log::kv::Error> {
            self.0.push((key.to_string(), value.to_string()));
            Ok(())
        }
    }

    let mut collector = Collector(Vec::new());
    source.visit(&mut collector).ok();
    collector.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_and_collects_pairs() {
        let source: &[(&str, &str)] = &[("user", "alice"), ("attempt", "2")];

        assert_eq!(KvDisplay::new(&source).to_string(), " user=alice attempt=2");
        assert_eq!(
            collect_kvs(&source),
            vec![
                ("user".to_string(), "alice".to_string()),
                ("attempt".to_string(), "2".to_string()),
            ]
        );
    }
}
