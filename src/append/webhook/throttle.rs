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
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

/// A cloneable handle to the number of records a webhook appender has dropped.
///
/// Obtained from [`WorkflowWebhook::drop_count`][crate::append::WorkflowWebhook::drop_count]
/// before the appender is handed to the logger; the handle stays readable
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct DropCount(Arc<AtomicU64>);

impl DropCount {
    /// The number of records dropped so far.
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// A minimum-interval gate over deliveries.
///
/// Records arriving before the interval has elapsed are dropped, not queued;
/// the drop count is kept for observability.
#[derive(Debug)]
pub(crate) struct Throttle {
    min_interval: Duration,
    last_delivery: Mutex<Option<Instant>>,
    dropped: DropCount,
}

impl Throttle {
    pub(crate) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_delivery: Mutex::new(None),
            dropped: DropCount::default(),
        }
    }

    /// Returns whether a delivery may proceed now, claiming the slot if so.
    pub(crate) fn admit(&self) -> bool {
        let mut last_delivery = self
            .last_delivery
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let now = Instant::now();
        match *last_delivery {
            Some(last) if now.duration_since(last) < self.min_interval => {
                self.dropped.0.fetch_add(1, Ordering::Relaxed);
                false
            }
            _ => {
                *last_delivery = Some(now);
                true
            }
        }
    }

    pub(crate) fn counter(&self) -> DropCount {
        self.dropped.clone()
    }

    pub(crate) fn dropped(&self) -> u64 {
        self.dropped.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_first_and_drops_burst() {
        let throttle = Throttle::new(Duration::from_secs(60));

        assert!(throttle.admit());
        assert!(!throttle.admit());
        assert!(!throttle.admit());
        assert_eq!(throttle.dropped(), 2);
    }

    #[test]
    fn counter_handle_tracks_drops() {
        let throttle = Throttle::new(Duration::from_secs(60));
        let count = throttle.counter();

        assert!(throttle.admit());
        assert!(!throttle.admit());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn admits_again_after_interval() {
        let throttle = Throttle::new(Duration::from_millis(20));

        assert!(throttle.admit());
        std::thread::sleep(Duration::from_millis(30));
        assert!(throttle.admit());
        assert_eq!(throttle.dropped(), 0);
    }
}
