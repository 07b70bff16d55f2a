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

use log::LevelFilter;

use super::log_impl::Dispatch;
use super::log_impl::Logger;
use crate::append;

/// Create a new empty [builder][Builder].
///
/// At least one dispatch should be added before applying:
///
/// ```
/// use log::LevelFilter;
/// use hooklog::append;
///
/// hooklog::builder()
///     .dispatch(|d| {
///         d.filter(LevelFilter::Info)
///             .append(append::Stdout::default())
///     })
///     .apply();
/// ```
pub fn builder() -> Builder {
    Builder::new()
}

/// Create a new [`Builder`] with a default `Stdout` appender configured.
///
/// This is a convenient API that you can use as:
///
/// ```
/// hooklog::stdout().apply();
/// ```
pub fn stdout() -> Builder {
    builder().dispatch(|d| d.append(append::Stdout::default()))
}

/// Create a new [`Builder`] with a default `Stderr` appender configured.
///
/// This is a convenient API that you can use as:
///
/// ```
/// hooklog::stderr().apply();
/// ```
pub fn stderr() -> Builder {
    builder().dispatch(|d| d.append(append::Stderr::default()))
}

/// A builder for configuring the logger.
///
/// Each call to [`dispatch`][Builder::dispatch] adds an independent group of
/// filters and appenders; a record is offered to every group whose filters
/// accept it.
#[must_use = "call `apply` to set the global logger"]
#[derive(Debug, Default)]
pub struct Builder {
    dispatches: Vec<Dispatch>,

    // default to None, resolving to Trace on apply - the global default is Off
    max_level: Option<LevelFilter>,
}

impl Builder {
    /// Create a new empty [`Builder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new dispatch with the logger.
    ///
    /// The closure receives an empty [`Dispatch`] and must add at least one
    /// appender to it; this is enforced at compile time.
    pub fn dispatch<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Dispatch<false>) -> Dispatch<true>,
    {
        self.dispatches.push(f(Dispatch::new()));
        self
    }

    /// Set the global maximum log level.
    ///
    /// This will be passed to [`log::set_max_level`] on [`Builder::apply`].
    pub fn max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = Some(max_level);
        self
    }

    /// Set up the global logger with all the dispatches configured.
    ///
    /// This should be called early in the execution of a Rust program. Any log
    /// events that occur before initialization will be ignored.
    ///
    /// # Errors
    ///
    /// This function will fail if it is called more than once, or if another
    /// library has already initialized a global logger.
    pub fn try_apply(self) -> Result<(), log::SetLoggerError> {
        let logger = Logger::new(self.dispatches);
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(self.max_level.unwrap_or(LevelFilter::Trace));
        Ok(())
    }

    /// Set up the global logger with all the dispatches configured.
    ///
    /// # Panics
    ///
    /// This function will panic if it is called more than once, or if another
    /// library has already initialized a global logger.
    pub fn apply(self) {
        self.try_apply()
            .expect("Builder::apply should not be called after the global logger initialized");
    }
}
