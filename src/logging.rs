// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use crate::spec::{NamedArgument, Optional};
use crate::value::Value;
use log::{self, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::Mutex;

const RUST_LOG_ENV_VAR: &str = "RUST_LOG";

/// The level used if neither the caller nor the environment specifies one.
pub const DEFAULT_MAX_LEVEL: LevelFilter = LevelFilter::Info;

/// Returns the spec for a "--log_level" argument, which commands can declare
/// to let the user pick the logging level. The allowed values are listed in
/// its help text.
pub fn log_level_argument(default_level: LevelFilter) -> NamedArgument<LevelFilter, Optional> {
    NamedArgument::with_default(
        "log_level",
        "<level>",
        "The maximum level of log messages to output.",
        default_level,
    )
}

/// Options is a structure which describes the options for a Logger. Generally
/// these should be constructed using OptionsBuilder, instead of filling in all
/// fields by hand.
pub struct Options {
    /// The maximum enabled logging level.
    pub max_level: LevelFilter,
    /// Where to write log output to.
    pub output: Box<dyn Write + Send>,
    /// Whether or not a log output (or flush) failure should result in a panic.
    /// By default, failures are silently ignored, since most of the time the
    /// application should keep working even if it can't produce log output.
    pub panic_on_output_failure: bool,
}

/// OptionsBuilder provides a builder-style interface to construct an Options.
#[derive(Default)]
pub struct OptionsBuilder {
    max_level: Option<LevelFilter>,
    output: Option<Box<dyn Write + Send>>,
    panic_on_output_failure: Option<bool>,
}

impl OptionsBuilder {
    /// Construct a new OptionsBuilder, which by default just sets the options
    /// to their default values.
    pub fn new() -> Self {
        OptionsBuilder {
            max_level: None,
            output: None,
            panic_on_output_failure: None,
        }
    }

    /// Set the maximum enabled logging level. If this isn't set, the level is
    /// read from the RUST_LOG environment variable, or else defaults to
    /// DEFAULT_MAX_LEVEL.
    pub fn set_max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = Some(max_level);
        self
    }

    /// Configure the Logger to write its log output to the given Write
    /// implementation, instead of stderr.
    pub fn set_output_to<T: Write + Send + 'static>(mut self, output: T) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    /// Set whether or not the Logger should panic! if writing log output fails.
    pub fn set_panic_on_output_failure(mut self, panic_on_output_failure: bool) -> Self {
        self.panic_on_output_failure = Some(panic_on_output_failure);
        self
    }

    /// Build an Options structure from this builder's current state. This might
    /// return an error if no level was set, and the one in the environment is
    /// invalid.
    pub fn build(self) -> Result<Options> {
        let max_level = match self.max_level {
            Some(max_level) => max_level,
            None => match get_env_var(RUST_LOG_ENV_VAR)? {
                None => DEFAULT_MAX_LEVEL,
                Some(level) => LevelFilter::parse(&level)
                    .map_err(|e| Error::from_conversion(RUST_LOG_ENV_VAR, e))?,
            },
        };

        Ok(Options {
            max_level: max_level,
            output: self
                .output
                .unwrap_or_else(|| Box::new(std::io::stderr())),
            panic_on_output_failure: self.panic_on_output_failure.unwrap_or(false),
        })
    }
}

fn get_env_var(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(v) => Ok(Some(v)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::EnvVar(e)),
    }
}

/// This function formats the given log Record into a string, which can then be
/// written directly to the logging sink.
pub fn format_log_record(record: &Record<'_>) -> String {
    format!(
        "[{} {}:{}] {} - {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        record.file().unwrap_or("UNKNOWN_FILE"),
        record
            .line()
            .map_or("UNKNOWN_LINE".to_owned(), |l| l.to_string()),
        record.level(),
        record.args()
    )
}

/// A Log implementation for command-line applications. Every message is
/// flushed as soon as it is written, so it interleaves sensibly with the
/// program's other output.
pub struct Logger {
    max_level: LevelFilter,
    output: Mutex<Box<dyn Write + Send>>,
    panic_on_output_failure: bool,
}

impl Logger {
    /// Construct a new Logger with the given Options controlling its behavior.
    pub fn new(options: Options) -> Self {
        Logger {
            max_level: options.max_level,
            output: Mutex::new(options.output),
            panic_on_output_failure: options.panic_on_output_failure,
        }
    }

    /// Returns the maximum level of messages this Logger outputs.
    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }

    fn poisoned_output_error() -> std::io::Error {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            "log output lock poisoned by a previous panic",
        )
    }

    fn handle_output_result(&self, res: std::io::Result<()>) {
        if let Err(e) = res {
            if self.panic_on_output_failure {
                panic!("Failed to write log output: {}", e);
            }
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let res = match self.output.lock() {
            Err(_) => Err(Self::poisoned_output_error()),
            Ok(mut output) => writeln!(output, "{}", format_log_record(record))
                .and_then(|_| output.flush()),
        };
        self.handle_output_result(res);
    }

    fn flush(&self) {
        let res = match self.output.lock() {
            Err(_) => Err(Self::poisoned_output_error()),
            Ok(mut output) => output.flush(),
        };
        self.handle_output_result(res);
    }
}

/// Try to set up a new global Logger, with the given Options controlling its
/// behavior, returning an error if doing so fails in some way (e.g. because a
/// global Logger was already set).
pub fn try_init(options: Options) -> Result<()> {
    let logger = Logger::new(options);
    log::set_max_level(logger.max_level());
    log::set_boxed_logger(Box::new(logger))?;
    Ok(())
}

/// Calls try_init(), panicking if a global Logger couldn't be installed. This
/// is meant for applications which set up logging first thing in main().
pub fn init(options: Options) {
    if let Err(e) = try_init(options) {
        panic!("Failed to initialize logging: {}", e);
    }
}
