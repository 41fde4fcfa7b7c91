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

use thiserror::Error;

fn format_allowed_values(allowed_values: &[String]) -> String {
    match allowed_values.is_empty() {
        true => String::new(),
        false => format!("; valid values: {}", allowed_values.join(", ")),
    }
}

/// ConversionError is returned by a `Value` implementation when a textual token
/// cannot be interpreted as the requested type. It doesn't know which argument
/// the token came from; argument specs attach that when converting it into an
/// `Error`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid value '{value}'{}", format_allowed_values(.allowed_values))]
pub struct ConversionError {
    /// The offending text.
    pub value: String,
    /// The enumeration of valid textual values, if the type has one.
    pub allowed_values: Vec<String>,
}

impl ConversionError {
    /// Construct a new ConversionError for the given offending text, and the
    /// given (possibly empty) list of allowed values.
    pub fn new<S: AsRef<str>>(value: &str, allowed_values: &[S]) -> Self {
        ConversionError {
            value: value.to_owned(),
            allowed_values: allowed_values
                .iter()
                .map(|v| v.as_ref().to_owned())
                .collect(),
        }
    }
}

/// A Result type which uses `ConversionError`, returned by `Value`
/// implementations.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

/// Error represents the various errors which can come up while validating and
/// extracting argument values, or while dispatching to a command.
#[derive(Debug, Error)]
pub enum Error {
    /// A present value could not be parsed into its argument's declared type.
    #[error("Invalid value '{value}' for argument '{identifier}'{}", format_allowed_values(.allowed_values))]
    Conversion {
        /// The argument's name (or, for unnamed arguments, its type label).
        identifier: String,
        /// The offending text.
        value: String,
        /// The allowed values for this argument's type, if any.
        allowed_values: Vec<String>,
    },
    /// An error encountered while trying to interact with environment
    /// variables.
    #[error("{0}")]
    EnvVar(#[from] std::env::VarError),
    /// A syntactically valid value which is semantically out of range. The core
    /// never raises this itself; it exists for commands layered on top, which
    /// validate e.g. a textual enum by hand.
    #[error("Invalid value for argument '{identifier}'. Valid values: {}.", .allowed_values.join(", "))]
    InvalidArgumentValue {
        /// The argument's name.
        identifier: String,
        /// The values which would have been accepted.
        allowed_values: Vec<String>,
    },
    /// An I/O error, generally encountered when writing help output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A required argument had no corresponding value.
    #[error("Missing required argument '{0}'")]
    MissingArgument(String),
    /// No command was specified.
    #[error("No command specified")]
    MissingCommand,
    /// An error encountered when attempting to set the global Logger
    /// implementation.
    #[error("{0}")]
    SetLogger(#[from] log::SetLoggerError),
    /// An unrecognized command was specified.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
}

impl Error {
    /// Attach the given argument identifier to a `ConversionError`.
    pub fn from_conversion(identifier: &str, e: ConversionError) -> Self {
        Error::Conversion {
            identifier: identifier.to_owned(),
            value: e.value,
            allowed_values: e.allowed_values,
        }
    }

    /// Construct an `InvalidArgumentValue` error, for the given argument and
    /// list of values it would have accepted.
    pub fn invalid_argument_value<S: AsRef<str>>(identifier: &str, allowed_values: &[S]) -> Self {
        Error::InvalidArgumentValue {
            identifier: identifier.to_owned(),
            allowed_values: allowed_values
                .iter()
                .map(|v| v.as_ref().to_owned())
                .collect(),
        }
    }
}

/// A Result type which uses argdef's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
