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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! argdef lets a command declare the arguments it accepts (positional, boolean
//! flag, or named key=value), whether each one is required, and what type its
//! value has. In return, it synthesizes usage / help text, and it extracts
//! typed, validated values from an already-tokenized set of arguments.

/// arguments defines the raw, already-tokenized set of arguments given to a
/// single program invocation.
pub mod arguments;
/// command defines a single named command, which bundles argument definitions
/// with the logic to execute.
pub mod command;
/// definition provides type-erased handles to argument specs, so
/// differently-typed specs can be stored together for help rendering.
pub mod definition;
/// error defines the error types argdef can produce.
pub mod error;
/// help provides utilities for printing program and command help screens.
pub mod help;
/// logging provides a Logger implementation suitable for command-line
/// applications.
#[cfg(feature = "logging")]
pub mod logging;
/// main_impl provides the top-level dispatcher, which executes a command and
/// turns its result into a process exit status.
pub mod main_impl;
/// spec defines the typed argument specs: one type per kind of argument,
/// parameterized by cardinality and value type.
pub mod spec;
/// value defines the conversion between textual tokens and typed values.
pub mod value;

#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use crate::arguments::Arguments;
pub use crate::command::{Command, CommandCallback, CommandResult};
pub use crate::definition::{ArgumentDefinition, ArgumentDefinitions};
pub use crate::error::{Error, Result};
pub use crate::main_impl::{dispatch, main_impl};
pub use crate::spec::{
    BooleanArgument, Describe, Extract, NamedArgument, Optional, Required, UnnamedArgument,
};
pub use crate::value::Value;
