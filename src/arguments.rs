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

use std::collections::{BTreeSet, HashMap};

/// Arguments is the already-tokenized set of arguments given to a single
/// program invocation, split into three buckets: unnamed (positional) tokens,
/// the names of boolean flags which were present, and named arguments with
/// their textual values.
///
/// Names are stored exactly as they were given on the command line, prefix
/// included: boolean flags look like "-k", named arguments like "--api_key".
///
/// Unnamed tokens are stored as a set, so repeating the same positional token
/// twice is the same as giving it once. Callers which need multiplicity (e.g.
/// the same file name twice) can't express it through this structure.
///
/// An Arguments is immutable once built; argument specs only ever query it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Arguments {
    unnamed: BTreeSet<String>,
    boolean: BTreeSet<String>,
    named: HashMap<String, String>,
}

impl Arguments {
    /// Construct a new Arguments from its three buckets.
    pub fn new(
        unnamed: BTreeSet<String>,
        boolean: BTreeSet<String>,
        named: HashMap<String, String>,
    ) -> Self {
        Arguments {
            unnamed: unnamed,
            boolean: boolean,
            named: named,
        }
    }

    /// Returns a builder, which is a more convenient way to assemble an
    /// Arguments one token at a time.
    pub fn builder() -> ArgumentsBuilder {
        ArgumentsBuilder::new()
    }

    /// Returns whether or not a named argument with the given name was given.
    pub fn exists(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Returns the textual value of the given named argument, if it was given.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(|v| v.as_str())
    }

    /// Returns whether or not the given boolean flag was present.
    pub fn has_flag(&self, name: &str) -> bool {
        self.boolean.contains(name)
    }

    /// Returns the (deduplicated, sorted) set of unnamed tokens.
    pub fn unnamed(&self) -> &BTreeSet<String> {
        &self.unnamed
    }

    /// Returns whether no arguments of any kind were given.
    pub fn is_empty(&self) -> bool {
        self.unnamed.is_empty() && self.boolean.is_empty() && self.named.is_empty()
    }
}

/// ArgumentsBuilder provides a builder-style interface to construct an
/// Arguments.
#[derive(Debug, Default)]
pub struct ArgumentsBuilder {
    arguments: Arguments,
}

impl ArgumentsBuilder {
    /// Construct a new, empty ArgumentsBuilder.
    pub fn new() -> Self {
        ArgumentsBuilder {
            arguments: Arguments::default(),
        }
    }

    /// Add an unnamed token. Adding a token which is already present has no
    /// effect.
    pub fn unnamed(mut self, token: &str) -> Self {
        self.arguments.unnamed.insert(token.to_owned());
        self
    }

    /// Mark the given boolean flag (e.g. "-k") as present.
    pub fn flag(mut self, name: &str) -> Self {
        self.arguments.boolean.insert(name.to_owned());
        self
    }

    /// Set the value of a named argument (e.g. "--api_key"). If the same name is
    /// given more than once, the last value wins.
    pub fn named(mut self, name: &str, value: &str) -> Self {
        self.arguments
            .named
            .insert(name.to_owned(), value.to_owned());
        self
    }

    /// Finish building, returning the immutable Arguments.
    pub fn build(self) -> Arguments {
        self.arguments
    }
}
