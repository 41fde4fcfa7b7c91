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

use crate::spec::Describe;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

/// ArgumentDefinition is a type-erased handle to an argument spec of any kind,
/// cardinality, and value type. It only exposes the spec's usage and help
/// text; to extract a value, use the typed spec directly.
///
/// The spec is held by shared ownership, so a command can keep its own typed
/// `Rc` to the same spec for extraction.
#[derive(Clone)]
pub struct ArgumentDefinition {
    spec: Rc<dyn Describe>,
}

impl ArgumentDefinition {
    /// Wrap the given spec, taking ownership of it.
    pub fn new<D: Describe + 'static>(spec: D) -> Self {
        ArgumentDefinition {
            spec: Rc::new(spec),
        }
    }

    /// Wrap a spec which is shared with some other owner (typically, the
    /// command which extracts values from it).
    pub fn shared<D: Describe + 'static>(spec: &Rc<D>) -> Self {
        let spec: Rc<dyn Describe> = spec.clone();
        ArgumentDefinition { spec: spec }
    }
}

impl Describe for ArgumentDefinition {
    fn usage(&self) -> String {
        self.spec.usage()
    }

    fn full_description(&self) -> String {
        self.spec.full_description()
    }
}

impl fmt::Debug for ArgumentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArgumentDefinition({:?})", self.spec.usage())
    }
}

impl<D: Describe + 'static> From<Rc<D>> for ArgumentDefinition {
    fn from(spec: Rc<D>) -> Self {
        let spec: Rc<dyn Describe> = spec;
        ArgumentDefinition { spec: spec }
    }
}

/// ArgumentDefinitions is the ordered list of all of the arguments a single
/// command accepts. Order is declaration order, and is preserved in usage and
/// help text. Names are not checked for uniqueness.
#[derive(Clone, Debug, Default)]
pub struct ArgumentDefinitions {
    definitions: Vec<ArgumentDefinition>,
}

impl ArgumentDefinitions {
    /// Construct a new ArgumentDefinitions from the given list, in order.
    pub fn new(definitions: Vec<ArgumentDefinition>) -> Self {
        ArgumentDefinitions {
            definitions: definitions,
        }
    }

    /// Append a definition to the end of this list.
    pub fn push(&mut self, definition: ArgumentDefinition) {
        self.definitions.push(definition);
    }

    /// Returns an Iterator over the definitions, in declaration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ArgumentDefinition> {
        self.definitions.iter()
    }

    /// Returns the number of definitions in this list.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if this list contains no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Describe for ArgumentDefinitions {
    /// Each argument's usage fragment, separated by single spaces.
    fn usage(&self) -> String {
        self.definitions
            .iter()
            .map(|d| d.usage())
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Each argument's help block, concatenated. Blocks already end with a
    /// blank line, so no separator is added.
    fn full_description(&self) -> String {
        self.definitions
            .iter()
            .map(|d| d.full_description())
            .collect()
    }
}

impl FromIterator<ArgumentDefinition> for ArgumentDefinitions {
    fn from_iter<I: IntoIterator<Item = ArgumentDefinition>>(iter: I) -> Self {
        ArgumentDefinitions::new(iter.into_iter().collect())
    }
}
