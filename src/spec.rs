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

use crate::arguments::Arguments;
use crate::error::*;
use crate::value::{allowed_values_description, Value};
use log::debug;
use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

#[allow(unreachable_pub)]
mod private {
    pub trait Sealed {}
}

/// Cardinality denotes whether an argument must be given (`Required`), or may
/// be omitted (`Optional`). It is a type parameter of each argument spec, so it
/// is fixed at compile time; the two implementations are the only ones.
pub trait Cardinality: private::Sealed {
    /// Whether or not absence of the argument is an error.
    const REQUIRED: bool;
}

/// Marks an argument which must be given; its absence is an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Required {}

/// Marks an argument which may be omitted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Optional {}

impl private::Sealed for Required {}
impl private::Sealed for Optional {}

impl Cardinality for Required {
    const REQUIRED: bool = true;
}

impl Cardinality for Optional {
    const REQUIRED: bool = false;
}

/// Describe is the display capability every argument spec has, regardless of
/// its kind, cardinality, or value type. It is all a type-erased
/// `ArgumentDefinition` exposes.
pub trait Describe {
    /// Returns this argument's fragment of a usage line, e.g. "[--name=TYPE]".
    fn usage(&self) -> String;

    /// Returns this argument's block of help text. Every block is terminated
    /// by a blank line.
    fn full_description(&self) -> String;
}

/// Extract is the value extraction capability of an argument spec. The type of
/// the extracted value differs per spec, which is why this can't be offered
/// through a type-erased handle.
pub trait Extract {
    /// The type of value this spec extracts.
    type Output;

    /// Validate this argument against the given Arguments, and return its
    /// typed value. Extraction has no side effects.
    fn value(&self, args: &Arguments) -> Result<Self::Output>;
}

fn usage_fragment<C: Cardinality>(fragment: String) -> String {
    match C::REQUIRED {
        true => fragment,
        false => format!("[{}]", fragment),
    }
}

// Every help block has the same shape: a tab-indented header line, then
// further-indented detail lines, then a blank line.
fn help_block<I: IntoIterator<Item = String>>(header: &str, lines: I) -> String {
    let mut ret = format!("\t{}", header);
    for line in lines {
        ret.push_str("\n\t    ");
        ret.push_str(&line);
    }
    ret.push_str("\n\n");
    ret
}

/// An unnamed (positional) argument. It has no name, only a type label (e.g.
/// "<url>") used to refer to it in usage and help text. All of the unnamed
/// tokens given to a command are treated as values for this argument.
pub struct UnnamedArgument<T, C: Cardinality> {
    type_label: String,
    description: String,
    _phantom: PhantomData<(fn() -> T, C)>,
}

impl<T: Value, C: Cardinality> UnnamedArgument<T, C> {
    /// Construct a new unnamed argument spec.
    pub fn new(type_label: &str, description: &str) -> Self {
        UnnamedArgument {
            type_label: type_label.to_owned(),
            description: description.to_owned(),
            _phantom: PhantomData,
        }
    }

    /// Returns the type label which identifies this argument.
    pub fn type_label(&self) -> &str {
        self.type_label.as_str()
    }

    /// Returns the human-readable description of this argument.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

impl<T, C: Cardinality> fmt::Debug for UnnamedArgument<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnnamedArgument")
            .field("type_label", &self.type_label)
            .field("required", &C::REQUIRED)
            .finish()
    }
}

impl<T: Value, C: Cardinality> Describe for UnnamedArgument<T, C> {
    fn usage(&self) -> String {
        usage_fragment::<C>(self.type_label.clone())
    }

    fn full_description(&self) -> String {
        help_block(&self.type_label, Some(self.description.clone()))
    }
}

impl<T: Value + Ord, C: Cardinality> Extract for UnnamedArgument<T, C> {
    /// The parsed tokens. Since the tokens themselves are a set, so is this:
    /// its size is the number of *distinct* tokens given.
    type Output = BTreeSet<T>;

    fn value(&self, args: &Arguments) -> Result<BTreeSet<T>> {
        let tokens = args.unnamed();
        if C::REQUIRED && tokens.is_empty() {
            return Err(Error::MissingArgument(self.type_label.clone()));
        }
        tokens
            .iter()
            .map(|t| T::parse(t).map_err(|e| Error::from_conversion(&self.type_label, e)))
            .collect()
    }
}

/// A boolean flag, e.g. "-k". Its value is purely whether or not it was
/// present; there is nothing to convert.
pub struct BooleanArgument<C: Cardinality> {
    name: String,
    description: String,
    _phantom: PhantomData<C>,
}

impl<C: Cardinality> BooleanArgument<C> {
    /// Construct a new boolean flag spec. The given name should not include the
    /// leading "-".
    pub fn new(name: &str, description: &str) -> Self {
        BooleanArgument {
            name: name.to_owned(),
            description: description.to_owned(),
            _phantom: PhantomData,
        }
    }

    /// Returns this flag's name as it appears on the command line, e.g. "-k".
    pub fn name(&self) -> String {
        format!("-{}", self.name)
    }

    /// Returns the human-readable description of this flag.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns whether or not this flag is present in the given Arguments.
    pub fn is_present(&self, args: &Arguments) -> bool {
        args.has_flag(&self.name())
    }
}

impl<C: Cardinality> fmt::Debug for BooleanArgument<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BooleanArgument")
            .field("name", &self.name)
            .field("required", &C::REQUIRED)
            .finish()
    }
}

impl<C: Cardinality> Describe for BooleanArgument<C> {
    fn usage(&self) -> String {
        usage_fragment::<C>(self.name())
    }

    fn full_description(&self) -> String {
        help_block(&self.name(), Some(self.description.clone()))
    }
}

impl Extract for BooleanArgument<Optional> {
    type Output = bool;

    /// Absence simply means false; this never fails.
    fn value(&self, args: &Arguments) -> Result<bool> {
        Ok(self.is_present(args))
    }
}

impl Extract for BooleanArgument<Required> {
    type Output = bool;

    /// A required flag can only ever be true. Absence is an error.
    fn value(&self, args: &Arguments) -> Result<bool> {
        match self.is_present(args) {
            true => Ok(true),
            false => Err(Error::MissingArgument(self.name())),
        }
    }
}

/// A named argument, given on the command line as "--name=value".
///
/// An optional named argument which is absent takes its default value. If no
/// default was given at construction, the default is `T::default()` - e.g. an
/// empty string, or zero. Such arguments can't distinguish "omitted" from
/// "explicitly given the zero value", so each one should say in its description
/// what omitting it means.
pub struct NamedArgument<T, C: Cardinality> {
    name: String,
    type_label: String,
    description: String,
    /// The value this argument takes when absent. This is always None for
    /// required arguments, and always Some for optional ones.
    absent_value: Option<T>,
    /// Whether or not absent_value was given explicitly, in which case it is
    /// shown in help text.
    default_specified: bool,
    _phantom: PhantomData<C>,
}

impl<T: Value, C: Cardinality> NamedArgument<T, C> {
    fn new_impl(
        name: &str,
        type_label: &str,
        description: &str,
        absent_value: Option<T>,
        default_specified: bool,
    ) -> Self {
        NamedArgument {
            name: name.to_owned(),
            type_label: type_label.to_owned(),
            description: description.to_owned(),
            absent_value: absent_value,
            default_specified: default_specified,
            _phantom: PhantomData,
        }
    }

    /// Returns this argument's name as it appears on the command line, e.g.
    /// "--api_key".
    pub fn name(&self) -> String {
        format!("--{}", self.name)
    }

    /// Returns the type label shown in this argument's usage, e.g. "<key>".
    pub fn type_label(&self) -> &str {
        self.type_label.as_str()
    }

    /// Returns the human-readable description of this argument.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the explicitly specified default value, if there is one.
    pub fn default_value(&self) -> Option<&T> {
        match self.default_specified {
            false => None,
            true => self.absent_value.as_ref(),
        }
    }
}

impl<T: Value> NamedArgument<T, Required> {
    /// Construct a new required named argument spec. The given name should not
    /// include the leading "--".
    pub fn required(name: &str, type_label: &str, description: &str) -> Self {
        Self::new_impl(name, type_label, description, None, false)
    }
}

impl<T: Value> NamedArgument<T, Optional> {
    /// Construct a new optional named argument spec with no explicit default.
    /// If this argument is absent, its value is `T::default()`.
    pub fn optional(name: &str, type_label: &str, description: &str) -> Self
    where
        T: Default,
    {
        Self::new_impl(name, type_label, description, Some(T::default()), false)
    }

    /// Construct a new optional named argument spec, which takes the given
    /// default value when absent. The default is shown in help text.
    pub fn with_default(name: &str, type_label: &str, description: &str, default_value: T) -> Self {
        Self::new_impl(name, type_label, description, Some(default_value), true)
    }
}

impl<T, C: Cardinality> fmt::Debug for NamedArgument<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedArgument")
            .field("name", &self.name)
            .field("type_label", &self.type_label)
            .field("required", &C::REQUIRED)
            .field("default_specified", &self.default_specified)
            .finish()
    }
}

impl<T: Value, C: Cardinality> Describe for NamedArgument<T, C> {
    fn usage(&self) -> String {
        usage_fragment::<C>(format!("{}={}", self.name(), self.type_label))
    }

    fn full_description(&self) -> String {
        let mut lines = vec![self.description.clone()];
        lines.extend(allowed_values_description::<T>());
        if let Some(dv) = self.default_value() {
            lines.push(format!("Default value: \"{}\".", dv.render()));
        }
        help_block(&self.name(), lines)
    }
}

impl<T: Value + Clone, C: Cardinality> Extract for NamedArgument<T, C> {
    type Output = T;

    fn value(&self, args: &Arguments) -> Result<T> {
        let name = self.name();
        match args.get(&name) {
            Some(text) => T::parse(text).map_err(|e| Error::from_conversion(&name, e)),
            None => match self.absent_value.as_ref() {
                None => Err(Error::MissingArgument(name)),
                Some(v) => {
                    debug!("'{}' not given, using '{}'", name, v.render());
                    Ok(v.clone())
                }
            },
        }
    }
}
