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
use crate::definition::ArgumentDefinitions;
use crate::error::*;
use crate::spec::Describe;
use std::fmt;

/// An alias for Result, which has an arbitrary Error type. This is used to
/// denote the actual Result returned by a caller-provided Command
/// implementation.
///
/// Note that the Ok value accepted is just (); this library has no logic to
/// deal with application-specific success return values.
pub type CommandResult<E> = std::result::Result<(), E>;

/// The caller-provided callback which implements a particular Command. It is
/// given the raw Arguments, and is expected to extract its values through the
/// command's own typed argument specs (which it typically captures by `Rc`).
/// Any extraction failure should simply be propagated with `?`.
pub type CommandCallback<'a, E> = Box<dyn FnMut(&Arguments) -> CommandResult<E> + 'a>;

/// A command is a single sub-command for a given program. Each command has a
/// name, an authored usage pattern, a description, and the list of arguments
/// it accepts (used for help text). None of these can be changed after
/// construction.
pub struct Command<'a, E> {
    name: String,
    usage: String,
    description: String,
    arguments: ArgumentDefinitions,
    callback: CommandCallback<'a, E>,
}

impl<'a, E> Command<'a, E> {
    /// Construct a new Command with the given properties.
    ///
    /// The usage pattern is free-form text, e.g.
    /// "[-k] --api_key=<key> (--message_id=<id> | <url>...)". It is not
    /// generated from the argument definitions, since grouping and
    /// alternatives can't be expressed by them.
    pub fn new(
        name: &str,
        usage: &str,
        description: &str,
        arguments: ArgumentDefinitions,
        callback: CommandCallback<'a, E>,
    ) -> Self {
        Command {
            name: name.to_owned(),
            usage: usage.to_owned(),
            description: description.to_owned(),
            arguments: arguments,
            callback: callback,
        }
    }

    /// Returns this command's name, which is how the user selects it.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns this command's authored usage pattern.
    pub fn usage(&self) -> &str {
        self.usage.as_str()
    }

    /// Returns the description which explains this command's purpose.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the definitions of all of the arguments this command accepts.
    pub fn arguments(&self) -> &ArgumentDefinitions {
        &self.arguments
    }

    /// Returns the help text for all of this command's arguments, in
    /// declaration order.
    pub fn full_description(&self) -> String {
        self.arguments.full_description()
    }

    /// Call into this Command's implementation with the given Arguments. Any
    /// error the implementation returns is passed straight through.
    pub fn execute(&mut self, args: &Arguments) -> CommandResult<E> {
        self.callback.as_mut()(args)
    }
}

impl<'a, E> fmt::Debug for Command<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .finish()
    }
}

impl<'a, E> PartialEq for Command<'a, E> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Look up by name the command to execute. If no name was given or no command
/// matches, an error is returned. Otherwise, the index of the command in the
/// given list is returned.
pub(crate) fn find_command<E>(name: Option<&str>, commands: &[Command<'_, E>]) -> Result<usize> {
    let name = match name {
        None => return Err(Error::MissingCommand),
        Some(name) => name,
    };
    commands
        .iter()
        .position(|command| command.name == name)
        .ok_or_else(|| Error::UnknownCommand(name.to_owned()))
}
