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
use crate::command::{find_command, Command, CommandResult};
use crate::error::*;
use crate::help;
use log::debug;
use std::env;
use std::fmt::{Debug, Display};
use std::io::Write;
use std::process;

/// The integer which is returned from main() if the program exits successfully.
pub const EXIT_SUCCESS: i32 = 0;
/// The integer which is returned from main() if the program exits with any
/// error.
pub const EXIT_FAILURE: i32 = 1;

/// DispatchOptions controls what the dispatcher prints when things go wrong.
/// Generally these should be constructed using DispatchOptionsBuilder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DispatchOptions {
    /// Print the program help screen if no command, or an unknown command, was
    /// specified.
    pub print_program_help: bool,
    /// Print the command's help screen if executing it returned an error (for
    /// example, because a required argument was missing).
    pub print_command_help: bool,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        DispatchOptionsBuilder::new().build()
    }
}

/// DispatchOptionsBuilder provides a builder-style interface to construct a
/// DispatchOptions. By default, all help screens are printed.
#[derive(Debug, Default)]
pub struct DispatchOptionsBuilder {
    print_program_help: Option<bool>,
    print_command_help: Option<bool>,
}

impl DispatchOptionsBuilder {
    /// Construct a new builder, which by default sets all options to their
    /// default values.
    pub fn new() -> Self {
        DispatchOptionsBuilder {
            print_program_help: None,
            print_command_help: None,
        }
    }

    /// Set whether or not the program help screen is printed when command
    /// lookup fails.
    pub fn set_print_program_help(mut self, print_program_help: bool) -> Self {
        self.print_program_help = Some(print_program_help);
        self
    }

    /// Set whether or not a command's help screen is printed when it fails.
    pub fn set_print_command_help(mut self, print_command_help: bool) -> Self {
        self.print_command_help = Some(print_command_help);
        self
    }

    /// Build a DispatchOptions from this builder's current state.
    pub fn build(self) -> DispatchOptions {
        DispatchOptions {
            print_program_help: self.print_program_help.unwrap_or(true),
            print_command_help: self.print_command_help.unwrap_or(true),
        }
    }
}

/// This function looks up the named command and executes it with the given
/// Arguments. There are essentially three return values:
///
/// - An error, if something went wrong outside of the command itself (e.g.,
///   writing a help screen failed).
///
/// - Ok(None), if no command was executed, because none was specified or the
///   specified one doesn't exist. The program help screen has been printed, if
///   enabled.
///
/// - The result returned by the command which was executed. Argument
///   validation failures show up here, as the command's own error.
pub fn dispatch_with_options<E, W: Write>(
    program: &str,
    command_name: Option<&str>,
    args: &Arguments,
    mut commands: Vec<Command<'_, E>>,
    mut output_writer: Option<W>,
    options: DispatchOptions,
) -> Result<Option<CommandResult<E>>> {
    let command_idx = match find_command(command_name, &commands) {
        Ok(idx) => idx,
        Err(e) => {
            debug!("Command lookup failed: {}", e);
            if options.print_program_help {
                help::print_program_help(output_writer.as_mut(), program, &commands)?;
            }
            return Ok(None);
        }
    };
    let mut command = commands.remove(command_idx);

    debug!("Executing command '{}'", command.name());
    let result = command.execute(args);
    if result.is_err() && options.print_command_help {
        help::print_command_help(output_writer.as_mut(), program, &command)?;
    }
    Ok(Some(result))
}

/// Equivalent to `dispatch_with_options`, using the default DispatchOptions.
pub fn dispatch<E, W: Write>(
    program: &str,
    command_name: Option<&str>,
    args: &Arguments,
    commands: Vec<Command<'_, E>>,
    output_writer: Option<W>,
) -> Result<Option<CommandResult<E>>> {
    dispatch_with_options(
        program,
        command_name,
        args,
        commands,
        output_writer,
        DispatchOptions::default(),
    )
}

fn describe_error<E: Display + Debug>(e: &E) -> String {
    match cfg!(debug_assertions) {
        false => e.to_string(),
        true => format!("{:?}", e),
    }
}

/// This is a utility function, which handles the result of `dispatch`. The
/// *outer* Result being an Err means that something went wrong internally in
/// this library. The *inner* Result, on the other hand, is the actual Result
/// returned by the caller-provided Command implementation itself.
///
/// Overall, if an error is encountered, it is printed to standard error. In
/// either case, the appropriate exit code (EXIT_SUCCESS or EXIT_FAILURE) is
/// returned.
pub fn handle_result<E: Display + Debug>(r: Result<Option<CommandResult<E>>>) -> i32 {
    match r {
        // The command was not executed, but the error was handled internally.
        Ok(None) => EXIT_FAILURE,
        Ok(Some(Ok(_))) => EXIT_SUCCESS,
        Ok(Some(Err(e))) => {
            eprintln!("{}", describe_error(&e));
            EXIT_FAILURE
        }
        Err(e) => {
            eprintln!("Error dispatching command: {}", describe_error(&e));
            EXIT_FAILURE
        }
    }
}

/// Executes the named command with the given (already tokenized) Arguments,
/// printing any help screens or errors to standard error.
///
/// This function exits this process with an appropriate exit code. Like
/// `std::process::exit`, because this function never returns and it terminates
/// the process, no destructors on the current stack or any other thread's
/// stack will be run. The caller should ensure that any destructors which need
/// to be run are in the stack of the command callback.
pub fn main_impl<E: Display + Debug>(
    command_name: Option<&str>,
    args: &Arguments,
    commands: Vec<Command<'_, E>>,
) -> ! {
    let program = env::args().next().unwrap_or_default();
    process::exit(handle_result(dispatch(
        program.as_str(),
        command_name,
        args,
        commands,
        Some(std::io::stderr()),
    )));
}
