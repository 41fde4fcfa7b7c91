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

use crate::command::Command;
use crate::error::*;
use std::io::Write;

/// Print the program-level help screen, which lists all of the available
/// commands. If no writer is given, this does nothing.
pub fn print_program_help<W: Write, E>(
    f: Option<&mut W>,
    program: &str,
    commands: &[Command<'_, E>],
) -> Result<()> {
    let f = match f {
        None => return Ok(()),
        Some(f) => f,
    };

    f.write_fmt(format_args!("Usage: {} command [arguments ...]\n", program))?;
    f.write_fmt(format_args!("Available commands:\n"))?;
    for command in commands.iter() {
        f.write_fmt(format_args!(
            "\t{} - {}\n",
            command.name(),
            command.description()
        ))?;
    }

    Ok(())
}

/// Print the help screen for a single command: its usage pattern, its
/// description, and the help text of each of its arguments. If no writer is
/// given, this does nothing.
pub fn print_command_help<W: Write, E>(
    f: Option<&mut W>,
    program: &str,
    command: &Command<'_, E>,
) -> Result<()> {
    let f = match f {
        None => return Ok(()),
        Some(f) => f,
    };

    f.write_fmt(format_args!("Usage: {} {}", program, command.name()))?;
    if !command.usage().is_empty() {
        f.write_fmt(format_args!(" {}", command.usage()))?;
    }
    f.write_fmt(format_args!("\n\n{}\n", command.description()))?;

    if !command.arguments().is_empty() {
        f.write_fmt(format_args!("\nArguments:\n{}", command.full_description()))?;
    }

    Ok(())
}
