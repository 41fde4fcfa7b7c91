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
use log::LevelFilter;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Value is the conversion between a textual token (as found on the command
/// line) and a typed argument value. Every type used as an argument's value
/// type must implement it; the implementation is selected statically, by type.
pub trait Value: Sized {
    /// Interpret the given text as a value of this type. On failure, the
    /// returned error carries the offending text and `allowed_values()`.
    fn parse(text: &str) -> ConversionResult<Self>;

    /// The inverse of `parse`. This is only used to embed default values in
    /// help text, but it must be lossless for every value `parse` can produce.
    fn render(&self) -> String;

    /// The valid textual forms of this type, for enum-like types. This is used
    /// for help text; free-form types (strings, integers, ...) return an empty
    /// list.
    fn allowed_values() -> Vec<&'static str> {
        vec![]
    }
}

/// Construct the error a `Value` implementation should return when `text` is
/// not valid for type `T`.
pub fn conversion_error<T: Value>(text: &str) -> ConversionError {
    ConversionError::new(text, &T::allowed_values())
}

/// Render the "Valid values: ..." help line for type T, or None if T is not
/// enum-like.
pub(crate) fn allowed_values_description<T: Value>() -> Option<String> {
    let allowed_values = T::allowed_values();
    match allowed_values.is_empty() {
        true => None,
        false => Some(format!("Valid values: {}.", allowed_values.join(", "))),
    }
}

impl Value for String {
    fn parse(text: &str) -> ConversionResult<Self> {
        Ok(text.to_owned())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl Value for bool {
    fn parse(text: &str) -> ConversionResult<Self> {
        match text.trim().to_lowercase().as_ref() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(conversion_error::<bool>(text)),
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn allowed_values() -> Vec<&'static str> {
        vec!["true", "false"]
    }
}

// Types whose FromStr / Display implementations already round-trip.
macro_rules! impl_value_via_from_str {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                fn parse(text: &str) -> ConversionResult<Self> {
                    text.parse::<$t>().map_err(|_| conversion_error::<$t>(text))
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_value_via_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, IpAddr,
    SocketAddr
);

impl Value for PathBuf {
    fn parse(text: &str) -> ConversionResult<Self> {
        Ok(PathBuf::from(text))
    }

    fn render(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

const LEVEL_FILTERS: &[(&str, LevelFilter)] = &[
    ("off", LevelFilter::Off),
    ("error", LevelFilter::Error),
    ("warn", LevelFilter::Warn),
    ("info", LevelFilter::Info),
    ("debug", LevelFilter::Debug),
    ("trace", LevelFilter::Trace),
];

impl Value for LevelFilter {
    fn parse(text: &str) -> ConversionResult<Self> {
        let normalized = text.trim().to_lowercase();
        LEVEL_FILTERS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, level)| *level)
            .ok_or_else(|| conversion_error::<LevelFilter>(text))
    }

    fn render(&self) -> String {
        self.to_string().to_lowercase()
    }

    fn allowed_values() -> Vec<&'static str> {
        LEVEL_FILTERS.iter().map(|(name, _)| *name).collect()
    }
}

/// Declare a fieldless enum whose `Value` implementation accepts exactly the
/// given textual forms, and which lists them as its allowed values in help
/// text. The first variant is the enum's `Default`.
///
/// ```
/// argdef::value_enum! {
///     /// How much output to produce.
///     pub enum ReportLevel {
///         Silent => "silent",
///         Normal => "normal",
///         Verbose => "verbose",
///     }
/// }
///
/// use argdef::Value;
/// assert_eq!(ReportLevel::Verbose, ReportLevel::parse("verbose").unwrap());
/// assert_eq!(vec!["silent", "normal", "verbose"], ReportLevel::allowed_values());
/// ```
#[macro_export]
macro_rules! value_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $first:ident => $first_text:literal
            $(, $variant:ident => $text:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        $vis enum $name {
            #[allow(missing_docs)]
            $first,
            $(
                #[allow(missing_docs)]
                $variant,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$first
            }
        }

        impl $crate::value::Value for $name {
            fn parse(text: &str) -> $crate::error::ConversionResult<Self> {
                match text {
                    $first_text => Ok($name::$first),
                    $($text => Ok($name::$variant),)*
                    _ => Err($crate::value::conversion_error::<$name>(text)),
                }
            }

            fn render(&self) -> String {
                match *self {
                    $name::$first => $first_text,
                    $($name::$variant => $text,)*
                }
                .to_owned()
            }

            fn allowed_values() -> Vec<&'static str> {
                vec![$first_text $(, $text)*]
            }
        }
    };
}
