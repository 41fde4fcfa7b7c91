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
use crate::spec::*;
use crate::tests::value::ReportLevel;
use crate::value::Value;
use std::collections::BTreeSet;

fn assert_missing<T: std::fmt::Debug>(expected_identifier: &str, r: Result<T>) {
    match r {
        Err(Error::MissingArgument(identifier)) => assert_eq!(expected_identifier, identifier),
        r => panic!("Expected MissingArgument({}), got {:?}", expected_identifier, r),
    }
}

fn assert_conversion<T: std::fmt::Debug>(
    expected_identifier: &str,
    expected_value: &str,
    r: Result<T>,
) {
    match r {
        Err(Error::Conversion {
            identifier, value, ..
        }) => {
            assert_eq!(expected_identifier, identifier);
            assert_eq!(expected_value, value);
        }
        r => panic!(
            "Expected Conversion({}, {}), got {:?}",
            expected_identifier, expected_value, r
        ),
    }
}

fn assert_bracketing<D: Describe>(spec: &D, required: bool) {
    let usage = spec.usage();
    assert_eq!(!required, usage.starts_with('['), "{}", usage);
    assert_eq!(!required, usage.ends_with(']'), "{}", usage);
}

fn string_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|&v| v.to_owned()).collect()
}

#[test]
fn test_unnamed_rendering() {
    let required =
        UnnamedArgument::<String, Required>::new("<url>", "Url(s) of files to download.");
    assert_eq!("<url>", required.usage());
    assert_eq!(
        "\t<url>\n\t    Url(s) of files to download.\n\n",
        required.full_description()
    );
    assert_bracketing(&required, true);

    let optional = UnnamedArgument::<String, Optional>::new("<file>", "Files to send.");
    assert_eq!("[<file>]", optional.usage());
    assert_eq!("\t<file>\n\t    Files to send.\n\n", optional.full_description());
    assert_bracketing(&optional, false);
}

#[test]
fn test_unnamed_required_value() {
    let spec = UnnamedArgument::<String, Required>::new("<url>", "");

    let args = Arguments::builder()
        .unnamed("a")
        .unnamed("b")
        .unnamed("a")
        .build();
    let value = spec.value(&args).unwrap();
    assert_eq!(2, value.len());
    assert_eq!(string_set(&["a", "b"]), value);

    assert_missing("<url>", spec.value(&Arguments::default()));
}

#[test]
fn test_unnamed_optional_value() {
    let spec = UnnamedArgument::<String, Optional>::new("<file>", "");
    assert!(spec.value(&Arguments::default()).unwrap().is_empty());

    let args = Arguments::builder().unnamed("foo.txt").build();
    assert_eq!(string_set(&["foo.txt"]), spec.value(&args).unwrap());
}

#[test]
fn test_unnamed_typed_value() {
    let spec = UnnamedArgument::<u32, Required>::new("<id>", "");

    let args = Arguments::builder().unnamed("10").unnamed("2").build();
    let expected: BTreeSet<u32> = vec![2, 10].into_iter().collect();
    assert_eq!(expected, spec.value(&args).unwrap());

    let args = Arguments::builder().unnamed("10").unnamed("ten").build();
    assert_conversion("<id>", "ten", spec.value(&args));
}

#[test]
fn test_boolean_rendering() {
    let optional = BooleanArgument::<Optional>::new("k", "Do not validate certificates.");
    assert_eq!("-k", optional.name());
    assert_eq!("[-k]", optional.usage());
    assert_eq!(
        "\t-k\n\t    Do not validate certificates.\n\n",
        optional.full_description()
    );
    assert_bracketing(&optional, false);

    let required = BooleanArgument::<Required>::new("s", "");
    assert_eq!("-s", required.usage());
    assert_bracketing(&required, true);
}

#[test]
fn test_boolean_optional_value() {
    let spec = BooleanArgument::<Optional>::new("k", "");
    assert!(spec.value(&Arguments::builder().flag("-k").build()).unwrap());
    assert!(!spec.value(&Arguments::default()).unwrap());
    // The flag set is only ever checked for the prefixed name.
    assert!(!spec.value(&Arguments::builder().flag("k").build()).unwrap());
    assert!(!spec.value(&Arguments::builder().unnamed("-k").build()).unwrap());
}

#[test]
fn test_boolean_required_value() {
    let spec = BooleanArgument::<Required>::new("s", "");
    assert!(spec.value(&Arguments::builder().flag("-s").build()).unwrap());
    assert_missing("-s", spec.value(&Arguments::default()));
}

#[test]
fn test_named_required_rendering() {
    let spec = NamedArgument::<String, Required>::required("api_key", "<key>", "The API key.");
    assert_eq!("--api_key", spec.name());
    assert_eq!("--api_key=<key>", spec.usage());
    assert_eq!("\t--api_key\n\t    The API key.\n\n", spec.full_description());
    assert_bracketing(&spec, true);
    assert!(spec.default_value().is_none());

    let spec = NamedArgument::<ReportLevel, Required>::required(
        "report_level",
        "<level>",
        "Level of reporting.",
    );
    assert_eq!(
        concat!(
            "\t--report_level\n",
            "\t    Level of reporting.\n",
            "\t    Valid values: silent, normal, verbose.\n\n"
        ),
        spec.full_description()
    );
}

#[test]
fn test_named_required_value() {
    let spec = NamedArgument::<String, Required>::required("api_key", "<key>", "");
    assert_missing("--api_key", spec.value(&Arguments::default()));
    let args = Arguments::builder().named("--api-key", "x").build();
    assert_missing("--api_key", spec.value(&args));
    let args = Arguments::builder().named("--api_key", "secret").build();
    assert_eq!("secret", spec.value(&args).unwrap());

    let spec = NamedArgument::<u16, Required>::required("port", "<port>", "");
    let args = Arguments::builder().named("--port", "8080").build();
    assert_eq!(8080, spec.value(&args).unwrap());
    let args = Arguments::builder().named("--port", "http").build();
    assert_conversion("--port", "http", spec.value(&args));
}

#[test]
fn test_named_optional_rendering() {
    let spec = NamedArgument::<ReportLevel, Optional>::with_default(
        "report_level",
        "<level>",
        "Level of reporting.",
        ReportLevel::Normal,
    );
    assert_eq!("[--report_level=<level>]", spec.usage());
    assert_eq!(
        concat!(
            "\t--report_level\n",
            "\t    Level of reporting.\n",
            "\t    Valid values: silent, normal, verbose.\n",
            "\t    Default value: \"normal\".\n\n"
        ),
        spec.full_description()
    );
    assert_bracketing(&spec, false);
    assert_eq!(Some(&ReportLevel::Normal), spec.default_value());

    let spec = NamedArgument::<String, Optional>::optional("subject", "<text>", "Message subject.");
    assert_eq!("[--subject=<text>]", spec.usage());
    assert_eq!("\t--subject\n\t    Message subject.\n\n", spec.full_description());
    assert!(spec.default_value().is_none());
}

#[test]
fn test_named_optional_value_with_default() {
    let spec = NamedArgument::<ReportLevel, Optional>::with_default(
        "report_level",
        "<level>",
        "",
        ReportLevel::Normal,
    );
    assert_eq!(ReportLevel::Normal, spec.value(&Arguments::default()).unwrap());
    let args = Arguments::builder()
        .named("--report_level", "verbose")
        .build();
    assert_eq!(ReportLevel::Verbose, spec.value(&args).unwrap());
    let args = Arguments::builder().named("--report_level", "loud").build();
    match spec.value(&args) {
        Err(Error::Conversion {
            identifier,
            value,
            allowed_values,
        }) => {
            assert_eq!("--report_level", identifier);
            assert_eq!("loud", value);
            assert_eq!(vec!["silent", "normal", "verbose"], allowed_values);
        }
        r => panic!("Expected Conversion error, got {:?}", r),
    }
}

#[test]
fn test_named_optional_value_without_default() {
    let spec = NamedArgument::<String, Optional>::optional("subject", "<text>", "");
    let value = spec.value(&Arguments::default()).unwrap();
    assert_eq!(String::default(), value);
    assert_eq!(String::parse("").unwrap(), value);

    let spec = NamedArgument::<u32, Optional>::optional("count", "<n>", "");
    assert_eq!(0, spec.value(&Arguments::default()).unwrap());
    let args = Arguments::builder().named("--count", "3").build();
    assert_eq!(3, spec.value(&args).unwrap());

    // An explicit zero value is indistinguishable from omission.
    let spec = NamedArgument::<ReportLevel, Optional>::optional("report_level", "<level>", "");
    assert_eq!(ReportLevel::Silent, spec.value(&Arguments::default()).unwrap());
}

#[test]
fn test_usage_is_idempotent() {
    let spec =
        NamedArgument::<String, Optional>::with_default("to", "<user>", "", "me".to_owned());
    let args = Arguments::builder().named("--to", "you").build();
    let usage = spec.usage();
    let description = spec.full_description();
    assert_eq!("you", spec.value(&args).unwrap());
    assert_eq!(usage, spec.usage());
    assert_eq!(description, spec.full_description());
}

#[test]
fn test_named_constructors_infer_cardinality() {
    // The constructor alone picks the cardinality; only the value type comes
    // from the binding.
    let required: NamedArgument<String, _> = NamedArgument::required("api_key", "<key>", "");
    assert_eq!("--api_key=<key>", required.usage());
    assert_missing("--api_key", required.value(&Arguments::default()));

    let optional: NamedArgument<u32, _> = NamedArgument::optional("count", "<n>", "");
    assert_eq!("[--count=<n>]", optional.usage());
    assert_eq!(0, optional.value(&Arguments::default()).unwrap());
}
