//! The two error tiers: declaration defects and user-facing parse errors.

use thiserror::Error;

use crate::value::TermType;

/// A defect in how the CLI was declared. These abort construction by
/// panicking with the rendered message; they are never returned from a
/// parse.
#[derive(Debug, Error)]
pub enum DeclError {
    #[error("invalid option name or option alias: `{0}`")]
    InvalidOptionNameOrAlias(String),
    #[error("invalid flag name or flag alias: `{0}`")]
    InvalidFlagNameOrAlias(String),
    #[error("invalid argument name: `{0}`")]
    InvalidArgName(String),
    #[error("duplicate option or flag name: `{0}`")]
    DuplicateName(String),
    #[error("duplicate option or flag alias: `{0}`")]
    DuplicateAlias(String),
    #[error("duplicate argument name: `{0}`")]
    DuplicateArgName(String),
    #[error("missing name for subcommand")]
    MissingSubcmdName,
    #[error("missing name for root command")]
    MissingRootName,
}

fn dashed(name: &str, is_alias: &bool) -> String {
    if *is_alias {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}

/// A parse failure, returned unchanged to the root caller. Each variant
/// carries what a caller needs for a precise message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An option token (`--name=value`) did not match any declared option.
    #[error("unexpected {} option", dashed(.name, .is_alias))]
    UnexpectedOption { name: String, is_alias: bool },

    /// A bare option token matched neither an option nor a flag.
    #[error("unexpected {} option/flag", dashed(.name, .is_alias))]
    UnexpectedOptionOrFlag { name: String, is_alias: bool },

    /// An option was given no value, inline or as the next token.
    #[error("{} option expects a value", dashed(.name, .is_alias))]
    OptionExpectsValue { name: String, is_alias: bool },

    /// An option's value did not convert to its declared type.
    #[error("{} option expects a value of type {expected}", dashed(.name, .is_alias))]
    OptionExpectsType { name: String, is_alias: bool, expected: TermType },

    /// A positional token arrived after every declared argument was filled.
    #[error("unexpected argument: {value}")]
    UnexpectedArg { value: String },

    /// A positional token did not convert to the next argument's type.
    #[error("the <{name}> argument ({value}) expects a value of type {expected}")]
    ArgExpectsType { pos: usize, name: String, expected: TermType, value: String },

    /// Input ran out before every declared argument was filled. Carries the
    /// unfilled names in declaration order.
    #[error("missing argument(s): {}", .missing.join(", "))]
    MissingArgs { missing: Vec<String> },

    /// A required option never showed up.
    #[error("--{name} option is required")]
    RequiredOption { name: String },

    /// A subcommand set was invoked with no tokens left.
    #[error("missing subcommand")]
    MissingSubcmd,

    /// The leading token named no known subcommand.
    #[error("unknown subcommand: {name}")]
    UnknownSubcmd { name: String },
}
