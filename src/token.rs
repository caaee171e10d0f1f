//! Raw token classification.
//!
//! Every token a parser sees is one of three shapes: an option carrying its
//! value inline (`--name=value`), an option or flag with no inline value
//! (`--name`), or a plain word (a positional argument or a subcommand name).
//! Both option shapes share one name grammar so that alias detection stays
//! consistent: a single leading dash means the name is an alias.

use once_cell::sync::Lazy;
use regex::Regex;

static OPT_WITH_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^--?([a-zA-Z0-9]+)=(.*)$").unwrap());
static OPT_WITHOUT_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new("^--?([a-zA-Z0-9]+)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// `--name=value` or `-alias=value`. The value may be empty (`--name=`),
    /// which the parser rejects as a missing value.
    OptWithValue { name: &'a str, value: &'a str, alias: bool },
    /// `--name` or `-alias`. Resolved against options first, then flags.
    Opt { name: &'a str, alias: bool },
    /// Anything else: a positional argument or a subcommand name.
    Plain(&'a str),
}

pub(crate) fn classify(raw: &str) -> Token<'_> {
    if let Some(caps) = OPT_WITH_VALUE.captures(raw) {
        return Token::OptWithValue {
            name: caps.get(1).unwrap().as_str(),
            value: caps.get(2).unwrap().as_str(),
            alias: is_alias(raw),
        };
    }
    if let Some(caps) = OPT_WITHOUT_VALUE.captures(raw) {
        return Token::Opt { name: caps.get(1).unwrap().as_str(), alias: is_alias(raw) };
    }
    Token::Plain(raw)
}

/// An alias reference has exactly one leading dash.
fn is_alias(raw: &str) -> bool {
    !raw.starts_with("--")
}

/// Whether `raw` would be consumed as an option or flag rather than a value.
/// Used for the one-token lookahead when an option's value comes as the next
/// token.
pub(crate) fn is_option_like(raw: &str) -> bool {
    !matches!(classify(raw), Token::Plain(_))
}

/// Only the literal `--help` and `-h` request help; `-help` and `--h` do not.
pub(crate) fn is_help(raw: &str) -> bool {
    raw == "--help" || raw == "-h"
}

/// A term name or alias is valid iff prefixing it with `--` yields a
/// well-formed option token. This rules out empty names, leading dashes and
/// anything outside `[a-zA-Z0-9]+`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    OPT_WITHOUT_VALUE.is_match(&format!("--{name}"))
}
