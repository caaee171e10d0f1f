//! Moderately simple command line parser with nested subcommands.
//!
//! A CLI is declared as a tree of parsers. The leaves are [`Cmd`]s: a fixed
//! set of typed options, presence flags and positional arguments plus a
//! callback that receives the parsed [`TermsSet`]. The internal nodes are
//! [`SubcmdSet`]s, which route on one leading token and accept nothing else.
//! [`run`] wires the tree to a program name and the process arguments.
//!
//! ```no_run
//! use termcli::{run, Cmd, OptionDef, Parser, SubcmdSet, TermType, TermsSet};
//!
//! let set = SubcmdSet::new().add(
//!     "greet",
//!     "greets someone",
//!     Cmd::new(|terms: &TermsSet| {
//!         println!("hello, {}", terms.opt_str("name"));
//!     })
//!     .option(OptionDef::new("name", TermType::Str).alias("n").required()),
//! );
//!
//! let args: Vec<String> = std::env::args().collect();
//! if let Err(err) = run("demo", "A demo CLI", &args, &Parser::from(set)) {
//!     eprintln!("{err}");
//!     std::process::exit(1);
//! }
//! ```
//!
//! With that tree, `demo greet --name=John` (equally `demo greet -n John`)
//! reaches the `greet` command and runs its callback; `demo greet` fails
//! with "--name option is required"; `demo --help` and `demo greet --help`
//! print help instead of parsing. Subcommand sets nest to any depth, so a
//! subcommand can itself be another [`SubcmdSet`].
//!
//! Parsing never prints or exits on its own: errors come back as [`Error`]
//! values and the caller decides how to show them. Help and introspection
//! output go to the sink passed to [`run_with`]; [`run`] uses stdout.

use std::io::{self, Write};

mod cmd;
mod complete;
mod error;
mod help;
mod parser;
mod subcmd;
mod token;
mod value;

pub use crate::cmd::{ArgDef, Cmd, FlagDef, OptionDef, TermsSet};
pub use crate::complete::completion_parser;
pub use crate::error::{DeclError, Error};
pub use crate::parser::Parser;
pub use crate::subcmd::SubcmdSet;
pub use crate::value::TermType;

pub type Result<T, E = Error> = std::result::Result<T, E>;

use crate::parser::Ctx;

/// Parses `args` against `parser`, printing help to stdout when requested.
///
/// `args[0]` is skipped so `std::env::args().collect()` can be passed as is;
/// `name` takes its place at the front of the usage path. Panics if `name`
/// is empty, which is a declaration defect rather than a parse error.
pub fn run(name: &str, description: &str, args: &[String], parser: &Parser) -> Result<()> {
    run_with(name, description, args, parser, &mut io::stdout())
}

/// [`run`] with an explicit sink for help and introspection output.
pub fn run_with(
    name: &str,
    description: &str,
    args: &[String],
    parser: &Parser,
    out: &mut dyn Write,
) -> Result<()> {
    if name.is_empty() {
        panic!("{}", DeclError::MissingRootName);
    }

    let tokens = if args.len() <= 1 { &[][..] } else { &args[1..] };

    // Hidden entry used by the shell-completion scripts: print the valid
    // next tokens for the line typed so far and stop.
    if tokens.first().map(String::as_str) == Some("__introspect__") {
        let words = complete::introspect(tokens[1..].iter().map(String::as_str), parser);
        let _ = writeln!(out, "{}", words.join(" "));
        return Ok(());
    }

    parser.parse(&Ctx::root(name, description), tokens, out)
}
