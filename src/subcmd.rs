//! Subcommand dispatch: an internal node routing by name to child parsers.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{DeclError, Error};
use crate::help;
use crate::parser::{Ctx, Parser};
use crate::token::{self, Token};

pub(crate) struct Subcmd {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) parser: Parser,
}

/// A set of named subcommands. It declares no options, flags or arguments of
/// its own; it consumes exactly one leading token and hands the rest to the
/// matching child.
#[derive(Default)]
pub struct SubcmdSet {
    pub(crate) items: Vec<Subcmd>,
    index: HashMap<String, usize>,
}

impl SubcmdSet {
    pub fn new() -> SubcmdSet {
        SubcmdSet::default()
    }

    /// Adds a subcommand. Panics on an empty name. Re-adding a name replaces
    /// the earlier entry.
    pub fn add(mut self, name: &str, description: &str, parser: impl Into<Parser>) -> SubcmdSet {
        if name.is_empty() {
            panic!("{}", DeclError::MissingSubcmdName);
        }

        let item = Subcmd {
            name: name.to_string(),
            description: description.to_string(),
            parser: parser.into(),
        };

        match self.index.get(name) {
            Some(&idx) => self.items[idx] = item,
            None => {
                self.index.insert(name.to_string(), self.items.len());
                self.items.push(item);
            }
        }

        self
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Subcmd> {
        self.index.get(name).map(|&idx| &self.items[idx])
    }

    pub(crate) fn parse(
        &self,
        ctx: &Ctx<'_>,
        tokens: &[String],
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        let Some(raw) = tokens.first() else {
            return Err(Error::MissingSubcmd);
        };

        if token::is_help(raw) {
            help::print_set(self, ctx, out);
            return Ok(());
        }

        match token::classify(raw) {
            Token::OptWithValue { name, alias, .. } => {
                Err(Error::UnexpectedOption { name: name.to_string(), is_alias: alias })
            }
            Token::Opt { name, alias } => {
                Err(Error::UnexpectedOptionOrFlag { name: name.to_string(), is_alias: alias })
            }
            Token::Plain(name) => {
                let sub = self
                    .get(name)
                    .ok_or_else(|| Error::UnknownSubcmd { name: name.to_string() })?;

                sub.parser.parse(&ctx.child(&sub.name, &sub.description), &tokens[1..], out)
            }
        }
    }
}
