//! The polymorphic parser contract: a command or a set of subcommands, both
//! answering the same `parse` call so nesting goes to arbitrary depth.

use std::io::Write;

use crate::cmd::Cmd;
use crate::error::Error;
use crate::subcmd::SubcmdSet;

/// Either a leaf [`Cmd`] or an internal [`SubcmdSet`].
pub enum Parser {
    Cmd(Cmd),
    Set(SubcmdSet),
}

impl From<Cmd> for Parser {
    fn from(cmd: Cmd) -> Parser {
        Parser::Cmd(cmd)
    }
}

impl From<SubcmdSet> for Parser {
    fn from(set: SubcmdSet) -> Parser {
        Parser::Set(set)
    }
}

impl Parser {
    pub(crate) fn parse(
        &self,
        ctx: &Ctx<'_>,
        tokens: &[String],
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        match self {
            Parser::Cmd(cmd) => cmd.parse(ctx, tokens, out),
            Parser::Set(set) => set.parse(ctx, tokens, out),
        }
    }
}

/// What a parser knows about how it was reached: the command names walked so
/// far (the usage-line prefix) and the description attached to the entry it
/// was reached through.
pub(crate) struct Ctx<'a> {
    pub(crate) path: Vec<String>,
    pub(crate) description: &'a str,
}

impl<'a> Ctx<'a> {
    pub(crate) fn root(name: &str, description: &'a str) -> Ctx<'a> {
        Ctx { path: vec![name.to_string()], description }
    }

    /// The child's description comes from the subcommand entry it was
    /// reached through, not from this context, hence the separate lifetime.
    pub(crate) fn child<'b>(&self, name: &str, description: &'b str) -> Ctx<'b> {
        let mut path = self.path.clone();
        path.push(name.to_string());
        Ctx { path, description }
    }
}
