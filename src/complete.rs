//! Shell completion support: the introspection walker behind the hidden
//! `__introspect__` entry and ready-made `bash`/`zsh` script commands.

use crate::cmd::Cmd;
use crate::parser::Parser;
use crate::subcmd::SubcmdSet;

/// Walks as far as `tokens` resolve known subcommands and returns the sorted
/// set of valid next tokens: `--help`/`-h` always, subcommand names at a
/// set, option and flag names and aliases at a command.
pub(crate) fn introspect<'a>(tokens: impl IntoIterator<Item = &'a str>, parser: &Parser) -> Vec<String> {
    let mut res = vec!["--help".to_string(), "-h".to_string()];
    let mut cur = parser;

    for raw in tokens {
        if raw.is_empty() {
            break;
        }

        match cur {
            // A command consumes the rest of the line itself; further tokens
            // don't change what can come next.
            Parser::Cmd(_) => continue,
            Parser::Set(set) => match set.get(raw) {
                Some(sub) => cur = &sub.parser,
                None => {
                    res.sort();
                    return res;
                }
            },
        }
    }

    match cur {
        Parser::Cmd(cmd) => {
            for opt in &cmd.options {
                res.push(format!("--{}", opt.name));
                if let Some(alias) = &opt.alias {
                    res.push(format!("-{alias}"));
                }
            }
            for flag in &cmd.flags {
                res.push(format!("--{}", flag.name));
                if let Some(alias) = &flag.alias {
                    res.push(format!("-{alias}"));
                }
            }
        }
        Parser::Set(set) => {
            for sub in &set.items {
                res.push(sub.name.clone());
            }
        }
    }

    res.sort();
    res
}

fn completion_script(root_name: &str) -> String {
    format!(
        r#"_{root_name}()
{{
    local opts
    COMPREPLY=()
    opts=$({root_name} __introspect__ "${{COMP_WORDS[@]:1:$COMP_CWORD-1}}")

    COMPREPLY=($(compgen -W "${{opts}}" -- "${{COMP_WORDS[1]}}"))
}}

complete -o default -F _{root_name} {root_name}
"#
    )
}

/// A ready-made subcommand set with `bash` and `zsh` commands that print a
/// completion script for the program named `root_name`. Wire it in as an
/// ordinary subcommand, e.g. `set.add("completion", "...",
/// completion_parser("myprog"))`.
pub fn completion_parser(root_name: &str) -> Parser {
    let script = |name: String| Cmd::new(move |_| print!("{}", completion_script(&name)));

    Parser::Set(
        SubcmdSet::new()
            .add("bash", "prints the bash completion", script(root_name.to_string()))
            .add("zsh", "prints the zsh completion", script(root_name.to_string())),
    )
}
