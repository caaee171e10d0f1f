//! Plain-text help rendering, written to an explicit sink.
//!
//! Everything is emitted in declaration order with fixed two-space column
//! gaps. No styling, no wrapping; a write failure on the sink is ignored the
//! same way a failed write to a closed stdout would be.

use std::fmt::Write as _;
use std::io::Write;

use crate::cmd::Cmd;
use crate::parser::Ctx;
use crate::subcmd::SubcmdSet;

pub(crate) fn print_cmd(cmd: &Cmd, ctx: &Ctx<'_>, out: &mut dyn Write) {
    let _ = out.write_all(render_cmd(cmd, ctx).as_bytes());
}

pub(crate) fn print_set(set: &SubcmdSet, ctx: &Ctx<'_>, out: &mut dyn Write) {
    let _ = out.write_all(render_set(set, ctx).as_bytes());
}

fn render_cmd(cmd: &Cmd, ctx: &Ctx<'_>) -> String {
    let mut buf = String::new();

    if !ctx.description.is_empty() {
        let _ = writeln!(buf, "{}\n", ctx.description);
    }

    let _ = write!(buf, "Usage: {}", ctx.path.join(" "));
    for arg in &cmd.args {
        let _ = write!(buf, " <{}>", arg.name);
    }

    let has_required = cmd.options.iter().any(|opt| opt.required);
    let has_optional = cmd.options.iter().any(|opt| !opt.required);

    if has_required {
        buf.push_str(" OPTIONS");
    }
    if has_optional {
        buf.push_str(" [OPTIONS]");
    }
    if !cmd.flags.is_empty() {
        buf.push_str(" [FLAGS]");
    }
    buf.push('\n');

    if !cmd.args.is_empty() {
        buf.push('\n');
        let width = cmd.args.iter().map(|arg| arg.name.len() + 2).max().unwrap_or(0);
        for arg in &cmd.args {
            entry(&mut buf, &format!("<{}>", arg.name), &arg.description, width);
        }
    }

    // Options and flags share one column width so their sections line up.
    let width = cmd
        .options
        .iter()
        .map(|opt| term_help_name(&opt.name, opt.alias.as_deref()).len())
        .chain(cmd.flags.iter().map(|flag| term_help_name(&flag.name, flag.alias.as_deref()).len()))
        .max()
        .unwrap_or(0);

    if has_required {
        buf.push_str("\nOPTIONS is one or more of:\n");
        for opt in cmd.options.iter().filter(|opt| opt.required) {
            entry(&mut buf, &term_help_name(&opt.name, opt.alias.as_deref()), &opt.description, width);
        }
    }

    if has_optional {
        buf.push_str("\n[OPTIONS] is one or more of:\n");
        for opt in cmd.options.iter().filter(|opt| !opt.required) {
            entry(&mut buf, &term_help_name(&opt.name, opt.alias.as_deref()), &opt.description, width);
        }
    }

    if !cmd.flags.is_empty() {
        buf.push_str("\n[FLAGS] is one or more of:\n");
        for flag in &cmd.flags {
            entry(&mut buf, &term_help_name(&flag.name, flag.alias.as_deref()), &flag.description, width);
        }
    }

    buf
}

fn render_set(set: &SubcmdSet, ctx: &Ctx<'_>) -> String {
    let mut buf = String::new();

    if !ctx.description.is_empty() {
        let _ = writeln!(buf, "{}\n", ctx.description);
    }

    let _ = writeln!(buf, "Usage: {} SUBCMD", ctx.path.join(" "));
    buf.push_str("\nSUBCMD is one of:\n");

    let width = set.items.iter().map(|sub| sub.name.len()).max().unwrap_or(0);
    for sub in &set.items {
        entry(&mut buf, &sub.name, &sub.description, width);
    }

    buf
}

/// `--name, -a` for an option or flag.
fn term_help_name(name: &str, alias: Option<&str>) -> String {
    match alias {
        Some(alias) => format!("--{name}, -{alias}"),
        None => format!("--{name}"),
    }
}

fn entry(buf: &mut String, name: &str, description: &str, width: usize) {
    if description.is_empty() {
        let _ = writeln!(buf, "  {name}");
    } else {
        let _ = writeln!(buf, "  {name:<width$}  {description}");
    }
}
