use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use expect_test::expect;
use termcli::{ArgDef, Cmd, FlagDef, OptionDef, Parser, SubcmdSet, TermType};

use crate::{check, check_described};

fn greet_cmd() -> (Cmd, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&count);

    let cmd = Cmd::new(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    })
    .option(OptionDef::new("year", TermType::Int).alias("y").required().description("year of birth"))
    .option(OptionDef::new("name", TermType::Str).alias("n").description("who to greet"))
    .flag(FlagDef::new("line").alias("l").description("append a newline"))
    .arg(ArgDef::new("first", TermType::Str).description("first word of the greeting"));

    (cmd, count)
}

#[test]
fn command_help() {
    let (cmd, count) = greet_cmd();
    let parser = Parser::from(cmd);

    let (res, out) = check_described(&parser, "Greets people", "--help");
    assert_eq!(res, Ok(()));
    assert_eq!(count.load(Ordering::SeqCst), 0);

    expect![[r#"
        Greets people

        Usage: app <first> OPTIONS [OPTIONS] [FLAGS]

          <first>  first word of the greeting

        OPTIONS is one or more of:
          --year, -y  year of birth

        [OPTIONS] is one or more of:
          --name, -n  who to greet

        [FLAGS] is one or more of:
          --line, -l  append a newline
    "#]]
    .assert_eq(&out);
}

#[test]
fn help_wins_over_parsing_and_skips_the_callback() {
    let (cmd, count) = greet_cmd();
    let parser = Parser::from(cmd);

    // Valid prefix, then -h; nothing is reported missing.
    let (res, out) = check(&parser, "-y=1990 -h");
    assert_eq!(res, Ok(()));
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(out.starts_with("Usage: app"));
}

#[test]
fn bare_command_help_is_just_the_usage_line() {
    let parser = Parser::from(Cmd::new(|_| {}));

    let (res, out) = check(&parser, "--help");
    assert_eq!(res, Ok(()));
    assert_eq!(out, "Usage: app\n");
}

#[test]
fn subcommand_set_help() {
    let parser = Parser::from(
        SubcmdSet::new()
            .add("add", "adds an entry", Cmd::new(|_| {}))
            .add("remove", "removes an entry", Cmd::new(|_| {})),
    );

    let (res, out) = check_described(&parser, "Manages entries", "--help");
    assert_eq!(res, Ok(()));

    expect![[r#"
        Manages entries

        Usage: app SUBCMD

        SUBCMD is one of:
          add     adds an entry
          remove  removes an entry
    "#]]
    .assert_eq(&out);
}

#[test]
fn nested_help_accumulates_the_command_path() {
    let (cmd, _) = greet_cmd();
    let inner = SubcmdSet::new().add("greet", "greets someone", cmd);
    let parser = Parser::from(SubcmdSet::new().add("people", "people tools", inner));

    let (res, out) = check(&parser, "people --help");
    assert_eq!(res, Ok(()));

    expect![[r#"
        people tools

        Usage: app people SUBCMD

        SUBCMD is one of:
          greet  greets someone
    "#]]
    .assert_eq(&out);

    let (res, out) = check(&parser, "people greet --help");
    assert_eq!(res, Ok(()));
    assert!(out.starts_with("greets someone\n\nUsage: app people greet <first>"));
}

#[test]
fn entries_without_descriptions_have_no_trailing_padding() {
    let parser = Parser::from(
        Cmd::new(|_| {})
            .option(OptionDef::new("year", TermType::Int))
            .flag(FlagDef::new("verbose").alias("v").description("more output")),
    );

    let (res, out) = check(&parser, "--help");
    assert_eq!(res, Ok(()));

    expect![[r#"
        Usage: app [OPTIONS] [FLAGS]

        [OPTIONS] is one or more of:
          --year

        [FLAGS] is one or more of:
          --verbose, -v  more output
    "#]]
    .assert_eq(&out);
}
