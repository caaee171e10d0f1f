use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use termcli::{ArgDef, Cmd, Error, OptionDef, Parser, SubcmdSet, TermType, TermsSet};

use crate::check;

fn counting_cmd() -> (Cmd, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&count);
    let cmd = Cmd::new(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });
    (cmd, count)
}

#[test]
fn dispatches_to_the_named_child() {
    let (cmd, count) = counting_cmd();
    let parser = Parser::from(SubcmdSet::new().add("foo", "", cmd));

    let (res, _) = check(&parser, "foo");
    assert_eq!(res, Ok(()));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_input_is_a_missing_subcommand() {
    let (cmd, count) = counting_cmd();
    let parser = Parser::from(SubcmdSet::new().add("foo", "", cmd));

    let (res, _) = check(&parser, "");
    assert_eq!(res.unwrap_err(), Error::MissingSubcmd);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn unknown_name_is_reported() {
    let (cmd, _) = counting_cmd();
    let parser = Parser::from(SubcmdSet::new().add("foo", "", cmd));

    let (res, _) = check(&parser, "bar");
    assert_eq!(res.unwrap_err(), Error::UnknownSubcmd { name: "bar".to_string() });
}

#[test]
fn sets_accept_no_options() {
    let (cmd, _) = counting_cmd();
    let parser = Parser::from(SubcmdSet::new().add("foo", "", cmd));

    let (res, _) = check(&parser, "--verbose foo");
    assert_eq!(
        res.unwrap_err(),
        Error::UnexpectedOptionOrFlag { name: "verbose".to_string(), is_alias: false }
    );

    let (res, _) = check(&parser, "-v=1 foo");
    assert_eq!(res.unwrap_err(), Error::UnexpectedOption { name: "v".to_string(), is_alias: true });
}

#[test]
fn nesting_goes_two_levels_and_beyond() {
    let seen = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&seen);

    let leaf = Cmd::new(move |terms: &TermsSet| {
        *sink.lock().unwrap() = terms.opt_str("name").to_string();
    })
    .option(OptionDef::new("name", TermType::Str).alias("n"));

    let inner = SubcmdSet::new().add("bar", "", leaf);
    let parser = Parser::from(SubcmdSet::new().add("foo", "", inner));

    let (res, _) = check(&parser, "foo bar -n=John");
    assert_eq!(res, Ok(()));
    assert_eq!(*seen.lock().unwrap(), "John");
}

#[test]
fn child_errors_propagate_unchanged() {
    let leaf = Cmd::new(|_| {}).arg(ArgDef::new("first", TermType::Int));
    let inner = SubcmdSet::new().add("bar", "", leaf);
    let parser = Parser::from(SubcmdSet::new().add("foo", "", inner));

    let (res, _) = check(&parser, "foo bar 180.87");
    assert_eq!(
        res.unwrap_err(),
        Error::ArgExpectsType {
            pos: 0,
            name: "first".to_string(),
            expected: TermType::Int,
            value: "180.87".to_string(),
        }
    );

    let (res, _) = check(&parser, "foo");
    assert_eq!(res.unwrap_err(), Error::MissingSubcmd);
}

#[test]
fn only_the_leading_token_routes() {
    // The child consumes everything after its own name, including words that
    // happen to collide with sibling names.
    let seen = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&seen);

    let leaf = Cmd::new(move |terms: &TermsSet| {
        *sink.lock().unwrap() = terms.arg_str("first").to_string();
    })
    .arg(ArgDef::new("first", TermType::Str));

    let parser = Parser::from(
        SubcmdSet::new().add("foo", "", leaf).add("bar", "", Cmd::new(|_| {})),
    );

    let (res, _) = check(&parser, "foo bar");
    assert_eq!(res, Ok(()));
    assert_eq!(*seen.lock().unwrap(), "bar");
}
