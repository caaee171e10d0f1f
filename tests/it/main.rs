mod help;
mod subcommands;

use termcli::Parser;

/// Builds an argv the way a shell would, with `app` in the `argv[0]` slot.
fn argv(line: &str) -> Vec<String> {
    std::iter::once("app").chain(line.split_ascii_whitespace()).map(String::from).collect()
}

/// Runs one parse, capturing help/introspection output.
fn check(parser: &Parser, line: &str) -> (termcli::Result<()>, String) {
    check_described(parser, "", line)
}

fn check_described(
    parser: &Parser,
    description: &str,
    line: &str,
) -> (termcli::Result<()>, String) {
    let mut out = Vec::new();
    let res = termcli::run_with("app", description, &argv(line), parser, &mut out);
    (res, String::from_utf8(out).unwrap())
}
