//! Main CLI application

use crate::config::{parse_args, Invocation};
use crate::error::RecmanError;
use crate::runner::{perform, Context, LoadPolicy, Verbosity};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("recman")
        .version(crate::VERSION)
        .about("Manage user records stored in a JSON file")
        .after_help(
            "Tokens alternate between a flag and its value, for example:\n  \
             recman fileName users.json operation add item '{\"id\":\"1\",\"email\":\"a@b.com\",\"age\":30}'\n\n\
             Flags: fileName, operation (add | remove | list | findById), item, id",
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print results, warnings and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no diagnostics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .help("Treat a malformed store file as empty instead of failing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Print a shell completion script and exit")
                .value_parser(value_parser!(Shell)),
        )
        .arg(
            Arg::new("tokens")
                .value_name("FLAG VALUE")
                .help("Alternating flag names and values")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Get the load policy from matches
fn get_load_policy(matches: &ArgMatches) -> LoadPolicy {
    if matches.get_flag("lenient") {
        LoadPolicy::Lenient
    } else {
        LoadPolicy::Strict
    }
}

/// Collect the flag/value tokens
fn get_tokens(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("tokens")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), RecmanError> {
    run_from(std::env::args_os())
}

/// Run the CLI application with the given arguments
pub fn run_from<I, T>(argv: I) -> Result<(), RecmanError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = build_command();
    let matches = command.clone().get_matches_from(argv);

    if let Some(shell) = matches.get_one::<Shell>("completions").copied() {
        clap_complete::generate(shell, &mut command, "recman", &mut io::stdout());
        return Ok(());
    }

    let tokens = get_tokens(&matches);
    if tokens.is_empty() {
        command.print_help()?;
        println!();
        return Ok(());
    }

    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let ctx = Context::new()
        .with_verbosity(get_verbosity(&matches))
        .with_load_policy(get_load_policy(&matches));

    let invocation = Invocation::from_args(&parse_args(&tokens)?)?;
    ctx.print_debug(&format!("invocation: {:?}", invocation));

    // Results and refused-mutation messages are flushed even when a later
    // step fails.
    let mut output = Vec::new();
    let result = perform(invocation, &mut output, &ctx);

    if !output.is_empty() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&output)?;
        writeln!(stdout)?;
    }

    result
}
