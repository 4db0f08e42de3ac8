//! Storyscript CLI entry point.

use std::env;
use std::process::ExitCode;

use env_logger::Env;
use storyscript_runtime::{CliConfig, Repl, check_file};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(false)` if any file had syntax errors.
fn run(args: Vec<String>) -> storyscript_runtime::Result<bool> {
    let mut config = CliConfig::from_args(args)?;
    if env::var_os("NO_COLOR").is_some() {
        config.color = false;
    }

    let level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if config.show_help {
        print_help();
        return Ok(true);
    }

    if config.show_version {
        println!("storyscript {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    if config.files.is_empty() {
        let mut repl = Repl::new()?
            .with_color(config.color)
            .with_parse_config(config.parse_config());
        repl.run()?;
        return Ok(true);
    }

    let mut clean = true;
    let last = config.files.len() - 1;
    for (index, file) in config.files.iter().enumerate() {
        let emit = config.emit_msgpack.as_deref().filter(|_| index == last);
        let outcome = check_file(file, &config, emit)?;
        print!("{}", outcome.output);
        clean &= !outcome.has_errors;
    }
    Ok(clean)
}

fn print_help() {
    println!(
        "\x1b[1mStoryscript\x1b[0m - checker for Storyscript content files

\x1b[1mUSAGE:\x1b[0m
    storyscript [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files to check; `-` reads standard input.
                  With no files, starts the interactive REPL.

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -q, --quiet            Print nothing; report through the exit status
    -v, --verbose          Log parser activity at debug level
    --tree                 Print the syntax tree of each file
    --tokens               Print the token stream of each file
    --no-color             Disable colored output (also NO_COLOR)
    --emit-msgpack PATH    Write the last file's parse result as MessagePack
    --max-nesting N        Deepest allowed nesting of groups and blocks

\x1b[1mEXIT STATUS:\x1b[0m
    0    no syntax errors
    1    at least one file has syntax errors
    2    a file could not be read or written, or bad arguments

\x1b[1mEXAMPLES:\x1b[0m
    storyscript world/*.story         Check every file
    storyscript --tree rooms.story    Show how a file parses
    storyscript                       Start the REPL"
    );
}
