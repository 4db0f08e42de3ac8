//! Checking source files: read, parse, report.

use std::fs;
use std::io::Read;
use std::path::Path;

use storyscript_syntax::pretty::{PrettyConfig, render_tokens, render_tree_with_config};
use storyscript_syntax::{ParseResult, parse_with_config};

use crate::config::CliConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::report::render_report;
use crate::serialize::save_to_file;

/// What checking one file produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// True if any error-severity diagnostic was reported.
    pub has_errors: bool,
    /// Text to print.
    pub output: String,
}

/// Reads a source file as UTF-8. The path `-` reads standard input.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io("read", path, &e))?;
        bytes
    } else {
        fs::read(path).map_err(|e| Error::io("read", path, &e))?
    };
    String::from_utf8(bytes).map_err(|e| {
        Error::new(ErrorKind::InvalidUtf8 {
            path: path.display().to_string(),
            offset: e.utf8_error().valid_up_to(),
        })
    })
}

/// Renders what the configuration asks to see of a parse result.
#[must_use]
pub fn render_result(name: &str, source: &str, result: &ParseResult<'_>, config: &CliConfig) -> String {
    let mut output = String::new();
    if config.quiet {
        return output;
    }
    if config.show_tokens {
        output.push_str(&render_tokens(&result.tokens));
    }
    if config.show_tree {
        output.push_str(&render_tree_with_config(&result.root, &PrettyConfig::default()));
        output.push('\n');
    }
    output.push_str(&render_report(name, source, &result.diagnostics, config.color));
    output
}

/// Checks one file, writing its export to `emit` if given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the export fails.
/// Syntax problems are not errors; they appear in the outcome.
pub fn check_file(path: &Path, config: &CliConfig, emit: Option<&Path>) -> Result<FileOutcome> {
    let source = read_source(path)?;
    let name = path.display().to_string();
    log::info!("checking {name}");
    let result = parse_with_config(&source, &config.parse_config());
    if let Some(emit) = emit {
        save_to_file(&result, emit)?;
    }
    Ok(FileOutcome {
        has_errors: result.has_errors(),
        output: render_result(&name, &source, &result, config),
    })
}
