//! Command-line configuration.

use std::path::PathBuf;

use storyscript_syntax::ParseConfig;

use crate::error::{Error, Result};

/// CLI configuration parsed from arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Files to check, in order.
    pub files: Vec<PathBuf>,
    /// Print the syntax tree of each file.
    pub show_tree: bool,
    /// Print the token stream of each file.
    pub show_tokens: bool,
    /// Write the parse result of the last file here as `MessagePack`.
    pub emit_msgpack: Option<PathBuf>,
    /// Print nothing; only the exit status reports problems.
    pub quiet: bool,
    /// Use ANSI colors.
    pub color: bool,
    /// Log at debug level.
    pub verbose: bool,
    /// Deepest allowed nesting of groups and blocks.
    pub max_nesting: usize,
    /// Print help and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            show_tree: false,
            show_tokens: false,
            emit_msgpack: None,
            quiet: false,
            color: true,
            verbose: false,
            max_nesting: ParseConfig::default().max_nesting,
            show_help: false,
            show_version: false,
        }
    }
}

impl CliConfig {
    /// Parses arguments, not including the program name.
    ///
    /// # Errors
    ///
    /// Returns a usage error for unknown options or missing option values.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-q" | "--quiet" => config.quiet = true,
                "-v" | "--verbose" => config.verbose = true,
                "--tree" => config.show_tree = true,
                "--tokens" => config.show_tokens = true,
                "--no-color" => config.color = false,
                "--emit-msgpack" => {
                    let path = args
                        .next()
                        .ok_or_else(|| Error::usage("--emit-msgpack requires a path"))?;
                    config.emit_msgpack = Some(PathBuf::from(path));
                }
                "--max-nesting" => {
                    let value = args
                        .next()
                        .ok_or_else(|| Error::usage("--max-nesting requires a value"))?;
                    config.max_nesting = value
                        .parse()
                        .map_err(|_| Error::usage(format!("invalid --max-nesting value: {value}")))?;
                }
                option if option.starts_with('-') && option != "-" => {
                    return Err(Error::usage(format!("unknown option: {option}")));
                }
                path => config.files.push(PathBuf::from(path)),
            }
        }
        Ok(config)
    }

    /// Returns the parser configuration these options select.
    #[must_use]
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new().with_max_nesting(self.max_nesting)
    }
}
