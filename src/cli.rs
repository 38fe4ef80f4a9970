// src/cli.rs
//! Command-line surface: find-style operand grammar, help and version.

#![deny(missing_docs)]

use crate::config::Config;
use crate::error::SeekError;
use crate::predicate::{Combinator, FileType, Predicate};
use crate::walker::SearchConfig;
use anyhow::{Context, bail};

/// What a parsed command line asks for.
#[derive(Debug)]
pub enum Invocation {
    /// Print usage and exit.
    Help,
    /// Print the version line and exit.
    Version,
    /// Run a search.
    Run(SearchConfig),
}

/// Usage text.
pub fn help_text() -> String {
    "Usage: treeseek [starting-point...] [expression]\n\
     \n\
     Options:\n\
     \x20 -maxdepth LEVELS    Descend at most LEVELS below the starting points\n\
     \x20 -type TYPE          Entry type to match (f: file, d: directory, l: symlink, x: executable)\n\
     \x20 -name PATTERN       Match the file name against PATTERN (case sensitive)\n\
     \x20 -iname PATTERN      Like -name, but case insensitive\n\
     \x20 -o                  Combine the surrounding conditions with OR\n\
     \x20 --help, -help       Display this help message\n\
     \x20 --version, -version Display version information\n"
        .to_string()
}

/// Version line.
pub fn version_text() -> String {
    format!("treeseek version {}", env!("CARGO_PKG_VERSION"))
}

/// Parse the operands after the program name, layered over `defaults`.
///
/// The grammar is order-sensitive: predicates keep their command-line
/// order, and `-o` rewrites the combinator of the predicate parsed
/// immediately before it. Bare operands are starting paths; none at all
/// means the current directory.
pub fn parse_args<I>(args: I, defaults: &Config) -> SeekError<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut paths = Vec::new();
    let mut max_depth = defaults.maxdepth.unwrap_or(-1);
    let mut predicates: Vec<Predicate> = Vec::new();

    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--help" | "-help" => return Ok(Invocation::Help),
            "--version" | "-version" => return Ok(Invocation::Version),
            "-maxdepth" => {
                let Some(value) = it.next() else {
                    bail!("-maxdepth requires an argument");
                };
                max_depth = value
                    .parse()
                    .with_context(|| format!("invalid -maxdepth value '{value}'"))?;
            }
            "-type" => {
                let Some(value) = it.next() else {
                    bail!("-type requires an argument");
                };
                let file_type = match value.as_str() {
                    "f" => FileType::File,
                    "d" => FileType::Dir,
                    "l" => FileType::Symlink,
                    "x" => FileType::Executable,
                    other => bail!("invalid type '{other}' (expected f, d, l or x)"),
                };
                predicates.push(Predicate {
                    pattern: None,
                    file_type: Some(file_type),
                    ignore_case: false,
                    combinator: Combinator::And,
                });
            }
            "-name" | "-iname" => {
                let Some(value) = it.next() else {
                    bail!("{arg} requires an argument");
                };
                predicates.push(Predicate {
                    pattern: Some(value),
                    file_type: None,
                    ignore_case: arg == "-iname",
                    combinator: Combinator::And,
                });
            }
            "-o" => {
                let Some(last) = predicates.last_mut() else {
                    bail!("-o cannot be the first condition");
                };
                last.combinator = Combinator::Or;
            }
            other if other.starts_with('-') && other.len() > 1 => {
                bail!("unknown option '{other}'");
            }
            _ => paths.push(arg),
        }
    }

    if paths.is_empty() {
        paths.push(".".to_string());
    }

    Ok(Invocation::Run(SearchConfig {
        paths,
        max_depth,
        predicates,
    }))
}
