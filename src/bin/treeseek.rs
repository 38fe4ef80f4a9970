// src/bin/treeseek.rs
//! Treeseek CLI binary.

#![deny(missing_docs)]

use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use treeseek::cli::{self, Invocation};
use treeseek::config::Config;
use treeseek::error::SeekError;
use treeseek::fsutil::OsFs;
use treeseek::walker::Walker;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> SeekError<bool> {
    let config = Config::load_or_default(Path::new("."))?;
    if !config.color {
        colored::control::set_override(false);
    }

    match cli::parse_args(std::env::args().skip(1), &config)? {
        Invocation::Help => {
            print!("{}", cli::help_text());
            Ok(true)
        }
        Invocation::Version => {
            println!("{}", cli::version_text());
            Ok(true)
        }
        Invocation::Run(search) => {
            let fs = OsFs;
            let walker = Walker::new(&search, &fs);
            let mut out = io::stdout().lock();
            let mut err = io::stderr().lock();
            let ok = walker.run(&mut out, &mut err)?;
            out.flush()?;
            Ok(ok)
        }
    }
}
