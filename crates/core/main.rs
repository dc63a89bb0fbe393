#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{path::PathBuf, process};

mod app;
mod commands;
mod file;
mod interact;

use commands::Commands;

use clap::{Args, Parser};
use eyre::Context;
use log::trace;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{:#}", err);
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        command,
        global_opts:
            GlobalOpts {
                file,
                interact,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    // `quiet` and `interact` cannot be set at the same time
    let interact = interact && !quiet;

    if interact {
        trace!("Interact mode enabled");
    }

    let config = command.into_config(file, interact);
    let message = app::run(config)?;

    if !quiet {
        println!("{message}");
    }
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 2 };

    stderrlog::new()
        .verbosity(verbosity)
        .init()
        .wrap_err("Cannot set up logging")
}

#[derive(Parser)]
#[clap(name = "shelf")]
#[clap(about = "Look up books by ISBN and serials by ISSN and add them to a CSV library file")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// The library file, defaults to ISBNlibrary.csv or ISSNlibrary.csv
    #[clap(short, long, parse(from_os_str), global = true)]
    file: Option<PathBuf>,

    /// Enables interactive mode, which prompts for the issue details of each serial.
    #[clap(short, long, global = true)]
    interact: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Prevents the program from writing to stdout, errors will still be printed to stderr.
    #[clap(short, long, global = true)]
    quiet: bool,
}
