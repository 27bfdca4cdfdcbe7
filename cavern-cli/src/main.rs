//! A command line interface to cavern exploration and escape planning.
//!

mod commands;

use clap::Command;
use commands::create_write_buffer;
use commands::escape::{get_escape_app, run_escape};
use commands::explore::{get_explore_app, run_explore};
use std::process;

fn main() {
    let matches = Command::new("Cavern Escape")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to cavern exploration and escape planning")
        .subcommand(get_explore_app())
        .subcommand(get_escape_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("explore", explore_matches)) => run_explore(explore_matches, create_write_buffer),
        Some(("escape", escape_matches)) => run_escape(escape_matches, create_write_buffer),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'")),
        None => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
