#[cfg(test)]
#[path = "../../tests/unit/commands/explore_test.rs"]
mod explore_test;

use super::*;
use cavern_cli::extensions::format::{ExplorationResult, write_json};
use cavern_core::prelude::*;
use clap::{Arg, ArgAction, Command};
use std::sync::Arc;

const CAVERN_ARG_NAME: &str = "CAVERN";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_explore_app() -> Command {
    Command::new("explore")
        .about("Finds the target node without knowing the cavern layout in advance")
        .arg(Arg::new(CAVERN_ARG_NAME).help("Sets the cavern file to use").required(true).index(1))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_explore<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let cavern_path = matches.get_one::<String>(CAVERN_ARG_NAME).ok_or("cavern file is not specified")?;
    let problem = read_cavern_file(cavern_path)?;
    let cavern = problem.to_cavern()?;
    let target = problem.exploration_target();
    let out_file = get_out_file(matches, OUT_RESULT_ARG_NAME)?;

    let mut state = ExplorationSimulation::new(&cavern, problem.start, target).map_err(|err| err.to_string())?;
    let mut controller = ExplorationController::default();
    if matches.get_flag(LOG_ARG_NAME) {
        controller = controller.with_logger(Arc::new(|msg: &str| println!("{msg}")));
    }

    let stats = controller.explore(&mut state).map_err(|err| format!("cannot explore cavern: '{err}'"))?;

    write_json(&ExplorationResult::new(target, stats), &mut out_writer_func(out_file))
}
