#[cfg(test)]
#[path = "../../tests/unit/commands/escape_test.rs"]
mod escape_test;

use super::*;
use cavern_cli::extensions::config::{
    Config, create_environment, create_logger, create_planner_config, get_max_time_ms, read_config,
};
use cavern_cli::extensions::format::{EscapeResult, write_json};
use cavern_cli::extensions::interruption::create_interruption_quota;
use cavern_core::prelude::*;
use clap::{Arg, ArgAction, Command};
use std::sync::Arc;

const CAVERN_ARG_NAME: &str = "CAVERN";
const CONFIG_ARG_NAME: &str = "config";
const TIME_ARG_NAME: &str = "max-time";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const WALKERS_ARG_NAME: &str = "walkers";
const PARALLEL_SEARCH_ARG_NAME: &str = "parallel-search";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_escape_app() -> Command {
    Command::new("escape")
        .about("Plans a route to the exit which collects as much gold as possible in time")
        .arg(Arg::new(CAVERN_ARG_NAME).help("Sets the cavern file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to planner configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max planning time in milliseconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(WALKERS_ARG_NAME)
                .help("Specifies amount of randomized walkers, zero disables sampling")
                .long(WALKERS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARALLEL_SEARCH_ARG_NAME)
                .help("Specifies whether root branches are searched in parallel")
                .long(PARALLEL_SEARCH_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_escape<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let cavern_path = matches.get_one::<String>(CAVERN_ARG_NAME).ok_or("cavern file is not specified")?;
    let problem = read_cavern_file(cavern_path)?;
    let cavern = problem.to_cavern()?;
    let config = get_config(matches)?;
    let out_file = get_out_file(matches, OUT_RESULT_ARG_NAME)?;

    let environment = create_escape_environment(&config);
    let planner_config = create_planner_config(&environment, &config);

    let mut state = EscapeSimulation::new(&cavern, problem.start, problem.exit, problem.time_remaining)
        .map_err(|err| err.to_string())?;

    let (plan, summary) = escape(&mut state, &cavern, environment, planner_config)
        .map_err(|err| format!("cannot escape the cavern: '{err}'"))?;

    write_json(&EscapeResult::new(&plan, summary), &mut out_writer_func(out_file))
}

/// Creates an environment which always has a deadline: the configured one or the default.
fn create_escape_environment(config: &Config) -> Arc<Environment> {
    let max_time_ms = get_max_time_ms(config, &create_logger(config));
    let quota = create_interruption_quota(Some(max_time_ms));

    Arc::new(create_environment(config, Some(quota)))
}

/// Reads config file (if any) and overrides its values with command line arguments.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    if let Some(max_time_ms) = parse_int_value::<u64>(matches, TIME_ARG_NAME, "max time")? {
        config.termination.get_or_insert_with(Default::default).max_time_ms = Some(max_time_ms);
    }

    if let Some(seed) = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")? {
        config.seed = Some(seed);
    }

    if let Some(walkers) = parse_int_value::<usize>(matches, WALKERS_ARG_NAME, "walkers")? {
        config.planner.get_or_insert_with(Default::default).walkers = Some(walkers);
    }

    if matches.get_flag(PARALLEL_SEARCH_ARG_NAME) {
        config.planner.get_or_insert_with(Default::default).parallel_search = Some(true);
    }

    if matches.get_flag(LOG_ARG_NAME) {
        config.logging.get_or_insert_with(Default::default).enabled = true;
    }

    Ok(config)
}
