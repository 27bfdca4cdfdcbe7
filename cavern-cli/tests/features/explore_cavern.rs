use crate::extensions::format::{ExplorationResult, read_cavern};
use cavern_core::prelude::*;
use std::fs::File;
use std::io::BufReader;

#[test]
fn can_find_target_behind_dead_end() {
    let problem = read_cavern(BufReader::new(File::open("../data/caverns/dead_end.json").unwrap())).unwrap();
    let cavern = problem.to_cavern().unwrap();
    let target = problem.exploration_target();
    let mut state = ExplorationSimulation::new(&cavern, problem.start, target).unwrap();

    let stats = ExplorationController::default().explore(&mut state).unwrap();

    assert_eq!(state.current_location(), target);
    assert_eq!(state.moves(), stats.moves);
    assert_eq!(ExplorationResult::new(target, stats), ExplorationResult { target: 6, moves: 7, backtracks: 2, discovered: 6 });
}
