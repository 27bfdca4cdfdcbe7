use super::*;

#[test]
fn can_display_navigation_errors() {
    assert_eq!(
        NavigationError::InfeasibleRoute { budget: 3, shortest: Some(5) }.to_string(),
        "no route fits the budget of 3, shortest route takes 5"
    );
    assert_eq!(
        NavigationError::InfeasibleRoute { budget: 3, shortest: None }.to_string(),
        "no route fits the budget of 3, exit is unreachable"
    );
    assert_eq!(NavigationError::InvalidMove { from: 1, to: 2 }.to_string(), "cannot move from 1 to 2: nodes are not adjacent");
    assert_eq!(NavigationError::EmptyPickup { node: 4 }.to_string(), "cannot pick up gold at 4: tile is empty");
}

#[test]
fn can_convert_navigation_error_into_generic() {
    let error: GenericError = NavigationError::UnknownNode { node: 7 }.into();

    assert_eq!(error, GenericError::from("unknown node: 7"));
}

#[test]
fn can_display_distance_overflow() {
    assert_eq!(
        NavigationError::DistanceOverflow { from: 2, to: 3 }.to_string(),
        "route distance overflows on edge 2-3"
    );
}
