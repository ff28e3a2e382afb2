use dots_and_boxes::{
    Edge, GridError, Match, MatchError, MatchStatus, Orientation, Outcome, PlayerId,
};

fn play(game: &mut Match, moves: &[(char, usize, usize)]) {
    for &(o, r, c) in moves {
        let orientation = Orientation::from_letter(o).unwrap();
        game.apply_move(orientation, r, c).unwrap();
    }
}

#[test]
fn test_duplicate_names_rejected() {
    assert_eq!(
        Match::new_match("Ada", "Ada", 3, 3).unwrap_err(),
        MatchError::DuplicateNames
    );
    // names are trimmed before comparing
    assert_eq!(
        Match::new("Ada", "  Ada ").unwrap_err(),
        MatchError::DuplicateNames
    );
    assert_eq!(Match::new("Ada", "   ").unwrap_err(), MatchError::EmptyName);
}

#[test]
fn test_invalid_dimensions_rejected() {
    assert_eq!(
        Match::new_match("Ada", "Bob", 1, 3).unwrap_err(),
        MatchError::InvalidDimensions { rows: 1, cols: 3 }
    );
}

#[test]
fn test_move_before_start_rejected() {
    let mut game = Match::new("Ada", "Bob").unwrap();
    assert_eq!(game.status(), MatchStatus::NotStarted);
    assert_eq!(
        game.apply_move(Orientation::Horizontal, 1, 1).unwrap_err(),
        MatchError::NotStarted
    );
    assert_eq!(game.outcome(), Outcome::NotFinished);
    assert!(game.snapshot().grid.is_none());
}

#[test]
fn test_turn_switches_without_completion() {
    let mut game = Match::new_match("Ada", "Bob", 2, 2).unwrap();
    assert_eq!(game.current(), PlayerId::One);
    let res = game.apply_move(Orientation::Horizontal, 1, 1).unwrap();
    assert_eq!(res.boxes_completed, 0);
    assert!(!res.extra_turn());
    assert_eq!(res.mover, PlayerId::One);
    assert_eq!(game.current(), PlayerId::Two);
    assert_eq!(game.current_player().name(), "Bob");
}

#[test]
fn test_corner_box_gives_point_and_extra_turn() {
    let mut game = Match::new_match("Ada", "Bob", 2, 2).unwrap();
    for (o, r, c) in [('H', 1, 1), ('V', 1, 1), ('H', 2, 1)] {
        let res = game
            .apply_move(Orientation::from_letter(o).unwrap(), r, c)
            .unwrap();
        assert_eq!(res.boxes_completed, 0);
    }
    // Bob is up after three scoreless moves
    assert_eq!(game.current(), PlayerId::Two);
    let res = game.apply_move(Orientation::Vertical, 1, 2).unwrap();
    assert_eq!(res.boxes_completed, 1);
    assert!(res.extra_turn());
    assert_eq!(game.score(PlayerId::Two), 1);
    assert_eq!(game.score(PlayerId::One), 0);
    assert_eq!(game.current(), PlayerId::Two);
}

#[test]
fn test_double_completion_scores_two() {
    let mut game = Match::new_match("Ada", "Bob", 2, 2).unwrap();
    play(
        &mut game,
        &[('H', 1, 1), ('V', 1, 1), ('V', 1, 2), ('H', 3, 1), ('V', 2, 1), ('V', 2, 2)],
    );
    assert_eq!(game.current(), PlayerId::One);
    let res = game.apply_edge(Edge::horizontal(2, 1)).unwrap();
    assert_eq!(res.boxes_completed, 2);
    assert_eq!(game.score(PlayerId::One), 2);
    assert_eq!(game.current(), PlayerId::One);
}

#[test]
fn test_rejected_move_consumes_nothing() {
    let mut game = Match::new_match("Ada", "Bob", 2, 2).unwrap();
    game.apply_move(Orientation::Vertical, 2, 3).unwrap();
    let before = game.snapshot();

    let err = game.apply_move(Orientation::Vertical, 2, 3).unwrap_err();
    assert!(matches!(err, MatchError::Grid(GridError::AlreadyClaimed { .. })));
    assert!(err.is_recoverable());
    let err = game.apply_move(Orientation::Horizontal, 4, 1).unwrap_err();
    assert!(matches!(err, MatchError::Grid(GridError::OutOfRange { .. })));

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.snapshot().encode().unwrap(), before.encode().unwrap());
    assert_eq!(game.current(), PlayerId::Two);
}

#[test]
fn test_two_two_split_is_tie() {
    let mut game = Match::new_match("Ada", "Bob", 2, 2).unwrap();
    play(
        &mut game,
        &[
            ('V', 2, 1), ('V', 2, 3), ('V', 1, 2), ('H', 2, 2), ('V', 2, 2), ('H', 3, 2),
            ('H', 1, 1), ('H', 3, 1), ('H', 2, 1), ('H', 1, 2), ('V', 1, 3), ('V', 1, 1),
        ],
    );
    assert!(game.is_finished());
    assert_eq!(game.score(PlayerId::One), 2);
    assert_eq!(game.score(PlayerId::Two), 2);
    assert_eq!(game.outcome(), Outcome::Tie);
    assert!(game.winner().is_none());
}

#[test]
fn test_three_one_split_has_winner() {
    let mut game = Match::new_match("Ada", "Bob", 2, 2).unwrap();
    play(
        &mut game,
        &[
            ('H', 3, 1), ('V', 1, 2), ('H', 2, 1), ('V', 1, 1), ('H', 1, 2), ('V', 2, 3),
            ('H', 2, 2), ('V', 1, 3), ('V', 2, 1), ('V', 2, 2), ('H', 1, 1),
        ],
    );
    assert!(!game.is_finished());
    assert_eq!(game.outcome(), Outcome::NotFinished);

    let res = game.apply_move(Orientation::Horizontal, 3, 2).unwrap();
    assert!(res.finished);
    assert_eq!(game.status(), MatchStatus::Finished);
    assert_eq!(game.outcome(), Outcome::Winner(PlayerId::One));
    let winner = game.winner().unwrap();
    assert_eq!(winner.name(), "Ada");
    assert_eq!(winner.score(), 3);
    assert_eq!(game.score(PlayerId::Two), 1);

    assert_eq!(
        game.apply_move(Orientation::Horizontal, 1, 1).unwrap_err(),
        MatchError::AlreadyFinished
    );
}

#[test]
fn test_new_game_resets_scores_and_keeps_players() {
    let mut game = Match::new_match("Ada", "Bob", 2, 2).unwrap();
    play(&mut game, &[('H', 1, 1), ('V', 1, 1), ('H', 2, 1), ('V', 1, 2)]);
    assert_eq!(game.score(PlayerId::Two), 1);

    assert_eq!(
        game.new_game(10, 2).unwrap_err(),
        MatchError::InvalidDimensions { rows: 10, cols: 2 }
    );
    // failed restart leaves the running game alone
    assert_eq!(game.score(PlayerId::Two), 1);

    game.new_game(3, 4).unwrap();
    assert_eq!(game.status(), MatchStatus::InProgress);
    assert_eq!(game.score(PlayerId::One), 0);
    assert_eq!(game.score(PlayerId::Two), 0);
    assert_eq!(game.current(), PlayerId::One);
    assert_eq!(game.grid().unwrap().rows(), 3);
    assert_eq!(game.player(PlayerId::Two).name(), "Bob");
}

#[test]
fn test_player_initials_and_display() {
    let game = Match::new("ada lovelace", "B").unwrap();
    assert_eq!(game.player(PlayerId::One).initials(), "AD");
    assert_eq!(game.player(PlayerId::Two).initials(), "B");
    assert_eq!(game.player(PlayerId::One).to_string(), "ada lovelace (0 points)");
}
