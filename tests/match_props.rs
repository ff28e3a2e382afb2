use dots_and_boxes::{Edge, Match, MatchStatus, Orientation, PlayerId};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

fn shuffled_edges(game: &Match, rng: &mut SmallRng) -> Vec<Edge> {
    let mut edges: Vec<Edge> = game.grid().unwrap().unclaimed_edges().collect();
    edges.shuffle(rng);
    edges
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Scores always match box ownership, and the game ends on the last edge.
    #[test]
    fn scores_track_owned_boxes(seed in any::<u64>(), rows in 2usize..=6, cols in 2usize..=6) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Match::new_match("Ada", "Bob", rows, cols).unwrap();
        let edges = shuffled_edges(&game, &mut rng);
        let total = edges.len();

        for (i, edge) in edges.into_iter().enumerate() {
            prop_assert!(!game.is_finished());
            let mover = game.current();
            let res = game.apply_edge(edge).unwrap();
            prop_assert_eq!(res.mover, mover);

            let grid = game.grid().unwrap();
            prop_assert_eq!(game.score(PlayerId::One), grid.owned_by(PlayerId::One));
            prop_assert_eq!(game.score(PlayerId::Two), grid.owned_by(PlayerId::Two));
            prop_assert_eq!(
                game.score(PlayerId::One) + game.score(PlayerId::Two),
                grid.owned_boxes()
            );
            if res.finished {
                prop_assert_eq!(i + 1, total);
            } else if res.boxes_completed > 0 {
                prop_assert_eq!(game.current(), mover);
            } else {
                prop_assert_eq!(game.current(), mover.other());
            }
        }
        prop_assert_eq!(game.status(), MatchStatus::Finished);
        prop_assert_eq!(game.score(PlayerId::One) + game.score(PlayerId::Two), rows * cols);
    }

    /// Bad moves mixed into a game never change the snapshot.
    #[test]
    fn rejected_moves_leave_snapshot_intact(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Match::new_match("Ada", "Bob", 3, 3).unwrap();
        let edges = shuffled_edges(&game, &mut rng);
        let mut played: Vec<Edge> = Vec::new();

        for edge in edges {
            let before = game.snapshot();
            let bytes = before.encode().unwrap();

            let (orientation, row, col) = if !played.is_empty() && rng.random_bool(0.5) {
                let e = played[rng.random_range(0..played.len())];
                (e.orientation, e.row, e.col)
            } else if rng.random_bool(0.5) {
                (Orientation::Horizontal, rng.random_range(5..9), rng.random_range(1..4))
            } else {
                (Orientation::Vertical, rng.random_range(0..4), 0)
            };
            prop_assert!(game.apply_move(orientation, row, col).is_err());
            prop_assert_eq!(&game.snapshot(), &before);
            prop_assert_eq!(game.snapshot().encode().unwrap(), bytes);

            game.apply_edge(edge).unwrap();
            played.push(edge);
        }
        prop_assert!(game.is_finished());
    }
}
