//! End-to-end game scenarios driven through the session API

use grove::{
    Error, GameConfig, GameOutcome, IllegalMoveReason, PlayerId, Position, Session, Status,
    adapters::{EventLog, SessionEvent},
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

fn play_all(session: &mut Session, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        session
            .on_cell_selected(pos(row, col))
            .unwrap_or_else(|e| panic!("move {row},{col} should be legal: {e}"));
    }
}

mod classic {
    use super::*;

    #[test]
    fn top_row_wins_and_locks_the_board() {
        let mut session = Session::new(GameConfig::classic()).unwrap();
        play_all(&mut session, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

        assert_eq!(session.status(), Status::Winner(PlayerId::new("X")));
        assert_eq!(session.status().to_string(), "Winner: X");

        let err = session.on_cell_selected(pos(2, 2)).unwrap_err();
        assert_eq!(err.illegal_move_reason(), Some(IllegalMoveReason::GameOver));
        assert_eq!(session.history().len(), 6);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // X O X
        // X O O
        // O X X
        let mut session = Session::new(GameConfig::classic()).unwrap();
        play_all(
            &mut session,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 0),
                (2, 2),
            ],
        );

        let eval = session.evaluation();
        assert!(eval.is_draw);
        assert_eq!(eval.winner, None);
        assert_eq!(session.status(), Status::Draw);
        assert_eq!(session.status().to_string(), "Draw");
    }

    #[test]
    fn second_player_can_win() {
        let mut session = Session::new(GameConfig::classic()).unwrap();
        play_all(&mut session, &[(0, 0), (0, 1), (2, 2), (1, 1), (2, 0), (2, 1)]);

        assert_eq!(session.status(), Status::Winner(PlayerId::new("O")));
    }

    #[test]
    fn occupied_cell_is_rejected_without_state_change() {
        let mut session = Session::new(GameConfig::classic()).unwrap();
        play_all(&mut session, &[(1, 1)]);

        let before = session.history().clone();
        let err = session.on_cell_selected(pos(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            Error::IllegalMove {
                reason: IllegalMoveReason::AlreadyOccupied,
                ..
            }
        ));
        assert_eq!(session.history(), &before);
    }

    #[test]
    fn off_board_cell_is_rejected() {
        let mut session = Session::new(GameConfig::classic()).unwrap();
        let err = session.on_cell_selected(pos(0, 3)).unwrap_err();
        assert!(matches!(err, Error::InvalidPosition { rows: 3, cols: 3, .. }));
    }
}

mod time_travel {
    use super::*;

    #[test]
    fn new_move_after_jump_discards_the_future() {
        let mut session = Session::new(GameConfig::classic()).unwrap();
        play_all(&mut session, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(session.history().len(), 4);

        session.on_jump_requested(1).unwrap();
        session.on_cell_selected(pos(0, 2)).unwrap();

        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history().step(), 2);
        let board = session.current_board();
        assert!(board.is_empty(pos(1, 1)));
        assert_eq!(board.get(pos(0, 2)).unwrap().owner().unwrap().as_str(), "O");
    }

    #[test]
    fn jumping_back_from_a_finished_game_reopens_it() {
        let mut session = Session::new(GameConfig::classic()).unwrap();
        play_all(&mut session, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert!(session.status().is_over());

        session.on_jump_requested(4).unwrap();
        assert_eq!(
            session.status().to_string(),
            "Current player: X\nCurrent piece: X"
        );
        session.on_cell_selected(pos(2, 2)).unwrap();
        assert!(!session.status().is_over());
    }

    #[test]
    fn jumping_forward_again_is_allowed_until_a_new_move() {
        let mut session = Session::new(GameConfig::classic()).unwrap();
        play_all(&mut session, &[(0, 0), (1, 1)]);

        session.on_jump_requested(0).unwrap();
        session.on_jump_requested(2).unwrap();
        assert_eq!(session.current_board().occupied_count(), 2);
    }

    #[test]
    fn out_of_range_jump_is_an_error() {
        let mut session = Session::new(GameConfig::classic()).unwrap();
        play_all(&mut session, &[(0, 0)]);

        let err = session.on_jump_requested(2).unwrap_err();
        assert!(matches!(err, Error::StepOutOfRange { step: 2, len: 2 }));
        assert_eq!(session.history().step(), 1);
    }

    #[test]
    fn move_labels_track_history() {
        let mut session = Session::new(GameConfig::classic()).unwrap();
        play_all(&mut session, &[(0, 0), (1, 1)]);

        let labels: Vec<String> = session
            .move_labels()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }
}

mod tree_planting {
    use super::*;

    #[test]
    fn trees_age_each_turn() {
        let mut session = Session::new(GameConfig::tree_planting()).unwrap();
        play_all(&mut session, &[(0, 0), (2, 2), (1, 2)]);

        let age = |p| {
            session
                .current_board()
                .get(p)
                .and_then(|cell| cell.placement())
                .map(|placement| placement.age)
                .unwrap()
        };
        assert_eq!(age(pos(0, 0)), 2);
        assert_eq!(age(pos(2, 2)), 1);
        assert_eq!(age(pos(1, 2)), 0);
    }

    #[test]
    fn earlier_snapshots_keep_their_ages() {
        let mut session = Session::new(GameConfig::tree_planting()).unwrap();
        play_all(&mut session, &[(0, 0), (2, 2), (1, 2)]);

        let first = &session.history().snapshots()[1].board;
        assert_eq!(first.get(pos(0, 0)).unwrap().placement().unwrap().age, 0);
    }

    #[test]
    fn a_line_needs_one_species() {
        let mut session = Session::new(GameConfig::tree_planting()).unwrap();
        // summer plants the top row, switching species on the middle tree
        session.on_cell_selected(pos(0, 0)).unwrap();
        session.on_cell_selected(pos(2, 0)).unwrap();
        session.on_piece_selected(1).unwrap();
        session.on_cell_selected(pos(0, 1)).unwrap();
        session.on_cell_selected(pos(2, 1)).unwrap();
        session.on_piece_selected(0).unwrap();
        session.on_cell_selected(pos(0, 2)).unwrap();

        assert!(!session.status().is_over());
        assert_eq!(session.current_player(), &PlayerId::new("winter"));
    }

    #[test]
    fn a_line_needs_one_owner() {
        let mut session = Session::new(GameConfig::tree_planting()).unwrap();
        // Both seasons plant pines down the left column
        play_all(&mut session, &[(0, 0), (1, 0), (2, 0)]);
        assert!(!session.status().is_over());

        // summer then completes the top row alone
        play_all(&mut session, &[(1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(session.status(), Status::Winner(PlayerId::new("summer")));
    }

    #[test]
    fn three_players_rotate_and_win() {
        let config = GameConfig::tree_planting().with_players(["spring", "summer", "autumn"]);
        let mut session = Session::new(config).unwrap();

        // spring takes the main diagonal
        play_all(
            &mut session,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 2)],
        );
        assert_eq!(session.status(), Status::Winner(PlayerId::new("spring")));

        session.on_jump_requested(2).unwrap();
        assert_eq!(session.current_player(), &PlayerId::new("autumn"));
    }
}

mod observers {
    use super::*;

    #[test]
    fn event_log_records_a_full_game() {
        let log = EventLog::new();
        let mut session = Session::new(GameConfig::classic()).unwrap();
        session.add_observer(log.clone());

        play_all(&mut session, &[(0, 0), (1, 1), (0, 1)]);
        let _ = session.on_cell_selected(pos(0, 0));
        session.on_jump_requested(1).unwrap();
        play_all(&mut session, &[(2, 2), (0, 1), (1, 2), (0, 2)]);

        let events = log.events();
        assert!(matches!(events[0], SessionEvent::MoveRecorded { step: 1, .. }));
        assert!(matches!(
            events[3],
            SessionEvent::MoveRejected {
                reason: Some(IllegalMoveReason::AlreadyOccupied),
                ..
            }
        ));
        assert_eq!(events[4], SessionEvent::Jumped { from: 3, to: 1 });
        assert_eq!(
            events.last(),
            Some(&SessionEvent::GameOver {
                step: 5,
                outcome: GameOutcome::Win(PlayerId::new("X")),
            })
        );
    }
}
