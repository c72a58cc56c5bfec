use chutes::{
    Board, BoardError, ListRand, Player, StandardPlayer, STANDARD_CHUTES, STANDARD_GOAL,
    STANDARD_LADDERS,
};

#[test]
fn test_standard_board_layout() {
    let board = Board::standard();
    assert_eq!(board.goal(), 90);
    assert_eq!(board.ladders(), &STANDARD_LADDERS[..]);
    assert_eq!(board.chutes(), &STANDARD_CHUTES[..]);
    assert_eq!(Board::default(), board);
}

#[test]
fn test_position_adjustment() {
    let board = Board::standard();
    assert_eq!(board.position_adjustment(2), 0);
    assert_eq!(board.position_adjustment(49), 79 - 49);
    assert_eq!(board.position_adjustment(33), 3 - 33);
    assert_eq!(board.position_adjustment(1), 39);
    assert_eq!(board.position_adjustment(87), -17);
    // beyond the goal nothing applies
    assert_eq!(board.position_adjustment(1000), 0);
}

#[test]
fn test_exactly_fourteen_jump_squares() {
    let board = Board::standard();
    let starts: Vec<u32> = (1..STANDARD_GOAL)
        .filter(|&p| board.position_adjustment(p) != 0)
        .collect();
    let mut expected: Vec<u32> = STANDARD_LADDERS
        .iter()
        .chain(STANDARD_CHUTES.iter())
        .map(|&(start, _)| start)
        .collect();
    expected.sort_unstable();
    assert_eq!(starts, expected);
    assert_eq!(starts.len(), 14);
}

#[test]
fn test_goal_reached() {
    let board = Board::new(&[], &[], 50).unwrap();
    assert!(board.goal_reached(50));
    assert!(board.goal_reached(51));
    assert!(!board.goal_reached(2));

    let standard = Board::standard();
    assert!(!standard.goal_reached(89));
    assert!(standard.goal_reached(90));
    assert!(standard.goal_reached(95));
}

#[test]
fn test_custom_board_ladder_may_end_on_goal() {
    let board = Board::new(&[(3, 10)], &[(9, 2)], 10).unwrap();
    assert_eq!(board.position_adjustment(3), 7);
    assert_eq!(board.position_adjustment(9), -7);
    assert_eq!(board.position_adjustment(4), 0);
}

#[test]
fn test_malformed_boards_are_rejected() {
    assert_eq!(Board::new(&[], &[], 0).unwrap_err(), BoardError::InvalidGoal);
    assert_eq!(
        Board::new(&[(5, 3)], &[], 10).unwrap_err(),
        BoardError::LadderNotAscending { start: 5, end: 3 }
    );
    assert_eq!(
        Board::new(&[], &[(3, 5)], 10).unwrap_err(),
        BoardError::ChuteNotDescending { start: 3, end: 5 }
    );
    assert_eq!(
        Board::new(&[(0, 4)], &[], 10).unwrap_err(),
        BoardError::SquareOutOfRange { square: 0 }
    );
    assert_eq!(
        Board::new(&[(2, 11)], &[], 10).unwrap_err(),
        BoardError::SquareOutOfRange { square: 11 }
    );
    assert_eq!(
        Board::new(&[], &[(11, 4)], 10).unwrap_err(),
        BoardError::SquareOutOfRange { square: 11 }
    );
    assert_eq!(
        Board::new(&[(2, 5)], &[(2, 1)], 10).unwrap_err(),
        BoardError::DuplicateStart { square: 2 }
    );
}

#[test]
fn test_jump_may_end_on_another_start() {
    let board = Board::new(&[(2, 10)], &[(10, 5)], 20).unwrap();
    // adjustments are applied once, never chained
    assert_eq!(board.position_adjustment(2), 8);
    assert_eq!(board.position_adjustment(10), -5);
}

#[test]
fn test_chute_may_start_on_goal() {
    let board = Board::new(&[], &[(20, 5)], 20).unwrap();
    assert_eq!(board.position_adjustment(20), -15);

    // the chute fires before the goal is checked
    let mut rng = ListRand::new(vec![2]);
    let mut player = StandardPlayer::new().with_position(18);
    player.make_move(&board, &mut rng).unwrap();
    assert_eq!(player.position(), 5);
    assert!(!board.goal_reached(player.position()));
}

#[test]
fn test_standard_layout_passes_validation() {
    let board = Board::new(&STANDARD_LADDERS, &STANDARD_CHUTES, STANDARD_GOAL).unwrap();
    assert_eq!(board, Board::standard());
}
