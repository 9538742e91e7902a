//! Turn scenarios with known verdicts.
//!
//! Each test sets up a small board, resolves one turn and checks every
//! piece's disposition and the squares left locked.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use lockstep::{
    Board, BoardSize, Direction, Disposition, Move, Piece, PieceId, Player, Resolution, Resolver,
    Scenario, Square,
};

const A: PieceId = PieceId(1);
const B: PieceId = PieceId(2);
const C: PieceId = PieceId(3);
const D: PieceId = PieceId(4);

fn resolve(moves: &[Move]) -> Resolution {
    Resolver::new(BoardSize::new(3, 3).unwrap())
        .resolve(moves)
        .unwrap()
}

fn mv(piece: PieceId, row: u16, col: u16, direction: Direction) -> Move {
    Move::new(piece, Square::new(row, col), direction)
}

fn disposition(resolution: &Resolution, piece: PieceId) -> Disposition {
    resolution.outcome(piece).unwrap().disposition()
}

fn locked(resolution: &Resolution) -> Vec<Square> {
    resolution.locked().squares().collect()
}

#[test]
fn test_bounce() {
    let resolution = resolve(&[mv(A, 0, 0, Direction::Right), mv(B, 0, 2, Direction::Left)]);

    for piece in [A, B] {
        let outcome = resolution.outcome(piece).unwrap();
        assert!(!outcome.should_move);
        assert!(outcome.is_bounce);
        assert!(!outcome.is_stationary);
        assert_eq!(outcome.next_square, Square::new(0, 1));
    }
    assert_eq!(locked(&resolution), vec![Square::new(0, 0), Square::new(0, 2)]);
}

#[test]
fn test_swap() {
    let resolution = resolve(&[mv(A, 1, 0, Direction::Right), mv(B, 1, 1, Direction::Left)]);

    for piece in [A, B] {
        let outcome = resolution.outcome(piece).unwrap();
        assert!(!outcome.should_move);
        assert!(!outcome.is_bounce);
        assert!(!outcome.is_stationary);
    }
    assert_eq!(locked(&resolution), vec![Square::new(1, 0), Square::new(1, 1)]);
}

#[test]
fn test_stationary_blocks_entry() {
    let resolution = resolve(&[
        mv(C, 2, 2, Direction::Stationary),
        mv(D, 2, 1, Direction::Right),
    ]);

    let c = resolution.outcome(C).unwrap();
    assert!(c.is_stationary);
    assert!(!c.should_move);

    let d = resolution.outcome(D).unwrap();
    assert!(!d.should_move);
    assert!(!d.is_bounce);
    assert!(!d.is_stationary);

    assert!(resolution.locked().is_locked(Square::new(2, 1)));
    assert!(resolution.locked().is_locked(Square::new(2, 2)));
}

#[test]
fn test_cascade() {
    let resolution = resolve(&[
        mv(C, 0, 2, Direction::Stationary),
        mv(A, 0, 1, Direction::Right),
        mv(D, 0, 0, Direction::Right),
    ]);

    assert_eq!(disposition(&resolution, C), Disposition::Stationary);
    assert_eq!(disposition(&resolution, A), Disposition::Blocked);
    assert_eq!(disposition(&resolution, D), Disposition::Blocked);
    assert_eq!(
        locked(&resolution),
        vec![Square::new(0, 0), Square::new(0, 1), Square::new(0, 2)]
    );
    // Two sweeps invalidate, a third confirms the fixed point.
    assert!(resolution.passes() >= 3);
}

#[test]
fn test_cascade_regardless_of_submission_order() {
    let resolution = resolve(&[
        mv(D, 0, 0, Direction::Right),
        mv(A, 0, 1, Direction::Right),
        mv(C, 0, 2, Direction::Stationary),
    ]);

    assert_eq!(disposition(&resolution, A), Disposition::Blocked);
    assert_eq!(disposition(&resolution, D), Disposition::Blocked);
    assert_eq!(resolution.passes(), 3);
}

#[test]
fn test_clean_move() {
    let resolution = resolve(&[mv(A, 1, 0, Direction::Right)]);
    let outcome = resolution.outcome(A).unwrap();

    assert!(outcome.should_move);
    assert!(!outcome.is_bounce);
    assert!(!outcome.is_stationary);
    assert!(!resolution.locked().is_locked(Square::new(1, 1)));
}

#[test]
fn test_edge_clamped_move_is_stationary() {
    let resolution = resolve(&[
        mv(A, 0, 0, Direction::Up),
        mv(B, 0, 1, Direction::Left),
    ]);

    let a = resolution.outcome(A).unwrap();
    assert!(a.is_stationary);
    assert_eq!(a.next_square, Square::new(0, 0));
    assert_eq!(disposition(&resolution, B), Disposition::Blocked);
}

#[test]
fn test_bounce_into_occupied_square_that_empties() {
    // A and B both want (1, 1); its occupant C leaves cleanly, so the square
    // is free at the end of the turn and the bounce stands.
    let resolution = resolve(&[
        mv(A, 1, 0, Direction::Right),
        mv(B, 1, 2, Direction::Left),
        mv(C, 1, 1, Direction::Down),
    ]);

    assert_eq!(disposition(&resolution, A), Disposition::Bounced);
    assert_eq!(disposition(&resolution, B), Disposition::Bounced);
    assert_eq!(disposition(&resolution, C), Disposition::Moved);
}

#[test]
fn test_bounce_into_square_whose_occupant_is_stuck() {
    // C cannot leave (1, 1), so (1, 1) is locked by the end of the turn and
    // A and B are reported as plain blocks.
    let resolution = resolve(&[
        mv(A, 1, 0, Direction::Right),
        mv(B, 1, 2, Direction::Left),
        mv(C, 1, 1, Direction::Down),
        mv(D, 2, 1, Direction::Stationary),
    ]);

    assert_eq!(disposition(&resolution, C), Disposition::Blocked);
    assert_eq!(disposition(&resolution, A), Disposition::Blocked);
    assert_eq!(disposition(&resolution, B), Disposition::Blocked);
}

#[test]
fn test_swap_with_contested_square() {
    // A and B try to trade squares while D contests A's square with B.
    // Every square involved ends up locked, so nobody is left bouncing.
    let resolution = Resolver::new(BoardSize::new(1, 4).unwrap())
        .resolve(&[
            mv(A, 0, 1, Direction::Right),
            mv(B, 0, 2, Direction::Left),
            mv(D, 0, 0, Direction::Right),
        ])
        .unwrap();

    assert_eq!(disposition(&resolution, A), Disposition::Blocked);
    assert_eq!(disposition(&resolution, B), Disposition::Blocked);
    assert_eq!(disposition(&resolution, D), Disposition::Blocked);
    assert_eq!(resolution.locked().len(), 3);
}

#[test]
fn test_turn_on_board_with_unordered_pieces() {
    let mut board = Board::new(BoardSize::new(3, 3).unwrap());
    board.place(Piece::new(A, Player::A, Square::new(1, 0))).unwrap();
    board.place(Piece::new(B, Player::B, Square::new(1, 1))).unwrap();

    // B has no order, so it holds (1, 1) and A cannot enter.
    let batch = board.batch(&[(A, Direction::Right)]).unwrap();
    let resolution = lockstep::resolve_batch(&batch);
    assert_eq!(disposition(&resolution, B), Disposition::Stationary);
    assert_eq!(disposition(&resolution, A), Disposition::Blocked);

    assert_eq!(board.apply(&resolution).unwrap(), 0);
}

#[test]
fn test_multi_turn_scenario() {
    let scenario = Scenario::from_json(
        r#"{
            "board": { "rows": 3, "cols": 3 },
            "pieces": [
                { "id": 1, "owner": "A", "square": { "row": 2, "col": 0 } },
                { "id": 2, "owner": "B", "square": { "row": 0, "col": 2 } }
            ],
            "orders": [
                { "piece": 1, "direction": "up" },
                { "piece": 2, "direction": "down" }
            ]
        }"#,
    )
    .unwrap();

    let (mut board, first) = scenario.next_turn().unwrap();
    assert_eq!(first.count(Disposition::Moved), 2);

    // Both now head for (1, 1).
    let batch = board.batch(&[(A, Direction::Right), (B, Direction::Left)]).unwrap();
    let second = lockstep::resolve_batch(&batch);
    assert_eq!(second.count(Disposition::Bounced), 2);
    assert_eq!(board.apply(&second).unwrap(), 0);
    assert_eq!(board.piece(A).unwrap().square, Square::new(1, 0));
    assert_eq!(board.piece(B).unwrap().square, Square::new(1, 2));
}
