#![no_main]

use arbitrary::Arbitrary;
use lockstep::resolve::check_resolution;
use lockstep::{Board, BoardSize, Direction, Piece, PieceId, Player, Square};
use libfuzzer_sys::fuzz_target;

/// One piece and its order for the turn.
#[derive(Arbitrary, Debug)]
struct PieceInput {
    row: u8,
    col: u8,
    /// Direction index, taken modulo the number of directions.
    direction: u8,
    /// Whether the piece gets an order at all.
    ordered: bool,
}

/// Structured input for turn fuzzing.
#[derive(Arbitrary, Debug)]
struct TurnInput {
    rows: u8,
    cols: u8,
    pieces: Vec<PieceInput>,
}

fuzz_target!(|input: TurnInput| {
    // Keep boards small so pieces actually collide
    let rows = u16::from(input.rows % 12) + 1;
    let cols = u16::from(input.cols % 12) + 1;
    let Ok(size) = BoardSize::new(rows, cols) else {
        return;
    };

    let mut board = Board::new(size);
    let mut orders = Vec::new();
    for (i, p) in input.pieces.iter().take(256).enumerate() {
        let id = PieceId(i as u32);
        let square = Square::new(u16::from(p.row) % rows, u16::from(p.col) % cols);
        let owner = if i % 2 == 0 { Player::A } else { Player::B };
        // Occupied squares are skipped, not an error
        if board.place(Piece::new(id, owner, square)).is_err() {
            continue;
        }
        if p.ordered {
            let direction = Direction::ALL[usize::from(p.direction) % Direction::ALL.len()];
            orders.push((id, direction));
        }
    }

    let batch = board.batch(&orders).expect("orders refer to placed pieces");
    let resolution = lockstep::resolve_batch(&batch);

    let violations = check_resolution(&resolution);
    if !violations.is_empty() {
        panic!("Invariant violations: {violations:?}");
    }

    // Applying must never stack pieces
    let pieces = board.len();
    board.apply(&resolution).expect("fresh resolution applies");
    assert_eq!(board.len(), pieces);
});
