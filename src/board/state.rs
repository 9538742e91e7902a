//! Board state: which piece stands where.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::board::{BoardSize, Direction, Piece, PieceId, Square};
use crate::error::{BatchError, BoardError};
use crate::resolve::{Move, MoveBatch, Resolution};

/// Pieces in play on a board of a fixed size.
///
/// At most one piece stands on a square.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    size: BoardSize,
    /// Pieces keyed by id, so iteration order is stable.
    pieces: BTreeMap<PieceId, Piece>,
    /// Reverse index from square to occupant.
    occupants: HashMap<Square, PieceId>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            pieces: BTreeMap::new(),
            occupants: HashMap::new(),
        }
    }

    /// Board dimensions.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Put a piece on the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the square is off the board or occupied, or if a
    /// piece with the same id is already in play.
    pub fn place(&mut self, piece: Piece) -> Result<(), BoardError> {
        if !self.size.contains(piece.square) {
            return Err(BoardError::OutOfBounds {
                square: piece.square,
                size: self.size,
            });
        }
        if self.pieces.contains_key(&piece.id) {
            return Err(BoardError::DuplicatePiece(piece.id));
        }
        if let Some(&occupant) = self.occupants.get(&piece.square) {
            return Err(BoardError::SquareOccupied {
                square: piece.square,
                occupant,
            });
        }

        self.occupants.insert(piece.square, piece.id);
        self.pieces.insert(piece.id, piece);
        Ok(())
    }

    /// Look up a piece by id.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// The piece standing on a square, if any.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.occupants.get(&square).and_then(|id| self.pieces.get(id))
    }

    /// Iterate over pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Number of pieces in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check if no pieces are in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Build this turn's batch from per-piece orders.
    ///
    /// Orders keep their order in the batch. Pieces without an order stay
    /// where they are and follow in id order, so every piece in play has
    /// exactly one move.
    ///
    /// # Errors
    ///
    /// Returns an error if an order names a piece that is not in play or a
    /// piece is ordered twice.
    pub fn batch(&self, orders: &[(PieceId, Direction)]) -> Result<MoveBatch, BatchError> {
        let mut ordered = HashSet::with_capacity(orders.len());
        let mut moves = Vec::with_capacity(self.pieces.len());

        for &(id, direction) in orders {
            let piece = self.pieces.get(&id).ok_or(BatchError::UnknownPiece(id))?;
            if !ordered.insert(id) {
                return Err(BatchError::DuplicatePiece(id));
            }
            moves.push(Move::new(id, piece.square, direction));
        }

        moves.extend(
            self.pieces
                .values()
                .filter(|piece| !ordered.contains(&piece.id))
                .map(|piece| Move::stationary(piece.id, piece.square)),
        );

        MoveBatch::new(self.size, moves)
    }

    /// Validate externally built moves against the pieces in play.
    ///
    /// Unlike [`Board::batch`], pieces without a move are not filled in.
    ///
    /// # Errors
    ///
    /// Returns an error if a move names a piece that is not in play or
    /// starts from a square the piece is not on, or if the moves do not form
    /// a valid batch.
    pub fn validate(&self, moves: &[Move]) -> Result<MoveBatch, BatchError> {
        for mv in moves {
            let piece = self
                .pieces
                .get(&mv.piece)
                .ok_or(BatchError::UnknownPiece(mv.piece))?;
            if piece.square != mv.current {
                return Err(BatchError::SquareMismatch {
                    piece: mv.piece,
                    claimed: mv.current,
                    actual: piece.square,
                });
            }
        }
        MoveBatch::new(self.size, moves.to_vec())
    }

    /// Advance the board by one resolved turn.
    ///
    /// All moving pieces move at once, so a piece may enter a square another
    /// piece is leaving. Returns the number of pieces that moved.
    ///
    /// # Errors
    ///
    /// Returns an error without touching the board if the resolution was
    /// computed for a board of another size ([`BoardError::SizeMismatch`]),
    /// for other pieces or positions, or if applying it would put two pieces
    /// on one square ([`BoardError::StaleResolution`]).
    pub fn apply(&mut self, resolution: &Resolution) -> Result<usize, BoardError> {
        if resolution.size() != self.size {
            return Err(BoardError::SizeMismatch {
                expected: self.size,
                actual: resolution.size(),
            });
        }

        let mut destinations = self.occupants.clone();
        let moved: Vec<_> = resolution.moved().collect();

        for outcome in resolution.outcomes() {
            let piece = outcome.piece();
            match self.pieces.get(&piece) {
                Some(current) if current.square == outcome.current_square() => {}
                _ => return Err(BoardError::StaleResolution(piece)),
            }
        }
        for outcome in &moved {
            destinations.remove(&outcome.current_square());
        }
        for outcome in &moved {
            if destinations.insert(outcome.next_square, outcome.piece()).is_some() {
                return Err(BoardError::StaleResolution(outcome.piece()));
            }
        }

        for outcome in &moved {
            if let Some(piece) = self.pieces.get_mut(&outcome.piece()) {
                piece.square = outcome.next_square;
            }
        }
        self.occupants = destinations;

        debug!(moved = moved.len(), pieces = self.pieces.len(), "board advanced");
        Ok(moved.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::resolve::{Resolver, resolve_batch};

    fn board() -> Board {
        let mut board = Board::new(BoardSize::new(3, 3).unwrap());
        board
            .place(Piece::new(PieceId(1), Player::A, Square::new(0, 0)))
            .unwrap();
        board
            .place(Piece::new(PieceId(2), Player::B, Square::new(0, 2)))
            .unwrap();
        board
            .place(Piece::new(PieceId(3), Player::B, Square::new(2, 2)))
            .unwrap();
        board
    }

    #[test]
    fn test_place_rejects_conflicts() {
        let mut board = board();
        assert_eq!(
            board.place(Piece::new(PieceId(4), Player::A, Square::new(0, 0))),
            Err(BoardError::SquareOccupied {
                square: Square::new(0, 0),
                occupant: PieceId(1),
            })
        );
        assert_eq!(
            board.place(Piece::new(PieceId(1), Player::A, Square::new(1, 1))),
            Err(BoardError::DuplicatePiece(PieceId(1)))
        );
        assert!(matches!(
            board.place(Piece::new(PieceId(5), Player::A, Square::new(3, 0))),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_batch_fills_missing_orders() {
        let board = board();
        let batch = board.batch(&[(PieceId(2), Direction::Down)]).unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.moves()[0].piece, PieceId(2));
        assert_eq!(batch.moves()[1], Move::stationary(PieceId(1), Square::new(0, 0)));
        assert_eq!(batch.moves()[2], Move::stationary(PieceId(3), Square::new(2, 2)));
    }

    #[test]
    fn test_batch_rejects_unknown_and_duplicate() {
        let board = board();
        assert_eq!(
            board.batch(&[(PieceId(9), Direction::Up)]),
            Err(BatchError::UnknownPiece(PieceId(9)))
        );
        assert_eq!(
            board.batch(&[(PieceId(1), Direction::Right), (PieceId(1), Direction::Down)]),
            Err(BatchError::DuplicatePiece(PieceId(1)))
        );
    }

    #[test]
    fn test_validate_rejects_wrong_square() {
        let board = board();
        let err = board
            .validate(&[Move::new(PieceId(1), Square::new(1, 0), Direction::Up)])
            .unwrap_err();
        assert_eq!(
            err,
            BatchError::SquareMismatch {
                piece: PieceId(1),
                claimed: Square::new(1, 0),
                actual: Square::new(0, 0),
            }
        );
    }

    #[test]
    fn test_apply_moves_pieces() {
        let mut board = board();
        let batch = board
            .batch(&[(PieceId(1), Direction::Down), (PieceId(3), Direction::Up)])
            .unwrap();
        let resolution = resolve_batch(&batch);

        assert_eq!(board.apply(&resolution), Ok(2));
        assert_eq!(board.piece(PieceId(1)).unwrap().square, Square::new(1, 0));
        assert_eq!(board.piece_at(Square::new(1, 2)).unwrap().id, PieceId(3));
        assert!(board.piece_at(Square::new(0, 0)).is_none());
    }

    #[test]
    fn test_apply_follow_the_leader() {
        let mut board = Board::new(BoardSize::new(1, 3).unwrap());
        board
            .place(Piece::new(PieceId(1), Player::A, Square::new(0, 0)))
            .unwrap();
        board
            .place(Piece::new(PieceId(2), Player::A, Square::new(0, 1)))
            .unwrap();
        let batch = board
            .batch(&[(PieceId(1), Direction::Right), (PieceId(2), Direction::Right)])
            .unwrap();

        assert_eq!(board.apply(&resolve_batch(&batch)), Ok(2));
        assert_eq!(board.piece_at(Square::new(0, 1)).unwrap().id, PieceId(1));
        assert_eq!(board.piece_at(Square::new(0, 2)).unwrap().id, PieceId(2));
    }

    #[test]
    fn test_apply_rejects_stale_resolution() {
        let mut board = board();
        let resolution = Resolver::new(board.size())
            .resolve(&[Move::new(PieceId(7), Square::new(1, 1), Direction::Up)])
            .unwrap();

        assert_eq!(board.apply(&resolution), Err(BoardError::StaleResolution(PieceId(7))));
        assert_eq!(board.piece(PieceId(1)).unwrap().square, Square::new(0, 0));
    }

    #[test]
    fn test_apply_rejects_other_board_size() {
        let mut board = board();
        let resolution = Resolver::new(BoardSize::new(4, 4).unwrap())
            .resolve(&[Move::new(PieceId(1), Square::new(0, 0), Direction::Right)])
            .unwrap();

        assert_eq!(
            board.apply(&resolution),
            Err(BoardError::SizeMismatch {
                expected: BoardSize::new(3, 3).unwrap(),
                actual: BoardSize::new(4, 4).unwrap(),
            })
        );
        assert_eq!(board.piece(PieceId(1)).unwrap().square, Square::new(0, 0));
    }
}
