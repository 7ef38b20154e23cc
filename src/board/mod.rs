//! This module contains [`Position`], the object representing the current state of a chessboard.
//! All modifications to the current state of the board is done through this object, as well as
//! gathering information about the current state of the board.
//!
//! The functionality of a `Position` is split over several files:
//!
//! * `movegen`: pseudo-legal and legal move generation, with a per-position cache.
//! * `rules`: check, checkmate, stalemate, draw rules and the game [`Outcome`].
//! * `apply`: applying a move to a position.
//! * `fen`: the compact board-to-text exchange format.
//!
//! [`Position`]: struct.Position.html
//! [`Outcome`]: rules/enum.Outcome.html

pub mod apply;
pub mod board_state;
pub mod fen;
pub mod move_cache;
pub mod movegen;
pub mod rand_position;
pub mod rules;

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::sq::SQ;
use crate::core::square_set::SquareSet;
use crate::core::*;
use crate::error::{ChessError, ChessResult};

use self::board_state::{BoardState, EnPassant};
use self::move_cache::MoveCache;

pub use self::rand_position::RandPosition;
pub use self::rules::Outcome;

/// The contents of all 64 squares, indexed by `SQ`.
pub type Layout = [Option<Piece>; SQ_CNT];

/// The standard starting position, in the layout convention (lowercase is White).
pub const START_LAYOUT: &str = concat!(
    "RNBQKBNR",
    "PPPPPPPP",
    "........",
    "........",
    "........",
    "........",
    "pppppppp",
    "rnbqkbnr"
);

/// Squares that kings and rooks start on in standard chess, with the piece expected there.
const STANDARD_CASTLING_SQUARES: [(u8, Piece); 6] = [
    (0, Piece::BlackRook),
    (4, Piece::BlackKing),
    (7, Piece::BlackRook),
    (56, Piece::WhiteRook),
    (60, Piece::WhiteKing),
    (63, Piece::WhiteRook),
];

/// Represents a Chessboard through a `Position`.
///
/// A `Position` contains everything that needs to be known about the current state of the game:
/// the squares, the side to move, the castling rights, any en-passant opportunity, the number
/// of plies played and every earlier layout of the board, for detecting repetitions.
///
/// A `Position` is a value. Searching never shares one between branches, it clones the
/// parent and applies a move to the clone. Cloning does not copy the move cache.
///
/// # Examples
///
/// ```
/// use chess_search::Position;
///
/// let mut position = Position::start_pos();
/// let moves = position.generate_moves();
/// assert_eq!(moves.len(), 20);
///
/// position.apply_move(moves[0]).unwrap();
/// let copy = position.clone();
/// assert_eq!(copy.ply_count(), 1);
/// ```
///
/// # Square Representation
///
/// ```md,ignore
/// 8 | 0  1  2  3  4  5  6  7
/// 7 | 8  9  10 11 12 13 14 15
/// 6 | 16 17 18 19 20 21 22 23
/// 5 | 24 25 26 27 28 29 30 31
/// 4 | 32 33 34 35 36 37 38 39
/// 3 | 40 41 42 43 44 45 46 47
/// 2 | 48 49 50 51 52 53 54 55
/// 1 | 56 57 58 59 60 61 62 63
///   -------------------------
///      a  b  c  d  e  f  g  h
/// ```
pub struct Position {
    squares: Layout,
    turn: Player,
    state: BoardState,
    history: Vec<Layout>,
    move_cache: MoveCache,
}

impl Clone for Position {
    fn clone(&self) -> Self {
        Position {
            squares: self.squares,
            turn: self.turn,
            state: self.state,
            history: self.history.clone(),
            move_cache: MoveCache::default(),
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Position) -> bool {
        self.turn == other.turn
            && self.state == other.state
            && self.squares == other.squares
            && self.history == other.history
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.pretty_string(), self.outcome())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Position: {}", self.to_text())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start_pos()
    }
}

impl Position {
    /// Constructs a position from the standard starting position.
    pub fn start_pos() -> Position {
        let mut squares: Layout = [None; SQ_CNT];
        for (square, c) in squares.iter_mut().zip(START_LAYOUT.chars()) {
            *square = Piece::from_layout_char(c);
        }
        Position::from_squares(squares, Player::White)
    }

    /// Constructs a position from a custom layout, with `turn` to move.
    ///
    /// `layout` holds exactly 64 characters, rank 8 first and file a first inside each rank.
    /// Lowercase letters are White pieces, uppercase letters are Black pieces, and `.` is an
    /// empty square. Castling rights are given to every king and rook standing on its
    /// standard starting square.
    ///
    /// The position is not checked for having one king per side; rules queries on a side
    /// without a king treat that side as never being in check.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_search::Position;
    /// use chess_search::core::Player;
    ///
    /// let position = Position::from_layout(concat!(
    ///     "....R..k",
    ///     "....R...",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........"), Player::White).unwrap();
    /// assert!(position.checkmate());
    /// ```
    pub fn from_layout(layout: &str, turn: Player) -> ChessResult<Position> {
        Ok(Position::from_squares(layout_from_str(layout)?, turn))
    }

    /// Constructs a Chess960 starting position, using the thread-local random number generator.
    pub fn chess960() -> Position {
        Position::chess960_with_rng(&mut rand::thread_rng())
    }

    /// Constructs a Chess960 starting position from the given random number generator.
    ///
    /// Black's back rank is a shuffle of the standard pieces with the bishops on opposite
    /// colors and the king between the rooks. White's back rank mirrors it. Both rooks and
    /// the king of each side receive castling rights.
    pub fn chess960_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Position {
        let mut back_rank = [
            PieceType::R,
            PieceType::N,
            PieceType::B,
            PieceType::Q,
            PieceType::K,
            PieceType::B,
            PieceType::N,
            PieceType::R,
        ];
        loop {
            back_rank.shuffle(rng);
            if valid_960_rank(&back_rank) {
                break;
            }
        }

        let mut squares: Layout = [None; SQ_CNT];
        let mut rights = SquareSet::EMPTY;
        for (col, &piece_type) in back_rank.iter().enumerate() {
            let black_sq = SQ(col as u8);
            let white_sq = SQ(56 + col as u8);
            squares[black_sq.0 as usize] = Some(Piece::make(Player::Black, piece_type));
            squares[black_sq.0 as usize + 8] = Some(Piece::BlackPawn);
            squares[white_sq.0 as usize] = Some(Piece::make(Player::White, piece_type));
            squares[white_sq.0 as usize - 8] = Some(Piece::WhitePawn);
            if piece_type == PieceType::R || piece_type == PieceType::K {
                rights.insert(black_sq);
                rights.insert(white_sq);
            }
        }

        Position {
            squares,
            turn: Player::White,
            state: BoardState {
                castling_rights: rights,
                en_passant: None,
                ply: 0,
            },
            history: Vec::new(),
            move_cache: MoveCache::default(),
        }
    }

    /// Builds a position from squares, deriving castling rights from the standard squares.
    pub(crate) fn from_squares(squares: Layout, turn: Player) -> Position {
        let castling_rights = STANDARD_CASTLING_SQUARES
            .iter()
            .filter(|&&(sq, piece)| squares[sq as usize] == Some(piece))
            .map(|&(sq, _)| SQ(sq))
            .collect();
        Position {
            squares,
            turn,
            state: BoardState {
                castling_rights,
                en_passant: None,
                ply: 0,
            },
            history: Vec::new(),
            move_cache: MoveCache::default(),
        }
    }

    /// Returns the same position with `plies` recorded as already played.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_search::Position;
    ///
    /// let position = Position::start_pos().with_ply_count(149);
    /// assert!(!position.is_75_move_rule());
    /// ```
    pub fn with_ply_count(mut self, plies: u16) -> Position {
        self.state.ply = plies;
        self
    }

    /// Returns the same position with the castling rights replaced by `rights`.
    pub fn with_castling_rights<I: IntoIterator<Item = SQ>>(mut self, rights: I) -> Position {
        self.state.castling_rights = rights.into_iter().collect();
        self.move_cache = MoveCache::default();
        self
    }

    /// A copy holding only what move generation reads: no history and an empty cache.
    /// Used for the hypothetical boards of check detection and the legality filter.
    pub(crate) fn probe(&self) -> Position {
        Position {
            squares: self.squares,
            turn: self.turn,
            state: self.state,
            history: Vec::new(),
            move_cache: MoveCache::default(),
        }
    }

    /// Return the `Player` whose turn it is to move.
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Return the number of plies played since the position was created.
    #[inline(always)]
    pub fn ply_count(&self) -> u16 {
        self.state.ply
    }

    /// Returns the contents of all 64 squares.
    #[inline(always)]
    pub fn squares(&self) -> &Layout {
        &self.squares
    }

    /// Returns the squares whose king or rook may still castle.
    #[inline(always)]
    pub fn castling_rights(&self) -> SquareSet {
        self.state.castling_rights
    }

    /// Returns the current en-passant opportunity, if any.
    #[inline(always)]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.state.en_passant
    }

    /// Returns the layouts the board had before each move played, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[Layout] {
        &self.history
    }

    /// Returns the `BoardState`.
    #[inline(always)]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the piece on a square, if any.
    #[inline(always)]
    pub fn piece_at(&self, sq: SQ) -> Option<Piece> {
        self.squares[sq.0 as usize]
    }

    /// Returns the player owning the piece on a square, if any.
    #[inline(always)]
    pub fn player_at(&self, sq: SQ) -> Option<Player> {
        self.piece_at(sq).map(Piece::player)
    }

    /// Returns every square holding `piece`, in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_search::Position;
    /// use chess_search::core::Piece;
    /// use chess_search::core::sq::SQ;
    ///
    /// let position = Position::start_pos();
    /// assert_eq!(position.find_piece(Piece::WhiteKing), vec![SQ(60)]);
    /// ```
    pub fn find_piece(&self, piece: Piece) -> Vec<SQ> {
        SQ::all().filter(|&sq| self.piece_at(sq) == Some(piece)).collect()
    }

    /// Returns the square of a player's king, or `None` if the player has no king.
    pub fn king_sq(&self, player: Player) -> Option<SQ> {
        let king = Piece::make(player, PieceType::K);
        SQ::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Counts the pieces of a given type and player.
    pub fn count_piece(&self, player: Player, piece_type: PieceType) -> u8 {
        let piece = Piece::make(player, piece_type);
        self.squares.iter().filter(|&&p| p == Some(piece)).count() as u8
    }

    /// Counts every piece on the board.
    pub fn count_all_pieces(&self) -> u8 {
        self.squares.iter().filter(|p| p.is_some()).count() as u8
    }

    /// Checks that `src` and `dst` are algebraic squares and that `src` holds a piece, then
    /// returns if `dst` is a legal destination for that piece.
    pub fn is_valid(&self, src: &str, dst: &str) -> ChessResult<bool> {
        let src: SQ = src.parse()?;
        let dst: SQ = dst.parse()?;
        Ok(self.piece_moves(src)?.contains(&dst))
    }

    /// Returns a prettified String of the current `Position`, for easy command line displaying.
    ///
    /// Capital Letters represent white pieces, while lower case represents black pieces.
    pub fn pretty_string(&self) -> String {
        let mut s = String::with_capacity(SQ_CNT * 2 + 64);
        for sq in SQ::all() {
            if sq.col() == 0 {
                s.push_str(&format!("{}   ", sq.rank()));
            }
            s.push(self.piece_at(sq).map_or('.', Piece::text_char));
            s.push(' ');
            if sq.col() == 7 {
                s.push('\n');
            }
        }
        s.push('\n');
        s.push_str("    a b c d e f g h\n");
        s
    }

    /// Prints a prettified representation of the board.
    pub fn pretty_print(&self) {
        println!("{}", self.pretty_string());
    }
}

/// Reads a 64 character layout, lowercase for White and uppercase for Black.
fn layout_from_str(layout: &str) -> ChessResult<Layout> {
    let chars: Vec<char> = layout.chars().collect();
    if chars.len() != SQ_CNT {
        return Err(ChessError::InvalidBoardText {
            reason: format!("layout has {} squares, expected 64", chars.len()),
        });
    }
    let mut squares: Layout = [None; SQ_CNT];
    for (i, &c) in chars.iter().enumerate() {
        squares[i] = match c {
            '.' => None,
            c => Some(Piece::from_layout_char(c).ok_or_else(|| ChessError::InvalidBoardText {
                reason: format!("unrecognized piece: {:?}", c),
            })?),
        };
    }
    Ok(squares)
}

/// A Chess960 back rank needs bishops on opposite colors and the king between the rooks.
fn valid_960_rank(rank: &[PieceType; 8]) -> bool {
    let cols_of = |kind: PieceType| -> Vec<usize> {
        rank.iter()
            .enumerate()
            .filter(|&(_, &p)| p == kind)
            .map(|(i, _)| i)
            .collect()
    };
    let bishops = cols_of(PieceType::B);
    let rooks = cols_of(PieceType::R);
    let king = cols_of(PieceType::K)[0];
    bishops[0] % 2 != bishops[1] % 2 && rooks[0] < king && king < rooks[1]
}
