//! Contains various components and structures supporting the creation of a chessboard. This
//! includes `SQ`, `SquareSet`, `Player`, `Piece`, `PieceType` and `Move`.

pub mod piece_move;
pub mod sq;
pub mod square_set;

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::error::ChessError;

/// Number of squares on a chessboard.
pub const SQ_CNT: usize = 64;
/// Number of files (and ranks) on a chessboard.
pub const FILE_CNT: usize = 8;
/// Number of players.
pub const PLAYER_CNT: usize = 2;

/// Array of all possible piece types, in move generation order.
pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::P,
    PieceType::N,
    PieceType::B,
    PieceType::R,
    PieceType::Q,
    PieceType::K,
];

/// Array of both players, indexed by their enum value.
pub const ALL_PLAYERS: [Player; PLAYER_CNT] = [Player::White, Player::Black];

/// Enum to represent the Players White & Black.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Returns the other player.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_search::core::Player;
    ///
    /// let b = Player::Black;
    /// assert_eq!(b.other_player(), Player::White);
    /// ```
    #[inline(always)]
    pub fn other_player(self) -> Player {
        !(self)
    }

    /// Gets the row delta of a pawn push for a given player. White pushes towards
    /// row 0 (rank 8), Black towards row 7 (rank 1).
    #[inline(always)]
    pub fn pawn_push(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// The row a player's pawns start on, and may double-step from.
    #[inline]
    pub fn pawn_home_row(self) -> u8 {
        match self {
            Player::White => 6,
            Player::Black => 1,
        }
    }

    /// The row a player's pawns promote on.
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }

    /// The row a player's pieces start on.
    #[inline]
    pub fn back_row(self) -> u8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }
}

impl Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            Player::White => "White",
            Player::Black => "Black",
        })
    }
}

impl FromStr for Player {
    type Err = ChessError;

    /// Parses a side to move. Accepts `w`, `b`, `white` and `black`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Player::White),
            "b" | "black" => Ok(Player::Black),
            _ => Err(ChessError::InvalidColor { color: s.to_string() }),
        }
    }
}

/// All possible Types of Pieces on a chessboard.
///
/// For a representation of pieces considering color as well, see [`Piece`]
///
/// [`Piece`]: ./enum.Piece.html
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum PieceType {
    P = 0,
    N = 1,
    B = 2,
    R = 3,
    Q = 4,
    K = 5,
}

impl PieceType {
    /// Returns the material value of a piece, as counted by the reference evaluator.
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            PieceType::P => 1,
            PieceType::N | PieceType::B => 3,
            PieceType::R => 5,
            PieceType::Q => 9,
            PieceType::K => 200,
        }
    }

    /// Return the lowercase character of a `PieceType`.
    #[inline]
    pub fn char_lower(self) -> char {
        match self {
            PieceType::P => 'p',
            PieceType::N => 'n',
            PieceType::B => 'b',
            PieceType::R => 'r',
            PieceType::Q => 'q',
            PieceType::K => 'k',
        }
    }

    /// Return the uppercase character of a `PieceType`.
    #[inline]
    pub fn char_upper(self) -> char {
        self.char_lower().to_ascii_uppercase()
    }

    /// Returns the `PieceType` for a character, ignoring case.
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::P),
            'n' => Some(PieceType::N),
            'b' => Some(PieceType::B),
            'r' => Some(PieceType::R),
            'q' => Some(PieceType::Q),
            'k' => Some(PieceType::K),
            _ => None,
        }
    }

    /// Returns if the piece moves along rays until blocked.
    #[inline]
    pub fn is_slider(self) -> bool {
        matches!(self, PieceType::B | PieceType::R | PieceType::Q)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            PieceType::P => "Pawn",
            PieceType::N => "Knight",
            PieceType::B => "Bishop",
            PieceType::R => "Rook",
            PieceType::Q => "Queen",
            PieceType::K => "King",
        };
        f.pad(s)
    }
}

/// All possible Types of Pieces on a chessboard, for both colors.
///
/// An empty square is represented as `Option<Piece>::None` rather than a variant.
/// For a representation of only the kind of piece, see [`PieceType`].
///
/// Two character conventions exist for a `Piece`:
///
/// * The layout convention, used by [`Position::from_layout`], where lowercase
///   letters are White pieces and uppercase letters are Black pieces.
/// * The text exchange convention, used by [`Position::to_text`], where uppercase
///   letters are White pieces and lowercase letters are Black pieces.
///
/// [`PieceType`]: ./enum.PieceType.html
/// [`Position::from_layout`]: ../board/struct.Position.html#method.from_layout
/// [`Position::to_text`]: ../board/struct.Position.html#method.to_text
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Piece {
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl Piece {
    /// Creates a `Piece` from a `Player` and a `PieceType`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_search::core::{Piece,PieceType,Player};
    ///
    /// let piece = Piece::make(Player::Black, PieceType::N);
    /// assert_eq!(piece, Piece::BlackKnight);
    /// ```
    pub fn make(player: Player, piece_type: PieceType) -> Piece {
        match (player, piece_type) {
            (Player::White, PieceType::P) => Piece::WhitePawn,
            (Player::White, PieceType::N) => Piece::WhiteKnight,
            (Player::White, PieceType::B) => Piece::WhiteBishop,
            (Player::White, PieceType::R) => Piece::WhiteRook,
            (Player::White, PieceType::Q) => Piece::WhiteQueen,
            (Player::White, PieceType::K) => Piece::WhiteKing,
            (Player::Black, PieceType::P) => Piece::BlackPawn,
            (Player::Black, PieceType::N) => Piece::BlackKnight,
            (Player::Black, PieceType::B) => Piece::BlackBishop,
            (Player::Black, PieceType::R) => Piece::BlackRook,
            (Player::Black, PieceType::Q) => Piece::BlackQueen,
            (Player::Black, PieceType::K) => Piece::BlackKing,
        }
    }

    /// Returns the `Player` of a piece.
    #[inline]
    pub fn player(self) -> Player {
        match self {
            Piece::WhitePawn
            | Piece::WhiteKnight
            | Piece::WhiteBishop
            | Piece::WhiteRook
            | Piece::WhiteQueen
            | Piece::WhiteKing => Player::White,
            _ => Player::Black,
        }
    }

    /// Returns the `PieceType`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_search::core::{Piece,PieceType};
    ///
    /// assert_eq!(Piece::WhiteQueen.type_of(), PieceType::Q);
    /// ```
    #[inline]
    pub fn type_of(self) -> PieceType {
        match self {
            Piece::WhitePawn | Piece::BlackPawn => PieceType::P,
            Piece::WhiteKnight | Piece::BlackKnight => PieceType::N,
            Piece::WhiteBishop | Piece::BlackBishop => PieceType::B,
            Piece::WhiteRook | Piece::BlackRook => PieceType::R,
            Piece::WhiteQueen | Piece::BlackQueen => PieceType::Q,
            Piece::WhiteKing | Piece::BlackKing => PieceType::K,
        }
    }

    /// Character of this piece in the layout convention (lowercase is White).
    pub fn layout_char(self) -> char {
        match self.player() {
            Player::White => self.type_of().char_lower(),
            Player::Black => self.type_of().char_upper(),
        }
    }

    /// Parses a character in the layout convention (lowercase is White).
    pub fn from_layout_char(c: char) -> Option<Piece> {
        let piece_type = PieceType::from_char(c)?;
        let player = if c.is_ascii_lowercase() {
            Player::White
        } else {
            Player::Black
        };
        Some(Piece::make(player, piece_type))
    }

    /// Character of this piece in the text exchange convention (uppercase is White).
    pub fn text_char(self) -> char {
        match self.player() {
            Player::White => self.type_of().char_upper(),
            Player::Black => self.type_of().char_lower(),
        }
    }

    /// Parses a character in the text exchange convention (uppercase is White).
    pub fn from_text_char(c: char) -> Option<Piece> {
        let piece_type = PieceType::from_char(c)?;
        let player = if c.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Some(Piece::make(player, piece_type))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.player(), self.type_of())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_chars_invert_between_conventions() {
        assert_eq!(Piece::WhiteKing.layout_char(), 'k');
        assert_eq!(Piece::WhiteKing.text_char(), 'K');
        assert_eq!(Piece::from_layout_char('R'), Some(Piece::BlackRook));
        assert_eq!(Piece::from_text_char('R'), Some(Piece::WhiteRook));
        assert_eq!(Piece::from_layout_char('.'), None);
    }

    #[test]
    fn make_and_split_agree() {
        for &player in ALL_PLAYERS.iter() {
            for &piece_type in ALL_PIECE_TYPES.iter() {
                let piece = Piece::make(player, piece_type);
                assert_eq!(piece.player(), player);
                assert_eq!(piece.type_of(), piece_type);
            }
        }
    }

    #[test]
    fn player_parsing() {
        assert_eq!("w".parse::<Player>().unwrap(), Player::White);
        assert_eq!("Black".parse::<Player>().unwrap(), Player::Black);
        match "red".parse::<Player>() {
            Err(ChessError::InvalidColor { color }) => assert_eq!(color, "red"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
