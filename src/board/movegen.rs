//! Module for generating moves from a `Position`. Allows for generating Legal and Pseudo-Legal
//! moves, for either side.
//!
//! # `Legal` vs. `PseudoLegal` Moves
//!
//! A Pseudo-Legal move follows the movement pattern of its piece and the occupancy of the
//! board, but may leave the mover's own king in check. A Legal move is a Pseudo-Legal move
//! that does not. Legality is decided by playing the move on a scratch copy of the position
//! and looking for a check, which is by far the most expensive part of generation.
//!
//! Pseudo-legal generation exists for check detection: asking "is this square attacked"
//! must not itself ask about legality, or the two would recurse forever.
//!
//! # Examples
//!
//! Generating all legal moves of the side to move:
//!
//! ```
//! use chess_search::Position;
//!
//! let position = Position::start_pos();
//! assert_eq!(position.generate_moves().len(), 20);
//! ```
//!
//! Generating the legal destinations of a single piece:
//!
//! ```
//! use chess_search::Position;
//! use chess_search::core::sq::SQ;
//!
//! let position = Position::start_pos();
//! let knight: SQ = "g1".parse().unwrap();
//! let mut dsts = position.piece_moves(knight).unwrap();
//! dsts.sort();
//! assert_eq!(dsts, vec!["f3".parse().unwrap(), "h3".parse().unwrap()]);
//! ```

use tracing::trace;

use crate::core::piece_move::Move;
use crate::core::sq::SQ;
use crate::core::*;
use crate::error::{ChessError, ChessResult};

use super::move_cache::MoveCacheKey;
use super::Position;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const ROOK_RAYS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const BISHOP_RAYS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

impl Position {
    /// Returns the legal destinations of the piece on `src`, whichever side it belongs to.
    ///
    /// # Errors
    ///
    /// `ChessError::EmptySquare` if there is no piece on `src`.
    pub fn piece_moves(&self, src: SQ) -> ChessResult<Vec<SQ>> {
        let piece = self
            .piece_at(src)
            .ok_or(ChessError::EmptySquare { square: src })?;
        Ok(self
            .all_moves(piece.player(), true)
            .into_iter()
            .filter(|m| m.src == src)
            .map(|m| m.dst)
            .collect())
    }

    /// Returns the pseudo-legal destinations of the piece on `src`.
    ///
    /// # Errors
    ///
    /// `ChessError::EmptySquare` if there is no piece on `src`.
    pub fn pseudo_piece_moves(&self, src: SQ) -> ChessResult<Vec<SQ>> {
        let piece = self
            .piece_at(src)
            .ok_or(ChessError::EmptySquare { square: src })?;
        Ok(self.destinations(src, piece, false, true))
    }

    /// Gets all legal moves for the side to move.
    ///
    /// The moves are listed by source square in increasing order.
    pub fn generate_moves(&self) -> Vec<Move> {
        self.all_moves(self.turn, true)
    }

    /// Gets all legal moves for a given player, regardless of whose turn it is.
    pub fn generate_moves_for(&self, player: Player) -> Vec<Move> {
        self.all_moves(player, true)
    }

    /// Gets all pseudo-legal moves for a given player.
    pub fn generate_pseudolegal_moves(&self, player: Player) -> Vec<Move> {
        self.all_moves(player, false)
    }

    /// Gets all legal moves for the side to move, captures first.
    pub fn generate_ordered_moves(&self) -> Vec<Move> {
        self.order_moves(self.generate_moves())
    }

    /// Returns the number of legal moves for the side to move.
    pub fn total_moves(&self) -> usize {
        self.generate_moves().len()
    }

    /// Lists the legal moves of a player as pairs of algebraic squares.
    pub fn legal_move_pairs(&self, player: Player) -> Vec<(&'static str, &'static str)> {
        self.all_moves(player, true)
            .into_iter()
            .map(Move::notation)
            .collect()
    }

    /// Returns if a move takes an enemy piece, en-passant included.
    pub fn is_capture(&self, mov: Move) -> bool {
        let mover = match self.piece_at(mov.src) {
            Some(piece) => piece,
            None => return false,
        };
        match self.player_at(mov.dst) {
            Some(owner) => owner != mover.player(),
            None => {
                mover.type_of() == PieceType::P
                    && self.en_passant().map_or(false, |ep| {
                        ep.target == mov.dst && ep.capturer == mover.player() && ep.is_flank(mov.src)
                    })
            }
        }
    }

    /// Orders a list of moves with captures first. The relative order inside each group
    /// is kept.
    pub fn order_moves(&self, moves: Vec<Move>) -> Vec<Move> {
        let (mut captures, quiets): (Vec<Move>, Vec<Move>) =
            moves.into_iter().partition(|&m| self.is_capture(m));
        captures.extend(quiets);
        captures
    }

    /// Whole-side generation, memoized per position.
    pub(crate) fn all_moves(&self, player: Player, legal: bool) -> Vec<Move> {
        let key = MoveCacheKey {
            player,
            legal,
            squares: self.squares,
            en_passant: self.state.en_passant,
            castling_rights: self.state.castling_rights,
        };
        if let Some(moves) = self.move_cache.get(&key) {
            trace!(%player, legal, count = moves.len(), "move cache hit");
            return moves;
        }

        let mut moves = Vec::with_capacity(48);
        for src in SQ::all() {
            match self.piece_at(src) {
                Some(piece) if piece.player() == player => {
                    for dst in self.destinations(src, piece, legal, true) {
                        moves.push(Move::new(src, dst));
                    }
                }
                _ => {}
            }
        }
        self.move_cache.insert(key, moves.clone());
        moves
    }

    /// Destinations of `piece` standing on `src`. `legal` applies the king-safety filter,
    /// and `castles` allows the king's castling moves.
    pub(crate) fn destinations(&self, src: SQ, piece: Piece, legal: bool, castles: bool) -> Vec<SQ> {
        let player = piece.player();
        let mut dsts = Vec::with_capacity(16);
        match piece.type_of() {
            PieceType::P => self.pawn_destinations(src, player, &mut dsts),
            PieceType::N => self.step_destinations(src, player, &KNIGHT_JUMPS, &mut dsts),
            PieceType::B => self.ray_destinations(src, player, &BISHOP_RAYS, &mut dsts),
            PieceType::R => self.ray_destinations(src, player, &ROOK_RAYS, &mut dsts),
            PieceType::Q => {
                self.ray_destinations(src, player, &ROOK_RAYS, &mut dsts);
                self.ray_destinations(src, player, &BISHOP_RAYS, &mut dsts);
            }
            PieceType::K => {
                self.step_destinations(src, player, &KING_STEPS, &mut dsts);
                if castles {
                    self.castle_destinations(src, player, legal, &mut dsts);
                }
            }
        }
        if legal {
            dsts.retain(|&dst| self.leaves_king_safe(Move::new(src, dst), player));
        }
        dsts
    }

    /// Plays the move on a scratch copy and checks that `player`'s king is not attacked.
    pub(crate) fn leaves_king_safe(&self, mov: Move, player: Player) -> bool {
        let mut probe = self.probe();
        probe.make_move_unchecked(mov, false);
        !probe.in_check(player)
    }

    fn pawn_destinations(&self, src: SQ, player: Player, dsts: &mut Vec<SQ>) {
        let push = player.pawn_push();
        if let Some(one) = src.offset(0, push) {
            if self.piece_at(one).is_none() {
                dsts.push(one);
                if src.row() == player.pawn_home_row() {
                    if let Some(two) = one.offset(0, push) {
                        if self.piece_at(two).is_none() {
                            dsts.push(two);
                        }
                    }
                }
            }
        }
        for &dx in [-1i8, 1].iter() {
            if let Some(dst) = src.offset(dx, push) {
                if self.player_at(dst) == Some(!player) {
                    dsts.push(dst);
                }
            }
        }
        if let Some(ep) = self.state.en_passant {
            if ep.capturer == player && ep.is_flank(src) && self.piece_at(ep.target).is_none() {
                dsts.push(ep.target);
            }
        }
    }

    fn step_destinations(&self, src: SQ, player: Player, steps: &[(i8, i8)], dsts: &mut Vec<SQ>) {
        for &(dx, dy) in steps {
            if let Some(dst) = src.offset(dx, dy) {
                if self.player_at(dst) != Some(player) {
                    dsts.push(dst);
                }
            }
        }
    }

    fn ray_destinations(&self, src: SQ, player: Player, rays: &[(i8, i8)], dsts: &mut Vec<SQ>) {
        for &(dx, dy) in rays {
            let mut cur = src;
            while let Some(dst) = cur.offset(dx, dy) {
                match self.player_at(dst) {
                    None => dsts.push(dst),
                    Some(owner) => {
                        if owner != player {
                            dsts.push(dst);
                        }
                        break;
                    }
                }
                cur = dst;
            }
        }
    }

    /// A castle is offered as the king moving onto the square of its rook.
    fn castle_destinations(&self, src: SQ, player: Player, legal: bool, dsts: &mut Vec<SQ>) {
        let rights = self.state.castling_rights;
        if !rights.contains(src) || (legal && self.is_check(src, player)) {
            return;
        }
        let rook = Piece::make(player, PieceType::R);
        for rook_sq in rights.iter() {
            if rook_sq.row() != src.row() || self.piece_at(rook_sq) != Some(rook) {
                continue;
            }
            let (lo, hi) = if rook_sq.col() < src.col() {
                (rook_sq.col(), src.col())
            } else {
                (src.col(), rook_sq.col())
            };
            let path_clear = (lo + 1..hi).all(|col| {
                let sq = SQ(src.row() * 8 + col);
                self.piece_at(sq).is_none() && (!legal || !self.is_check(sq, player))
            });
            if !path_clear {
                continue;
            }
            // Both pieces travel to their landing squares, which in Chess960 may lie
            // outside the span between them.
            let (king_dst, rook_dst) = castle_landing(src, rook_sq);
            let travel_free = rank_span(src, king_dst)
                .chain(rank_span(rook_sq, rook_dst))
                .all(|sq| sq == src || sq == rook_sq || self.piece_at(sq).is_none());
            if !travel_free {
                continue;
            }
            let king_safe = !legal
                || rank_span(src, king_dst).all(|sq| sq == src || !self.is_check(sq, player));
            if king_safe {
                dsts.push(rook_sq);
            }
        }
    }
}

/// Every square on the rank of `a` from the file of `a` to the file of `b`, both included.
fn rank_span(a: SQ, b: SQ) -> impl Iterator<Item = SQ> {
    let base = a.row() * 8;
    let (lo, hi) = if a.col() <= b.col() {
        (a.col(), b.col())
    } else {
        (b.col(), a.col())
    };
    (lo..=hi).map(move |col| SQ(base + col))
}

/// Where the king and rook end up when the king on `king_sq` castles with the rook on
/// `rook_sq`: the c and d files towards the a-side, the g and f files towards the h-side.
pub(crate) fn castle_landing(king_sq: SQ, rook_sq: SQ) -> (SQ, SQ) {
    let base = king_sq.row() * 8;
    if rook_sq.col() < king_sq.col() {
        (SQ(base + 2), SQ(base + 3))
    } else {
        (SQ(base + 6), SQ(base + 5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqs(names: &[&str]) -> Vec<SQ> {
        let mut v: Vec<SQ> = names.iter().map(|n| n.parse().unwrap()).collect();
        v.sort();
        v
    }

    #[test]
    fn ray_stops_at_pieces() {
        let position = Position::from_layout(
            concat!(
                "K.......", "........", "........", "........", "...r..P.", "........",
                "........", "...p...k"
            ),
            Player::White,
        )
        .unwrap();
        let mut dsts = position.pseudo_piece_moves("d4".parse().unwrap()).unwrap();
        dsts.sort();
        assert_eq!(
            dsts,
            sqs(&["d8", "d7", "d6", "d5", "d3", "d2", "a4", "b4", "c4", "e4", "f4", "g4"])
        );
    }

    #[test]
    fn empty_square_has_no_moves() {
        let position = Position::start_pos();
        match position.piece_moves("e4".parse().unwrap()) {
            Err(ChessError::EmptySquare { square }) => assert_eq!(square, SQ(36)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let position = Position::from_layout(
            concat!(
                "....R..K", "........", "........", "........", "........", "........",
                "....b...", "....k..."
            ),
            Player::White,
        )
        .unwrap();
        // The bishop on e2 shields the king on e1 from the rook on e8.
        assert!(position.piece_moves("e2".parse().unwrap()).unwrap().is_empty());
    }

    #[test]
    fn captures_are_ordered_first() {
        let position = Position::from_layout(
            concat!(
                "K.......", "........", "........", "...P....", "....p...", "........",
                "........", ".......k"
            ),
            Player::White,
        )
        .unwrap();
        let ordered = position.generate_ordered_moves();
        assert_eq!(ordered[0], "e4d5".parse().unwrap());
        assert!(ordered[1..].iter().all(|&m| !position.is_capture(m)));
    }

    #[test]
    fn cache_returns_same_list() {
        let position = Position::start_pos();
        let first = position.generate_moves();
        let second = position.generate_moves();
        assert_eq!(first, second);
        assert_eq!(position.move_cache.len(), 1);
    }
}
