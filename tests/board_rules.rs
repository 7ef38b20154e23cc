extern crate chess_search;

use chess_search::board::*;
use chess_search::core::sq::SQ;
use chess_search::core::*;
use chess_search::ChessError;

fn layout(rows: [&str; 8], turn: Player) -> Position {
    Position::from_layout(&rows.concat(), turn).unwrap()
}

fn sq(name: &str) -> SQ {
    name.parse().unwrap()
}

#[test]
fn test_is_check() {
    let b = layout(
        [
            "....K...", "........", "........", "K...q...", "........", "........", "..Q.....",
            "....k...",
        ],
        Player::White,
    );
    assert_eq!(b.is_check_at(SQ(24)), Ok(true));
    assert_eq!(b.is_check_at(SQ(60)), Ok(false));
    assert!(b.is_check(SQ(12), Player::Black));
    assert!(!b.is_check(SQ(11), Player::Black));
    assert!(b.is_check(SQ(58), Player::White));
    assert_eq!(b.is_check_at(SQ(4)), Ok(true));
    assert_eq!(
        b.is_check_at(SQ(56)),
        Err(ChessError::EmptySquare { square: SQ(56) })
    );
}

#[test]
fn test_check_that_can_be_blocked() {
    let b = layout(
        [
            "RNBQKBNR", "PPPPPPPP", "........", "....R...", "........", "........", "pppp.ppp",
            "rnbqkbnr",
        ],
        Player::White,
    );
    assert_eq!(b.is_check_at(SQ(60)), Ok(true));
    assert_eq!(b.is_checkmate(SQ(60)), Ok(false));
    assert_eq!(b.outcome(), Outcome::WhiteInCheck);
}

#[test]
fn test_knight_check() {
    let mut b = Position::start_pos();
    b.apply_notation("b1", "c3").unwrap();
    assert!(!b.in_check(Player::Black));
    b.apply_notation("b8", "c6").unwrap();
    assert!(!b.in_check(Player::White));
    b.apply_notation("c3", "b5").unwrap();
    b.apply_notation("c6", "b4").unwrap();
    let mut knight = b.piece_moves(sq("b5")).unwrap();
    knight.sort();
    assert_eq!(knight, vec![SQ(8), SQ(10), SQ(19), SQ(35), SQ(40), SQ(42)]);
    b.apply_notation("b5", "c7").unwrap();
    assert_eq!(b.is_check_at(SQ(4)), Ok(true));
    assert_eq!(b.outcome(), Outcome::BlackInCheck);
}

#[test]
fn test_is_checkmate() {
    let b = layout(
        [
            "....r..K", "....r...", "........", "........", "........", "........", "........",
            "........",
        ],
        Player::Black,
    );
    assert_eq!(b.is_checkmate(SQ(7)), Ok(true));
    assert!(b.checkmate());
    assert_eq!(b.outcome(), Outcome::WhiteWin);
    assert!(b.game_over());

    let b = layout(
        [
            "....R..k", "....R...", "........", "........", "........", "........", "........",
            "........",
        ],
        Player::White,
    );
    assert_eq!(b.is_checkmate(SQ(7)), Ok(true));
    assert_eq!(b.outcome(), Outcome::BlackWin);
    assert!(b.game_over());

    let start = Position::start_pos();
    assert_eq!(start.is_checkmate(SQ(4)), Ok(false));
    assert_eq!(start.is_checkmate(SQ(36)).is_err(), true);
}

#[test]
fn test_fools_mate() {
    let b = layout(
        [
            "RNB.KBNR", "PPPP.PPP", "....P...", "........", "......pQ", ".....p..", "ppppp..p",
            "rnbqkbnr",
        ],
        Player::White,
    );
    assert!(b.generate_moves().is_empty());
    assert_eq!(b.is_checkmate(SQ(60)), Ok(true));
    assert_eq!(b.outcome(), Outcome::BlackWin);
    assert_eq!(b.outcome().winner(), Some(Player::Black));
}

#[test]
fn test_scholars_mate() {
    let mut b = layout(
        [
            "RNBQKBNR", ".PPP.PPP", "P.......", "....P..q", "..b.p...", "........", "pppp.ppp",
            "rnb.k.nr",
        ],
        Player::Black,
    );
    b.apply_notation("a6", "a5").unwrap();
    b.apply_notation("h5", "f7").unwrap();
    assert!(b.checkmate());
    assert_eq!(b.outcome(), Outcome::WhiteWin);
}

#[test]
fn test_is_stalemate() {
    let b = layout(
        [
            "........", "...R....", ".R......", "....k...", "......R.", ".....R..", "........",
            "........",
        ],
        Player::White,
    );
    assert_eq!(b.is_stalemate(SQ(28)), Ok(true));
    assert_eq!(b.is_checkmate(SQ(28)), Ok(false));
    assert!(b.stalemate());
    assert_eq!(b.outcome(), Outcome::Draw);
    assert!(b.game_over());

    let start = Position::start_pos();
    assert_eq!(start.is_stalemate(SQ(4)), Ok(false));
    assert!(!start.stalemate());
}

#[test]
fn test_in_check_outcome_names_checked_side() {
    let b = layout(
        [
            "......k.", "........", "........", "........", "...q....", "........", "........",
            "...K....",
        ],
        Player::Black,
    );
    assert_eq!(b.outcome(), Outcome::BlackInCheck);
    assert!(!b.game_over());
}

#[test]
fn test_is_75_move_rule() {
    let mut b = Position::start_pos().with_ply_count(148);
    b.apply_notation("a2", "a4").unwrap();
    assert_eq!(b.ply_count(), 149);
    assert!(!b.is_75_move_rule());
    assert!(!b.game_over());
    b.apply_notation("a7", "a5").unwrap();
    assert_eq!(b.ply_count(), 150);
    assert!(b.is_75_move_rule());
    assert_eq!(b.outcome(), Outcome::Draw);
}

#[test]
fn test_is_threefold_repetition() {
    let mut b = layout(
        [
            "k......K", "........", "........", "........", "........", "........", "........",
            "........",
        ],
        Player::White,
    );
    let shuffle = [("a8", "a7"), ("h8", "h7"), ("a7", "a8"), ("h7", "h8")];

    for &(src, dst) in shuffle.iter() {
        b.apply_notation(src, dst).unwrap();
        assert!(!b.is_threefold_repetition());
    }
    // The starting placement has now been seen twice.
    for &(src, dst) in shuffle[..3].iter() {
        b.apply_notation(src, dst).unwrap();
        assert!(!b.is_threefold_repetition());
    }
    let (src, dst) = shuffle[3];
    b.apply_notation(src, dst).unwrap();
    assert!(b.is_threefold_repetition());
    assert_eq!(b.outcome(), Outcome::Draw);
}
